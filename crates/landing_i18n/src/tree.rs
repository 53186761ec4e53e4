//! Unveränderlicher Übersetzungsbaum über alle Sprachen.

use crate::error::LoadError;
use crate::language::Language;
use crate::node::{join, ContentNode, NodeShape};
use crate::path::KeyPath;
use std::collections::BTreeMap;
use std::path::Path;

/// Dateiname der Übersetzung je Sprachverzeichnis (`<dir>/<code>/common.json`).
pub const NAMESPACE_FILE: &str = "common.json";

/// Übersetzungsbäume aller geladenen Sprachen.
///
/// Die Standardsprache ist immer vorhanden, jede Wurzel ist ein Objekt.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationTree {
    roots: BTreeMap<Language, ContentNode>,
}

/// Strukturelle Abweichung einer Sprache gegenüber der Standardsprache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityGap {
    pub language: Language,
    /// Pfad relativ zur Wurzel (leer = ganze Sprache fehlt)
    pub path: String,
    pub kind: GapKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapKind {
    Missing,
    ShapeDiffers { expected: NodeShape, found: NodeShape },
}

impl TranslationTree {
    /// Erstellt den Baum aus bereits konvertierten Wurzeln.
    pub fn new(roots: BTreeMap<Language, ContentNode>) -> Result<Self, LoadError> {
        if !roots.contains_key(&Language::DEFAULT) {
            return Err(LoadError::MissingDefaultLanguage(Language::DEFAULT));
        }
        if let Some((lang, _)) = roots.iter().find(|(_, root)| root.as_map().is_none()) {
            return Err(LoadError::RootNotMap(*lang));
        }
        Ok(Self { roots })
    }

    /// Parst je Sprache ein JSON-Dokument.
    pub fn from_json_documents<'a>(
        documents: impl IntoIterator<Item = (Language, &'a str)>,
    ) -> Result<Self, LoadError> {
        let mut roots = BTreeMap::new();
        for (language, source) in documents {
            let value: serde_json::Value = serde_json::from_str(source)
                .map_err(|source| LoadError::Json { language, source })?;
            roots.insert(language, ContentNode::from_json(value)?);
        }
        Self::new(roots)
    }

    /// Lädt `<dir>/<code>/common.json` für alle unterstützten Sprachen.
    ///
    /// Fehlt die Datei einer Nicht-Standardsprache, wird sie übersprungen
    /// (Auflösung fällt dann vollständig auf die Standardsprache zurück).
    pub fn load_dir(dir: &Path) -> Result<Self, LoadError> {
        let mut sources = Vec::new();
        for language in Language::ALL {
            let path = dir.join(language.code()).join(NAMESPACE_FILE);
            match std::fs::read_to_string(&path) {
                Ok(source) => {
                    log::info!("Übersetzung '{}' geladen aus: {}", language, path.display());
                    sources.push((language, source));
                }
                Err(e) if language != Language::DEFAULT => {
                    log::warn!(
                        "Übersetzung '{}' nicht verfügbar ({}), verwende '{}'",
                        language,
                        e,
                        Language::DEFAULT
                    );
                }
                Err(source) => return Err(LoadError::Io { path, source }),
            }
        }

        Self::from_json_documents(sources.iter().map(|(lang, src)| (*lang, src.as_str())))
    }

    /// Wurzel einer Sprache (falls geladen).
    pub fn root(&self, language: Language) -> Option<&ContentNode> {
        self.roots.get(&language)
    }

    /// Geladene Sprachen in stabiler Reihenfolge.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.roots.keys().copied()
    }

    /// Direkter Lookup ohne Fallback.
    pub fn lookup(&self, language: Language, path: &KeyPath) -> Option<&ContentNode> {
        self.roots.get(&language)?.lookup(path)
    }

    /// Prüft alle Sprachen auf gleiche Schlüsselstruktur wie die Standardsprache.
    pub fn parity_gaps(&self) -> Vec<ParityGap> {
        let mut gaps = Vec::new();
        let Some(reference) = self.roots.get(&Language::DEFAULT) else {
            return gaps;
        };

        for language in Language::ALL {
            if language == Language::DEFAULT {
                continue;
            }
            match self.roots.get(&language) {
                Some(candidate) => compare(reference, candidate, "", language, &mut gaps),
                None => gaps.push(ParityGap {
                    language,
                    path: String::new(),
                    kind: GapKind::Missing,
                }),
            }
        }

        gaps
    }
}

fn compare(
    reference: &ContentNode,
    candidate: &ContentNode,
    at: &str,
    language: Language,
    gaps: &mut Vec<ParityGap>,
) {
    if reference.shape() != candidate.shape() {
        gaps.push(ParityGap {
            language,
            path: at.to_string(),
            kind: GapKind::ShapeDiffers {
                expected: reference.shape(),
                found: candidate.shape(),
            },
        });
        return;
    }

    let mut visit = |segment: &str, child: &ContentNode| {
        let child_path = join(at, segment);
        match candidate.child(segment) {
            Some(other) => compare(child, other, &child_path, language, gaps),
            None => gaps.push(ParityGap {
                language,
                path: child_path,
                kind: GapKind::Missing,
            }),
        }
    };

    match reference {
        ContentNode::Text(_) => {}
        ContentNode::Sequence(items) => {
            for (index, item) in items.iter().enumerate() {
                visit(&index.to_string(), item);
            }
        }
        ContentNode::Map(map) => {
            for (key, item) in map {
                visit(key, item);
            }
        }
    }
}

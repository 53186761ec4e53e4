//! Auflösung von Schlüsselpfaden gegen die aktive Sprache mit Fallback.

use crate::error::{ResolutionError, ResolutionErrorKind};
use crate::language::Language;
use crate::node::{ContentNode, NodeShape};
use crate::path::KeyPath;
use crate::schema::{FromContent, ShapeError};
use crate::tree::TranslationTree;
use indexmap::IndexMap;
use std::borrow::Cow;
use std::sync::Arc;

/// Übersetzungsbaum plus aktive Sprache.
///
/// Jede Instanz hat ihren eigenen Sprachzustand; `set_language` /
/// `toggle_language` sind die einzigen Schreibzugriffe. Alle Lese-Operationen
/// sind reine Funktionen von (Baum, Sprache, Pfad).
#[derive(Debug, Clone)]
pub struct Localizer {
    tree: Arc<TranslationTree>,
    active: Language,
}

impl Localizer {
    /// Erstellt einen Localizer in der Standardsprache.
    pub fn new(tree: Arc<TranslationTree>) -> Self {
        Self::with_language(tree, Language::DEFAULT)
    }

    pub fn with_language(tree: Arc<TranslationTree>, language: Language) -> Self {
        Self {
            tree,
            active: language,
        }
    }

    /// Aktive Sprache.
    pub fn language(&self) -> Language {
        self.active
    }

    pub fn tree(&self) -> &TranslationTree {
        &self.tree
    }

    /// Setzt die aktive Sprache. Gibt `true` zurück, wenn sich etwas geändert hat.
    pub fn set_language(&mut self, language: Language) -> bool {
        let changed = self.active != language;
        if changed {
            log::info!("Sprache gewechselt: {} → {}", self.active, language);
            self.active = language;
        }
        changed
    }

    /// Wechselt zwischen en und nl und liefert die neue Sprache.
    pub fn toggle_language(&mut self) -> Language {
        self.set_language(self.active.toggled());
        self.active
    }

    /// Löst einen Pfad in beliebiger Form auf.
    pub fn resolve(&self, path: &str) -> Result<&ContentNode, ResolutionError> {
        self.resolve_shape(path, None)
    }

    /// Löst einen Pfad auf und verlangt eine bestimmte Form.
    ///
    /// Hat die aktive Sprache den Pfad nur in falscher Form, gewinnt ein
    /// passender Wert der Standardsprache.
    pub fn resolve_as(
        &self,
        path: &str,
        expected: NodeShape,
    ) -> Result<&ContentNode, ResolutionError> {
        self.resolve_shape(path, Some(expected))
    }

    pub fn text(&self, path: &str) -> Result<&str, ResolutionError> {
        let node = self.resolve_as(path, NodeShape::Text)?;
        Ok(node.as_text().unwrap_or_default())
    }

    pub fn sequence(&self, path: &str) -> Result<&[ContentNode], ResolutionError> {
        let node = self.resolve_as(path, NodeShape::Sequence)?;
        Ok(node.as_sequence().unwrap_or_default())
    }

    pub fn mapping(&self, path: &str) -> Result<&IndexMap<String, ContentNode>, ResolutionError> {
        let node = self.resolve_as(path, NodeShape::Map)?;
        node.as_map().ok_or_else(|| {
            self.error(
                ResolutionErrorKind::ShapeMismatch {
                    expected: NodeShape::Map,
                    found: node.shape(),
                },
                path,
            )
        })
    }

    /// Löst einen einzelnen typisierten Datensatz auf.
    pub fn record<T: FromContent>(&self, path: &str) -> Result<T, ResolutionError> {
        let node = self.resolve(path)?;
        T::from_content(node).map_err(|e| self.shape_error(path, e))
    }

    /// Löst eine Sequenz typisierter Datensätze auf.
    ///
    /// Ein einziger fehlerhafter Eintrag macht die ganze Sequenz ungültig.
    pub fn records<T: FromContent>(&self, path: &str) -> Result<Vec<T>, ResolutionError> {
        self.sequence(path)?
            .iter()
            .enumerate()
            .map(|(index, node)| {
                T::from_content(node)
                    .map_err(|e| self.shape_error(&format!("{path}.{index}"), e))
            })
            .collect()
    }

    /// Text oder – bei Fehler – der Schlüsselpfad als Platzhalter.
    ///
    /// Der Fehler wird geloggt; die Seite rendert weiter.
    pub fn text_or_placeholder(&self, path: &str) -> Cow<'_, str> {
        match self.text(path) {
            Ok(text) => Cow::Borrowed(text),
            Err(e) => {
                log::error!("Übersetzung nicht auflösbar: {e}");
                Cow::Owned(path.to_string())
            }
        }
    }

    fn resolve_shape(
        &self,
        path: &str,
        expected: Option<NodeShape>,
    ) -> Result<&ContentNode, ResolutionError> {
        let key = KeyPath::parse(path)
            .map_err(|_| self.error(ResolutionErrorKind::InvalidPath, path))?;
        let fits = |node: &ContentNode| expected.is_none_or(|shape| node.shape() == shape);

        let active = self.tree.lookup(self.active, &key);
        if let Some(node) = active.filter(|&n| fits(n)) {
            return Ok(node);
        }

        let fallback = if self.active == Language::DEFAULT {
            None
        } else {
            self.tree.lookup(Language::DEFAULT, &key)
        };
        if let Some(node) = fallback.filter(|&n| fits(n)) {
            log::debug!(
                "Fallback auf '{}' für `{}` (aktiv: {})",
                Language::DEFAULT,
                key,
                self.active
            );
            return Ok(node);
        }

        let kind = match (active.or(fallback), expected) {
            (Some(found), Some(expected)) => ResolutionErrorKind::ShapeMismatch {
                expected,
                found: found.shape(),
            },
            _ => ResolutionErrorKind::MissingKey,
        };
        Err(self.error(kind, path))
    }

    fn shape_error(&self, path: &str, error: ShapeError) -> ResolutionError {
        let (full_path, kind) = error.locate(path);
        self.error(kind, full_path)
    }

    fn error(&self, kind: ResolutionErrorKind, path: impl Into<String>) -> ResolutionError {
        ResolutionError::new(kind, path, self.active)
    }
}

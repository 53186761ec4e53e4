//! Schema der Landing-Page-Übersetzungen und typisierte Datensätze.
//!
//! Die Form aller benötigten Pfade wird einmal beim Laden geprüft
//! (`validate`), Konsumenten erhalten danach nur noch typisierte Werte.

use crate::error::ResolutionErrorKind;
use crate::language::Language;
use crate::node::{ContentNode, NodeShape};
use crate::path::KeyPath;
use crate::tree::TranslationTree;
use indexmap::IndexMap;

/// Schlüssel der Service-Karten in Anzeigereihenfolge.
pub const SERVICE_KEYS: [&str; 4] = ["privateTutoring", "dataConsultancy", "photography", "music"];

/// Schlüssel der About-Abschnitte unter `about.sections`.
pub const ABOUT_SECTION_KEYS: [&str; 8] = [
    "academicWorks",
    "interests",
    "languages",
    "teaching",
    "education",
    "tutoring",
    "research",
    "techStack",
];

/// Schlüssel der Fotos unter `photos`.
pub const PHOTO_KEYS: [&str; 2] = ["outdoor", "teaching"];

/// Texte unter `general`.
pub const GENERAL_KEYS: [&str; 10] = [
    "name",
    "intro",
    "comingSoon",
    "readMore",
    "readLess",
    "showMore",
    "showLess",
    "goTo",
    "visitSite",
    "additionalInfo",
];

/// Pfad der akademischen Arbeiten.
pub const ACADEMIC_WORKS_PATH: &str = "about.sections.academicWorks.works";

/// Formfehler beim Konvertieren eines Knotens in einen Datensatz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeError {
    /// Betroffenes Feld (None = der Knoten selbst)
    pub field: Option<&'static str>,
    pub expected: NodeShape,
    /// Gefundene Form (None = Feld fehlt)
    pub found: Option<NodeShape>,
}

impl ShapeError {
    /// Vollständiger Pfad und Fehlerart relativ zum Datensatz-Pfad `at`.
    pub(crate) fn locate(self, at: &str) -> (String, ResolutionErrorKind) {
        let path = match self.field {
            Some(field) => format!("{at}.{field}"),
            None => at.to_string(),
        };
        let kind = match self.found {
            Some(found) => ResolutionErrorKind::ShapeMismatch {
                expected: self.expected,
                found,
            },
            None => ResolutionErrorKind::MissingKey,
        };
        (path, kind)
    }
}

/// Konvertierung eines Übersetzungsknotens in einen typisierten Datensatz.
pub trait FromContent: Sized {
    fn from_content(node: &ContentNode) -> Result<Self, ShapeError>;
}

impl FromContent for String {
    fn from_content(node: &ContentNode) -> Result<Self, ShapeError> {
        node.as_text().map(str::to_string).ok_or(ShapeError {
            field: None,
            expected: NodeShape::Text,
            found: Some(node.shape()),
        })
    }
}

fn expect_map(node: &ContentNode) -> Result<&IndexMap<String, ContentNode>, ShapeError> {
    node.as_map().ok_or(ShapeError {
        field: None,
        expected: NodeShape::Map,
        found: Some(node.shape()),
    })
}

fn text_field(map: &IndexMap<String, ContentNode>, field: &'static str) -> Result<String, ShapeError> {
    match map.get(field) {
        Some(ContentNode::Text(text)) => Ok(text.clone()),
        other => Err(ShapeError {
            field: Some(field),
            expected: NodeShape::Text,
            found: other.map(ContentNode::shape),
        }),
    }
}

fn optional_text_field(
    map: &IndexMap<String, ContentNode>,
    field: &'static str,
) -> Result<Option<String>, ShapeError> {
    match map.get(field) {
        None => Ok(None),
        Some(_) => text_field(map, field).map(Some),
    }
}

/// Abschnitt mit Titel und Fließtext.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl FromContent for Section {
    fn from_content(node: &ContentNode) -> Result<Self, ShapeError> {
        let map = expect_map(node)?;
        Ok(Self {
            title: text_field(map, "title")?,
            content: text_field(map, "content")?,
        })
    }
}

/// Texte einer Service-Karte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceCopy {
    pub title: String,
    pub description: String,
    pub cta: String,
}

impl FromContent for ServiceCopy {
    fn from_content(node: &ContentNode) -> Result<Self, ShapeError> {
        let map = expect_map(node)?;
        Ok(Self {
            title: text_field(map, "title")?,
            description: text_field(map, "description")?,
            cta: text_field(map, "cta")?,
        })
    }
}

/// Akademische Arbeit mit Download-Pfad.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcademicWork {
    pub title: String,
    /// Art der Arbeit (JSON-Feld `type`)
    pub kind: String,
    pub description: String,
    /// Statischer Dateipfad; Existenz wird nicht geprüft
    pub file: String,
}

impl FromContent for AcademicWork {
    fn from_content(node: &ContentNode) -> Result<Self, ShapeError> {
        let map = expect_map(node)?;
        Ok(Self {
            title: text_field(map, "title")?,
            kind: text_field(map, "type")?,
            description: text_field(map, "description")?,
            file: text_field(map, "file")?,
        })
    }
}

/// Expertise-Eintrag: entweder nur Titel oder Titel mit Details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertiseItem {
    pub title: String,
    pub details: Option<String>,
}

impl FromContent for ExpertiseItem {
    fn from_content(node: &ContentNode) -> Result<Self, ShapeError> {
        match node {
            ContentNode::Text(title) => Ok(Self {
                title: title.clone(),
                details: None,
            }),
            ContentNode::Map(map) => Ok(Self {
                title: text_field(map, "title")?,
                details: optional_text_field(map, "details")?,
            }),
            ContentNode::Sequence(_) => Err(ShapeError {
                field: None,
                expected: NodeShape::Map,
                found: Some(NodeShape::Sequence),
            }),
        }
    }
}

/// Schema-Verletzung einer Sprache (ohne Fallback geprüft).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub language: Language,
    pub path: String,
    pub problem: ResolutionErrorKind,
}

/// Alle Pfade, die die Landing-Page erwartet, mit ihrer Form.
pub fn schema_paths() -> Vec<(String, NodeShape)> {
    let mut paths = Vec::new();

    for key in GENERAL_KEYS {
        paths.push((format!("general.{key}"), NodeShape::Text));
    }

    paths.push(("services.title".to_string(), NodeShape::Text));
    for service in SERVICE_KEYS {
        for field in ["title", "description", "cta"] {
            paths.push((format!("services.{service}.{field}"), NodeShape::Text));
        }
    }

    for field in ["title", "intro", "content"] {
        paths.push((format!("about.{field}"), NodeShape::Text));
    }
    for section in ABOUT_SECTION_KEYS {
        for field in ["title", "content"] {
            paths.push((format!("about.sections.{section}.{field}"), NodeShape::Text));
        }
    }
    paths.push((ACADEMIC_WORKS_PATH.to_string(), NodeShape::Sequence));

    paths.push(("expertise.title".to_string(), NodeShape::Text));
    paths.push(("expertise.summary".to_string(), NodeShape::Text));
    paths.push(("expertise.items".to_string(), NodeShape::Map));

    for photo in PHOTO_KEYS {
        paths.push((format!("photos.{photo}.caption"), NodeShape::Text));
    }

    paths
}

/// Prüft alle geladenen Sprachen gegen das Landing-Schema.
///
/// Geprüft wird jede Sprache für sich, ohne Fallback. Einträge von Sequenzen
/// und Expertise-Items werden zusätzlich als Datensätze validiert.
pub fn validate(tree: &TranslationTree) -> Vec<SchemaViolation> {
    let schema = schema_paths();
    let mut violations = Vec::new();

    for language in tree.languages() {
        for (raw, expected) in &schema {
            let Ok(path) = KeyPath::parse(raw) else {
                continue;
            };
            let problem = match tree.lookup(language, &path) {
                None => Some(ResolutionErrorKind::MissingKey),
                Some(node) if node.shape() != *expected => Some(ResolutionErrorKind::ShapeMismatch {
                    expected: *expected,
                    found: node.shape(),
                }),
                Some(_) => None,
            };
            if let Some(problem) = problem {
                violations.push(SchemaViolation {
                    language,
                    path: raw.clone(),
                    problem,
                });
            }
        }

        validate_records::<AcademicWork>(tree, language, ACADEMIC_WORKS_PATH, &mut violations);
        validate_expertise_items(tree, language, &mut violations);
    }

    violations
}

fn validate_records<T: FromContent>(
    tree: &TranslationTree,
    language: Language,
    raw: &str,
    violations: &mut Vec<SchemaViolation>,
) {
    let Some(items) = KeyPath::parse(raw)
        .ok()
        .and_then(|path| tree.lookup(language, &path))
        .and_then(ContentNode::as_sequence)
    else {
        return;
    };

    for (index, item) in items.iter().enumerate() {
        if let Err(e) = T::from_content(item) {
            violations.push(record_violation(language, &format!("{raw}.{index}"), e));
        }
    }
}

fn validate_expertise_items(
    tree: &TranslationTree,
    language: Language,
    violations: &mut Vec<SchemaViolation>,
) {
    let Some(items) = KeyPath::parse("expertise.items")
        .ok()
        .and_then(|path| tree.lookup(language, &path))
        .and_then(ContentNode::as_map)
    else {
        return;
    };

    for (key, item) in items {
        if let Err(e) = ExpertiseItem::from_content(item) {
            violations.push(record_violation(
                language,
                &format!("expertise.items.{key}"),
                e,
            ));
        }
    }
}

fn record_violation(language: Language, at: &str, error: ShapeError) -> SchemaViolation {
    let (path, problem) = error.locate(at);
    SchemaViolation {
        language,
        path,
        problem,
    }
}

#[cfg(test)]
mod tests;

//! Fehlertypen für Laden und Auflösen von Übersetzungen.

use crate::language::Language;
use crate::node::NodeShape;
use std::path::PathBuf;
use thiserror::Error;

/// Ein Schlüssel konnte weder in der aktiven noch in der Standardsprache aufgelöst werden.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} bei `{path}` (Sprache: {language})")]
pub struct ResolutionError {
    pub kind: ResolutionErrorKind,
    pub path: String,
    /// Aktive Sprache zum Zeitpunkt der Auflösung
    pub language: Language,
}

/// Art des Auflösungsfehlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolutionErrorKind {
    #[error("Schlüssel fehlt")]
    MissingKey,
    #[error("Form passt nicht (erwartet {expected}, gefunden {found})")]
    ShapeMismatch {
        expected: NodeShape,
        found: NodeShape,
    },
    #[error("ungültiger Schlüsselpfad")]
    InvalidPath,
}

impl ResolutionError {
    pub(crate) fn new(kind: ResolutionErrorKind, path: impl Into<String>, language: Language) -> Self {
        Self {
            kind,
            path: path.into(),
            language,
        }
    }

    /// `true` bei `MissingKey`.
    pub fn is_missing(&self) -> bool {
        matches!(self.kind, ResolutionErrorKind::MissingKey)
    }

    /// `true` bei `ShapeMismatch`.
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self.kind, ResolutionErrorKind::ShapeMismatch { .. })
    }
}

/// Fehler beim Laden eines Übersetzungsbaums.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Übersetzungsdatei {} konnte nicht gelesen werden", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Übersetzung '{language}' ist kein gültiges JSON")]
    Json {
        language: Language,
        #[source]
        source: serde_json::Error,
    },
    #[error("nicht unterstützter Wert bei `{path}`: {found}")]
    UnsupportedValue { path: String, found: &'static str },
    #[error("Wurzel der Übersetzung '{0}' ist kein Objekt")]
    RootNotMap(Language),
    #[error("Standardsprache '{0}' fehlt")]
    MissingDefaultLanguage(Language),
}

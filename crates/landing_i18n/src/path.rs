//! Punktgetrennte Schlüsselpfade (`about.sections.academicWorks.works.0.title`).

use std::fmt;
use std::str::FromStr;

/// Geparster Schlüsselpfad.
///
/// Segmente sind nie leer. Rein numerische Segmente indizieren Sequenzen,
/// in Objekten werden sie wie normale Schlüssel behandelt.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    raw: String,
    segments: Vec<String>,
}

/// Ungültiger Schlüsselpfad (leer oder mit leerem Segment).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ungültiger Schlüsselpfad: '{0}'")]
pub struct InvalidKeyPath(pub String);

impl KeyPath {
    /// Parst einen Pfad wie `"general.name"`.
    pub fn parse(raw: &str) -> Result<Self, InvalidKeyPath> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidKeyPath(raw.to_string()));
        }

        let segments: Vec<String> = trimmed.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(InvalidKeyPath(raw.to_string()));
        }

        Ok(Self {
            raw: trimmed.to_string(),
            segments,
        })
    }

    /// Einzelne Segmente in Reihenfolge.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Der Pfad als String.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Hängt ein Segment an und liefert den neuen Pfad.
    pub fn child(&self, segment: &str) -> KeyPath {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        KeyPath {
            raw: format!("{}.{}", self.raw, segment),
            segments,
        }
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for KeyPath {
    type Err = InvalidKeyPath;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

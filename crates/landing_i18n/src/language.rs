//! Unterstützte Sprachen der Landing-Page.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sprache eines Übersetzungsbaums.
///
/// `En` ist gleichzeitig Start- und Fallback-Sprache.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Nl,
}

impl Language {
    /// Fallback-Sprache für fehlende Schlüssel.
    pub const DEFAULT: Language = Language::En;

    /// Alle unterstützten Sprachen in stabiler Reihenfolge.
    pub const ALL: [Language; 2] = [Language::En, Language::Nl];

    /// Sprachcode wie in den Übersetzungsdateien (`en`, `nl`).
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
        }
    }

    /// Anzeigename in der jeweiligen Sprache selbst.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Nl => "Nederlands",
        }
    }

    /// Parst einen Sprachcode. Regionen (`nl-BE`) und Groß-/Kleinschreibung werden ignoriert.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(primary.trim()))
    }

    /// Die jeweils andere Sprache (en ↔ nl).
    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Nl,
            Language::Nl => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Fehler beim Parsen eines unbekannten Sprachcodes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unbekannter Sprachcode: '{0}'")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_ignores_region_and_case() {
        assert_eq!(Language::from_code("NL-be"), Some(Language::Nl));
        assert_eq!(Language::from_code("en_US"), Some(Language::En));
        assert_eq!(Language::from_code("de"), None);
    }

    #[test]
    fn toggled_is_an_involution() {
        for lang in Language::ALL {
            assert_ne!(lang.toggled(), lang);
            assert_eq!(lang.toggled().toggled(), lang);
        }
    }
}

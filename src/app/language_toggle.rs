//! Darstellung des Sprach-Umschalters, abgeleitet aus der aktiven Sprache.

use landing_i18n::Language;

/// Beschriftung des Umschalters.
///
/// Zeigt immer die Zielsprache an, nicht die aktive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageToggle {
    /// Sprache nach dem Umschalten
    pub target: Language,
    /// Zugänglicher Name (in der Zielsprache formuliert)
    pub label: &'static str,
    /// Kurzanzeige unter dem Globus
    pub indicator: &'static str,
}

impl LanguageToggle {
    pub fn for_language(active: Language) -> Self {
        match active {
            Language::En => Self {
                target: Language::Nl,
                label: "Schakel naar Nederlands",
                indicator: "NL",
            },
            Language::Nl => Self {
                target: Language::En,
                label: "Switch to English",
                indicator: "EN",
            },
        }
    }
}

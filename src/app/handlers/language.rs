//! Handler für die aktive Sprache.
//!
//! Einzige Schreibstelle der Sprache; Inhalte werden im selben Schritt neu aufgelöst.

use crate::app::AppState;
use landing_i18n::Language;

/// Schaltet zwischen Englisch und Niederländisch um.
pub fn toggle(state: &mut AppState) {
    let language = state.localizer.toggle_language();
    state.refresh_content();
    log_resolution(state, language);
}

/// Setzt die Sprache aus der Startkonfiguration.
pub fn set(state: &mut AppState, language: Language) {
    if state.localizer.set_language(language) {
        state.refresh_content();
        log_resolution(state, language);
    }
}

fn log_resolution(state: &AppState, language: Language) {
    if state.resolution_errors.is_empty() {
        log::info!("Inhalte in {} aufgelöst", language.display_name());
    } else {
        log::warn!(
            "Inhalte in {} mit {} Fehler(n) aufgelöst",
            language.display_name(),
            state.resolution_errors.len()
        );
    }
}

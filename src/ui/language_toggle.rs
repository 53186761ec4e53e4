//! Globus-Schaltfläche zum Sprachwechsel.

use super::focus_sync::FocusSync;
use crate::app::state::LANGUAGE_TOGGLE;
use crate::app::{AppIntent, LanguageToggle};
use crate::core::FocusId;
use landing_i18n::Language;

/// Rendert den Umschalter mit Kurzanzeige der Zielsprache.
pub fn show_language_toggle(
    ui: &mut egui::Ui,
    active: Language,
    focus: &FocusSync,
    enabled: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let toggle = LanguageToggle::for_language(active);

    ui.vertical_centered(|ui| {
        let button = ui
            .add_enabled(
                enabled,
                egui::Button::new(egui::RichText::new("🌐").size(22.0)).corner_radius(18.0),
            )
            .on_hover_text(toggle.label);
        focus.apply(&FocusId::new(LANGUAGE_TOGGLE), &button);

        if button.clicked() {
            events.push(AppIntent::LanguageToggleClicked);
        }
        ui.label(egui::RichText::new(toggle.indicator).strong());
    });

    events
}

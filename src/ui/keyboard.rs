//! Tastatur-Eingaben bei offenem Modal.
//!
//! Escape, Tab und Shift+Tab werden verbraucht, damit sie nicht die Seite erreichen.
//! egui wertet Tab bereits vor dem Frame aus; den egui-Fokus hält `FocusSync::hold`.

use crate::app::AppIntent;
use crate::core::ModalKey;

/// Sammelt Modal-Tasten und gibt AppIntents zurück.
pub(super) fn collect_modal_key_intents(ui: &egui::Ui, modal_open: bool) -> Vec<AppIntent> {
    if !modal_open {
        return Vec::new();
    }

    let mut events = Vec::new();

    let (escape, shift_tab, tab) = ui.ctx().input_mut(|i| {
        let escape = i.consume_key(egui::Modifiers::NONE, egui::Key::Escape);
        // Shift+Tab zuerst: das Muster ohne Modifier passt auch bei gedrückter Shift-Taste
        let shift_tab = i.consume_key(egui::Modifiers::SHIFT, egui::Key::Tab);
        let tab = i.consume_key(egui::Modifiers::NONE, egui::Key::Tab);
        (escape, shift_tab, tab)
    });

    if escape {
        events.push(AppIntent::ModalKeyPressed {
            key: ModalKey::Escape,
        });
    }
    if shift_tab {
        events.push(AppIntent::ModalKeyPressed {
            key: ModalKey::ShiftTab,
        });
    }
    if tab {
        events.push(AppIntent::ModalKeyPressed { key: ModalKey::Tab });
    }

    events
}

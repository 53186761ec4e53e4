//! Handler für das Bild-Modal.

use crate::app::AppState;
use crate::core::{CloseReason, FocusId, ModalContent, ModalKey, OpenOutcome};

/// Öffnet das Modal oder tauscht den Inhalt.
///
/// Beim Öffnen kehren alle Karten in die Ruhelage zurück; der Hintergrund
/// liefert danach keine Pointer-Events mehr.
pub fn open(state: &mut AppState, content: ModalContent, trigger: Option<FocusId>) {
    if state.modal.open(content, trigger) == OpenOutcome::Opened {
        for tilt in state.tilt.values_mut() {
            tilt.reset();
        }
    }
}

/// Schließt das Modal (no-op wenn bereits geschlossen).
pub fn close(state: &mut AppState, reason: CloseReason) {
    state.modal.close(reason);
}

/// Reicht Escape/Tab an das offene Modal weiter.
pub fn forward_key(state: &mut AppState, key: ModalKey) {
    if !state.modal.handle_key(key) {
        log::debug!("Taste {key:?} ignoriert: Modal geschlossen");
    }
}

/// Markiert das Modal-Bild als nicht ladbar.
pub fn image_failed(state: &mut AppState) {
    state.modal.image_failed();
}

//! Core-Domänentypen: Tilt-Karten, Bild-Modal, Fokus- und Dokumentmodell.

pub mod document;
pub mod focus;
/// Bild-Modal mit Scroll-Sperre, Fokusfalle und Fokus-Rückgabe
pub mod modal;
pub mod tilt;

pub use document::{Document, SharedDocument};
pub use focus::{FocusId, FocusTrap};
pub use modal::{
    CloseReason, ModalContent, ModalController, ModalKey, ModalLayout, ModalSession, ModalState,
    OpenOutcome,
};
pub use tilt::{tilt_at, TiltConfig, TiltController, TiltTransform, TiltVector};

//! UI-Layer mit egui
//!
//! Dieses Modul rendert die Landing-Page aus dem AppState und sammelt
//! Benutzereingaben als `AppIntent`s. Tastatur, Karten und Modal sind in
//! eigene Dateien extrahiert.

mod focus_sync;
mod keyboard;
pub mod landing;
pub mod language_toggle;
pub mod modal_window;
pub mod sections;
pub mod tilt_card;

pub use focus_sync::FocusSync;
pub use landing::LandingView;

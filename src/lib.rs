//! Landing Presenter Library.
//! Interaktive Präsentationsschicht einer zweisprachigen Landing-Page,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, LanguageToggle, SectionState};
pub use core::{
    CloseReason, Document, FocusId, ModalContent, ModalController, ModalKey, ModalLayout,
    ModalState, TiltConfig, TiltController, TiltTransform, TiltVector,
};
pub use shared::LandingOptions;

//! Application-Layer: Controller, State, Events und Feature-Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod language_toggle;
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use language_toggle::LanguageToggle;
pub use state::{AppState, SectionState};

//! Ereignisse der Landing-Page.
//!
//! `AppIntent` beschreibt Eingaben aus UI und System, `AppCommand` die daraus
//! abgeleiteten Zustandsänderungen.

mod command;
mod intent;

pub use command::AppCommand;
pub use intent::AppIntent;

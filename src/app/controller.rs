//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Sprache ===
            AppCommand::ToggleLanguage => handlers::language::toggle(state),
            AppCommand::SetLanguage { language } => handlers::language::set(state, language),

            // === Modal ===
            AppCommand::OpenModal { content, trigger } => {
                handlers::modal::open(state, content, trigger)
            }
            AppCommand::CloseModal { reason } => handlers::modal::close(state, reason),
            AppCommand::ForwardModalKey { key } => handlers::modal::forward_key(state, key),
            AppCommand::MarkModalImageFailed => handlers::modal::image_failed(state),

            // === Tilt ===
            AppCommand::TiltPointerMove {
                card,
                position,
                size,
            } => handlers::tilt::pointer_move(state, card, position, size)?,
            AppCommand::TiltPointerLeave { card } => handlers::tilt::pointer_leave(state, card)?,
            AppCommand::TiltTouchStart {
                card,
                position,
                size,
            } => handlers::tilt::touch_start(state, card, position, size)?,
            AppCommand::TiltTouchMove {
                card,
                position,
                size,
            } => handlers::tilt::touch_move(state, card, position, size)?,
            AppCommand::TiltTouchEnd { card } => handlers::tilt::touch_end(state, card)?,

            // === Abschnitte ===
            AppCommand::ToggleAccordion { section } => {
                handlers::sections::toggle_accordion(state, section)?
            }
            AppCommand::ToggleExpertiseItem { item } => {
                handlers::sections::toggle_expertise_item(state, &item)?
            }
            AppCommand::ToggleAboutDetails => handlers::sections::toggle_about_details(state),

            // === Anwendungssteuerung ===
            AppCommand::RequestExit => state.should_exit = true,
        }

        Ok(())
    }
}

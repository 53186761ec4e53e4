//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{CloseReason, ModalContent};
use crate::shared::catalog;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => {
            let mut commands = Vec::new();
            if state.modal.is_open() {
                commands.push(AppCommand::CloseModal {
                    reason: CloseReason::Programmatic,
                });
            }
            commands.push(AppCommand::RequestExit);
            commands
        }
        AppIntent::InitialLanguageConfigured { language } => {
            vec![AppCommand::SetLanguage { language }]
        }
        AppIntent::LanguageToggleClicked => vec![AppCommand::ToggleLanguage],

        AppIntent::PhotoClicked { photo } => {
            let Some(entry) = catalog::photo(photo) else {
                log::warn!("Unbekanntes Foto: {}", photo);
                return Vec::new();
            };
            let caption = state
                .content
                .photo_caption(photo)
                .map(str::to_string)
                .unwrap_or_else(|| format!("photos.{photo}.caption"));

            vec![AppCommand::OpenModal {
                content: ModalContent::new(entry.image_path, caption),
                trigger: Some(entry.focus_id()),
            }]
        }
        AppIntent::ModalCloseClicked => vec![AppCommand::CloseModal {
            reason: CloseReason::CloseButton,
        }],
        AppIntent::ModalBackdropClicked => vec![AppCommand::CloseModal {
            reason: CloseReason::Backdrop,
        }],
        AppIntent::ModalKeyPressed { key } => {
            if state.modal.is_open() {
                vec![AppCommand::ForwardModalKey { key }]
            } else {
                Vec::new()
            }
        }
        AppIntent::ModalImageFailed => vec![AppCommand::MarkModalImageFailed],

        AppIntent::CardPointerMoved {
            card,
            position,
            size,
        } => vec![AppCommand::TiltPointerMove {
            card,
            position,
            size,
        }],
        AppIntent::CardPointerLeft { card } => vec![AppCommand::TiltPointerLeave { card }],
        AppIntent::CardTouchStarted {
            card,
            position,
            size,
        } => vec![AppCommand::TiltTouchStart {
            card,
            position,
            size,
        }],
        AppIntent::CardTouchMoved {
            card,
            position,
            size,
        } => vec![AppCommand::TiltTouchMove {
            card,
            position,
            size,
        }],
        AppIntent::CardTouchEnded { card } => vec![AppCommand::TiltTouchEnd { card }],

        AppIntent::AccordionToggled { section } => vec![AppCommand::ToggleAccordion { section }],
        AppIntent::ExpertiseItemToggled { item } => {
            vec![AppCommand::ToggleExpertiseItem { item }]
        }
        AppIntent::AboutDetailsToggled => vec![AppCommand::ToggleAboutDetails],
    }
}

#[cfg(test)]
mod tests;

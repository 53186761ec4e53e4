use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{CloseReason, FocusId, ModalContent, ModalKey};
use crate::shared::LandingOptions;
use landing_i18n::{Language, TranslationTree};
use std::sync::Arc;

use super::map_intent_to_commands;

fn state() -> AppState {
    let tree = TranslationTree::from_json_documents([
        (Language::En, include_str!("../../../assets/locales/en/common.json")),
        (Language::Nl, include_str!("../../../assets/locales/nl/common.json")),
    ])
    .expect("Mitgelieferte Übersetzungen sollten laden");
    AppState::new(Arc::new(tree), LandingOptions::default())
}

#[test]
fn language_toggle_maps_to_single_toggle_command() {
    let state = state();

    let commands = map_intent_to_commands(&state, AppIntent::LanguageToggleClicked);

    assert_eq!(commands, vec![AppCommand::ToggleLanguage]);
}

#[test]
fn photo_click_opens_modal_with_localized_caption() {
    let state = state();
    let caption = state
        .content
        .photo_caption("outdoor")
        .expect("Bildunterschrift erwartet")
        .to_string();

    let commands = map_intent_to_commands(&state, AppIntent::PhotoClicked { photo: "outdoor" });

    assert_eq!(
        commands,
        vec![AppCommand::OpenModal {
            content: ModalContent::new("/images/portraits/outdoor.jpg", caption),
            trigger: Some(FocusId::new("photo.outdoor")),
        }]
    );
}

#[test]
fn unknown_photo_maps_to_nothing() {
    let state = state();
    let commands = map_intent_to_commands(&state, AppIntent::PhotoClicked { photo: "beach" });
    assert!(commands.is_empty());
}

#[test]
fn modal_key_is_dropped_while_closed() {
    let state = state();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ModalKeyPressed {
            key: ModalKey::Escape,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn modal_key_is_forwarded_while_open() {
    let mut state = state();
    state
        .modal
        .open(ModalContent::new("/images/teaching/teaching.jpg", "x"), None);

    let commands = map_intent_to_commands(&state, AppIntent::ModalKeyPressed { key: ModalKey::Tab });

    assert_eq!(commands, vec![AppCommand::ForwardModalKey { key: ModalKey::Tab }]);
}

#[test]
fn exit_closes_open_modal_first() {
    let mut state = state();
    state
        .modal
        .open(ModalContent::new("/images/teaching/teaching.jpg", "x"), None);

    let commands = map_intent_to_commands(&state, AppIntent::ExitRequested);

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        commands[0],
        AppCommand::CloseModal {
            reason: CloseReason::Programmatic
        }
    ));
    assert!(matches!(commands[1], AppCommand::RequestExit));
}

#[test]
fn backdrop_click_maps_to_close_with_reason() {
    let state = state();

    let commands = map_intent_to_commands(&state, AppIntent::ModalBackdropClicked);

    assert_eq!(
        commands,
        vec![AppCommand::CloseModal {
            reason: CloseReason::Backdrop
        }]
    );
}

#[test]
fn card_touch_end_maps_to_tilt_reset() {
    let state = state();

    let commands = map_intent_to_commands(&state, AppIntent::CardTouchEnded { card: "music" });

    assert_eq!(commands, vec![AppCommand::TiltTouchEnd { card: "music" }]);
}

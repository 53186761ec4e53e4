use landing_i18n::{Language, TranslationTree};
use landing_presenter::{
    AppCommand, AppController, AppIntent, AppState, FocusId, LandingOptions, LanguageToggle,
    ModalKey,
};
use std::sync::Arc;

fn bundled_state() -> AppState {
    let tree = TranslationTree::from_json_documents([
        (Language::En, include_str!("../assets/locales/en/common.json")),
        (Language::Nl, include_str!("../assets/locales/nl/common.json")),
    ])
    .expect("Mitgelieferte Übersetzungen sollten laden");
    AppState::new(Arc::new(tree), LandingOptions::default())
}

fn focused(state: &AppState) -> Option<String> {
    state
        .document
        .borrow()
        .focused()
        .map(|id| id.as_str().to_string())
}

#[test]
fn test_bundled_content_resolves_without_errors() {
    let state = bundled_state();

    assert!(
        state.resolution_errors.is_empty(),
        "Unerwartete Auflösungsfehler: {:?}",
        state.resolution_errors
    );
    assert_eq!(state.localizer.language(), Language::En);
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_with_open_modal_closes_modal_first() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(&mut state, AppIntent::PhotoClicked { photo: "outdoor" })
        .expect("PhotoClicked sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);
    assert!(!state.modal.is_open());
    assert!(!state.document.borrow().is_scroll_locked());
}

#[test]
fn test_language_toggle_updates_content_synchronously() {
    let mut controller = AppController::new();
    let mut state = bundled_state();
    let music_title = |state: &AppState| {
        state
            .content
            .service("music")
            .map(|copy| copy.title.clone())
    };

    assert_eq!(music_title(&state).as_deref(), Some("Music"));
    assert_eq!(
        LanguageToggle::for_language(state.localizer.language()).target,
        Language::Nl
    );

    controller
        .handle_intent(&mut state, AppIntent::LanguageToggleClicked)
        .expect("LanguageToggleClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.localizer.language(), Language::Nl);
    assert_eq!(music_title(&state).as_deref(), Some("Muziek"));
    let toggle = LanguageToggle::for_language(state.localizer.language());
    assert_eq!(toggle.target, Language::En);
    assert_eq!(toggle.indicator, "EN");

    controller
        .handle_intent(&mut state, AppIntent::LanguageToggleClicked)
        .expect("Zweiter Umschaltvorgang sollte ohne Fehler durchlaufen");

    assert_eq!(state.localizer.language(), Language::En);
    assert_eq!(music_title(&state).as_deref(), Some("Music"));
}

#[test]
fn test_initial_language_configured_switches_to_dutch() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::InitialLanguageConfigured {
                language: Language::Nl,
            },
        )
        .expect("InitialLanguageConfigured sollte ohne Fehler durchlaufen");

    assert_eq!(state.localizer.language(), Language::Nl);
    assert!(state.resolution_errors.is_empty());
}

#[test]
fn test_photo_modal_escape_restores_trigger_focus() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(&mut state, AppIntent::PhotoClicked { photo: "outdoor" })
        .expect("PhotoClicked sollte ohne Fehler durchlaufen");

    assert!(state.modal.is_open());
    assert!(state.document.borrow().is_scroll_locked());
    assert_eq!(focused(&state).as_deref(), Some("modal.close"));
    let modal_state = state.modal.state();
    assert_eq!(
        modal_state.image_source.as_deref(),
        Some("/images/portraits/outdoor.jpg")
    );
    assert_eq!(
        modal_state.caption.as_deref(),
        state.content.photo_caption("outdoor")
    );

    controller
        .handle_intent(
            &mut state,
            AppIntent::ModalKeyPressed {
                key: ModalKey::Escape,
            },
        )
        .expect("Escape sollte ohne Fehler durchlaufen");

    assert!(!state.modal.is_open());
    assert!(!state.document.borrow().is_scroll_locked());
    assert_eq!(focused(&state).as_deref(), Some("photo.outdoor"));
    assert!(!state
        .document
        .borrow()
        .is_mounted(&FocusId::new("modal.close")));
}

#[test]
fn test_tab_keeps_focus_inside_modal() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(&mut state, AppIntent::PhotoClicked { photo: "teaching" })
        .expect("PhotoClicked sollte ohne Fehler durchlaufen");

    for key in [ModalKey::Tab, ModalKey::ShiftTab, ModalKey::Tab] {
        controller
            .handle_intent(&mut state, AppIntent::ModalKeyPressed { key })
            .expect("Tab sollte ohne Fehler durchlaufen");
        assert_eq!(focused(&state).as_deref(), Some("modal.close"));
    }
    assert!(state.modal.is_open());
}

#[test]
fn test_backdrop_and_close_button_both_close_modal() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    for close_intent in [AppIntent::ModalBackdropClicked, AppIntent::ModalCloseClicked] {
        controller
            .handle_intent(&mut state, AppIntent::PhotoClicked { photo: "teaching" })
            .expect("PhotoClicked sollte ohne Fehler durchlaufen");
        assert!(state.modal.is_open());

        controller
            .handle_intent(&mut state, close_intent)
            .expect("Schließen sollte ohne Fehler durchlaufen");

        assert!(!state.modal.is_open());
        assert_eq!(state.document.borrow().scroll_lock_depth(), 0);
        assert_eq!(focused(&state).as_deref(), Some("photo.teaching"));
    }
}

#[test]
fn test_modal_keys_are_ignored_while_closed() {
    let mut controller = AppController::new();
    let mut state = bundled_state();
    let logged_before = state.command_log.len();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ModalKeyPressed {
                key: ModalKey::Escape,
            },
        )
        .expect("Escape ohne Modal sollte ohne Fehler durchlaufen");

    assert_eq!(state.command_log.len(), logged_before);
    assert!(!state.modal.is_open());
}

#[test]
fn test_image_failure_keeps_modal_open_and_dismissable() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(&mut state, AppIntent::PhotoClicked { photo: "outdoor" })
        .expect("PhotoClicked sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(&mut state, AppIntent::ModalImageFailed)
        .expect("ModalImageFailed sollte ohne Fehler durchlaufen");

    assert!(state.modal.is_open());
    assert!(state.modal.is_degraded());

    controller
        .handle_intent(&mut state, AppIntent::ModalCloseClicked)
        .expect("Schließen sollte ohne Fehler durchlaufen");

    assert!(!state.modal.is_open());
    assert_eq!(focused(&state).as_deref(), Some("photo.outdoor"));
}

#[test]
fn test_card_pointer_tilts_and_resets_through_controller() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CardPointerMoved {
                card: "music",
                position: glam::Vec2::new(0.0, 0.0),
                size: Some(glam::Vec2::new(300.0, 200.0)),
            },
        )
        .expect("CardPointerMoved sollte ohne Fehler durchlaufen");

    let tilt = state.tilt("music").expect("Karte music erwartet");
    assert!(tilt.is_active());
    approx::assert_relative_eq!(tilt.vector().rotate_x_deg, -10.0);
    approx::assert_relative_eq!(tilt.vector().rotate_y_deg, 15.0);
    approx::assert_relative_eq!(tilt.transform().scale, 1.05);

    // Andere Karten bleiben unberührt
    let other = state
        .tilt("dataConsultancy")
        .expect("Karte dataConsultancy erwartet");
    assert!(other.vector().is_zero());

    controller
        .handle_intent(&mut state, AppIntent::CardPointerLeft { card: "music" })
        .expect("CardPointerLeft sollte ohne Fehler durchlaufen");

    let tilt = state.tilt("music").expect("Karte music erwartet");
    assert!(tilt.vector().is_zero());
    assert!(!tilt.is_active());
    approx::assert_relative_eq!(tilt.transform().scale, 1.0);
}

#[test]
fn test_mouse_is_ignored_during_touch_gesture() {
    let mut controller = AppController::new();
    let mut state = bundled_state();
    let size = Some(glam::Vec2::new(300.0, 200.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::CardTouchStarted {
                card: "privateTutoring",
                position: glam::Vec2::new(150.0, 0.0),
                size,
            },
        )
        .expect("CardTouchStarted sollte ohne Fehler durchlaufen");
    let during_touch = state
        .tilt("privateTutoring")
        .expect("Karte privateTutoring erwartet")
        .vector();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CardPointerMoved {
                card: "privateTutoring",
                position: glam::Vec2::new(0.0, 200.0),
                size,
            },
        )
        .expect("CardPointerMoved sollte ohne Fehler durchlaufen");

    let tilt = state
        .tilt("privateTutoring")
        .expect("Karte privateTutoring erwartet");
    assert_eq!(tilt.vector(), during_touch);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CardTouchEnded {
                card: "privateTutoring",
            },
        )
        .expect("CardTouchEnded sollte ohne Fehler durchlaufen");

    let tilt = state
        .tilt("privateTutoring")
        .expect("Karte privateTutoring erwartet");
    assert!(tilt.vector().is_zero());
    assert!(!tilt.is_touch_locked());
}

#[test]
fn test_unknown_card_returns_error() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CardPointerLeft {
            card: "woodworking",
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_expertise_items_expand_one_at_a_time() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExpertiseItemToggled {
                item: "programmingSkills".to_string(),
            },
        )
        .expect("Erster Eintrag sollte aufklappen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ExpertiseItemToggled {
                item: "problemSolving".to_string(),
            },
        )
        .expect("Zweiter Eintrag sollte aufklappen");

    assert!(state.sections.is_expertise_expanded("problemSolving"));
    assert!(!state.sections.is_expertise_expanded("programmingSkills"));

    controller
        .handle_intent(
            &mut state,
            AppIntent::ExpertiseItemToggled {
                item: "problemSolving".to_string(),
            },
        )
        .expect("Erneuter Klick sollte zuklappen");

    assert_eq!(state.sections.expanded_expertise, None);

    let unknown = controller.handle_intent(
        &mut state,
        AppIntent::ExpertiseItemToggled {
            item: "juggling".to_string(),
        },
    );
    assert!(unknown.is_err());
}

#[test]
fn test_accordions_toggle_independently() {
    let mut controller = AppController::new();
    let mut state = bundled_state();

    controller
        .handle_intent(&mut state, AppIntent::AccordionToggled { section: "teaching" })
        .expect("Akkordeon teaching sollte aufklappen");
    controller
        .handle_intent(&mut state, AppIntent::AccordionToggled { section: "languages" })
        .expect("Akkordeon languages sollte aufklappen");

    assert!(state.sections.is_accordion_open("teaching"));
    assert!(state.sections.is_accordion_open("languages"));
    assert!(!state.sections.is_accordion_open("interests"));

    controller
        .handle_intent(&mut state, AppIntent::AboutDetailsToggled)
        .expect("AboutDetailsToggled sollte ohne Fehler durchlaufen");
    assert!(state.sections.about_expanded);
}

#[test]
fn test_opening_modal_resets_tilted_cards() {
    let mut controller = AppController::new();
    let mut state = bundled_state();
    let size = Some(glam::Vec2::new(300.0, 200.0));

    controller
        .handle_intent(
            &mut state,
            AppIntent::CardPointerMoved {
                card: "music",
                position: glam::Vec2::new(0.0, 0.0),
                size,
            },
        )
        .expect("CardPointerMoved sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CardTouchStarted {
                card: "photography",
                position: glam::Vec2::new(300.0, 200.0),
                size,
            },
        )
        .expect("CardTouchStarted sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::PhotoClicked { photo: "outdoor" })
        .expect("PhotoClicked sollte ohne Fehler durchlaufen");

    for card in ["music", "photography"] {
        let tilt = state.tilt(card).expect("Karte erwartet");
        assert!(tilt.vector().is_zero(), "{card} sollte flach sein");
        assert!(!tilt.is_active());
        assert!(!tilt.is_touch_locked());
        approx::assert_relative_eq!(tilt.transform().scale, 1.0);
    }
}

use super::*;
use crate::core::TiltConfig;
use crate::shared::SERVICE_CARDS;

fn touch(id: u64, phase: egui::TouchPhase, pos: egui::Pos2) -> egui::Event {
    egui::Event::Touch {
        device_id: egui::TouchDeviceId(0),
        id: egui::TouchId(id),
        phase,
        pos,
        force: None,
    }
}

/// Eine einzelne Karte in einem egui-Kontext ohne Fenster.
struct CardHarness {
    ctx: egui::Context,
    tilt: TiltController,
    origin: egui::Pos2,
    general: GeneralCopy,
}

impl CardHarness {
    fn new() -> Self {
        let mut harness = Self {
            ctx: egui::Context::default(),
            tilt: TiltController::new(TiltConfig::default()),
            origin: egui::Pos2::ZERO,
            general: GeneralCopy::default(),
        };
        let mut origin = egui::Pos2::ZERO;
        let _ = harness.ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| origin = ui.cursor().min);
        });
        harness.origin = origin;
        harness
    }

    fn at(&self, x: f32, y: f32) -> egui::Pos2 {
        self.origin + egui::vec2(x, y)
    }

    /// Rendert einen Frame, wendet die Intents auf den Controller an und gibt
    /// die Touch-Intents zurück.
    fn frame(&mut self, events: Vec<egui::Event>, interactive: bool) -> Vec<AppIntent> {
        let raw_input = egui::RawInput {
            events,
            ..Default::default()
        };
        let card = &SERVICE_CARDS[0];
        let mut intents = Vec::new();
        let _ = self.ctx.run(raw_input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let copy = CardCopy {
                    service: None,
                    general: &self.general,
                };
                intents = show_tilt_card(ui, card, copy, &self.tilt, interactive);
            });
        });

        for intent in &intents {
            match intent {
                AppIntent::CardTouchStarted { position, size, .. } => {
                    self.tilt.touch_started(*position, *size);
                }
                AppIntent::CardTouchMoved { position, size, .. } => {
                    self.tilt.touch_moved(*position, *size);
                }
                AppIntent::CardTouchEnded { .. } => self.tilt.touch_ended(),
                _ => {}
            }
        }

        intents
            .into_iter()
            .filter(|intent| {
                matches!(
                    intent,
                    AppIntent::CardTouchStarted { .. }
                        | AppIntent::CardTouchMoved { .. }
                        | AppIntent::CardTouchEnded { .. }
                )
            })
            .collect()
    }
}

#[test]
fn test_second_finger_does_not_end_gesture() {
    let mut card = CardHarness::new();

    let started = card.frame(
        vec![touch(1, egui::TouchPhase::Start, card.at(10.0, 10.0))],
        true,
    );
    assert!(matches!(started.as_slice(), [AppIntent::CardTouchStarted { .. }]));
    assert!(card.tilt.is_touch_locked());

    let second_finger = card.frame(
        vec![
            touch(2, egui::TouchPhase::Start, card.at(50.0, 50.0)),
            touch(2, egui::TouchPhase::End, card.at(50.0, 50.0)),
        ],
        true,
    );
    assert!(second_finger.is_empty());
    assert!(card.tilt.is_touch_locked());

    let moved = card.frame(
        vec![touch(1, egui::TouchPhase::Move, card.at(20.0, 20.0))],
        true,
    );
    assert!(matches!(moved.as_slice(), [AppIntent::CardTouchMoved { .. }]));

    let ended = card.frame(
        vec![touch(1, egui::TouchPhase::End, card.at(20.0, 20.0))],
        true,
    );
    assert!(matches!(ended.as_slice(), [AppIntent::CardTouchEnded { .. }]));
    assert!(!card.tilt.is_touch_locked());
}

#[test]
fn test_reset_forgets_tracked_finger() {
    let mut card = CardHarness::new();
    card.frame(
        vec![touch(1, egui::TouchPhase::Start, card.at(10.0, 10.0))],
        true,
    );

    card.tilt.reset();

    let stale = card.frame(
        vec![touch(1, egui::TouchPhase::Move, card.at(30.0, 30.0))],
        true,
    );
    assert!(stale.is_empty());

    let restarted = card.frame(
        vec![touch(2, egui::TouchPhase::Start, card.at(30.0, 30.0))],
        true,
    );
    assert!(matches!(restarted.as_slice(), [AppIntent::CardTouchStarted { .. }]));
}

#[test]
fn test_inactive_card_ignores_touches() {
    let mut card = CardHarness::new();

    let events = card.frame(
        vec![touch(1, egui::TouchPhase::Start, card.at(10.0, 10.0))],
        false,
    );

    assert!(events.is_empty());
    assert!(!card.tilt.is_touch_locked());
}

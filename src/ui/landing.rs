//! Seitenlayout: Kopf mit Sprach-Umschalter, Service-Karten, Abschnitte, Modal.

use super::focus_sync::FocusSync;
use super::tilt_card::{show_tilt_card, CardCopy};
use super::{keyboard, language_toggle, modal_window, sections};
use crate::app::{AppIntent, AppState};
use crate::shared::SERVICE_CARDS;

const PAGE_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(6, 78, 59);
const BACKDROP: egui::Color32 = egui::Color32::from_black_alpha(170);

/// Frame-übergreifender UI-Zustand der Seite.
#[derive(Debug, Default)]
pub struct LandingView {
    focus: FocusSync,
}

impl LandingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendert die Seite und sammelt alle Intents des Frames.
    pub fn show(&mut self, ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (scroll_locked, modal_open) = {
            let doc = state.document.borrow();
            let modal_open = state.modal.is_open();
            self.focus.begin_frame(&doc, modal_open);
            (doc.is_scroll_locked(), modal_open)
        };
        let interactive = !modal_open;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(PAGE_BACKGROUND))
            .show(ctx, |ui| {
                events.extend(keyboard::collect_modal_key_intents(ui, modal_open));
                let panel_rect = ui.max_rect();

                egui::ScrollArea::vertical()
                    .enable_scrolling(!scroll_locked)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.add_space(24.0);
                        ui.horizontal(|ui| {
                            ui.add_space(32.0);
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(&state.content.general.name)
                                        .size(56.0)
                                        .strong()
                                        .color(egui::Color32::from_rgb(110, 231, 183)),
                                );
                                ui.label(
                                    egui::RichText::new(&state.content.services_title).size(34.0),
                                );
                            });
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                                ui.add_space(32.0);
                                events.extend(language_toggle::show_language_toggle(
                                    ui,
                                    state.localizer.language(),
                                    &self.focus,
                                    interactive,
                                ));
                            });
                        });

                        ui.add_space(12.0);
                        ui.indent("page", |ui| {
                            ui.label(egui::RichText::new(&state.content.general.intro).size(20.0));
                            ui.add_space(24.0);

                            ui.horizontal_wrapped(|ui| {
                                ui.spacing_mut().item_spacing = egui::vec2(24.0, 24.0);
                                for card in &SERVICE_CARDS {
                                    let Some(tilt) = state.tilt(card.key) else {
                                        continue;
                                    };
                                    let copy = CardCopy {
                                        service: state.content.service(card.key),
                                        general: &state.content.general,
                                    };
                                    events.extend(show_tilt_card(ui, card, copy, tilt, interactive));
                                }
                            });

                            events.extend(sections::show_about(
                                ui,
                                &state.content,
                                &state.sections,
                                interactive,
                            ));
                            events.extend(sections::show_gallery(
                                ui,
                                &state.content,
                                &self.focus,
                                interactive,
                            ));
                            events.extend(sections::show_expertise(
                                ui,
                                &state.content,
                                &state.sections,
                                interactive,
                            ));
                            sections::show_contact(ui, &state.content, interactive);
                            ui.add_space(48.0);
                        });
                    });

                if modal_open {
                    ui.painter().rect_filled(panel_rect, 0.0, BACKDROP);
                    // Zuletzt registriert: fängt Klicks außerhalb des Modal-Fensters ab.
                    // Nur klickbar, nicht per Tab erreichbar.
                    let backdrop =
                        ui.interact(panel_rect, egui::Id::new("modal_backdrop"), egui::Sense::CLICK);
                    if backdrop.clicked() {
                        events.push(AppIntent::ModalBackdropClicked);
                    }
                }
            });

        events.extend(modal_window::show_modal_window(ctx, state, &self.focus));

        events
    }
}

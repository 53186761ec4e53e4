//! Bild-Modal als egui-Fenster über dem abgedunkelten Hintergrund.

use super::focus_sync::FocusSync;
use crate::app::{AppIntent, AppState};

/// Rendert das Modal, falls geöffnet, und gibt AppIntents zurück.
pub fn show_modal_window(
    ctx: &egui::Context,
    state: &AppState,
    focus: &FocusSync,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let modal = state.modal.state();
    if !modal.is_open {
        return events;
    }
    let (Some(image_source), Some(caption)) = (modal.image_source, modal.caption) else {
        return events;
    };
    let layout = state.modal.layout();
    let uri = state.options.image_uri(&image_source);
    let mut close_widget = None;

    egui::Window::new("image_modal")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_max_width(640.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = ui.button("✕").on_hover_text("Close");
                    if let Some(id) = &layout.close_button {
                        focus.apply(id, &close);
                    }
                    close_widget = Some(close.id);
                    if close.clicked() {
                        events.push(AppIntent::ModalCloseClicked);
                    }
                });
            });

            if modal.degraded {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| ui.weak(image_source.as_str()));
                ui.add_space(40.0);
            } else {
                ui.add(
                    egui::Image::new(uri.as_str())
                        .max_width(600.0)
                        .max_height(480.0)
                        .maintain_aspect_ratio(true),
                );
                if ctx
                    .try_load_image(&uri, egui::SizeHint::default())
                    .is_err()
                {
                    events.push(AppIntent::ModalImageFailed);
                }
            }

            ui.add_space(8.0);
            ui.vertical_centered(|ui| ui.label(egui::RichText::new(caption).size(16.0)));
        });

    // Zuletzt: egui's Tab-Navigation darf den Dialog nicht verlassen
    if let (Some(id), Some(widget)) = (&layout.close_button, close_widget) {
        focus.hold(ctx, id, widget);
    }

    events
}

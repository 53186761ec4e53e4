//! Service-Karte mit 3D-Tilt.
//!
//! Zeichnet die Karte als projiziertes Viereck und meldet Maus- und
//! Touch-Bewegungen als Intents. Die Rückstellung wird über egui animiert.

use crate::app::AppIntent;
use crate::core::{TiltController, TiltTransform, TiltVector};
use crate::shared::ServiceCard;
use glam::Vec2;
use landing_i18n::{GeneralCopy, ServiceCopy};

/// Feste Kartengröße in logischen Pixeln.
pub const CARD_SIZE: egui::Vec2 = egui::vec2(230.0, 210.0);

const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(6, 95, 70);
const CARD_FILL_LIVE: egui::Color32 = egui::Color32::from_rgb(4, 120, 87);
const CARD_STROKE: egui::Color32 = egui::Color32::from_rgb(110, 231, 183);

/// Texte einer Karte für die aktive Sprache.
pub struct CardCopy<'a> {
    pub service: Option<&'a ServiceCopy>,
    pub general: &'a GeneralCopy,
}

/// Rendert eine Karte und gibt AppIntents zurück.
///
/// Bei `interactive == false` (Modal offen) werden keine Bewegungen gemeldet
/// und die Karte ist weder klick- noch fokussierbar.
pub fn show_tilt_card(
    ui: &mut egui::Ui,
    card: &ServiceCard,
    copy: CardCopy<'_>,
    tilt: &TiltController,
    interactive: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let sense = if interactive {
        egui::Sense::click()
    } else {
        egui::Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(CARD_SIZE, sense);
    let size = measurable_size(rect);

    if interactive {
        collect_touch_intents(ui, card.key, rect, size, tilt, &mut events);

        if !tilt.is_touch_locked() {
            match response.hover_pos() {
                Some(pos) => events.push(AppIntent::CardPointerMoved {
                    card: card.key,
                    position: to_local(pos, rect),
                    size,
                }),
                None if tilt.is_active() => {
                    events.push(AppIntent::CardPointerLeft { card: card.key })
                }
                None => {}
            }
        }

        if card.is_live && response.clicked() {
            ui.ctx().open_url(egui::OpenUrl::new_tab(card.url));
        }
    }

    let transform = animated_transform(ui, card.key, tilt.transform());
    paint_card(ui, rect, card, &copy, &transform);

    events
}

fn measurable_size(rect: egui::Rect) -> Option<Vec2> {
    let size = Vec2::new(rect.width(), rect.height());
    (size.is_finite() && size.x > 0.0 && size.y > 0.0).then_some(size)
}

fn to_local(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(pos.x - rect.min.x, pos.y - rect.min.y)
}

/// Meldet die Touch-Geste genau eines Fingers.
///
/// Der Finger, der die Geste auf der Karte beginnt, wird über Frames hinweg
/// gemerkt; weitere Finger beeinflussen die Geste nicht.
fn collect_touch_intents(
    ui: &egui::Ui,
    card: &'static str,
    rect: egui::Rect,
    size: Option<Vec2>,
    tilt: &TiltController,
    events: &mut Vec<AppIntent>,
) {
    let gesture_id = egui::Id::new(("tilt_touch", card));
    let touches: Vec<(egui::TouchId, egui::TouchPhase, egui::Pos2)> = ui.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Touch { id, phase, pos, .. } => Some((*id, *phase, *pos)),
                _ => None,
            })
            .collect()
    });

    // Ohne Sperre im Controller (z. B. nach einem Reset) ist der gemerkte Finger verwaist
    let mut finger = ui
        .data(|d| d.get_temp::<egui::TouchId>(gesture_id))
        .filter(|_| tilt.is_touch_locked());

    for (touch, phase, pos) in touches {
        match phase {
            egui::TouchPhase::Start if finger.is_none() && rect.contains(pos) => {
                finger = Some(touch);
                events.push(AppIntent::CardTouchStarted {
                    card,
                    position: to_local(pos, rect),
                    size,
                });
            }
            egui::TouchPhase::Move if finger == Some(touch) => {
                events.push(AppIntent::CardTouchMoved {
                    card,
                    position: to_local(pos, rect),
                    size,
                })
            }
            egui::TouchPhase::End | egui::TouchPhase::Cancel if finger == Some(touch) => {
                finger = None;
                events.push(AppIntent::CardTouchEnded { card });
            }
            _ => {}
        }
    }

    ui.data_mut(|d| match finger {
        Some(touch) => d.insert_temp(gesture_id, touch),
        None => {
            d.remove::<egui::TouchId>(gesture_id);
        }
    });
}

/// Glättet Rotation und Skalierung gemäß der Übergangsdauer.
fn animated_transform(ui: &egui::Ui, key: &str, target: TiltTransform) -> TiltTransform {
    let ctx = ui.ctx();
    let seconds = target.transition_ms as f32 / 1000.0;
    let id = egui::Id::new(("tilt", key));

    TiltTransform {
        vector: TiltVector {
            rotate_x_deg: ctx.animate_value_with_time(
                id.with("x"),
                target.vector.rotate_x_deg,
                seconds,
            ),
            rotate_y_deg: ctx.animate_value_with_time(
                id.with("y"),
                target.vector.rotate_y_deg,
                seconds,
            ),
        },
        scale: ctx.animate_value_with_time(id.with("scale"), target.scale, seconds),
        ..target
    }
}

fn paint_card(
    ui: &egui::Ui,
    rect: egui::Rect,
    card: &ServiceCard,
    copy: &CardCopy<'_>,
    transform: &TiltTransform,
) {
    let painter = ui.painter_at(rect.expand(24.0));
    let center = rect.center();
    let corners = transform
        .project_card(Vec2::new(rect.width(), rect.height()))
        .map(|c| egui::pos2(center.x + c.x, center.y + c.y));

    let fill = if card.is_live { CARD_FILL_LIVE } else { CARD_FILL };
    painter.add(egui::Shape::convex_polygon(
        corners.to_vec(),
        fill,
        egui::Stroke::new(1.5, CARD_STROKE),
    ));

    // Text folgt der Kartenmitte, nicht der Perspektive
    let projected_center = egui::pos2(
        (corners[0].x + corners[2].x) / 2.0,
        (corners[0].y + corners[2].y) / 2.0,
    );
    let shift = projected_center - center;
    let text_origin = egui::pos2(rect.min.x + shift.x + 14.0, rect.min.y + shift.y + 16.0);

    let (title, description, footer) = match copy.service {
        Some(service) => (
            service.title.as_str(),
            service.description.as_str(),
            if card.is_live {
                service.cta.as_str()
            } else {
                copy.general.coming_soon.as_str()
            },
        ),
        None => (card.key, "", copy.general.coming_soon.as_str()),
    };

    let wrap_width = rect.width() - 28.0;
    let title_galley = painter.layout(
        title.to_string(),
        egui::FontId::proportional(19.0),
        egui::Color32::WHITE,
        wrap_width,
    );
    let title_height = title_galley.size().y;
    painter.galley(text_origin, title_galley, egui::Color32::WHITE);

    let description_galley = painter.layout(
        description.to_string(),
        egui::FontId::proportional(14.0),
        egui::Color32::from_rgb(209, 250, 229),
        wrap_width,
    );
    painter.galley(
        text_origin + egui::vec2(0.0, title_height + 10.0),
        description_galley,
        egui::Color32::WHITE,
    );

    painter.text(
        egui::pos2(rect.center().x + shift.x, rect.max.y + shift.y - 22.0),
        egui::Align2::CENTER_CENTER,
        footer,
        egui::FontId::proportional(15.0),
        if card.is_live {
            egui::Color32::WHITE
        } else {
            egui::Color32::LIGHT_GRAY
        },
    );
}

#[cfg(test)]
mod tests;

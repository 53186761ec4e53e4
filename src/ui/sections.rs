//! Inhaltsabschnitte der Seite: Über mich, Expertise, Galerie, Kontakt.

use super::focus_sync::FocusSync;
use crate::app::{AppIntent, SectionState};
use crate::shared::catalog::{ContactKind, ACCORDION_SECTIONS, CONTACT_LINKS, PHOTOS};
use landing_i18n::LandingContent;

const ACADEMIC_WORKS: &str = "academicWorks";

const HEADING: egui::Color32 = egui::Color32::from_rgb(209, 250, 229);

fn heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(24.0);
    ui.label(egui::RichText::new(text).size(30.0).strong().color(HEADING));
    ui.add_space(8.0);
}

/// Über-mich-Bereich mit Akkordeons und "Mehr lesen".
pub fn show_about(
    ui: &mut egui::Ui,
    content: &LandingContent,
    sections: &SectionState,
    interactive: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let about = &content.about;

    heading(ui, &about.title);
    ui.label(egui::RichText::new(&about.intro).size(18.0).strong());
    ui.label(&about.content);

    for (key, section) in &about.sections {
        if key == ACADEMIC_WORKS || ACCORDION_SECTIONS.iter().any(|s| *s == key.as_str()) {
            continue;
        }
        ui.add_space(6.0);
        ui.label(egui::RichText::new(&section.title).size(18.0).color(HEADING));
        ui.label(&section.content);
        if let Some(years) = &section.years {
            ui.weak(years);
        }
        if sections.about_expanded {
            if let Some(detail) = &section.detail {
                ui.label(detail);
            }
        }
    }

    let more = if sections.about_expanded {
        &content.general.read_less
    } else {
        &content.general.read_more
    };
    if ui.add_enabled(interactive, egui::Link::new(more)).clicked() {
        events.push(AppIntent::AboutDetailsToggled);
    }

    ui.add_space(8.0);
    for key in ACCORDION_SECTIONS {
        let Some(section) = about.sections.get(key) else {
            continue;
        };
        let open = sections.is_accordion_open(key);
        let arrow = if open { "▲" } else { "▼" };
        let header = ui.add_enabled(
            interactive,
            egui::Button::new(format!("{arrow}  {}", section.title)).frame(false),
        );
        if header.clicked() {
            events.push(AppIntent::AccordionToggled { section: key });
        }
        if open {
            ui.indent(("accordion", key), |ui| {
                ui.label(&section.content);
                if let Some(detail) = &section.detail {
                    ui.label(detail);
                }
            });
        }
        ui.separator();
    }

    if !about.academic_works.is_empty() {
        if let Some(section) = about.sections.get(ACADEMIC_WORKS) {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(&section.title).size(18.0).color(HEADING));
            ui.label(&section.content);
        }
        for work in &about.academic_works {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(&work.title).strong());
                ui.weak(format!("({})", work.kind));
            });
            ui.label(&work.description);
            ui.weak(&work.file);
        }
    }

    events
}

/// Expertise-Liste, höchstens ein Eintrag aufgeklappt.
pub fn show_expertise(
    ui: &mut egui::Ui,
    content: &LandingContent,
    sections: &SectionState,
    interactive: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let expertise = &content.expertise;

    heading(ui, &expertise.title);
    ui.label(&expertise.summary);
    ui.add_space(6.0);

    for (key, item) in &expertise.items {
        let expanded = sections.is_expertise_expanded(key);
        let label = match (&item.details, expanded) {
            (Some(_), true) => format!("▲  {}", item.title),
            (Some(_), false) => format!("▼  {}", item.title),
            (None, _) => item.title.clone(),
        };

        let button = ui.add_enabled(
            interactive,
            egui::Button::new(egui::RichText::new(label).size(17.0)).frame(false),
        );
        if button.clicked() {
            events.push(AppIntent::ExpertiseItemToggled { item: key.clone() });
        }
        if expanded {
            if let Some(details) = &item.details {
                ui.indent(("expertise", key), |ui| ui.label(details));
            }
        }
    }

    events
}

/// Fotogalerie; ein Klick öffnet das Bild-Modal.
pub fn show_gallery(
    ui: &mut egui::Ui,
    content: &LandingContent,
    focus: &FocusSync,
    interactive: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    ui.add_space(16.0);
    ui.horizontal_wrapped(|ui| {
        for photo in &PHOTOS {
            let caption = content.photo_caption(photo.key).unwrap_or(photo.key);
            let button = ui.add_enabled(
                interactive,
                egui::Button::new(egui::RichText::new(caption).size(16.0))
                    .min_size(egui::vec2(260.0, 160.0)),
            );
            focus.apply(&photo.focus_id(), &button);
            if button.clicked() {
                events.push(AppIntent::PhotoClicked { photo: photo.key });
            }
        }
    });

    events
}

/// Kontakt-Links (nicht lokalisiert).
pub fn show_contact(ui: &mut egui::Ui, content: &LandingContent, interactive: bool) {
    heading(ui, "Contact");
    ui.label(egui::RichText::new(&content.general.name).size(20.0).strong());
    ui.add_space(6.0);

    for kind in [ContactKind::Direct, ContactKind::Social] {
        ui.horizontal_wrapped(|ui| {
            for link in CONTACT_LINKS.iter().filter(|l| l.kind == kind) {
                ui.add_enabled(
                    interactive,
                    egui::Hyperlink::from_label_and_url(link.label, link.href),
                );
                ui.add_space(12.0);
            }
        });
    }
}

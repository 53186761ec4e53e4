//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{Document, FocusId, ModalController, ModalLayout, SharedDocument, TiltController};
use crate::shared::catalog::{ACCORDION_SECTIONS, PHOTOS, SERVICE_CARDS};
use crate::shared::LandingOptions;
use indexmap::IndexMap;
use landing_i18n::{LandingContent, Localizer, ResolutionError, TranslationTree};
use std::sync::Arc;

/// Kennung der Seitenwurzel (letzter Fokus-Ausweg).
pub const PAGE_ROOT: &str = "page";
/// Kennung des Sprach-Umschalters.
pub const LANGUAGE_TOGGLE: &str = "language-toggle";

/// Auf-/Zuklapp-Zustand der Seitenabschnitte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionState {
    /// Akkordeons, unabhängig voneinander
    pub accordions: IndexMap<&'static str, bool>,
    /// Höchstens ein offener Expertise-Eintrag
    pub expanded_expertise: Option<String>,
    /// "Mehr lesen" im Über-mich-Bereich
    pub about_expanded: bool,
}

impl Default for SectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionState {
    /// Erstellt den Startzustand (alles zugeklappt).
    pub fn new() -> Self {
        Self {
            accordions: ACCORDION_SECTIONS.iter().map(|key| (*key, false)).collect(),
            expanded_expertise: None,
            about_expanded: false,
        }
    }

    /// Schaltet ein Akkordeon um. Gibt den neuen Zustand zurück, `None` bei unbekanntem Abschnitt.
    pub fn toggle_accordion(&mut self, section: &str) -> Option<bool> {
        let open = self.accordions.get_mut(section)?;
        *open = !*open;
        Some(*open)
    }

    pub fn is_accordion_open(&self, section: &str) -> bool {
        self.accordions.get(section).copied().unwrap_or(false)
    }

    /// Öffnet einen Expertise-Eintrag; erneute Auswahl des offenen Eintrags schließt ihn.
    pub fn toggle_expertise(&mut self, item: &str) {
        if self.expanded_expertise.as_deref() == Some(item) {
            self.expanded_expertise = None;
        } else {
            self.expanded_expertise = Some(item.to_string());
        }
    }

    pub fn is_expertise_expanded(&self, item: &str) -> bool {
        self.expanded_expertise.as_deref() == Some(item)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Übersetzungen und aktive Sprache
    pub localizer: Localizer,
    /// Aufgelöste Inhalte der aktiven Sprache
    pub content: LandingContent,
    /// Fehler der letzten Auflösung
    pub resolution_errors: Vec<ResolutionError>,
    /// Fokus und Scroll-Sperre der Seite
    pub document: SharedDocument,
    /// Bild-Modal
    pub modal: ModalController,
    /// Tilt-Zustand je Service-Karte
    pub tilt: IndexMap<&'static str, TiltController>,
    /// Auf-/Zuklapp-Zustand
    pub sections: SectionState,
    /// Startoptionen
    pub options: LandingOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt den Startzustand in der Standardsprache.
    pub fn new(tree: Arc<TranslationTree>, options: LandingOptions) -> Self {
        let document = Document::shared(FocusId::new(PAGE_ROOT));
        {
            let mut doc = document.borrow_mut();
            doc.mount(FocusId::new(LANGUAGE_TOGGLE));
            for card in &SERVICE_CARDS {
                doc.mount(card.focus_id());
            }
            for photo in &PHOTOS {
                doc.mount(photo.focus_id());
            }
        }

        let tilt_config = options.tilt_config();
        let tilt = SERVICE_CARDS
            .iter()
            .map(|card| (card.key, TiltController::new(tilt_config)))
            .collect();

        let localizer = Localizer::new(tree);
        let resolved = LandingContent::resolve(&localizer);

        Self {
            localizer,
            content: resolved.content,
            resolution_errors: resolved.errors,
            modal: ModalController::new(document.clone(), ModalLayout::standard()),
            document,
            tilt,
            sections: SectionState::new(),
            options,
            command_log: CommandLog::new(),
            should_exit: false,
        }
    }

    /// Löst alle Inhalte für die aktive Sprache neu auf (synchron).
    pub fn refresh_content(&mut self) {
        let resolved = LandingContent::resolve(&self.localizer);
        self.content = resolved.content;
        self.resolution_errors = resolved.errors;
    }

    pub fn tilt(&self, card: &str) -> Option<&TiltController> {
        self.tilt.get(card)
    }
}

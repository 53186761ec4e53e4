use crate::core::ModalKey;
use landing_i18n::Language;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,
    /// Startsprache aus der Konfiguration (nur beim Start)
    InitialLanguageConfigured { language: Language },
    /// Sprach-Umschalter wurde betätigt
    LanguageToggleClicked,

    /// Foto der Galerie angeklickt
    PhotoClicked { photo: &'static str },
    /// Schließen-Schaltfläche des Modals
    ModalCloseClicked,
    /// Klick auf den Hintergrund außerhalb des Dialogs
    ModalBackdropClicked,
    /// Taste bei offenem Modal (Escape, Tab, Shift+Tab)
    ModalKeyPressed { key: ModalKey },
    /// Modal-Bild konnte nicht geladen werden
    ModalImageFailed,

    /// Maus bewegt sich über einer Service-Karte
    CardPointerMoved {
        card: &'static str,
        /// Position relativ zur linken oberen Kartenecke
        position: glam::Vec2,
        /// Kartengröße, `None` wenn nicht messbar
        size: Option<glam::Vec2>,
    },
    /// Maus verlässt eine Service-Karte
    CardPointerLeft { card: &'static str },
    /// Touch-Geste auf einer Karte beginnt
    CardTouchStarted {
        card: &'static str,
        position: glam::Vec2,
        size: Option<glam::Vec2>,
    },
    /// Touch-Geste auf einer Karte bewegt sich
    CardTouchMoved {
        card: &'static str,
        position: glam::Vec2,
        size: Option<glam::Vec2>,
    },
    /// Touch-Geste endet oder wird abgebrochen
    CardTouchEnded { card: &'static str },

    /// Akkordeon-Abschnitt auf-/zuklappen
    AccordionToggled { section: &'static str },
    /// Expertise-Eintrag auf-/zuklappen
    ExpertiseItemToggled { item: String },
    /// "Mehr lesen"/"Weniger lesen" im Über-mich-Bereich
    AboutDetailsToggled,
}

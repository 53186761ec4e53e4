use crate::core::{CloseReason, FocusId, ModalContent, ModalKey};
use landing_i18n::Language;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Anwendung beenden
    RequestExit,

    /// Aktive Sprache umschalten (en ↔ nl) und Inhalte neu auflösen
    ToggleLanguage,
    /// Aktive Sprache setzen (nur aus der Startkonfiguration)
    SetLanguage { language: Language },

    /// Modal öffnen bzw. Inhalt tauschen
    OpenModal {
        content: ModalContent,
        trigger: Option<FocusId>,
    },
    /// Modal schließen
    CloseModal { reason: CloseReason },
    /// Taste an das offene Modal weiterreichen
    ForwardModalKey { key: ModalKey },
    /// Modal-Bild als fehlerhaft markieren
    MarkModalImageFailed,

    /// Tilt: Maus-Position aktualisieren
    TiltPointerMove {
        card: &'static str,
        position: glam::Vec2,
        size: Option<glam::Vec2>,
    },
    /// Tilt: Maus hat die Karte verlassen
    TiltPointerLeave { card: &'static str },
    /// Tilt: Touch-Geste beginnt
    TiltTouchStart {
        card: &'static str,
        position: glam::Vec2,
        size: Option<glam::Vec2>,
    },
    /// Tilt: Touch-Geste bewegt sich
    TiltTouchMove {
        card: &'static str,
        position: glam::Vec2,
        size: Option<glam::Vec2>,
    },
    /// Tilt: Touch-Geste endet
    TiltTouchEnd { card: &'static str },

    /// Akkordeon-Abschnitt umschalten
    ToggleAccordion { section: &'static str },
    /// Expertise-Eintrag umschalten (höchstens einer offen)
    ToggleExpertiseItem { item: String },
    /// Zusatztext im Über-mich-Bereich umschalten
    ToggleAboutDetails,
}

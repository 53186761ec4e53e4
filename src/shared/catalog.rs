//! Statische Seitenstruktur: Service-Karten, Fotos, Kontakt-Links.
//!
//! Texte kommen aus den Übersetzungen; hier stehen nur Schlüssel, URLs und Bildpfade.

use crate::core::FocusId;

/// Eine Service-Karte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    /// Schlüssel unter `services.*`
    pub key: &'static str,
    pub url: &'static str,
    /// Live-Karten zeigen die CTA, alle anderen "Coming soon"
    pub is_live: bool,
}

impl ServiceCard {
    pub fn focus_id(&self) -> FocusId {
        FocusId::new(format!("card.{}", self.key))
    }
}

pub const SERVICE_CARDS: [ServiceCard; 4] = [
    ServiceCard {
        key: "privateTutoring",
        url: "https://privelessen.stephenadei.nl",
        is_live: true,
    },
    ServiceCard {
        key: "dataConsultancy",
        url: "https://data.stephenadei.nl",
        is_live: false,
    },
    ServiceCard {
        key: "photography",
        url: "https://photography.stephenadei.nl",
        is_live: false,
    },
    ServiceCard {
        key: "music",
        url: "https://music.stephenadei.nl",
        is_live: false,
    },
];

/// Ein Foto der Galerie, öffnet das Modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Photo {
    /// Schlüssel unter `photos.*`
    pub key: &'static str,
    pub image_path: &'static str,
}

impl Photo {
    pub fn focus_id(&self) -> FocusId {
        FocusId::new(format!("photo.{}", self.key))
    }
}

pub const PHOTOS: [Photo; 2] = [
    Photo {
        key: "outdoor",
        image_path: "/images/portraits/outdoor.jpg",
    },
    Photo {
        key: "teaching",
        image_path: "/images/teaching/teaching.jpg",
    },
];

/// Akkordeon-Abschnitte der Über-mich-Sektion (unabhängig auf-/zuklappbar).
pub const ACCORDION_SECTIONS: [&str; 3] = ["teaching", "languages", "interests"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Direct,
    Social,
}

/// Kontakt-Link (nicht lokalisiert).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub kind: ContactKind,
}

pub const CONTACT_LINKS: [ContactLink; 6] = [
    ContactLink {
        label: "Email",
        href: "mailto:info@stephenadei.nl",
        kind: ContactKind::Direct,
    },
    ContactLink {
        label: "WhatsApp",
        href: "https://wa.me/31647357426",
        kind: ContactKind::Direct,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/stephen-adei/",
        kind: ContactKind::Direct,
    },
    ContactLink {
        label: "Music Production",
        href: "https://www.instagram.com/callhimdavinci.als/",
        kind: ContactKind::Social,
    },
    ContactLink {
        label: "Photography",
        href: "https://www.instagram.com/callhimdavinci.jpg/",
        kind: ContactKind::Social,
    },
    ContactLink {
        label: "Event Management",
        href: "https://www.instagram.com/stephensevents/",
        kind: ContactKind::Social,
    },
];

pub fn service_card(key: &str) -> Option<&'static ServiceCard> {
    SERVICE_CARDS.iter().find(|card| card.key == key)
}

pub fn photo(key: &str) -> Option<&'static Photo> {
    PHOTOS.iter().find(|photo| photo.key == key)
}

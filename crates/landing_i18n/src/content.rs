//! Typisiertes View-Model der Landing-Page für genau eine Sprache.
//!
//! Wird bei jedem Sprachwechsel vollständig und synchron neu aufgelöst.
//! Fehlende Texte werden durch den Schlüsselpfad ersetzt, fehlerhafte
//! Sequenzen bleiben leer; alle Fehler werden gesammelt und geloggt.

use crate::error::ResolutionError;
use crate::language::Language;
use crate::localizer::Localizer;
use crate::schema::{
    AcademicWork, ExpertiseItem, FromContent, ServiceCopy, ABOUT_SECTION_KEYS,
    ACADEMIC_WORKS_PATH, PHOTO_KEYS, SERVICE_KEYS,
};
use indexmap::IndexMap;

/// Allgemeine Texte (`general.*`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneralCopy {
    pub name: String,
    pub intro: String,
    pub coming_soon: String,
    pub read_more: String,
    pub read_less: String,
    pub show_more: String,
    pub show_less: String,
    pub go_to: String,
    pub visit_site: String,
    pub additional_info: String,
}

/// Abschnitt unter `about.sections`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AboutSection {
    pub title: String,
    pub content: String,
    /// Zusatztext (`list`, `expanded` oder `details`, je nach Abschnitt)
    pub detail: Option<String>,
    /// Nur beim Nachhilfe-Abschnitt (`years`)
    pub years: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AboutContent {
    pub title: String,
    pub intro: String,
    pub content: String,
    /// Abschnitte in Schema-Reihenfolge
    pub sections: IndexMap<String, AboutSection>,
    pub academic_works: Vec<AcademicWork>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpertiseContent {
    pub title: String,
    pub summary: String,
    /// Einträge in Dokumentreihenfolge, Schlüssel = Item-Key
    pub items: IndexMap<String, ExpertiseItem>,
}

/// Aufgelöste Inhalte der Landing-Page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LandingContent {
    pub language: Language,
    pub general: GeneralCopy,
    pub services_title: String,
    /// Service-Texte je Service-Key
    pub services: IndexMap<String, ServiceCopy>,
    pub about: AboutContent,
    pub expertise: ExpertiseContent,
    /// Bildunterschriften je Foto-Key
    pub photo_captions: IndexMap<String, String>,
}

/// Ergebnis einer vollständigen Auflösung.
#[derive(Debug, Clone)]
pub struct ResolvedContent {
    pub content: LandingContent,
    pub errors: Vec<ResolutionError>,
}

impl LandingContent {
    /// Löst alle Inhalte für die aktive Sprache des Localizers auf.
    pub fn resolve(localizer: &Localizer) -> ResolvedContent {
        let mut c = Collector {
            localizer,
            errors: Vec::new(),
        };

        let general = GeneralCopy {
            name: c.text("general.name"),
            intro: c.text("general.intro"),
            coming_soon: c.text("general.comingSoon"),
            read_more: c.text("general.readMore"),
            read_less: c.text("general.readLess"),
            show_more: c.text("general.showMore"),
            show_less: c.text("general.showLess"),
            go_to: c.text("general.goTo"),
            visit_site: c.text("general.visitSite"),
            additional_info: c.text("general.additionalInfo"),
        };

        let services = SERVICE_KEYS
            .iter()
            .map(|key| {
                let copy = c
                    .record::<ServiceCopy>(&format!("services.{key}"))
                    .unwrap_or_else(|| ServiceCopy {
                        title: format!("services.{key}.title"),
                        ..ServiceCopy::default()
                    });
                (key.to_string(), copy)
            })
            .collect();

        let sections = ABOUT_SECTION_KEYS
            .iter()
            .map(|key| {
                let base = format!("about.sections.{key}");
                let section = AboutSection {
                    title: c.text(&format!("{base}.title")),
                    content: c.text(&format!("{base}.content")),
                    detail: ["list", "expanded", "details"]
                        .iter()
                        .find_map(|field| c.optional_text(&format!("{base}.{field}"))),
                    years: c.optional_text(&format!("{base}.years")),
                };
                (key.to_string(), section)
            })
            .collect();

        let about = AboutContent {
            title: c.text("about.title"),
            intro: c.text("about.intro"),
            content: c.text("about.content"),
            sections,
            academic_works: c.records(ACADEMIC_WORKS_PATH),
        };

        let expertise = ExpertiseContent {
            title: c.text("expertise.title"),
            summary: c.text("expertise.summary"),
            items: c.expertise_items("expertise.items"),
        };

        let photo_captions = PHOTO_KEYS
            .iter()
            .map(|key| (key.to_string(), c.text(&format!("photos.{key}.caption"))))
            .collect();

        let content = LandingContent {
            language: localizer.language(),
            general,
            services_title: c.text("services.title"),
            services,
            about,
            expertise,
            photo_captions,
        };

        for error in &c.errors {
            if error.is_shape_mismatch() {
                log::warn!("Inhalt übersprungen: {error}");
            } else {
                log::error!("Übersetzung nicht auflösbar: {error}");
            }
        }

        ResolvedContent {
            content,
            errors: c.errors,
        }
    }

    /// Service-Texte eines Service-Keys.
    pub fn service(&self, key: &str) -> Option<&ServiceCopy> {
        self.services.get(key)
    }

    /// Bildunterschrift eines Fotos.
    pub fn photo_caption(&self, key: &str) -> Option<&str> {
        self.photo_captions.get(key).map(String::as_str)
    }
}

/// Sammelt Fehler während der Auflösung statt abzubrechen.
struct Collector<'a> {
    localizer: &'a Localizer,
    errors: Vec<ResolutionError>,
}

impl Collector<'_> {
    fn text(&mut self, path: &str) -> String {
        match self.localizer.text(path) {
            Ok(text) => text.to_string(),
            Err(e) => {
                self.errors.push(e);
                path.to_string()
            }
        }
    }

    /// Optionaler Text: Fehlen ist kein Fehler, falsche Form schon.
    fn optional_text(&mut self, path: &str) -> Option<String> {
        match self.localizer.text(path) {
            Ok(text) => Some(text.to_string()),
            Err(e) if e.is_missing() => None,
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    fn record<T: FromContent>(&mut self, path: &str) -> Option<T> {
        self.localizer
            .record(path)
            .map_err(|e| self.errors.push(e))
            .ok()
    }

    fn records<T: FromContent>(&mut self, path: &str) -> Vec<T> {
        self.localizer.records(path).unwrap_or_else(|e| {
            self.errors.push(e);
            Vec::new()
        })
    }

    fn expertise_items(&mut self, path: &str) -> IndexMap<String, ExpertiseItem> {
        let localizer = self.localizer;
        let entries = match localizer.mapping(path) {
            Ok(entries) => entries,
            Err(e) => {
                self.errors.push(e);
                return IndexMap::new();
            }
        };

        let mut items = IndexMap::new();
        for key in entries.keys() {
            let item_path = format!("{path}.{key}");
            if let Some(item) = self.record::<ExpertiseItem>(&item_path) {
                items.insert(key.clone(), item);
            }
        }
        items
    }
}

#[cfg(test)]
mod tests;

//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und statische Seitenstruktur, die `app` und `ui`
//! gemeinsam nutzen.

pub mod catalog;
pub mod options;

pub use catalog::{ContactKind, ContactLink, Photo, ServiceCard, CONTACT_LINKS, PHOTOS, SERVICE_CARDS};
pub use options::LandingOptions;

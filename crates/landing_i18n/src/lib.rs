//! `landing_i18n`: Mehrsprachige Inhaltsauflösung für die Landing-Page.
//!
//! Löst verschachtelte Schlüsselpfade (`"services.music.title"`) gegen einen
//! Übersetzungsbaum auf:
//! - zuerst in der aktiven Sprache, danach in der Standardsprache (`en`)
//! - typisierte Zugriffe für Texte, Sequenzen und Unterbäume
//! - Schema-Prüfung einmalig beim Laden statt verstreuter Laufzeit-Checks
//!
//! # Beispiel
//! ```
//! use landing_i18n::{Language, Localizer, TranslationTree};
//! use std::sync::Arc;
//!
//! let tree = TranslationTree::from_json_documents([
//!     (Language::En, r#"{"services": {"music": {"title": "Music"}}}"#),
//!     (Language::Nl, r#"{"services": {"music": {"title": "Muziek"}}}"#),
//! ])?;
//! let mut localizer = Localizer::new(Arc::new(tree));
//! assert_eq!(localizer.text("services.music.title")?, "Music");
//!
//! localizer.toggle_language();
//! assert_eq!(localizer.text("services.music.title")?, "Muziek");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod content;
pub mod error;
pub mod language;
pub mod localizer;
pub mod node;
pub mod path;
pub mod schema;
pub mod tree;

pub use content::{
    AboutContent, AboutSection, ExpertiseContent, GeneralCopy, LandingContent, ResolvedContent,
};
pub use error::{LoadError, ResolutionError, ResolutionErrorKind};
pub use language::Language;
pub use localizer::Localizer;
pub use node::{ContentNode, NodeShape};
pub use path::KeyPath;
pub use schema::{
    AcademicWork, ExpertiseItem, FromContent, SchemaViolation, Section, ServiceCopy, ShapeError,
};
pub use tree::{GapKind, ParityGap, TranslationTree};

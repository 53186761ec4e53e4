//! Zentrale Konfiguration des Landing-Presenters.
//!
//! `LandingOptions` enthält alle beim Start einstellbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::TiltConfig;
use landing_i18n::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dateiname der Optionen neben der Binary.
pub const CONFIG_FILE_NAME: &str = "landing_presenter.toml";

// ── Inhalte ─────────────────────────────────────────────────────────

/// Standard-Verzeichnis der Übersetzungen (`<dir>/<code>/common.json`).
pub const LOCALES_DIR: &str = "assets/locales";
/// Standard-Verzeichnis für Bildpfade wie `/images/...`.
pub const PUBLIC_DIR: &str = "assets/public";

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße (Breite, Höhe) in logischen Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [1100.0, 800.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einstellbaren Optionen.
/// Wird als `landing_presenter.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LandingOptions {
    // ── Tilt ────────────────────────────────────────────────────
    /// Pixel pro Grad Rotation
    pub tilt_divisor: f32,
    /// Skalierung aktiver Karten
    pub tilt_active_scale: f32,
    /// Perspektive in Pixeln
    pub tilt_perspective_px: f32,
    /// Dauer der Rückstellung in Millisekunden
    #[serde(default = "default_reset_transition_ms")]
    pub tilt_reset_transition_ms: u32,

    // ── Inhalte ─────────────────────────────────────────────────
    /// Verzeichnis mit `<code>/common.json`
    pub locales_dir: PathBuf,
    /// Wurzel für Bildpfade der Seite
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Sprache beim Start (wird nie zurückgeschrieben)
    #[serde(default)]
    pub initial_language: Language,

    // ── Fenster ─────────────────────────────────────────────────
    pub window_size: [f32; 2],
}

impl Default for LandingOptions {
    fn default() -> Self {
        Self {
            tilt_divisor: TiltConfig::DIVISOR,
            tilt_active_scale: TiltConfig::ACTIVE_SCALE,
            tilt_perspective_px: TiltConfig::PERSPECTIVE_PX,
            tilt_reset_transition_ms: TiltConfig::RESET_TRANSITION_MS,
            locales_dir: PathBuf::from(LOCALES_DIR),
            public_dir: PathBuf::from(PUBLIC_DIR),
            initial_language: Language::DEFAULT,
            window_size: WINDOW_SIZE,
        }
    }
}

/// Serde-Default für `tilt_reset_transition_ms` (ältere TOML-Dateien).
fn default_reset_transition_ms() -> u32 {
    TiltConfig::RESET_TRANSITION_MS
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(PUBLIC_DIR)
}

impl LandingOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("landing_presenter"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Bild-URI für einen Seitenpfad (`/images/x.jpg` → `file://<public_dir>/images/x.jpg`).
    pub fn image_uri(&self, page_path: &str) -> String {
        let file = self.public_dir.join(page_path.trim_start_matches('/'));
        format!("file://{}", file.display())
    }

    /// Tilt-Parameter. Ungültige Werte (nicht endlich, nicht positiv) fallen auf Defaults zurück.
    pub fn tilt_config(&self) -> TiltConfig {
        let positive = |value: f32, fallback: f32| {
            if value.is_finite() && value > 0.0 {
                value
            } else {
                log::warn!("Ungültiger Tilt-Wert {value}, verwende {fallback}");
                fallback
            }
        };

        TiltConfig {
            divisor: positive(self.tilt_divisor, TiltConfig::DIVISOR),
            active_scale: positive(self.tilt_active_scale, TiltConfig::ACTIVE_SCALE),
            perspective_px: positive(self.tilt_perspective_px, TiltConfig::PERSPECTIVE_PX),
            reset_transition_ms: self.tilt_reset_transition_ms,
        }
    }
}

//! 3D-Tilt für Karten: Pointer-/Touch-Position → Rotation + Skalierung.
//!
//! Formel (Position relativ zur Karte, Größe `w × h`):
//! `rotate_x = (y - h/2) / divisor`, `rotate_y = (w/2 - x) / divisor` in Grad.

use glam::{Mat3, Vec2, Vec3};

/// Rotationswinkel einer Karte in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltVector {
    pub rotate_x_deg: f32,
    pub rotate_y_deg: f32,
}

impl TiltVector {
    /// Ruhelage.
    pub const ZERO: TiltVector = TiltVector {
        rotate_x_deg: 0.0,
        rotate_y_deg: 0.0,
    };

    pub fn is_zero(&self) -> bool {
        self.rotate_x_deg == 0.0 && self.rotate_y_deg == 0.0
    }
}

/// Parameter des Tilt-Effekts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltConfig {
    /// Pixel pro Grad Rotation
    pub divisor: f32,
    /// Skalierung solange die Karte aktiv ist
    pub active_scale: f32,
    /// Abstand des Betrachters (CSS `perspective`)
    pub perspective_px: f32,
    /// Dauer der Rückstellung in die Ruhelage
    pub reset_transition_ms: u32,
}

impl TiltConfig {
    pub const DIVISOR: f32 = 10.0;
    pub const ACTIVE_SCALE: f32 = 1.05;
    pub const PERSPECTIVE_PX: f32 = 1000.0;
    pub const RESET_TRANSITION_MS: u32 = 300;
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            divisor: Self::DIVISOR,
            active_scale: Self::ACTIVE_SCALE,
            perspective_px: Self::PERSPECTIVE_PX,
            reset_transition_ms: Self::RESET_TRANSITION_MS,
        }
    }
}

/// Rotation für eine Position relativ zur linken oberen Kartenecke.
///
/// Gibt `None` zurück, wenn die Karte nicht messbar ist (keine positive,
/// endliche Größe) oder die Position nicht endlich ist.
pub fn tilt_at(position: Vec2, size: Vec2, divisor: f32) -> Option<TiltVector> {
    let measurable = size.is_finite() && size.x > 0.0 && size.y > 0.0;
    if !measurable || !position.is_finite() || !divisor.is_finite() || divisor == 0.0 {
        return None;
    }

    let half = size * 0.5;
    Some(TiltVector {
        rotate_x_deg: (position.y - half.y) / divisor,
        rotate_y_deg: (half.x - position.x) / divisor,
    })
}

/// Tilt-Zustand genau einer Karte.
///
/// Solange eine Touch-Geste läuft, werden Maus-Bewegungen ignoriert.
#[derive(Debug, Clone, Default)]
pub struct TiltController {
    config: TiltConfig,
    vector: TiltVector,
    hovering: bool,
    touch_active: bool,
}

impl TiltController {
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    /// Übernimmt neue Parameter; der aktuelle Zustand bleibt erhalten.
    pub fn set_config(&mut self, config: TiltConfig) {
        self.config = config;
    }

    /// Aktuelle Rotation.
    pub fn vector(&self) -> TiltVector {
        self.vector
    }

    /// Karte wird gerade per Maus oder Touch bedient.
    pub fn is_active(&self) -> bool {
        self.hovering || self.touch_active
    }

    /// Touch-Geste läuft, Maus-Updates sind gesperrt.
    pub fn is_touch_locked(&self) -> bool {
        self.touch_active
    }

    /// Maus bewegt sich über der Karte. Gibt `true` zurück, wenn die Rotation neu berechnet wurde.
    pub fn pointer_moved(&mut self, position: Vec2, size: Option<Vec2>) -> bool {
        if self.touch_active {
            return false;
        }
        self.hovering = true;
        self.update(position, size)
    }

    /// Maus verlässt die Karte: Rotation zurück auf exakt null.
    pub fn pointer_left(&mut self) {
        self.hovering = false;
        self.vector = TiltVector::ZERO;
    }

    /// Touch-Geste beginnt; sperrt Maus-Updates bis `touch_ended`.
    pub fn touch_started(&mut self, position: Vec2, size: Option<Vec2>) -> bool {
        self.touch_active = true;
        self.update(position, size)
    }

    /// Touch bewegt sich. Ohne vorherigen Start wird die Geste implizit begonnen.
    pub fn touch_moved(&mut self, position: Vec2, size: Option<Vec2>) -> bool {
        self.touch_active = true;
        self.update(position, size)
    }

    /// Touch-Geste endet (oder wird abgebrochen): Ruhelage, Sperre aufheben.
    pub fn touch_ended(&mut self) {
        self.touch_active = false;
        self.hovering = false;
        self.vector = TiltVector::ZERO;
    }

    /// Beendet Hover und Touch-Geste sofort, z. B. wenn ein Dialog die Karte verdeckt.
    pub fn reset(&mut self) {
        self.touch_ended();
    }

    /// Darstellungstransform für den aktuellen Zustand.
    pub fn transform(&self) -> TiltTransform {
        let active = self.is_active();
        TiltTransform {
            vector: self.vector,
            scale: if active { self.config.active_scale } else { 1.0 },
            perspective_px: self.config.perspective_px,
            transition_ms: if active {
                0
            } else {
                self.config.reset_transition_ms
            },
        }
    }

    fn update(&mut self, position: Vec2, size: Option<Vec2>) -> bool {
        match size.and_then(|size| tilt_at(position, size, self.config.divisor)) {
            Some(vector) => {
                self.vector = vector;
                true
            }
            None => {
                log::trace!("Tilt übersprungen: Karte nicht messbar ({size:?}, {position})");
                false
            }
        }
    }
}

/// Perspektivische Rotation + Skalierung einer Karte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub vector: TiltVector,
    pub scale: f32,
    pub perspective_px: f32,
    /// Übergangsdauer zum neuen Zustand (0 = sofort)
    pub transition_ms: u32,
}

impl TiltTransform {
    /// CSS-`transform`-Wert.
    pub fn css(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale3d({s}, {s}, {s})",
            self.perspective_px,
            self.vector.rotate_x_deg,
            self.vector.rotate_y_deg,
            s = self.scale,
        )
    }

    /// Rotationsmatrix (erst X, dann Y wie in CSS).
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_rotation_x(self.vector.rotate_x_deg.to_radians())
            * Mat3::from_rotation_y(self.vector.rotate_y_deg.to_radians())
    }

    /// Projiziert die vier Kartenecken (oben-links, oben-rechts, unten-rechts,
    /// unten-links) relativ zur Kartenmitte in Bildschirm-Pixel.
    pub fn project_card(&self, size: Vec2) -> [Vec2; 4] {
        let half = size * 0.5;
        let rotation = self.rotation();
        let corners = [
            Vec2::new(-half.x, -half.y),
            Vec2::new(half.x, -half.y),
            Vec2::new(half.x, half.y),
            Vec2::new(-half.x, half.y),
        ];

        corners.map(|corner| {
            let p = rotation * Vec3::new(corner.x, corner.y, 0.0) * self.scale;
            // Positive z zeigt zum Betrachter
            let depth = (self.perspective_px - p.z).max(1.0);
            p.truncate() * (self.perspective_px / depth)
        })
    }
}

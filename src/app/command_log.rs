//! Begrenztes Command-Log zur Nachverfolgung der Sitzung.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird verworfen.
    /// Tilt-Bewegungen werden nicht protokolliert (eine pro Frame).
    pub fn record(&mut self, command: &AppCommand) {
        if matches!(
            command,
            AppCommand::TiltPointerMove { .. } | AppCommand::TiltTouchMove { .. }
        ) {
            return;
        }
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_older_half_when_full() {
        let mut log = CommandLog::new();
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::ToggleLanguage);
        }
        log.record(&AppCommand::ToggleAboutDetails);

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES / 2 + 1);
        assert_eq!(log.entries().last(), Some(&AppCommand::ToggleAboutDetails));
    }

    #[test]
    fn test_skips_tilt_moves() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::TiltPointerMove {
            card: "music",
            position: glam::Vec2::ZERO,
            size: None,
        });
        log.record(&AppCommand::TiltPointerLeave { card: "music" });

        assert_eq!(log.len(), 1);
    }
}

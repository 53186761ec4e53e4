//! Bild-Modal: Zustandsmaschine `Closed → Open → Closed` mit Scroll-Sperre,
//! Fokusfalle und Fokus-Rückgabe.
//!
//! Alle Austritts-Effekte hängen an [`ModalSession`] und laufen in `Drop`.
//! Damit greifen sie bei jedem Schließweg, auch wenn der Controller im
//! geöffneten Zustand verworfen wird.

use super::document::SharedDocument;
use super::focus::{FocusId, FocusTrap};

/// Inhalt des Modals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub image_source: String,
    pub caption: String,
}

impl ModalContent {
    pub fn new(image_source: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            image_source: image_source.into(),
            caption: caption.into(),
        }
    }
}

/// Beobachtbarer Zustand für die Darstellung.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub is_open: bool,
    pub image_source: Option<String>,
    pub caption: Option<String>,
    /// Bild konnte nicht geladen werden
    pub degraded: bool,
}

/// Auslöser eines Schließvorgangs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    Backdrop,
    CloseButton,
    /// Schließen durch die Anwendung (z.B. beim Beenden)
    Programmatic,
}

/// Tasten, die das offene Modal abfängt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Escape,
    Tab,
    ShiftTab,
}

/// Ergebnis von [`ModalController::open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Modal wurde geöffnet, Eintritts-Effekte ausgeführt
    Opened,
    /// Modal war offen, nur der Inhalt wurde getauscht
    Swapped,
    /// Modal war mit identischem Inhalt offen
    Unchanged,
}

/// Element-Kennungen des Dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    /// Dialog-Container (Fokus-Ausweg der Falle)
    pub container: FocusId,
    /// Schließen-Schaltfläche; `None` wenn keine gerendert wird
    pub close_button: Option<FocusId>,
    /// Fokussierbare Elemente in Tab-Reihenfolge
    pub focusables: Vec<FocusId>,
}

impl ModalLayout {
    /// Standard-Layout: Container und Schließen-Schaltfläche.
    pub fn standard() -> Self {
        let close = FocusId::new("modal.close");
        Self {
            container: FocusId::new("modal"),
            close_button: Some(close.clone()),
            focusables: vec![close],
        }
    }

    fn trap(&self) -> FocusTrap {
        FocusTrap::new(self.container.clone(), self.focusables.clone())
    }
}

impl Default for ModalLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lebensdauer eines geöffneten Modals.
///
/// Beim Erzeugen: Dialog einhängen, Scroll sperren, Fokus auf Schließen
/// (sonst Container). Beim Verwerfen: Sperre lösen, Dialog aushängen, Fokus
/// zum Auslöser, sonst zur Seitenwurzel, sonst kein Fokus.
#[derive(Debug)]
pub struct ModalSession {
    document: SharedDocument,
    layout: ModalLayout,
    trigger: Option<FocusId>,
}

impl ModalSession {
    fn begin(document: SharedDocument, layout: ModalLayout, trigger: Option<FocusId>) -> Self {
        {
            let mut doc = document.borrow_mut();
            doc.lock_scroll();
            doc.mount(layout.container.clone());
            for id in &layout.focusables {
                doc.mount(id.clone());
            }

            let focused = layout
                .close_button
                .as_ref()
                .is_some_and(|close| doc.focus(close));
            if !focused {
                log::debug!(
                    "Schließen-Schaltfläche nicht fokussierbar, Fokus auf {}",
                    layout.container
                );
                doc.focus(&layout.container);
            }
        }

        Self {
            document,
            layout,
            trigger,
        }
    }
}

impl Drop for ModalSession {
    fn drop(&mut self) {
        let Ok(mut doc) = self.document.try_borrow_mut() else {
            log::error!("Modal-Sitzung konnte Dokument nicht freigeben (bereits ausgeliehen)");
            return;
        };

        doc.unlock_scroll();
        for id in &self.layout.focusables {
            doc.unmount(id);
        }
        doc.unmount(&self.layout.container);

        let restored = self.trigger.as_ref().is_some_and(|t| doc.focus(t));
        if !restored {
            let root = doc.root().clone();
            if !doc.focus(&root) {
                doc.blur();
            }
        }
    }
}

#[derive(Debug)]
enum Phase {
    Closed,
    Open {
        content: ModalContent,
        degraded: bool,
        trap: FocusTrap,
        // Nur für den Drop-Effekt gehalten
        _session: ModalSession,
    },
}

/// Steuert das Bild-Modal der Seite.
#[derive(Debug)]
pub struct ModalController {
    document: SharedDocument,
    layout: ModalLayout,
    phase: Phase,
}

impl ModalController {
    pub fn new(document: SharedDocument, layout: ModalLayout) -> Self {
        Self {
            document,
            layout,
            phase: Phase::Closed,
        }
    }

    pub fn layout(&self) -> &ModalLayout {
        &self.layout
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, Phase::Open { .. })
    }

    pub fn content(&self) -> Option<&ModalContent> {
        match &self.phase {
            Phase::Open { content, .. } => Some(content),
            Phase::Closed => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.phase, Phase::Open { degraded: true, .. })
    }

    /// Aktive Fokusfalle (nur im offenen Zustand).
    pub fn trap(&self) -> Option<&FocusTrap> {
        match &self.phase {
            Phase::Open { trap, .. } => Some(trap),
            Phase::Closed => None,
        }
    }

    /// Momentaufnahme für die Darstellung.
    pub fn state(&self) -> ModalState {
        match &self.phase {
            Phase::Closed => ModalState::default(),
            Phase::Open {
                content, degraded, ..
            } => ModalState {
                is_open: true,
                image_source: Some(content.image_source.clone()),
                caption: Some(content.caption.clone()),
                degraded: *degraded,
            },
        }
    }

    /// Öffnet das Modal bzw. tauscht den Inhalt eines bereits offenen Modals.
    ///
    /// `trigger` erhält beim Schließen den Fokus zurück.
    pub fn open(&mut self, content: ModalContent, trigger: Option<FocusId>) -> OpenOutcome {
        if let Phase::Open {
            content: current,
            degraded,
            ..
        } = &mut self.phase
        {
            if *current == content {
                return OpenOutcome::Unchanged;
            }
            log::debug!("Modal-Inhalt getauscht: {}", content.image_source);
            *current = content;
            *degraded = false;
            return OpenOutcome::Swapped;
        }

        log::debug!("Modal geöffnet: {}", content.image_source);
        let session = ModalSession::begin(self.document.clone(), self.layout.clone(), trigger);
        self.phase = Phase::Open {
            content,
            degraded: false,
            trap: self.layout.trap(),
            _session: session,
        };
        OpenOutcome::Opened
    }

    /// Schließt das Modal. Gibt `false` zurück, wenn es bereits geschlossen war.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if !self.is_open() {
            return false;
        }
        log::debug!("Modal geschlossen ({reason:?})");
        // Drop der Sitzung führt die Austritts-Effekte aus
        self.phase = Phase::Closed;
        true
    }

    /// Klick auf den abgedunkelten Hintergrund außerhalb des Dialogs.
    pub fn backdrop_click(&mut self) -> bool {
        self.close(CloseReason::Backdrop)
    }

    /// Verarbeitet eine Taste. Gibt `true` zurück, wenn das Modal sie verbraucht hat.
    pub fn handle_key(&mut self, key: ModalKey) -> bool {
        let Phase::Open { trap, .. } = &self.phase else {
            return false;
        };

        match key {
            ModalKey::Escape => self.close(CloseReason::Escape),
            ModalKey::Tab | ModalKey::ShiftTab => {
                let mut doc = self.document.borrow_mut();
                let current = doc.focused().cloned();
                let target = if key == ModalKey::Tab {
                    trap.next(current.as_ref())
                } else {
                    trap.previous(current.as_ref())
                };
                if !doc.focus(&target) {
                    doc.focus(trap.container());
                }
                true
            }
        }
    }

    /// Bild konnte nicht geladen werden; Bildunterschrift und Schließen bleiben nutzbar.
    ///
    /// Gibt `true` zurück, wenn der Zustand sich geändert hat.
    pub fn image_failed(&mut self) -> bool {
        match &mut self.phase {
            Phase::Open {
                content, degraded, ..
            } if !*degraded => {
                log::warn!("Bild konnte nicht geladen werden: {}", content.image_source);
                *degraded = true;
                true
            }
            _ => false,
        }
    }
}

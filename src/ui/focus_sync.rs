//! Überträgt Fokuswechsel des Dokumentmodells auf egui-Widgets.
//!
//! Ohne Fokusfalle werden nur Änderungen übertragen, damit egui zwischen zwei
//! Wechseln normal fokussieren kann. Bei aktiver Falle hält `hold` den egui-Fokus
//! auf dem Dokumentfokus fest, auch gegen egui's eigene Tab-Navigation.

use crate::core::{Document, FocusId};

#[derive(Debug, Default)]
pub struct FocusSync {
    synced: Option<FocusId>,
    target: Option<FocusId>,
    trapped: Option<FocusId>,
}

impl FocusSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Vergleicht mit dem letzten Frame und merkt sich ein neues Fokusziel.
    ///
    /// `trap_active`: der Dokumentfokus wird in diesem Frame erzwungen.
    pub fn begin_frame(&mut self, document: &Document, trap_active: bool) {
        let current = document.focused().cloned();
        self.target = if current != self.synced {
            current.clone()
        } else {
            None
        };
        self.trapped = if trap_active { current.clone() } else { None };
        self.synced = current;
    }

    /// Fokusziel dieses Frames, falls sich der Fokus geändert hat.
    pub fn target(&self) -> Option<&FocusId> {
        self.target.as_ref()
    }

    /// Festgehaltener Fokus, solange eine Fokusfalle aktiv ist.
    pub fn trapped(&self) -> Option<&FocusId> {
        self.trapped.as_ref()
    }

    /// Fordert egui-Fokus an, wenn `id` das neue Ziel ist.
    pub fn apply(&self, id: &FocusId, response: &egui::Response) {
        if self.target.as_ref() == Some(id) {
            response.request_focus();
        }
    }

    /// Holt den egui-Fokus auf `widget` zurück, falls `id` festgehalten wird und
    /// egui ihn weitergereicht hat. Muss nach allen fokussierbaren Widgets laufen.
    pub fn hold(&self, ctx: &egui::Context, id: &FocusId, widget: egui::Id) {
        if self.trapped.as_ref() != Some(id) {
            return;
        }
        if ctx.memory(|m| m.focused()) != Some(widget) {
            ctx.memory_mut(|m| m.request_focus(widget));
        }
    }
}

//! Seitenzustand außerhalb der Komponenten: eingehängte Elemente, Fokus, Scroll-Sperre.

use super::focus::FocusId;
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// Gemeinsam genutztes Dokument (Modal-Controller und Sitzung).
pub type SharedDocument = Rc<RefCell<Document>>;

/// Minimales Dokumentmodell der Seite.
#[derive(Debug, Clone)]
pub struct Document {
    root: FocusId,
    mounted: BTreeSet<FocusId>,
    focused: Option<FocusId>,
    scroll_lock_depth: u32,
}

impl Document {
    /// Erstellt ein Dokument, dessen Wurzel bereits eingehängt ist.
    pub fn new(root: FocusId) -> Self {
        let mut mounted = BTreeSet::new();
        mounted.insert(root.clone());
        Self {
            root,
            mounted,
            focused: None,
            scroll_lock_depth: 0,
        }
    }

    pub fn shared(root: FocusId) -> SharedDocument {
        Rc::new(RefCell::new(Self::new(root)))
    }

    /// Seitenwurzel, letzter Fokus-Ausweg.
    pub fn root(&self) -> &FocusId {
        &self.root
    }

    pub fn mount(&mut self, id: FocusId) {
        self.mounted.insert(id);
    }

    /// Entfernt ein Element; hatte es den Fokus, ist danach nichts fokussiert.
    pub fn unmount(&mut self, id: &FocusId) {
        self.mounted.remove(id);
        if self.focused.as_ref() == Some(id) {
            self.focused = None;
        }
    }

    pub fn is_mounted(&self, id: &FocusId) -> bool {
        self.mounted.contains(id)
    }

    /// Fokussiert ein eingehängtes Element. Gibt `false` zurück, wenn es nicht existiert.
    pub fn focus(&mut self, id: &FocusId) -> bool {
        if !self.is_mounted(id) {
            return false;
        }
        self.focused = Some(id.clone());
        true
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<&FocusId> {
        self.focused.as_ref()
    }

    pub fn lock_scroll(&mut self) {
        self.scroll_lock_depth += 1;
    }

    pub fn unlock_scroll(&mut self) {
        self.scroll_lock_depth = self.scroll_lock_depth.saturating_sub(1);
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_lock_depth > 0
    }

    pub fn scroll_lock_depth(&self) -> u32 {
        self.scroll_lock_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_requires_mounted_element() {
        let mut doc = Document::new("page".into());
        assert!(!doc.focus(&"button".into()));
        assert!(doc.focused().is_none());

        doc.mount("button".into());
        assert!(doc.focus(&"button".into()));
        assert_eq!(doc.focused().map(FocusId::as_str), Some("button"));
    }

    #[test]
    fn test_unmount_clears_focus() {
        let mut doc = Document::new("page".into());
        doc.mount("button".into());
        doc.focus(&"button".into());

        doc.unmount(&"button".into());

        assert!(doc.focused().is_none());
        assert!(!doc.is_mounted(&"button".into()));
    }

    #[test]
    fn test_scroll_lock_never_underflows() {
        let mut doc = Document::new("page".into());
        doc.lock_scroll();
        doc.unlock_scroll();
        doc.unlock_scroll();
        assert_eq!(doc.scroll_lock_depth(), 0);
        assert!(!doc.is_scroll_locked());
    }
}

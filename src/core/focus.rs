//! Fokus-Identitäten und Fokusfalle für Dialoge.

use std::fmt;

/// Stabile Kennung eines fokussierbaren Elements.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FocusId(String);

impl FocusId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FocusId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Hält den Tastaturfokus innerhalb eines Containers.
///
/// Ohne fokussierbare Elemente bleibt der Fokus auf dem Container selbst.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusTrap {
    container: FocusId,
    members: Vec<FocusId>,
}

impl FocusTrap {
    pub fn new(container: FocusId, members: Vec<FocusId>) -> Self {
        Self { container, members }
    }

    pub fn container(&self) -> &FocusId {
        &self.container
    }

    pub fn members(&self) -> &[FocusId] {
        &self.members
    }

    /// Liegt `id` innerhalb der Falle (Container oder Mitglied)?
    pub fn contains(&self, id: &FocusId) -> bool {
        *id == self.container || self.members.contains(id)
    }

    /// Startfokus: bevorzugtes Element, sonst erstes Mitglied, sonst Container.
    pub fn initial(&self, preferred: Option<&FocusId>) -> FocusId {
        preferred
            .filter(|id| self.contains(id))
            .or_else(|| self.members.first())
            .unwrap_or(&self.container)
            .clone()
    }

    /// Nächstes Element (Tab), am Ende zurück zum Anfang.
    pub fn next(&self, current: Option<&FocusId>) -> FocusId {
        self.step(current, true)
    }

    /// Vorheriges Element (Shift+Tab), am Anfang weiter zum Ende.
    pub fn previous(&self, current: Option<&FocusId>) -> FocusId {
        self.step(current, false)
    }

    fn step(&self, current: Option<&FocusId>, forward: bool) -> FocusId {
        let len = self.members.len();
        if len == 0 {
            return self.container.clone();
        }

        let position = current.and_then(|id| self.members.iter().position(|m| m == id));
        let index = match (position, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            // Fokus auf Container oder außerhalb
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.members[index].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trap(members: &[&str]) -> FocusTrap {
        FocusTrap::new(
            FocusId::from("modal"),
            members.iter().map(|m| FocusId::from(*m)).collect(),
        )
    }

    #[test]
    fn test_tab_cycles_forward_and_wraps() {
        let trap = trap(&["close", "image"]);
        let close = FocusId::from("close");

        let next = trap.next(Some(&close));
        assert_eq!(next.as_str(), "image");
        assert_eq!(trap.next(Some(&next)), close);
    }

    #[test]
    fn test_shift_tab_cycles_backward_and_wraps() {
        let trap = trap(&["close", "image"]);
        assert_eq!(trap.previous(Some(&"close".into())).as_str(), "image");
        assert_eq!(trap.previous(None).as_str(), "image");
    }

    #[test]
    fn test_empty_trap_keeps_container() {
        let trap = trap(&[]);
        assert_eq!(trap.initial(Some(&"close".into())).as_str(), "modal");
        assert_eq!(trap.next(None).as_str(), "modal");
        assert_eq!(trap.previous(Some(&"modal".into())).as_str(), "modal");
    }

    #[test]
    fn test_initial_ignores_foreign_preference() {
        let trap = trap(&["close"]);
        assert_eq!(trap.initial(Some(&"page".into())).as_str(), "close");
    }
}

//! Modal and mobile menu state, plus the page scroll lock they share

use std::collections::BTreeSet;

/// The two dialogs on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModalKind {
    Volunteer,
    Request,
}

impl ModalKind {
    pub fn element_id(&self) -> &'static str {
        match self {
            ModalKind::Volunteer => "volunteer-modal",
            ModalKind::Request => "request-modal",
        }
    }

    /// Class carried by every link or button that opens this modal
    pub fn trigger_class(&self) -> &'static str {
        match self {
            ModalKind::Volunteer => "open-volunteer-modal",
            ModalKind::Request => "open-request-modal",
        }
    }
}

/// Anything that can hold the page scroll lock
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Overlay {
    MobileMenu,
    Modal(ModalKind),
}

/// Reference-counted page scroll lock.
///
/// Each overlay holds at most one reference, so releasing the same overlay
/// twice cannot drop a hold that belongs to another one.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScrollLock {
    holders: BTreeSet<Overlay>,
}

impl ScrollLock {
    /// Returns true if this overlay did not already hold the lock
    pub fn acquire(&mut self, overlay: Overlay) -> bool {
        self.holders.insert(overlay)
    }

    /// Returns true if this overlay was holding the lock
    pub fn release(&mut self, overlay: Overlay) -> bool {
        self.holders.remove(&overlay)
    }

    pub fn release_all(&mut self) {
        self.holders.clear();
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }

}

/// Open/closed state of the mobile menu and both modals.
///
/// This is the single source of truth for the scroll lock: the renderer
/// only mirrors `is_scroll_locked()` onto the page body.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overlays {
    menu_open: bool,
    open_modals: BTreeSet<ModalKind>,
    lock: ScrollLock,
}

impl Overlays {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_modal_open(&self, kind: ModalKind) -> bool {
        self.open_modals.contains(&kind)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.lock.is_locked()
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
        self.lock.acquire(Overlay::MobileMenu);
        tracing::debug!("mobile menu opened");
    }

    pub fn close_menu(&mut self) {
        if self.menu_open {
            tracing::debug!("mobile menu closed");
        }
        self.menu_open = false;
        self.lock.release(Overlay::MobileMenu);
    }

    pub fn toggle_menu(&mut self) {
        if self.menu_open {
            self.close_menu();
        } else {
            self.open_menu();
        }
    }

    /// Open a modal. The mobile menu always closes first.
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.close_menu();
        self.open_modals.insert(kind);
        self.lock.acquire(Overlay::Modal(kind));
        tracing::debug!(modal = ?kind, "modal opened");
    }

    pub fn close_modal(&mut self, kind: ModalKind) {
        if self.open_modals.remove(&kind) {
            tracing::debug!(modal = ?kind, "modal closed");
        }
        self.lock.release(Overlay::Modal(kind));
    }

    /// Escape: force-close the menu and every modal, and clear the lock
    pub fn escape(&mut self) {
        self.menu_open = false;
        self.open_modals.clear();
        self.lock.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_starts_closed() {
        let overlays = Overlays::new();
        assert!(!overlays.is_menu_open());
        assert!(!overlays.is_modal_open(ModalKind::Volunteer));
        assert!(!overlays.is_modal_open(ModalKind::Request));
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn test_opening_modal_closes_menu() {
        let mut overlays = Overlays::new();
        overlays.open_menu();
        overlays.open_modal(ModalKind::Volunteer);

        assert!(!overlays.is_menu_open());
        assert!(overlays.is_modal_open(ModalKind::Volunteer));
        assert!(overlays.is_scroll_locked());
    }

    #[test]
    fn test_closing_modal_unlocks_when_nothing_else_open() {
        let mut overlays = Overlays::new();
        overlays.open_modal(ModalKind::Request);
        overlays.close_modal(ModalKind::Request);
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn test_lock_held_while_another_overlay_open() {
        let mut overlays = Overlays::new();
        overlays.open_modal(ModalKind::Volunteer);
        overlays.open_modal(ModalKind::Request);

        overlays.close_modal(ModalKind::Volunteer);
        assert!(overlays.is_scroll_locked());

        overlays.close_modal(ModalKind::Request);
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn test_double_release_does_not_steal_other_hold() {
        let mut lock = ScrollLock::default();
        lock.acquire(Overlay::MobileMenu);
        lock.acquire(Overlay::Modal(ModalKind::Request));

        assert!(lock.release(Overlay::MobileMenu));
        assert!(!lock.release(Overlay::MobileMenu));
        assert!(lock.is_locked());

        assert!(lock.release(Overlay::Modal(ModalKind::Request)));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_escape_closes_modal_and_menu_and_clears_lock() {
        let mut overlays = Overlays::new();
        overlays.open_modal(ModalKind::Volunteer);
        overlays.open_menu();

        overlays.escape();

        assert!(!overlays.is_menu_open());
        assert!(!overlays.is_modal_open(ModalKind::Volunteer));
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn test_menu_toggle() {
        let mut overlays = Overlays::new();
        overlays.toggle_menu();
        assert!(overlays.is_menu_open());
        assert!(overlays.is_scroll_locked());
        overlays.toggle_menu();
        assert!(!overlays.is_menu_open());
        assert!(!overlays.is_scroll_locked());
    }

    #[test]
    fn test_closing_closed_modal_is_noop() {
        let mut overlays = Overlays::new();
        overlays.open_menu();
        overlays.close_modal(ModalKind::Request);
        assert!(overlays.is_menu_open());
        assert!(overlays.is_scroll_locked());
    }
}

//! Mobile navigation menu.

use crate::domain::foundation::StateMachine;

use super::scroll_lock::ScrollLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuStatus {
    #[default]
    Closed,
    Open,
}

impl StateMachine for MenuStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use MenuStatus::*;
        // Forced closes (resize, nav link) are allowed from either state.
        matches!((self, target), (Closed, Open) | (Open, Closed) | (Closed, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use MenuStatus::*;
        match self {
            Closed => vec![Open, Closed],
            Open => vec![Closed],
        }
    }
}

/// Where a document click landed, as far as the page controllers care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    MenuPanel,
    MenuToggle,
    OverlayBackdrop,
    OverlayContent,
    OverlayCloseButton,
    OverlayFooterCloseButton,
    Elsewhere,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    status: MenuStatus,
}

impl MobileMenu {
    pub fn status(&self) -> MenuStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status == MenuStatus::Open
    }

    /// Flips the menu. Opening locks page scroll, closing releases it.
    pub fn toggle(&mut self, lock: &mut ScrollLock) {
        if self.is_open() {
            self.close(lock);
        } else if let Ok(next) = self.status.transition_to(MenuStatus::Open) {
            self.status = next;
            lock.lock();
        }
    }

    /// Closes the menu and releases the scroll lock, whatever the prior
    /// state was.
    pub fn close(&mut self, lock: &mut ScrollLock) {
        self.status = MenuStatus::Closed;
        lock.release();
    }

    /// Viewport resize. Widths above `breakpoint` force the menu closed.
    pub fn on_resize(&mut self, width: f64, breakpoint: f64, lock: &mut ScrollLock) -> bool {
        if width > breakpoint {
            self.close(lock);
            true
        } else {
            false
        }
    }

    /// Document click. Clicks outside the panel and its toggle close an
    /// open menu.
    pub fn on_document_click(&mut self, target: ClickTarget, lock: &mut ScrollLock) -> bool {
        let inside = matches!(target, ClickTarget::MenuPanel | ClickTarget::MenuToggle);
        if self.is_open() && !inside {
            self.close(lock);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes_with_lock() {
        let mut menu = MobileMenu::default();
        let mut lock = ScrollLock::default();

        menu.toggle(&mut lock);
        assert!(menu.is_open());
        assert!(lock.is_locked());

        menu.toggle(&mut lock);
        assert!(!menu.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn wide_resize_forces_closed_and_restores_scroll() {
        let mut menu = MobileMenu::default();
        let mut lock = ScrollLock::default();

        assert!(!menu.on_resize(500.0, 768.0, &mut lock));
        menu.toggle(&mut lock);
        assert!(!menu.on_resize(500.0, 768.0, &mut lock));
        assert!(menu.is_open());

        assert!(menu.on_resize(1024.0, 768.0, &mut lock));
        assert!(!menu.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn resize_at_breakpoint_keeps_menu() {
        let mut menu = MobileMenu::default();
        let mut lock = ScrollLock::default();
        menu.toggle(&mut lock);
        assert!(!menu.on_resize(768.0, 768.0, &mut lock));
        assert!(menu.is_open());
    }

    #[test]
    fn outside_click_closes_open_menu() {
        let mut menu = MobileMenu::default();
        let mut lock = ScrollLock::default();
        menu.toggle(&mut lock);

        assert!(!menu.on_document_click(ClickTarget::MenuPanel, &mut lock));
        assert!(!menu.on_document_click(ClickTarget::MenuToggle, &mut lock));
        assert!(menu.is_open());

        assert!(menu.on_document_click(ClickTarget::Elsewhere, &mut lock));
        assert!(!menu.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn outside_click_on_closed_menu_keeps_lock() {
        let mut menu = MobileMenu::default();
        let mut lock = ScrollLock::default();
        lock.lock();
        assert!(!menu.on_document_click(ClickTarget::Elsewhere, &mut lock));
        assert!(lock.is_locked());
    }

    #[test]
    fn status_transitions_allow_forced_close() {
        assert!(MenuStatus::Closed.can_transition_to(&MenuStatus::Closed));
        assert!(!MenuStatus::Open.can_transition_to(&MenuStatus::Open));
    }
}

//! Page scroll lock shared by the mobile menu and the service overlay.

/// A single flag; whoever releases it clears it for everyone.
///
/// Closing the menu while the overlay is open (or the reverse) unlocks the
/// page even though the other still wants it locked.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn lock(&mut self) {
        self.locked = true;
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

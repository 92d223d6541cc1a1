//! Service detail overlay.
//!
//! Two states, `Closed` and `Open(service)`. Opening while open replaces
//! the displayed service; there is never more than one overlay.

use crate::domain::content::Service;
use crate::domain::foundation::StateMachine;

use super::scroll_lock::ScrollLock;

/// Status of the overlay, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayStatus {
    Closed,
    Open,
}

impl StateMachine for OverlayStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use OverlayStatus::*;
        matches!((self, target), (Closed, Open) | (Open, Open) | (Open, Closed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use OverlayStatus::*;
        match self {
            Closed => vec![Open],
            Open => vec![Open, Closed],
        }
    }
}

/// Things that may close the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayTrigger {
    /// The header close button.
    CloseButton,
    /// The footer close button.
    FooterCloseButton,
    /// A click whose target is the backdrop itself.
    BackdropClick,
    /// A click inside the overlay content.
    ContentClick,
    /// A key press, by key name (`"Escape"`, `"Enter"`, ...).
    Key(String),
}

impl OverlayTrigger {
    fn closes(&self) -> bool {
        match self {
            OverlayTrigger::CloseButton
            | OverlayTrigger::FooterCloseButton
            | OverlayTrigger::BackdropClick => true,
            OverlayTrigger::Key(key) => key == "Escape",
            OverlayTrigger::ContentClick => false,
        }
    }
}

/// What the overlay's slots should show after opening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayContent {
    pub title: String,
    /// Rich text, rendered verbatim.
    pub description_html: String,
    pub icon: Option<String>,
}

impl From<&Service> for OverlayContent {
    fn from(service: &Service) -> Self {
        Self {
            title: service.title_text().to_string(),
            description_html: service.description.clone().unwrap_or_default(),
            icon: service.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceOverlay {
    current: Option<Service>,
}

impl ServiceOverlay {
    pub fn status(&self) -> OverlayStatus {
        if self.current.is_some() {
            OverlayStatus::Open
        } else {
            OverlayStatus::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The service on display, if open.
    pub fn service(&self) -> Option<&Service> {
        self.current.as_ref()
    }

    /// Shows `service`, replacing any service already on display, and
    /// locks page scroll.
    pub fn open(&mut self, service: Service, lock: &mut ScrollLock) -> OverlayContent {
        let content = OverlayContent::from(&service);
        self.current = Some(service);
        lock.lock();
        content
    }

    /// Applies a trigger. Returns true when the overlay closed.
    pub fn handle(&mut self, trigger: &OverlayTrigger, lock: &mut ScrollLock) -> bool {
        if !trigger.closes() {
            return false;
        }
        match self.status().transition_to(OverlayStatus::Closed) {
            Ok(_) => {
                self.current = None;
                lock.release();
                true
            }
            Err(_) => false,
        }
    }
}

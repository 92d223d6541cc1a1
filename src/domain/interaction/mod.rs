//! Interaction module - navigation, mobile menu and service overlay.
//!
//! Each controller is a small explicit state machine. They share a single
//! [`ScrollLock`]; see its docs for the contention rule.

mod controller;
mod menu;
mod navigation;
mod overlay;
mod scroll_lock;

pub use controller::{InteractionSettings, PageEffect, PageEvent, PageInteractions};
pub use menu::{ClickTarget, MenuStatus, MobileMenu};
pub use navigation::{
    active_section_at, NavigationController, NavigationSettings, ScrollBehavior, ScrollRequest,
    ScrollUpdate,
};
pub use overlay::{OverlayContent, OverlayStatus, OverlayTrigger, ServiceOverlay};
pub use scroll_lock::ScrollLock;

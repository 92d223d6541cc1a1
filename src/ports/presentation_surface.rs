//! Presentation Surface Port - the page markup the binder writes into.
//!
//! This is the only coupling between content binding and the page.
//! Slots are addressed by typed [`SlotId`] handles; a surface decides
//! which of them it provides.

use crate::domain::page::{Fragment, SlotId};

/// Port for writing content into the page.
///
/// # Contract
///
/// Implementations must:
/// - Ignore writes to slots they do not provide (no panics, no errors)
/// - Replace, never append, on `replace_children`
/// - Leave a link untouched until `set_href` is called for it
pub trait PresentationSurface: Send + Sync {
    /// Whether the page has this slot.
    fn has_slot(&self, slot: SlotId) -> bool;

    /// Sets the text content of a slot.
    fn set_text(&mut self, slot: SlotId, text: &str);

    /// Sets markup content of a slot, rendered verbatim.
    fn set_rich_text(&mut self, slot: SlotId, html: &str);

    /// Points a link slot at `url`.
    fn set_href(&mut self, slot: SlotId, url: &str);

    /// Clears a list slot and fills it with `children`, in order.
    fn replace_children(&mut self, slot: SlotId, children: Vec<Fragment>);

    /// Current children of a list slot; empty for other slots.
    fn children(&self, slot: SlotId) -> &[Fragment];
}

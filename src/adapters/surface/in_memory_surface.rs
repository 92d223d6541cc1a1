//! In-memory presentation surface.
//!
//! Holds the current content of every slot the page provides. The HTML
//! renderer reads from it; the binder and the overlay write into it.

use std::collections::HashMap;

use crate::domain::page::{Fragment, SlotId, SlotKind, SlotRegistry};
use crate::ports::PresentationSurface;

/// Placeholder text a text slot shows before the first bind.
pub const LOADING_TEXT: &str = "Loading...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotContent {
    Text(String),
    RichText(String),
    /// `None` until a URL has been bound.
    Link(Option<String>),
    List(Vec<Fragment>),
}

impl SlotContent {
    fn initial(slot: SlotId) -> Self {
        match slot.kind() {
            SlotKind::Text if is_modal(slot) => SlotContent::Text(String::new()),
            SlotKind::Text => SlotContent::Text(LOADING_TEXT.to_string()),
            SlotKind::RichText => SlotContent::RichText(String::new()),
            SlotKind::Link => SlotContent::Link(None),
            SlotKind::List => SlotContent::List(Vec::new()),
        }
    }
}

fn is_modal(slot: SlotId) -> bool {
    matches!(
        slot,
        SlotId::ModalServiceTitle | SlotId::ModalServiceDescription | SlotId::ModalServiceIcon
    )
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    slots: HashMap<SlotId, SlotContent>,
}

impl InMemorySurface {
    /// A surface providing every known slot.
    pub fn complete() -> Self {
        Self::with_slots(SlotId::ALL)
    }

    /// A surface providing only `slots`, each in its pre-bind state.
    pub fn with_slots(slots: impl IntoIterator<Item = SlotId>) -> Self {
        Self {
            slots: slots
                .into_iter()
                .map(|slot| (slot, SlotContent::initial(slot)))
                .collect(),
        }
    }

    /// The registry matching what this surface provides.
    pub fn registry(&self) -> SlotRegistry {
        SlotRegistry::detect(|slot| self.has_slot(slot))
    }

    pub fn content(&self, slot: SlotId) -> Option<&SlotContent> {
        self.slots.get(&slot)
    }

    /// Text or markup of a slot.
    pub fn text(&self, slot: SlotId) -> Option<&str> {
        match self.slots.get(&slot)? {
            SlotContent::Text(text) | SlotContent::RichText(text) => Some(text),
            _ => None,
        }
    }

    pub fn href(&self, slot: SlotId) -> Option<&str> {
        match self.slots.get(&slot)? {
            SlotContent::Link(href) => href.as_deref(),
            _ => None,
        }
    }

    fn write(&mut self, slot: SlotId, content: SlotContent) {
        match self.slots.get_mut(&slot) {
            Some(existing) => *existing = content,
            None => tracing::trace!("Surface has no slot {}", slot),
        }
    }
}

impl PresentationSurface for InMemorySurface {
    fn has_slot(&self, slot: SlotId) -> bool {
        self.slots.contains_key(&slot)
    }

    fn set_text(&mut self, slot: SlotId, text: &str) {
        self.write(slot, SlotContent::Text(text.to_string()));
    }

    fn set_rich_text(&mut self, slot: SlotId, html: &str) {
        self.write(slot, SlotContent::RichText(html.to_string()));
    }

    fn set_href(&mut self, slot: SlotId, url: &str) {
        self.write(slot, SlotContent::Link(Some(url.to_string())));
    }

    fn replace_children(&mut self, slot: SlotId, children: Vec<Fragment>) {
        self.write(slot, SlotContent::List(children));
    }

    fn children(&self, slot: SlotId) -> &[Fragment] {
        match self.slots.get(&slot) {
            Some(SlotContent::List(children)) => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_slots_start_as_loading_placeholder() {
        let surface = InMemorySurface::complete();

        assert_eq!(surface.text(SlotId::HeroTitle), Some(LOADING_TEXT));
        assert_eq!(surface.text(SlotId::ModalServiceTitle), Some(""));
        assert_eq!(surface.href(SlotId::SocialTwitter), None);
        assert!(surface.children(SlotId::ServicesGrid).is_empty());
    }

    #[test]
    fn writes_to_missing_slots_are_ignored() {
        let mut surface = InMemorySurface::with_slots([SlotId::HeroTitle]);

        surface.set_text(SlotId::LawyerName, "Jane");
        surface.replace_children(SlotId::ServicesGrid, vec![Fragment::ListItem("x".into())]);

        assert!(!surface.has_slot(SlotId::LawyerName));
        assert_eq!(surface.text(SlotId::LawyerName), None);
        assert!(surface.children(SlotId::ServicesGrid).is_empty());
    }

    #[test]
    fn replace_children_replaces_rather_than_appends() {
        let mut surface = InMemorySurface::complete();

        surface.replace_children(
            SlotId::CredentialsList,
            vec![Fragment::ListItem("a".into()), Fragment::ListItem("b".into())],
        );
        surface.replace_children(SlotId::CredentialsList, vec![Fragment::ListItem("c".into())]);

        assert_eq!(
            surface.children(SlotId::CredentialsList),
            &[Fragment::ListItem("c".into())]
        );
    }

    #[test]
    fn set_href_points_link() {
        let mut surface = InMemorySurface::complete();
        surface.set_href(SlotId::SocialLinkedin, "https://linkedin.com/x");
        assert_eq!(surface.href(SlotId::SocialLinkedin), Some("https://linkedin.com/x"));
    }

    #[test]
    fn registry_reflects_provided_slots() {
        let surface = InMemorySurface::with_slots([SlotId::HeroTitle, SlotId::FooterEmail]);
        let registry = surface.registry();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(SlotId::FooterEmail));
        assert!(!registry.contains(SlotId::NavFirmName));
    }
}

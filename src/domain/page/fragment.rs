//! Repeated UI fragments built from array fields.

use crate::domain::content::Service;

use super::section::SectionId;

/// One child of a list slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// A plain list item (credentials).
    ListItem(String),

    /// An interactive service unit. Holds its own copy of the service so
    /// later changes to the document do not alter what it opens.
    ServiceButton(Service),

    /// A link that scrolls to a section instead of navigating.
    SectionShortcut { label: String, section: SectionId },
}

/// What activating a fragment asks the page to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    OpenService(Service),
    ScrollTo(SectionId),
}

impl Fragment {
    pub fn service_button(service: &Service) -> Self {
        Fragment::ServiceButton(service.clone())
    }

    pub fn services_shortcut(service: &Service) -> Self {
        Fragment::SectionShortcut {
            label: service.title_text().to_string(),
            section: SectionId::services(),
        }
    }

    /// The visible label of the fragment.
    pub fn label(&self) -> &str {
        match self {
            Fragment::ListItem(text) => text,
            Fragment::ServiceButton(service) => service.title_text(),
            Fragment::SectionShortcut { label, .. } => label,
        }
    }

    /// Click behaviour. Plain list items are inert.
    pub fn activate(&self) -> Option<Activation> {
        match self {
            Fragment::ListItem(_) => None,
            Fragment::ServiceButton(service) => Some(Activation::OpenService(service.clone())),
            Fragment::SectionShortcut { section, .. } => Some(Activation::ScrollTo(section.clone())),
        }
    }
}

//! Navigation bar state derived from the scroll position.
//!
//! One subscriber, [`NavigationController::on_scroll`], recomputes the
//! "scrolled" flag and the active link on every tick.

use crate::domain::page::{SectionBounds, SectionId};

/// Tunables for scroll-derived state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSettings {
    /// Offsets strictly above this mark the nav bar as scrolled.
    pub scrolled_threshold: f64,
    /// Added to the scroll offset before looking up the active section.
    pub active_section_offset: f64,
    /// Nav bar height used when the real height is unknown.
    pub default_nav_height: f64,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            scrolled_threshold: 50.0,
            active_section_offset: 120.0,
            default_nav_height: 80.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

/// A request to scroll the window to an absolute offset.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub section: SectionId,
    pub top: f64,
    pub behavior: ScrollBehavior,
}

/// What changed on a scroll tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollUpdate {
    pub scrolled_changed: bool,
    pub active_changed: bool,
}

/// Last section, in document order, whose bounds contain `position`.
pub fn active_section_at(sections: &[SectionBounds], position: f64) -> Option<&SectionId> {
    sections
        .iter()
        .rev()
        .find(|section| section.contains(position))
        .map(|section| &section.id)
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    settings: NavigationSettings,
    links: Vec<SectionId>,
    sections: Vec<SectionBounds>,
    nav_height: Option<f64>,
    scrolled: bool,
    active_link: Option<SectionId>,
}

impl NavigationController {
    /// `links` are the sections that have a nav link, in menu order.
    pub fn new(settings: NavigationSettings, links: Vec<SectionId>) -> Self {
        Self {
            settings,
            links,
            sections: Vec::new(),
            nav_height: None,
            scrolled: false,
            active_link: None,
        }
    }

    /// Controller with the page's standard links.
    pub fn with_default_links(settings: NavigationSettings) -> Self {
        Self::new(
            settings,
            [SectionId::HOME, SectionId::ABOUT, SectionId::SERVICES, SectionId::CONTACT]
                .into_iter()
                .map(SectionId::new)
                .collect(),
        )
    }

    /// Replaces the measured layout. `nav_height` is `None` when the nav bar
    /// is not on the page.
    pub fn set_layout(&mut self, sections: Vec<SectionBounds>, nav_height: Option<f64>) {
        self.sections = sections;
        self.nav_height = nav_height;
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn active_link(&self) -> Option<&SectionId> {
        self.active_link.as_ref()
    }

    pub fn links(&self) -> &[SectionId] {
        &self.links
    }

    pub fn on_scroll(&mut self, y: f64) -> ScrollUpdate {
        let scrolled = y > self.settings.scrolled_threshold;
        let scrolled_changed = scrolled != self.scrolled;
        self.scrolled = scrolled;

        let position = y + self.settings.active_section_offset;
        let active_changed = match active_section_at(&self.sections, position).cloned() {
            Some(section) => self.mark_active(&section),
            None => false,
        };

        ScrollUpdate {
            scrolled_changed,
            active_changed,
        }
    }

    /// Makes the link for `section` the only active one. A section without
    /// a link leaves no link active. Returns true if anything changed.
    pub fn mark_active(&mut self, section: &SectionId) -> bool {
        let next = self.links.iter().find(|link| *link == section).cloned();
        let changed = next != self.active_link;
        self.active_link = next;
        changed
    }

    /// Where to scroll so `section` sits just below the nav bar.
    pub fn scroll_target(&self, section: &SectionId) -> Option<ScrollRequest> {
        let bounds = self.sections.iter().find(|s| &s.id == section)?;
        let nav_height = self.nav_height.unwrap_or(self.settings.default_nav_height);
        Some(ScrollRequest {
            section: section.clone(),
            top: bounds.top - nav_height,
            behavior: ScrollBehavior::Smooth,
        })
    }
}

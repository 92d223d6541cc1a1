//! Page sections addressed by in-page anchors.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a `<section id="...">` on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    pub const HOME: &'static str = "home";
    pub const ABOUT: &'static str = "about";
    pub const SERVICES: &'static str = "services";
    pub const CONTACT: &'static str = "contact";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn services() -> Self {
        Self::new(Self::SERVICES)
    }

    /// Parses an in-page anchor such as `#about`. Anything that is not a
    /// non-empty fragment reference yields `None`.
    pub fn from_href(href: &str) -> Option<Self> {
        href.strip_prefix('#')
            .filter(|id| !id.is_empty())
            .map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The anchor form, `#id`.
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Layout of one section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: SectionId::new(id),
            top,
            height,
        }
    }

    /// True when `position` falls within `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `content` - Content document sources (HTTP, file, embedded)
//! - `surface` - In-memory page surface and its HTML renderer
//! - `icons` - Icon set placeholders
//! - `http` - The axum router serving the page

pub mod content;
pub mod http;
pub mod icons;
pub mod surface;

pub use content::{EmbeddedContentSource, FileContentSource, HttpContentSource};
pub use http::{build_app, site_router, SharedSite, SiteAppState};
pub use icons::FeatherIcons;
pub use surface::{HtmlPageRenderer, InMemorySurface};

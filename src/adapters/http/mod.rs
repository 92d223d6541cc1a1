//! HTTP adapters - the axum surface of the site.

pub mod site;

// Re-export key types for convenience
pub use site::{build_app, site_router};
pub use site::{SharedSite, SiteAppState};

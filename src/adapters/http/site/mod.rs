//! Site HTTP adapter - the rendered page and its embedding hooks.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;

pub use handlers::{SharedSite, SiteAppState};
pub use routes::{build_app, site_router};

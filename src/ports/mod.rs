//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ContentSource` - Loads the content document
//! - `PresentationSurface` - Page slots the binder writes into
//! - `IconRenderer` - Icon placeholders and substitution

mod content_source;
mod icon_renderer;
mod presentation_surface;

pub use content_source::{ContentSource, ContentSourceError};
pub use icon_renderer::IconRenderer;
pub use presentation_surface::PresentationSurface;

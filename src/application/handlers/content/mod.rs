//! Content loading and binding handlers.

mod bind_content;
mod load_content;

pub use bind_content::{BindReport, ContentBinder, DEFAULT_FOOTER_SERVICE_LIMIT};
pub use load_content::{LoadContentHandler, LoadContentResult};

//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! A [`Site`] is one page session; handlers act on it or feed it.

pub mod handlers;
mod site;

pub use handlers::{
    // Content handlers
    BindReport, ContentBinder, LoadContentHandler, LoadContentResult,
    DEFAULT_FOOTER_SERVICE_LIMIT,
    // Contact handlers
    SubmissionSettings, SubmitContactCommand, SubmitContactError, SubmitContactHandler,
    SubmitContactResult,
};
pub use site::{Site, SiteSettings, UpdateConfigResult};

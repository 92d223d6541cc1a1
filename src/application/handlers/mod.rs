//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod contact;
pub mod content;

pub use contact::{
    SubmissionSettings, SubmitContactCommand, SubmitContactError, SubmitContactHandler,
    SubmitContactResult,
};
pub use content::{
    BindReport, ContentBinder, LoadContentHandler, LoadContentResult,
    DEFAULT_FOOTER_SERVICE_LIMIT,
};

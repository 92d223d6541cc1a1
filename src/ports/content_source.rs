//! Content Source Port - where the page's content document comes from.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::content::ContentDocument;

/// Reasons a document could not be loaded. All of them mean the same thing
/// to callers: configuration unavailable, use the fallback.
#[derive(Debug, Error)]
pub enum ContentSourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Content endpoint returned status {0}")]
    Status(u16),

    #[error("Failed to parse content document: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Content source not configured: {0}")]
    NotConfigured(&'static str),
}

/// Port for loading the content document.
///
/// # Contract
///
/// Implementations must:
/// - Treat any non-success response as an error
/// - Return `Parse` for malformed documents rather than partial content
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Load the document.
    async fn load(&self) -> Result<ContentDocument, ContentSourceError>;

    /// Human-readable description of the source, for logs.
    fn describe(&self) -> String;
}

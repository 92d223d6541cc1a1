//! Embedded content source - serves the compiled-in document.

use async_trait::async_trait;

use crate::domain::content::ContentDocument;
use crate::ports::{ContentSource, ContentSourceError};

/// Always succeeds with [`ContentDocument::fallback`].
#[derive(Debug, Clone, Default)]
pub struct EmbeddedContentSource;

impl EmbeddedContentSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ContentSource for EmbeddedContentSource {
    async fn load(&self) -> Result<ContentDocument, ContentSourceError> {
        Ok(ContentDocument::fallback())
    }

    fn describe(&self) -> String {
        "embedded".to_string()
    }
}

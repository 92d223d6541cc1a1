//! LoadContentHandler - loads the content document at startup.

use std::sync::Arc;

use crate::domain::content::{ContentOrigin, ContentStore};
use crate::ports::{ContentSource, ContentSourceError};

/// Result of a load. Always carries a usable store.
#[derive(Debug)]
pub struct LoadContentResult {
    pub store: ContentStore,
    /// Why the fallback document is in use, if it is.
    pub failure: Option<ContentSourceError>,
}

impl LoadContentResult {
    /// Logs `error` and substitutes the compiled-in document.
    pub fn fallback(source: &str, error: ContentSourceError) -> Self {
        tracing::error!(
            source = %source,
            error = %error,
            "Error loading content, using default document"
        );
        Self {
            store: ContentStore::fallback(),
            failure: Some(error),
        }
    }
}

/// Handler for loading the content document.
///
/// Source failures are not propagated: they are logged and the
/// compiled-in document is substituted.
pub struct LoadContentHandler {
    source: Arc<dyn ContentSource>,
}

impl LoadContentHandler {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    pub async fn handle(&self) -> LoadContentResult {
        let description = self.source.describe();

        match self.source.load().await {
            Ok(document) => {
                tracing::info!(source = %description, "Content document loaded");
                LoadContentResult {
                    store: ContentStore::new(document, ContentOrigin::Source(description)),
                    failure: None,
                }
            }
            Err(e) => LoadContentResult::fallback(&description, e),
        }
    }
}

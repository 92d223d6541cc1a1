//! Content source adapters.
//!
//! - `HttpContentSource` - `GET` of a JSON document
//! - `FileContentSource` - JSON document on disk
//! - `EmbeddedContentSource` - the compiled-in document

mod embedded_source;
mod file_source;
mod http_source;

use std::sync::Arc;

pub use embedded_source::EmbeddedContentSource;
pub use file_source::FileContentSource;
pub use http_source::HttpContentSource;

use crate::config::{ContentConfig, ContentSourceKind};
use crate::ports::{ContentSource, ContentSourceError};

/// Builds the source selected by `config`.
pub fn configured_source(
    config: &ContentConfig,
) -> Result<Arc<dyn ContentSource>, ContentSourceError> {
    Ok(match config.source {
        ContentSourceKind::Embedded => Arc::new(EmbeddedContentSource::new()),
        ContentSourceKind::File => {
            let path = config
                .path
                .as_deref()
                .ok_or(ContentSourceError::NotConfigured("content path"))?;
            Arc::new(FileContentSource::new(path))
        }
        ContentSourceKind::Http => {
            let url = config
                .url
                .as_deref()
                .ok_or(ContentSourceError::NotConfigured("content url"))?;
            Arc::new(HttpContentSource::new(url, config.fetch_timeout())?)
        }
    })
}

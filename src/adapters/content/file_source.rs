//! File content source - reads the document from disk.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

use crate::domain::content::ContentDocument;
use crate::ports::{ContentSource, ContentSourceError};

#[derive(Debug, Clone)]
pub struct FileContentSource {
    path: PathBuf,
}

impl FileContentSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ContentSource for FileContentSource {
    async fn load(&self) -> Result<ContentDocument, ContentSourceError> {
        let body = fs::read_to_string(&self.path)
            .await
            .map_err(|e| ContentSourceError::Io(format!("{}: {}", self.path.display(), e)))?;

        ContentDocument::from_json(&body).map_err(|e| ContentSourceError::Parse(e.to_string()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

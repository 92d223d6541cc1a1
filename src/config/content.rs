//! Content source configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where the content document is loaded from
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentSourceKind {
    /// Compiled-in default document
    Embedded,
    /// JSON file on disk
    #[default]
    File,
    /// JSON document fetched over HTTP
    Http,
}

/// Content source configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    #[serde(default)]
    pub source: ContentSourceKind,

    /// Path of the document when `source = file`
    #[serde(default = "default_path")]
    pub path: Option<String>,

    /// URL of the document when `source = http`
    pub url: Option<String>,

    /// Fetch timeout in seconds
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl ContentConfig {
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Validate content configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.fetch_timeout_secs == 0 || self.fetch_timeout_secs > 120 {
            return Err(ValidationError::InvalidFetchTimeout);
        }
        match self.source {
            ContentSourceKind::Embedded => {}
            ContentSourceKind::File => {
                if self.path.as_deref().map_or(true, str::is_empty) {
                    return Err(ValidationError::MissingRequired("CONTENT__PATH"));
                }
            }
            ContentSourceKind::Http => {
                let url = self
                    .url
                    .as_deref()
                    .filter(|u| !u.is_empty())
                    .ok_or(ValidationError::MissingRequired("CONTENT__URL"))?;
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ValidationError::InvalidContentUrl);
                }
            }
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSourceKind::default(),
            path: default_path(),
            url: None,
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

fn default_path() -> Option<String> {
    Some("data.json".to_string())
}

fn default_fetch_timeout() -> u64 {
    10
}

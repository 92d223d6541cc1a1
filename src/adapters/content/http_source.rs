//! HTTP content source - fetches the document with a plain `GET`.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::content::ContentDocument;
use crate::ports::{ContentSource, ContentSourceError};

/// Loads the content document from a URL (normally the site's own
/// `data.json`).
pub struct HttpContentSource {
    url: String,
    http_client: reqwest::Client,
}

impl HttpContentSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ContentSourceError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContentSourceError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            http_client,
        })
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn load(&self) -> Result<ContentDocument, ContentSourceError> {
        tracing::debug!("Fetching content document from {}", self.url);

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| ContentSourceError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ContentSourceError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ContentSourceError::Network(e.to_string()))?;

        ContentDocument::from_json(&body).map_err(|e| ContentSourceError::Parse(e.to_string()))
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn source(url: String) -> HttpContentSource {
        HttpContentSource::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn loads_document_on_success() {
        let base = serve(Router::new().route(
            "/data.json",
            get(|| async { r#"{"firmName": "Acme Law", "services": []}"# }),
        ))
        .await;

        let doc = source(format!("{}/data.json", base)).load().await.unwrap();

        assert_eq!(doc.firm_name.as_deref(), Some("Acme Law"));
        assert_eq!(doc.services, Some(vec![]));
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let base = serve(Router::new().route(
            "/data.json",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        ))
        .await;

        let result = source(format!("{}/data.json", base)).load().await;

        assert!(matches!(result, Err(ContentSourceError::Status(404))));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parse_error() {
        let base = serve(Router::new().route("/data.json", get(|| async { "{ not json" }))).await;

        let result = source(format!("{}/data.json", base)).load().await;

        assert!(matches!(result, Err(ContentSourceError::Parse(_))));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = source(format!("http://{}/data.json", addr)).load().await;

        assert!(matches!(result, Err(ContentSourceError::Network(_))));
    }

    #[test]
    fn describes_itself_by_url() {
        let source = source("http://localhost/data.json".to_string());
        assert_eq!(source.describe(), "http://localhost/data.json");
    }
}

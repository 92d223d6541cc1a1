//! Axum router configuration for site endpoints.

use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    get_document, page_event, render_page, submit_contact, update_config, SiteAppState,
};

/// Create the site router.
///
/// # Routes
///
/// - `GET /` - Rendered page
/// - `GET /data.json` - Current content document
/// - `POST /api/config` - Merge a partial document and re-bind
/// - `POST /api/contact` - Submit the contact form
/// - `POST /api/events` - Apply a page event (scroll, click, key, ...)
pub fn site_router() -> Router<SiteAppState> {
    Router::new()
        .route("/", get(render_page))
        .route("/data.json", get(get_document))
        .route("/api/config", post(update_config))
        .route("/api/contact", post(submit_contact))
        .route("/api/events", post(page_event))
}

/// The site router with its state and the standard layers applied.
///
/// An empty `cors_origins` list allows any origin.
pub fn build_app(state: SiteAppState, request_timeout: Duration, cors_origins: &[String]) -> Router {
    site_router()
        .layer(cors_layer(cors_origins))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

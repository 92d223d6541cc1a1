//! Firm Site server.
//!
//! Loads configuration and the content document, binds the page once and
//! serves it.

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::Mutex;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use firm_site::adapters::content::configured_source;
use firm_site::adapters::{build_app, FeatherIcons, InMemorySurface, SiteAppState};
use firm_site::application::{LoadContentHandler, LoadContentResult, Site};
use firm_site::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_tracing(&config.server);
    config.validate().context("invalid configuration")?;

    info!(environment = ?config.server.environment, "Starting firm site");

    let loaded = match configured_source(&config.content) {
        Ok(source) => LoadContentHandler::new(source).handle().await,
        Err(e) => LoadContentResult::fallback("content source", e),
    };

    let mut site = Site::new(
        loaded.store,
        InMemorySurface::complete(),
        Arc::new(FeatherIcons::new()),
        config.site.site_settings(),
    );
    let report = site.bind();
    info!(
        slots = report.written.len(),
        fallback = site.store().is_fallback(),
        "Page bound"
    );

    let state = SiteAppState::new(Arc::new(Mutex::new(site)), config.site.submission_settings());
    let app = build_app(
        state,
        config.server.request_timeout(),
        &config.server.cors_origins_list(),
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if server.json_logs() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

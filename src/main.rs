//! Profile Compass server binary.
//!
//! Loads `PROFILE_COMPASS__*` configuration, builds the contact relay and the
//! owner profile, then serves the REST API.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use profile_compass::adapters::contact::{HttpContactRelay, HttpRelayConfig, InMemoryContactRelay};
use profile_compass::adapters::http::{api_router, AppState};
use profile_compass::config::{AppConfig, ServerConfig};
use profile_compass::ports::ContactRelay;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let owner = config.profile.load_owner()?;
    tracing::info!(
        owner = %owner.name,
        dimension_set = ?config.profile.dimension_set,
        "owner profile loaded"
    );

    let relay: Arc<dyn ContactRelay> = match &config.contact.endpoint {
        Some(endpoint) => {
            let relay_config =
                HttpRelayConfig::new(endpoint.clone()).with_timeout(config.contact.timeout());
            Arc::new(HttpContactRelay::new(relay_config)?)
        }
        None => {
            tracing::warn!("no contact endpoint configured; messages are kept in memory");
            Arc::new(InMemoryContactRelay::new())
        }
    };

    let state = AppState::new(
        owner,
        relay,
        config.contact.fallback_email.clone(),
        config.site.info(),
        config.profile.dimension_set,
    );

    let app = api_router(state)
        .layer(DefaultBodyLimit::max(config.server.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    if server.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Explicit origins when configured; permissive otherwise outside production.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() && !server.is_production() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    }
}

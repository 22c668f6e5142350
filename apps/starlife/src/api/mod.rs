//! # Starlife HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /catalog` - List the reference stars
//! - `POST /simulate` - Compute a star's timeline
//! - `POST /compare` - Rank reference stars against one stage
//! - `POST /inspect` - Derived quantities for one stage
//!
//! ## Configuration (Environment Variables)
//!
//! - `STARLIFE_CORS_ORIGINS`: Comma-separated list of allowed origins, or "*" for all (default: localhost only)

mod handlers;
mod types;

// Re-export handlers and types for integration tests (via `starlife::api::*`)
pub use handlers::{
    catalog_handler, compare_handler, health_handler, inspect_handler, simulate_handler,
};
pub use types::{
    CatalogResponse, CompareResponse, HealthResponse, InspectResponse, SimulateRequest,
    SimulateResponse, StageRequest, select_stage,
};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use starlife_core::{Catalog, EvolutionComposer, StarlifeError};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KB). Requests are a few numbers.
const MAX_BODY_SIZE: usize = 64 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the read-only catalog and the engine.
#[derive(Clone)]
pub struct AppState {
    /// Reference catalog used for similarity ranking.
    pub catalog: Arc<Catalog>,
    pub composer: EvolutionComposer,
}

impl AppState {
    /// Create new app state around a catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            composer: EvolutionComposer::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin().clone())
    }
}

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Origins allowed when `STARLIFE_CORS_ORIGINS` is unset or unusable.
const LOCAL_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8080",
];

/// Parse origins, skipping blanks and entries that are not valid header values.
fn parse_origins<'a>(list: impl IntoIterator<Item = &'a str>) -> Vec<HeaderValue> {
    list.into_iter()
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("CORS: ignoring invalid origin '{}'", origin);
                None
            }
        })
        .collect()
}

/// CORS layer for `STARLIFE_CORS_ORIGINS`: `*` allows any origin, a comma
/// list allows those origins, and anything else falls back to localhost.
fn build_cors_layer(setting: Option<&str>) -> CorsLayer {
    let origins = match setting.map(str::trim) {
        Some("*") => {
            tracing::warn!("CORS: allowing all origins");
            return CorsLayer::permissive();
        }
        Some(list) => parse_origins(list.split(',')),
        None => Vec::new(),
    };

    let origins = if origins.is_empty() {
        tracing::info!("CORS: localhost origins only");
        parse_origins(LOCAL_ORIGINS)
    } else {
        origins
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// Create the axum router with all endpoints and middleware.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
pub fn create_router(state: AppState) -> Router {
    let cors = build_cors_layer(std::env::var("STARLIFE_CORS_ORIGINS").ok().as_deref());
    tracing::info!("Serving {} reference stars", state.catalog.len());

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/catalog", get(handlers::catalog_handler))
        .route("/simulate", post(handlers::simulate_handler))
        .route("/compare", post(handlers::compare_handler))
        .route("/inspect", post(handlers::inspect_handler))
        .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server.
pub async fn run_server(addr: &str, catalog: Catalog) -> Result<(), StarlifeError> {
    let state = AppState::new(catalog);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| StarlifeError::Io(format!("Bind failed: {}", e)))?;

    tracing::info!("Starlife HTTP server listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StarlifeError::Io(format!("Server error: {}", e)))
}

/// Resolve on Ctrl+C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_invalid_ones_skipped() {
        let origins = parse_origins(" https://a.example ,, bad\norigin,http://b.example".split(','));
        assert_eq!(
            origins,
            vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("http://b.example"),
            ]
        );
    }

    #[test]
    fn local_origins_all_parse() {
        assert_eq!(parse_origins(LOCAL_ORIGINS).len(), LOCAL_ORIGINS.len());
    }

    #[test]
    fn every_setting_builds_a_layer() {
        for setting in [None, Some("*"), Some(" * "), Some(""), Some("http://x.example")] {
            let _layer = build_cors_layer(setting);
        }
    }
}

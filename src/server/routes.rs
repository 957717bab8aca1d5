//! Router configuration for the edge filter service.
//!
//! This module defines the HTTP routes and applies middleware for CORS,
//! request body limits, and tracing.
//!
//! # Route Structure
//!
//! ```text
//! /health           - Health check
//! /process-image    - Blur + edge detection (POST)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use edge_cleanup::server::routes::{create_router, RouterConfig};
//!
//! let config = RouterConfig::new().with_body_limit(16 * 1024 * 1024);
//! let router = create_router(config);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health_handler, process_image_handler, AppState};
use crate::service::ImageFilterService;

/// Default maximum request body size (64 MiB).
///
/// Base64 inflates payloads by a third, so axum's 2 MiB default is too small
/// for ordinary photos.
pub const DEFAULT_BODY_LIMIT: usize = 64 * 1024 * 1024;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Maximum accepted request body in bytes
    pub body_limit: usize,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration.
    ///
    /// By default:
    /// - CORS allows any origin
    /// - Bodies up to 64 MiB are accepted
    /// - Tracing is enabled
    pub fn new() -> Self {
        Self {
            cors_origins: None,
            body_limit: DEFAULT_BODY_LIMIT,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    /// Pass None (or don't call this method) to allow any origin.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Allow any CORS origin.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.cors_origins = None;
        self
    }

    /// Set the maximum request body size in bytes.
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - `POST /process-image` and `GET /health`
/// - CORS configuration
/// - Request body limit
/// - Request tracing (optional)
pub fn create_router(config: RouterConfig) -> Router {
    let app_state = AppState::new(ImageFilterService::new());

    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/process-image", post(process_image_handler))
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
///
/// No credentials are allowed and any request header is accepted.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => {
            // No origins allowed - this effectively disables CORS
            cors
        }
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

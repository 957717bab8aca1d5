//! # Edge Cleanup
//!
//! An HTTP service that takes an image as a base64 data-URI, smooths it with
//! a Gaussian blur, runs Canny edge detection, and returns the edge map as a
//! PNG data-URI.
//!
//! ## Architecture
//!
//! - [`filter`] - Gaussian blur, Canny edge detection, parameter normalization
//! - [`codec`] - Data-URI, base64, and raster encode/decode
//! - [`service`] - The request → response pipeline
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use edge_cleanup::{create_router, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = create_router(RouterConfig::new());
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:5000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod server;
pub mod service;

// Re-export commonly used types
pub use config::Config;
pub use error::FilterError;
pub use filter::{edge_filter, ChannelOrder, ColorImage, FilterParams};
pub use server::{create_router, AppState, ErrorResponse, HealthResponse, RouterConfig};
pub use service::{ImageFilterService, ProcessRequest, ProcessResponse};

//! HTTP server layer for the edge filter service.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │                     POST /process-image                         │
//! │                                                                 │
//! │  ┌──────────────────────────┐  ┌─────────────────────────────┐  │
//! │  │        handlers          │  │           routes            │  │
//! │  │ (requests, error bodies) │  │ (CORS, body limit, tracing) │  │
//! │  └──────────────────────────┘  └─────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    health_handler, process_image_handler, AppState, ErrorResponse, HealthResponse,
    MISSING_IMAGE_MESSAGE, PROCESSING_FAILED_MESSAGE,
};
pub use routes::{create_router, RouterConfig, DEFAULT_BODY_LIMIT};

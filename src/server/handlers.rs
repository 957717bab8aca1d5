//! HTTP request handlers for the edge filter API.
//!
//! # Endpoints
//!
//! - `POST /process-image` - Blur + edge-detect a data-URI image
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::error::FilterError;
use crate::service::{ImageFilterService, ProcessRequest, ProcessResponse};

/// Error body for a missing `image` field.
pub const MISSING_IMAGE_MESSAGE: &str = "No image data provided";

/// Error body for every processing failure.
pub const PROCESSING_FAILED_MESSAGE: &str = "Failed to process image";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the filter service.
///
/// This is passed to all handlers via Axum's State extractor.
#[derive(Clone, Default)]
pub struct AppState {
    /// The stateless filter service
    pub service: Arc<ImageFilterService>,
}

impl AppState {
    /// Create a new application state with the given service.
    pub fn new(service: ImageFilterService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response.
///
/// The message is fixed per status; processing details are only logged.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert FilterError to HTTP response.
///
/// A missing image is a 400 logged at WARN. Anything else is a 500 logged at
/// ERROR with its detail; the caller only sees the generic message.
impl IntoResponse for FilterError {
    fn into_response(self) -> Response {
        let (status, message) = if self.is_client_error() {
            warn!(
                error_type = self.kind(),
                status = StatusCode::BAD_REQUEST.as_u16(),
                "Client error: {}",
                self
            );
            (StatusCode::BAD_REQUEST, MISSING_IMAGE_MESSAGE)
        } else {
            error!(
                error_type = self.kind(),
                status = StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "Error processing image: {}",
                self
            );
            (StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED_MESSAGE)
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle image filter requests.
///
/// # Endpoint
///
/// `POST /process-image`
///
/// # Request Body
///
/// ```json
/// {
///   "image": "data:image/png;base64,...",
///   "gaussianBlur": 7,
///   "cannyLowerThreshold": 30,
///   "cannyUpperThreshold": 100
/// }
/// ```
///
/// # Response
///
/// - `200 OK`: `{"processedImage": "data:image/png;base64,..."}`
/// - `400 Bad Request`: `{"error": "No image data provided"}`
/// - `500 Internal Server Error`: `{"error": "Failed to process image"}`
///
/// The body is taken as raw bytes so that malformed JSON, and a body the
/// framework refused to buffer (such as one over the size limit), land in the
/// same 500 path as every other processing failure.
pub async fn process_image_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ProcessResponse>, FilterError> {
    let body = body.map_err(|e| FilterError::InvalidBody {
        message: e.body_text(),
    })?;
    let json: Value = serde_json::from_slice(&body).map_err(|e| FilterError::InvalidBody {
        message: e.to_string(),
    })?;

    let request = ProcessRequest::from_json(&json)?;

    debug!(
        payload_len = request.image.len(),
        kernel = request.params.blur_kernel,
        low = request.params.low_threshold,
        high = request.params.high_threshold,
        "Processing image"
    );

    let service = Arc::clone(&state.service);
    let response = tokio::task::spawn_blocking(move || service.process(&request))
        .await
        .map_err(|e| FilterError::Internal {
            message: e.to_string(),
        })??;

    Ok(Json(response))
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

//! Image filter service.
//!
//! The service is the single operation behind `POST /process-image`:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    ImageFilterService::process                   │
//! │  1. Split data-URI        5. Canny edge detection                │
//! │  2. Base64 decode         6. Edge map → RGB                      │
//! │  3. Decode raster         7. PNG encode                          │
//! │  4. Gaussian blur         8. Wrap as data:image/png;base64,...   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service holds no state, so one instance can be shared across any
//! number of concurrent requests.

use image::RgbImage;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::codec::{decode_data_uri, decode_image, encode_png, encode_png_data_uri};
use crate::error::FilterError;
use crate::filter::{edge_filter, FilterParams};

// =============================================================================
// Request / Response
// =============================================================================

/// A validated filter request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRequest {
    /// The inbound data-URI, `data:<mime>;base64,<payload>`
    pub image: String,

    /// Normalized filter parameters
    pub params: FilterParams,
}

impl ProcessRequest {
    /// Create a request from a data-URI and already-normalized parameters.
    pub fn new(image: impl Into<String>, params: FilterParams) -> Self {
        Self {
            image: image.into(),
            params,
        }
    }

    /// Validate a JSON request body.
    ///
    /// Numeric fields are coerced before the image is checked, so a body with
    /// an unparsable parameter fails as a processing error even if `image` is
    /// also missing.
    pub fn from_json(body: &Value) -> Result<Self, FilterError> {
        let fields = body.as_object().ok_or_else(|| FilterError::InvalidBody {
            message: format!("expected a JSON object, got {}", json_kind(body)),
        })?;

        let params = FilterParams::from_json_fields(
            fields.get("gaussianBlur"),
            fields.get("cannyLowerThreshold"),
            fields.get("cannyUpperThreshold"),
        )?;

        let image = match fields.get("image") {
            None => return Err(FilterError::MissingImage),
            Some(v) if is_falsy(v) => return Err(FilterError::MissingImage),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                return Err(FilterError::InvalidImageField {
                    kind: json_kind(other),
                })
            }
        };

        Ok(Self { image, params })
    }
}

/// Successful response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    /// Edge map as `data:image/png;base64,<bytes>`
    pub processed_image: String,
}

/// Whether a JSON value counts as "no data" for the `image` field.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =============================================================================
// Service
// =============================================================================

/// Blur + edge-detection service for data-URI images.
#[derive(Debug, Clone, Default)]
pub struct ImageFilterService {}

impl ImageFilterService {
    /// Create a new service.
    pub fn new() -> Self {
        Self {}
    }

    /// Run the full pipeline on a validated request.
    ///
    /// # Errors
    ///
    /// Returns an error if the data-URI is malformed, the payload is not
    /// base64, the bytes are not an image, or PNG encoding fails.
    pub fn process(&self, request: &ProcessRequest) -> Result<ProcessResponse, FilterError> {
        let bytes = decode_data_uri(&request.image)?;
        let png = self.process_bytes(&bytes, &request.params)?;

        Ok(ProcessResponse {
            processed_image: encode_png_data_uri(&png),
        })
    }

    /// Decode raw image bytes, filter them, and return PNG bytes.
    pub fn process_bytes(
        &self,
        bytes: &[u8],
        params: &FilterParams,
    ) -> Result<Vec<u8>, FilterError> {
        let input = decode_image(bytes)?;
        let (width, height) = input.dimensions();

        let output = self.filter(input, params);

        debug!(
            width,
            height,
            kernel = params.blur_kernel,
            low = params.low_threshold,
            high = params.high_threshold,
            "Filtered image"
        );

        encode_png(&output)
    }

    /// Apply blur and edge detection to an in-memory image.
    pub fn filter(&self, image: RgbImage, params: &FilterParams) -> RgbImage {
        edge_filter(image, params)
    }
}

// =============================================================================
// Tests
// =============================================================================

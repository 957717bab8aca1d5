use thiserror::Error;

/// Errors that can occur while handling a filter request.
///
/// Only [`FilterError::MissingImage`] is reported to the caller as a client
/// error. Every other variant collapses into a generic server error at the
/// HTTP boundary; its detail is logged, never returned.
#[derive(Debug, Clone, Error)]
pub enum FilterError {
    /// The `image` field is absent, null, or empty
    #[error("No image data provided")]
    MissingImage,

    /// The request body is not a JSON object
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// The `image` field is present but is not a string
    #[error("Invalid image field: expected a data-URI string, got {kind}")]
    InvalidImageField { kind: &'static str },

    /// A numeric parameter could not be coerced or normalized
    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The data-URI has no comma separating header and payload
    #[error("Malformed data-URI: missing ',' separator")]
    MalformedDataUri,

    /// The payload is not valid base64
    #[error("Invalid base64 payload: {message}")]
    Base64 { message: String },

    /// The decoded bytes are not a readable raster image
    #[error("Failed to decode image: {message}")]
    Decode { message: String },

    /// The edge map could not be encoded as PNG
    #[error("Failed to encode image: {message}")]
    Encode { message: String },

    /// The blocking worker failed before producing a result
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl FilterError {
    /// Whether the caller is at fault (HTTP 4xx) rather than the processing.
    pub fn is_client_error(&self) -> bool {
        matches!(self, FilterError::MissingImage)
    }

    /// Short machine-readable identifier used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterError::MissingImage => "missing_image",
            FilterError::InvalidBody { .. } => "invalid_body",
            FilterError::InvalidImageField { .. } => "invalid_image_field",
            FilterError::InvalidParameter { .. } => "invalid_parameter",
            FilterError::MalformedDataUri => "malformed_data_uri",
            FilterError::Base64 { .. } => "base64_error",
            FilterError::Decode { .. } => "decode_error",
            FilterError::Encode { .. } => "encode_error",
            FilterError::Internal { .. } => "internal_error",
        }
    }
}

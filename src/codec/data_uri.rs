//! Data-URI handling.
//!
//! Inbound URIs look like `data:<mime>;base64,<payload>`. Only the payload
//! after the first comma matters; the header, including the declared MIME
//! type, is ignored. Outbound URIs always declare `image/png`.

use base64::{engine::general_purpose::STANDARD as base64_engine, Engine as _};

use crate::error::FilterError;

/// Header prepended to every processed image.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Return the text after the first comma of a data-URI.
pub fn split_payload(data_uri: &str) -> Result<&str, FilterError> {
    data_uri
        .split_once(',')
        .map(|(_header, payload)| payload)
        .ok_or(FilterError::MalformedDataUri)
}

/// Decode a standard-alphabet base64 payload.
///
/// ASCII whitespace (line breaks from wrapped encoders) is skipped.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, FilterError> {
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    base64_engine
        .decode(compact.as_bytes())
        .map_err(|e| FilterError::Base64 {
            message: e.to_string(),
        })
}

/// Split and decode a data-URI in one step.
pub fn decode_data_uri(data_uri: &str) -> Result<Vec<u8>, FilterError> {
    decode_payload(split_payload(data_uri)?)
}

/// Wrap PNG bytes in a `data:image/png;base64,` URI.
pub fn encode_png_data_uri(png: &[u8]) -> String {
    let b64 = base64_engine.encode(png);
    format!("{}{}", PNG_DATA_URI_PREFIX, b64)
}

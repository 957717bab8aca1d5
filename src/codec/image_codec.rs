//! Raster decoding and PNG encoding.
//!
//! Decoding guesses the container from its magic bytes, so the MIME type a
//! client declares never matters. Every decoded image is flattened to 8-bit
//! RGB; an alpha channel is dropped rather than composited.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader, RgbImage};

use crate::error::FilterError;

/// Decode an encoded raster image into 8-bit RGB.
///
/// # Errors
///
/// Returns [`FilterError::Decode`] if the format is not recognized or the
/// data is corrupt.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, FilterError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FilterError::Decode {
            message: e.to_string(),
        })?;

    if reader.format().is_none() {
        return Err(FilterError::Decode {
            message: "unrecognized image format".to_string(),
        });
    }

    let img = reader.decode().map_err(|e| FilterError::Decode {
        message: e.to_string(),
    })?;

    Ok(img.to_rgb8())
}

/// Encode an RGB image as PNG.
///
/// Output is deterministic: the same pixels always produce the same bytes.
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>, FilterError> {
    let mut output = Vec::new();
    let encoder = PngEncoder::new(&mut output);

    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| FilterError::Encode {
            message: e.to_string(),
        })?;

    Ok(output)
}

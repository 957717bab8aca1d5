//! Encoding layer: data-URIs, base64, and raster codecs.

pub mod data_uri;
pub mod image_codec;

pub use data_uri::{
    decode_data_uri, decode_payload, encode_png_data_uri, split_payload, PNG_DATA_URI_PREFIX,
};
pub use image_codec::{decode_image, encode_png};

//! Image filtering: Gaussian smoothing followed by Canny edge detection.
//!
//! # Pipeline
//!
//! ```text
//! RgbImage ──► ColorImage (RGB) ──► BGR ──► gaussian_blur ──► canny
//!                                                                │
//! RgbImage ◄── ColorImage (RGB) ◄── BGR ◄── replicate gray ◄─────┘
//! ```
//!
//! # Components
//!
//! - [`FilterParams`]: normalized kernel size and hysteresis thresholds
//! - [`ColorImage`]: 3-channel buffer that tracks its channel order
//! - [`gaussian_blur`]: separable smoothing with an auto-derived sigma
//! - [`canny`]: multi-channel Canny producing a binary edge map

mod canny;
mod color;
mod gaussian;
mod params;

pub use canny::{canny, EDGE_VALUE, NO_EDGE_VALUE};
pub use color::{ChannelOrder, ColorImage};
pub use gaussian::{gaussian_blur, gaussian_kernel, sigma_for_kernel_size};
pub use params::{
    coerce_int, normalize_kernel_size, FilterParams, DEFAULT_CANNY_LOWER_THRESHOLD,
    DEFAULT_CANNY_UPPER_THRESHOLD, DEFAULT_GAUSSIAN_BLUR, MAX_GAUSSIAN_BLUR,
};

use image::RgbImage;

/// Order the edge detector scans channels in.
pub const DETECTOR_CHANNEL_ORDER: ChannelOrder = ChannelOrder::Bgr;

/// Blur `image`, detect edges, and render the edge map as a color image.
///
/// The result has the input's dimensions and every pixel has R = G = B,
/// either [`EDGE_VALUE`] or [`NO_EDGE_VALUE`].
pub fn edge_filter(image: RgbImage, params: &FilterParams) -> RgbImage {
    let working = ColorImage::from_rgb(image).to_order(DETECTOR_CHANNEL_ORDER);

    let blurred = gaussian_blur(&working, params.blur_kernel);
    let edges = canny(&blurred, params.low_threshold, params.high_threshold);

    ColorImage::from_gray(&edges, DETECTOR_CHANNEL_ORDER).into_rgb_image()
}

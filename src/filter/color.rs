//! Channel-order aware color buffers.
//!
//! Decoders hand out pixels as RGB while the edge detector scans channels in
//! BGR order (ties between channels resolve to the first one scanned). The
//! buffer carries its order so every swap is explicit and happens once going
//! in and once coming out.

use image::{GrayImage, Rgb, RgbImage};

/// Order of the three interleaved channels in a [`ColorImage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    Bgr,
}

/// An 8-bit, 3-channel, row-major pixel buffer tagged with its channel order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorImage {
    width: u32,
    height: u32,
    order: ChannelOrder,
    data: Vec<u8>,
}

impl ColorImage {
    /// Wrap a decoded RGB image.
    pub fn from_rgb(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            width,
            height,
            order: ChannelOrder::Rgb,
            data: image.into_raw(),
        }
    }

    /// Build a 3-channel image by replicating a single-channel one.
    ///
    /// All channels are equal, so the tag only records the order the caller
    /// intends to treat the result as.
    pub fn from_gray(gray: &GrayImage, order: ChannelOrder) -> Self {
        let (width, height) = gray.dimensions();
        let data = gray.as_raw().iter().flat_map(|&v| [v, v, v]).collect();
        Self {
            width,
            height,
            order,
            data,
        }
    }

    /// Build from raw interleaved samples. Returns `None` on a length mismatch.
    pub fn from_raw(width: u32, height: u32, order: ChannelOrder, data: Vec<u8>) -> Option<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        if data.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            order,
            data,
        })
    }

    /// Reorder channels, swapping the first and third when the order changes.
    pub fn to_order(mut self, order: ChannelOrder) -> Self {
        if self.order != order {
            for px in self.data.chunks_exact_mut(3) {
                px.swap(0, 2);
            }
            self.order = order;
        }
        self
    }

    /// Convert to RGB order and hand the buffer to the `image` crate.
    pub fn into_rgb_image(self) -> RgbImage {
        let rgb = self.to_order(ChannelOrder::Rgb);
        let width = rgb.width as usize;
        RgbImage::from_fn(rgb.width, rgb.height, |x, y| {
            let i = (y as usize * width + x as usize) * 3;
            Rgb([rgb.data[i], rgb.data[i + 1], rgb.data[i + 2]])
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// Interleaved samples, row-major.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Interleaved samples for in-place writes. The length cannot change.
    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// The three samples at `(x, y)` in buffer order, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        let px = self.data.get(i..i + 3)?;
        Some([px[0], px[1], px[2]])
    }
}

//! Canny edge detection on a 3-channel image.
//!
//! Steps:
//! 1. 3x3 Sobel derivatives per channel, borders replicated.
//! 2. Per pixel, keep the derivatives of the channel with the largest L1
//!    magnitude `|dx| + |dy|`. Ties keep the channel scanned first.
//! 3. Non-maximum suppression along the gradient direction quantized into
//!    four sectors. Magnitudes outside the image count as zero.
//! 4. Hysteresis: local maxima above `high` seed edges, local maxima above
//!    `low` that are 8-connected to a seed join them.
//!
//! Thresholds are compared strictly (`m > low`, `m > high`). If `low` is
//! greater than `high` the two are swapped.

use image::{GrayImage, Luma};

use super::color::ColorImage;

/// Intensity written for edge pixels.
pub const EDGE_VALUE: u8 = 255;

/// Intensity written for non-edge pixels.
pub const NO_EDGE_VALUE: u8 = 0;

const CANNY_SHIFT: u32 = 15;

/// tan(22.5°) in 15-bit fixed point.
const TG22: i32 = 13573;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EdgeState {
    Suppressed,
    Candidate,
    Edge,
}

/// Per-pixel gradient of the dominant channel.
struct Gradients {
    w: usize,
    h: usize,
    dx: Vec<i32>,
    dy: Vec<i32>,
    mag: Vec<i32>,
}

impl Gradients {
    #[inline]
    fn mag_at(&self, x: isize, y: isize) -> i32 {
        if x < 0 || y < 0 || x >= self.w as isize || y >= self.h as isize {
            0
        } else {
            self.mag[y as usize * self.w + x as usize]
        }
    }
}

/// Compute Sobel gradients on every channel and keep the strongest one.
fn dominant_gradients(image: &ColorImage) -> Gradients {
    let (w, h) = (image.width() as usize, image.height() as usize);
    let src = image.as_raw();

    let mut dx = vec![0i32; w * h];
    let mut dy = vec![0i32; w * h];
    let mut mag = vec![-1i32; w * h];

    let sample = |x: usize, y: usize, c: usize| i32::from(src[(y * w + x) * 3 + c]);

    for y in 0..h {
        let yp = y.saturating_sub(1);
        let yn = (y + 1).min(h - 1);
        for x in 0..w {
            let xp = x.saturating_sub(1);
            let xn = (x + 1).min(w - 1);
            let i = y * w + x;

            for c in 0..3 {
                let gx = (sample(xn, yp, c) + 2 * sample(xn, y, c) + sample(xn, yn, c))
                    - (sample(xp, yp, c) + 2 * sample(xp, y, c) + sample(xp, yn, c));
                let gy = (sample(xp, yn, c) + 2 * sample(x, yn, c) + sample(xn, yn, c))
                    - (sample(xp, yp, c) + 2 * sample(x, yp, c) + sample(xn, yp, c));
                let m = gx.abs() + gy.abs();

                if m > mag[i] {
                    mag[i] = m;
                    dx[i] = gx;
                    dy[i] = gy;
                }
            }
        }
    }

    Gradients { w, h, dx, dy, mag }
}

/// Whether the pixel at `(x, y)` is a local maximum along its gradient.
fn is_local_maximum(grad: &Gradients, x: usize, y: usize) -> bool {
    let i = y * grad.w + x;
    let m = grad.mag[i];
    let (gx, gy) = (grad.dx[i], grad.dy[i]);
    let (x, y) = (x as isize, y as isize);

    let xs = gx.abs();
    let ys = gy.abs() << CANNY_SHIFT;
    let tg22x = xs * TG22;

    if ys < tg22x {
        // Horizontal gradient: compare left and right
        m > grad.mag_at(x - 1, y) && m >= grad.mag_at(x + 1, y)
    } else {
        let tg67x = tg22x + (xs << (CANNY_SHIFT + 1));
        if ys > tg67x {
            // Vertical gradient: compare above and below
            m > grad.mag_at(x, y - 1) && m >= grad.mag_at(x, y + 1)
        } else {
            let s: isize = if (gx ^ gy) < 0 { -1 } else { 1 };
            m > grad.mag_at(x - s, y - 1) && m > grad.mag_at(x + s, y + 1)
        }
    }
}

/// Run Canny edge detection and return a binary edge map.
///
/// The map has the same dimensions as the input and contains only
/// [`EDGE_VALUE`] and [`NO_EDGE_VALUE`].
pub fn canny(image: &ColorImage, low: i32, high: i32) -> GrayImage {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return GrayImage::new(width, height);
    }

    let (low, high) = if low > high { (high, low) } else { (low, high) };

    let grad = dominant_gradients(image);
    let (w, h) = (grad.w, grad.h);

    let mut states = vec![EdgeState::Suppressed; w * h];
    let mut stack = Vec::new();

    for y in 0..h {
        for x in 0..w {
            let i = y * w + x;
            let m = grad.mag[i];
            if m <= low || !is_local_maximum(&grad, x, y) {
                continue;
            }

            if m > high {
                states[i] = EdgeState::Edge;
                stack.push(i);
            } else {
                states[i] = EdgeState::Candidate;
            }
        }
    }

    while let Some(i) = stack.pop() {
        let (x, y) = ((i % w) as isize, (i / w) as isize);
        for ny in y - 1..=y + 1 {
            for nx in x - 1..=x + 1 {
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let n = ny as usize * w + nx as usize;
                if states[n] == EdgeState::Candidate {
                    states[n] = EdgeState::Edge;
                    stack.push(n);
                }
            }
        }
    }

    GrayImage::from_fn(width, height, |x, y| {
        if states[y as usize * w + x as usize] == EdgeState::Edge {
            Luma([EDGE_VALUE])
        } else {
            Luma([NO_EDGE_VALUE])
        }
    })
}

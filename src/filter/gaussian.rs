//! Separable Gaussian smoothing.
//!
//! The kernel follows the conventions of common vision libraries when the
//! standard deviation is left to be derived from the kernel size: small
//! kernels (up to 7 taps) use fixed binomial tables, larger ones sample a
//! Gaussian with `sigma = 0.3 * ((ksize - 1) * 0.5 - 1) + 0.8`.
//!
//! Borders are mirrored without repeating the edge sample
//! (`gfedcb|abcdefgh|gfedcba`).

use super::color::ColorImage;

const SMALL_KERNELS: [&[f32]; 4] = [
    &[1.0],
    &[0.25, 0.5, 0.25],
    &[0.0625, 0.25, 0.375, 0.25, 0.0625],
    &[0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
];

/// Standard deviation implied by a kernel size when none is given.
pub fn sigma_for_kernel_size(ksize: u32) -> f64 {
    0.3 * ((f64::from(ksize) - 1.0) * 0.5 - 1.0) + 0.8
}

/// Build a normalized 1-D Gaussian kernel with `ksize` taps.
///
/// `ksize` must be odd; callers normalize it beforehand.
pub fn gaussian_kernel(ksize: u32) -> Vec<f32> {
    debug_assert!(ksize % 2 == 1, "kernel size must be odd");

    if ksize <= 7 {
        return SMALL_KERNELS[(ksize / 2) as usize].to_vec();
    }

    let sigma = sigma_for_kernel_size(ksize);
    let scale = -0.5 / (sigma * sigma);
    let center = f64::from(ksize - 1) * 0.5;

    let weights: Vec<f64> = (0..ksize)
        .map(|i| {
            let x = f64::from(i) - center;
            (scale * x * x).exp()
        })
        .collect();
    let sum: f64 = weights.iter().sum();

    weights.iter().map(|w| (w / sum) as f32).collect()
}

/// Map an out-of-range coordinate back inside `0..len` by reflection.
pub(crate) fn reflect_101(p: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }

    let period = 2 * (len as isize - 1);
    let p = p.rem_euclid(period);
    if p >= len as isize {
        (period - p) as usize
    } else {
        p as usize
    }
}

/// Source index for every padded position `-radius..len + radius` of an axis.
fn border_table(len: usize, radius: usize) -> Vec<usize> {
    (0..len + 2 * radius)
        .map(|i| reflect_101(i as isize - radius as isize, len))
        .collect()
}

/// Blur every channel with a square `ksize x ksize` Gaussian.
///
/// Channel order is preserved. The output has the same dimensions as the
/// input.
pub fn gaussian_blur(image: &ColorImage, ksize: u32) -> ColorImage {
    let (width, height) = image.dimensions();
    let (w, h) = (width as usize, height as usize);

    if ksize <= 1 || w == 0 || h == 0 {
        return image.clone();
    }

    let kernel = gaussian_kernel(ksize);
    let radius = kernel.len() / 2;
    let cols = border_table(w, radius);
    let rows = border_table(h, radius);
    let src = image.as_raw();

    // Horizontal pass: u8 -> f32
    let mut horizontal = vec![0f32; w * h * 3];
    for y in 0..h {
        let row = &src[y * w * 3..(y + 1) * w * 3];
        let out = &mut horizontal[y * w * 3..(y + 1) * w * 3];
        for x in 0..w {
            let mut acc = [0f32; 3];
            for (&sx, &weight) in cols[x..x + kernel.len()].iter().zip(kernel.iter()) {
                let px = &row[sx * 3..sx * 3 + 3];
                acc[0] += weight * f32::from(px[0]);
                acc[1] += weight * f32::from(px[1]);
                acc[2] += weight * f32::from(px[2]);
            }
            out[x * 3..x * 3 + 3].copy_from_slice(&acc);
        }
    }

    // Vertical pass: f32 -> u8
    let mut output = image.clone();
    let dst = output.samples_mut();
    for y in 0..h {
        let taps = &rows[y..y + kernel.len()];
        for x in 0..w * 3 {
            let mut acc = 0f32;
            for (&sy, &weight) in taps.iter().zip(kernel.iter()) {
                acc += weight * horizontal[sy * w * 3 + x];
            }
            dst[y * w * 3 + x] = acc.round().clamp(0.0, 255.0) as u8;
        }
    }

    output
}

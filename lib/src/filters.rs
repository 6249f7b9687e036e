use crate::edges::encode_direction;
use crate::error::Result;
use crate::raster::Raster;
use log::debug;

/// Sobel magnitude above which a pixel counts as an edge
pub const DEFAULT_EDGE_THRESHOLD: f64 = 120.0;

/// Intensity histogram, one bin per 8-bit level
pub type Histogram = [u64; 256];

const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Calculate BT.709 luminance, truncated to 8 bits
///
/// Formula: Y = 0.2126*R + 0.7152*G + 0.0722*B
///
/// Truncation means pure white lands on 254.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64) as u8
}

/// BT.709 luminance in 15-bit fixed point with rounding
///
/// Coefficients 6968/23434/2366 out of 32768, so equal channels map to
/// themselves.
pub fn luminance_fixed(r: u8, g: u8, b: u8) -> u8 {
    let y = 6968 * r as u32 + 23434 * g as u32 + 2366 * b as u32;
    ((y + 16384) >> 15) as u8
}

/// Count the samples at each intensity
pub fn histogram(img: &Raster) -> Histogram {
    let mut bins = [0u64; 256];
    for v in img {
        bins[v as usize] += 1;
    }
    bins
}

/// Pick the threshold maximizing between-class variance (Otsu's method)
///
/// Class 0 holds levels `<= t`, class 1 the rest. When every candidate
/// leaves one class empty the threshold stays at 0. Ties go to the larger
/// threshold.
pub fn otsu_threshold(hist: &Histogram) -> u8 {
    let total: f64 = hist.iter().map(|&c| c as f64).sum();
    let dot: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut w0 = 0.0;
    let mut m0 = 0.0;
    let mut best_variance = 0.0;
    let mut best = 0u8;

    for (t, &count) in hist.iter().enumerate() {
        w0 += count as f64;
        m0 += t as f64 * count as f64;
        let w1 = total - w0;

        if w0 > 0.0 && w1 > 0.0 {
            let m1 = (dot - m0) / w1;
            let diff = m0 / w0 - m1;
            let variance = w0 * w1 * diff * diff;

            if variance >= best_variance {
                best_variance = variance;
                best = t as u8;
            }
        }
    }

    best
}

/// Map samples above `threshold` to 1 and everything else to 0
pub fn binarize(img: &Raster, threshold: u8) -> Result<Raster> {
    img.map(|v| (v > threshold) as u8)
}

/// Binarize with the Otsu threshold of the raster's own histogram
///
/// # Returns
/// The binary raster together with the threshold used
pub fn otsu(img: &Raster) -> Result<(Raster, u8)> {
    let threshold = otsu_threshold(&histogram(img));
    debug!(
        "otsu threshold {} for {}x{} raster",
        threshold,
        img.width(),
        img.height()
    );
    Ok((binarize(img, threshold)?, threshold))
}

/// Convolve a 3x3 kernel centred on `(x, y)`
///
/// Offsets falling outside the raster are replaced by the centre coordinate
/// on that axis (not a mirror of the neighbour).
fn convolve(kernel: &[[i32; 3]; 3], img: &Raster, x: u32, y: u32) -> Result<i32> {
    let mut sum = 0;
    for (ky, row) in kernel.iter().enumerate() {
        for (kx, &weight) in row.iter().enumerate() {
            let sx = clamp_offset(x, kx, img.width());
            let sy = clamp_offset(y, ky, img.height());
            sum += img.get(sx, sy)? as i32 * weight;
        }
    }
    Ok(sum)
}

fn clamp_offset(center: u32, k: usize, len: u32) -> u32 {
    let pos = center as i64 + k as i64 - 1;
    if pos < 0 || pos >= len as i64 {
        center
    } else {
        pos as u32
    }
}

/// Apply the Sobel operator and quantize gradient directions
///
/// # Arguments
/// * `img` - Input grayscale raster
/// * `threshold` - Magnitude a pixel must exceed to count as an edge
///
/// # Returns
/// An edge map of the same shape: `0` for non-edges, otherwise the gradient
/// direction encoded by [`encode_direction`].
pub fn sobel_filter(img: &Raster, threshold: f64) -> Result<Raster> {
    let (width, height) = img.dimensions();
    let mut map = Raster::new(width, height)?;
    let mut edge_count = 0usize;

    for y in 0..height {
        for x in 0..width {
            let gx = convolve(&SOBEL_X, img, x, y)? as f64;
            let gy = convolve(&SOBEL_Y, img, x, y)? as f64;
            let magnitude = (gx * gx + gy * gy).sqrt();

            if magnitude > threshold {
                map.set(x, y, encode_direction(gy.atan2(gx)))?;
                edge_count += 1;
            }
        }
    }

    debug!(
        "sobel: {} edge pixels of {} above magnitude {}",
        edge_count,
        img.size(),
        threshold
    );
    Ok(map)
}

use std::f64::consts::{FRAC_PI_4, TAU};

/// Edge orientation glyph classes, indexed by quantized gradient direction
///
/// The index is `round(theta / (pi/4)) mod 4` where theta is the gradient
/// angle, so opposite gradients share a glyph.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EdgeDirection {
    Horizontal = 0, // -
    Diagonal1 = 1,  // /
    Vertical = 2,   // |
    Diagonal2 = 3,  // \
}

impl EdgeDirection {
    /// Classify a gradient angle in radians
    pub fn from_angle(theta: f64) -> Self {
        match ((theta / FRAC_PI_4).round() as i64).rem_euclid(4) {
            0 => EdgeDirection::Horizontal,
            1 => EdgeDirection::Diagonal1,
            2 => EdgeDirection::Vertical,
            _ => EdgeDirection::Diagonal2,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Quantize a gradient angle into an edge-map sample in `[1, 255]`
///
/// Negative angles are shifted by 2π first. `0` is never produced; it is
/// reserved for "no edge".
pub fn encode_direction(theta: f64) -> u8 {
    let theta = if theta < 0.0 { theta + TAU } else { theta };
    let level = (theta * 254.0 / TAU).round() + 1.0;
    level.clamp(1.0, 255.0) as u8
}

/// Recover the gradient angle from an edge-map sample
///
/// Returns `None` for `0` (no edge).
pub fn decode_direction(sample: u8) -> Option<f64> {
    if sample == 0 {
        return None;
    }
    Some((sample - 1) as f64 / 254.0 * TAU)
}

/// Classify an edge-map sample
pub fn classify_edge(sample: u8) -> Option<EdgeDirection> {
    decode_direction(sample).map(EdgeDirection::from_angle)
}

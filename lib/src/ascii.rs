use crate::edges::classify_edge;
use crate::error::{Error, Result};
use crate::lut::{braille_char, edge_char, shade_char};
use crate::raster::Raster;

/// Dot weights of a 2x3 Braille cell as `(dx, dy, bit)`
///
/// ```text
/// bit 0  bit 3
/// bit 1  bit 4
/// bit 2  bit 5
/// ```
const BRAILLE_DOTS: [(u32, u32, u8); 6] = [
    (0, 0, 0),
    (0, 1, 1),
    (0, 2, 2),
    (1, 0, 3),
    (1, 1, 4),
    (1, 2, 5),
];

/// Pack the 2x3 block with top-left corner `(x, y)` into a dot mask
///
/// Any non-zero sample sets its dot.
pub fn braille_cell(binary: &Raster, x: u32, y: u32) -> Result<u8> {
    let mut dots = 0u8;
    for &(dx, dy, bit) in &BRAILLE_DOTS {
        if binary.get(x + dx, y + dy)? != 0 {
            dots |= 1 << bit;
        }
    }
    Ok(dots)
}

/// Render a binary raster as rows of Braille patterns
///
/// Only blocks lying entirely inside the raster are emitted: cells start
/// every 2 columns while `x + 1 < width`, bands every 3 rows while
/// `y + 2 < height`. Each band ends with `\n`.
///
/// # Returns
/// UTF-8 text with `ceil((width - 1) / 2)` cells per line
pub fn render_braille(binary: &Raster) -> Result<String> {
    let (width, height) = binary.dimensions();
    let cells = width.saturating_sub(1).div_ceil(2) as usize;
    let bands = height.saturating_sub(2).div_ceil(3) as usize;

    // 3 bytes per Braille glyph plus the line feed
    let mut out = String::with_capacity(bands * (cells * 3 + 1));

    for y in (0..height.saturating_sub(2)).step_by(3) {
        for x in (0..width.saturating_sub(1)).step_by(2) {
            out.push(braille_char(braille_cell(binary, x, y)?));
        }
        out.push('\n');
    }

    Ok(out)
}

/// Select the glyph for one pixel
///
/// Edges take priority over shading.
pub fn select_shade_char(edge_sample: u8, intensity: u8) -> char {
    match classify_edge(edge_sample) {
        Some(direction) => edge_char(direction),
        None => shade_char(intensity),
    }
}

/// Render a grayscale raster with shading blocks, overlaying edge glyphs
///
/// # Arguments
/// * `gray` - Source intensities
/// * `edges` - Edge map of the same shape (from `sobel_filter`)
///
/// # Returns
/// One line per raster row, one character per pixel, each line ending in `\n`
pub fn render_shade(gray: &Raster, edges: &Raster) -> Result<String> {
    if gray.dimensions() != edges.dimensions() {
        return Err(Error::DimensionMismatch {
            expected: gray.dimensions(),
            actual: edges.dimensions(),
        });
    }

    let (width, height) = gray.dimensions();
    // Shading glyphs take up to 3 bytes each
    let mut out = String::with_capacity(height as usize * (width as usize * 3 + 1));

    for y in 0..height {
        for x in 0..width {
            out.push(select_shade_char(edges.get(x, y)?, gray.get(x, y)?));
        }
        out.push('\n');
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edges::encode_direction;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_braille_cell_bit_layout() {
        let mut img = Raster::new(2, 3).unwrap();
        img.set(0, 0, 1).unwrap();
        assert_eq!(braille_cell(&img, 0, 0).unwrap(), 0b000001);

        let mut img = Raster::new(2, 3).unwrap();
        img.set(0, 2, 1).unwrap();
        img.set(1, 1, 1).unwrap();
        assert_eq!(braille_cell(&img, 0, 0).unwrap(), 0b010100);

        let mut img = Raster::new(2, 3).unwrap();
        img.set(1, 2, 1).unwrap();
        assert_eq!(braille_cell(&img, 0, 0).unwrap(), 0b100000);
    }

    #[test]
    fn test_braille_cell_out_of_bounds() {
        let img = Raster::new(2, 2).unwrap();
        assert!(matches!(braille_cell(&img, 0, 0), Err(Error::OutOfBounds { .. })));
    }

    #[test]
    fn test_braille_single_pixel_is_empty() {
        let img = Raster::filled(1, 1, 1).unwrap();
        assert_eq!(render_braille(&img).unwrap(), "");
    }

    #[test]
    fn test_braille_two_by_three_is_one_cell() {
        let img = Raster::filled(2, 3, 1).unwrap();
        assert_eq!(render_braille(&img).unwrap(), "\u{283F}\n");
    }

    #[test]
    fn test_braille_narrow_raster_emits_only_newlines() {
        let img = Raster::filled(1, 7, 1).unwrap();
        assert_eq!(render_braille(&img).unwrap(), "\n\n");

        let img = Raster::filled(9, 2, 1).unwrap();
        assert_eq!(render_braille(&img).unwrap(), "");
    }

    #[test]
    fn test_braille_six_by_six() {
        let img = Raster::new(6, 6).unwrap();
        let text = render_braille(&img).unwrap();
        let line: Vec<u8> = [0xE2u8, 0xA0, 0x80, 0xE2, 0xA0, 0x80, 0xE2, 0xA0, 0x80, 0x0A].to_vec();
        assert_eq!(text.as_bytes(), line.repeat(2).as_slice());
    }

    #[test]
    fn test_braille_partial_blocks_are_skipped() {
        // 5x5: cells at x = 0, 2 and a single band at y = 0
        let img = Raster::filled(5, 5, 1).unwrap();
        assert_eq!(render_braille(&img).unwrap(), "\u{283F}\u{283F}\n");
    }

    #[test]
    fn test_select_shade_char_prefers_edges() {
        assert_eq!(select_shade_char(encode_direction(FRAC_PI_2), 0), '|');
        assert_eq!(select_shade_char(0, 0), '█');
        assert_eq!(select_shade_char(0, 230), ' ');
    }

    #[test]
    fn test_shade_single_pixel() {
        let gray = Raster::filled(1, 1, 120).unwrap();
        let edges = Raster::new(1, 1).unwrap();
        assert_eq!(render_shade(&gray, &edges).unwrap(), "▒\n");
    }

    #[test]
    fn test_shade_columns_without_edges() {
        let data: Vec<u8> = [0, 85, 170, 255].repeat(4);
        let gray = Raster::from_raw(4, 4, data).unwrap();
        let edges = Raster::new(4, 4).unwrap();
        assert_eq!(render_shade(&gray, &edges).unwrap(), "█▓░ \n".repeat(4));
    }

    #[test]
    fn test_shade_dimension_mismatch() {
        let gray = Raster::new(3, 3).unwrap();
        let edges = Raster::new(3, 2).unwrap();
        assert!(matches!(
            render_shade(&gray, &edges),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}

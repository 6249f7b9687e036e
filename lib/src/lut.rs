//! Glyph lookup tables
//!
//! Braille patterns for the binary renderer, a five step block ramp for
//! shading and four orientation glyphs for edges.

use crate::edges::EdgeDirection;

/// Empty Braille pattern (U+2800); adding a 6-bit dot mask selects U+2800..U+283F
pub const BRAILLE_BASE: char = '\u{2800}';

/// Orientation glyphs, indexed by [`EdgeDirection::index`]
pub const EDGE_CHARS: [char; 4] = ['-', '/', '|', '\\'];

/// Shading glyphs from darkest to brightest
///
/// Each covers a band of 51 intensity levels; the last band also takes 255.
pub const SHADE_CHARS: [char; 5] = [
    '\u{2588}', // █ [0, 51)
    '\u{2593}', // ▓ [51, 102)
    '\u{2592}', // ▒ [102, 153)
    '\u{2591}', // ░ [153, 204)
    ' ',        //   [204, 256)
];

const SHADE_BAND: u8 = 51;

/// Braille character for a 6-dot mask
pub fn braille_char(dots: u8) -> char {
    char::from_u32(BRAILLE_BASE as u32 + (dots & 0x3F) as u32).unwrap_or(BRAILLE_BASE)
}

pub fn edge_char(direction: EdgeDirection) -> char {
    EDGE_CHARS[direction.index()]
}

/// Shading glyph for an intensity
pub fn shade_char(intensity: u8) -> char {
    let index = (intensity / SHADE_BAND).min(4) as usize;
    SHADE_CHARS[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_braille_char_range() {
        assert_eq!(braille_char(0), '\u{2800}');
        assert_eq!(braille_char(0x3F), '\u{283F}');
        assert_eq!(braille_char(0b001001), '\u{2809}');
    }

    #[test]
    fn test_braille_utf8_bytes() {
        let mut buf = [0u8; 4];
        assert_eq!(braille_char(0x3F).encode_utf8(&mut buf).as_bytes(), &[0xE2, 0xA0, 0xBF]);
        assert_eq!(braille_char(0).encode_utf8(&mut buf).as_bytes(), &[0xE2, 0xA0, 0x80]);
    }

    #[test]
    fn test_edge_chars() {
        assert_eq!(edge_char(EdgeDirection::Horizontal), '-');
        assert_eq!(edge_char(EdgeDirection::Diagonal1), '/');
        assert_eq!(edge_char(EdgeDirection::Vertical), '|');
        assert_eq!(edge_char(EdgeDirection::Diagonal2), '\\');
    }

    #[test]
    fn test_shade_band_edges() {
        assert_eq!(shade_char(0), '█');
        assert_eq!(shade_char(50), '█');
        assert_eq!(shade_char(51), '▓');
        assert_eq!(shade_char(101), '▓');
        assert_eq!(shade_char(102), '▒');
        assert_eq!(shade_char(152), '▒');
        assert_eq!(shade_char(153), '░');
        assert_eq!(shade_char(203), '░');
        assert_eq!(shade_char(204), ' ');
        assert_eq!(shade_char(255), ' ');
    }
}

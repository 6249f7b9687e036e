use crate::error::{Error, Result};
use crate::filters::luminance_fixed;
use crate::raster::Raster;
use ::png::{BitDepth, ColorType, Decoder, Transformations};
use log::debug;
use std::io::Read;

const WHITE: [u8; 3] = [255, 255, 255];

/// Decode a PNG stream of any standard color type and depth into a grayscale raster
///
/// Transforms applied before rows reach the raster:
/// - sub-byte gray and palettes expand to 8-bit gray / RGB
/// - `tRNS` becomes an alpha channel, 16-bit samples are stripped to 8
/// - alpha is composited onto the file's `bKGD` color, or white without one
/// - RGB is reduced with fixed-point BT.709 weights
pub fn decode_png<R: Read>(reader: R) -> Result<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut png_reader = decoder.read_info()?;

    let (width, height, background) = {
        let info = png_reader.info();
        let background = background_color(
            info.bkgd.as_deref(),
            info.color_type,
            info.bit_depth as u8,
            info.palette.as_deref(),
        );
        debug!(
            "png: {}x{}, {:?} at {} bits, background {:?}",
            info.width, info.height, info.color_type, info.bit_depth as u8, background
        );
        (info.width, info.height, background)
    };

    let (color, depth) = png_reader.output_color_type();
    if depth != BitDepth::Eight {
        return Err(Error::Decode {
            format: "PNG",
            message: format!("unsupported bit depth {} after transforms", depth as u8),
        });
    }

    let mut raster = Raster::new(width, height)?;

    let mut frame = Vec::new();
    let frame_len = png_reader.output_buffer_size();
    frame
        .try_reserve_exact(frame_len)
        .map_err(|_| Error::OutOfMemory { width, height })?;
    frame.resize(frame_len, 0);
    let output = png_reader.next_frame(&mut frame)?;

    // Each decoded line lands in the raster row starting at y * width
    let line_len = output.line_size.max(1);
    for (row, line) in raster.rows_mut().zip(frame.chunks_exact(line_len)) {
        gray_row(color, line, row, background)?;
    }

    Ok(raster)
}

/// Reduce one post-transform scanline to gray samples
fn gray_row(color: ColorType, line: &[u8], row: &mut [u8], background: [u8; 3]) -> Result<()> {
    match color {
        ColorType::Grayscale => row.copy_from_slice(&line[..row.len()]),
        ColorType::GrayscaleAlpha => {
            let bg = luminance_fixed(background[0], background[1], background[2]);
            for (pixel, ga) in row.iter_mut().zip(line.chunks_exact(2)) {
                *pixel = composite(ga[0], ga[1], bg);
            }
        }
        ColorType::Rgb => {
            for (pixel, rgb) in row.iter_mut().zip(line.chunks_exact(3)) {
                *pixel = luminance_fixed(rgb[0], rgb[1], rgb[2]);
            }
        }
        ColorType::Rgba => {
            for (pixel, rgba) in row.iter_mut().zip(line.chunks_exact(4)) {
                let a = rgba[3];
                *pixel = luminance_fixed(
                    composite(rgba[0], a, background[0]),
                    composite(rgba[1], a, background[1]),
                    composite(rgba[2], a, background[2]),
                );
            }
        }
        ColorType::Indexed => {
            return Err(Error::Decode {
                format: "PNG",
                message: "palette was not expanded".to_string(),
            });
        }
    }
    Ok(())
}

/// Blend `fg` with coverage `alpha` over `bg`, rounding to nearest
fn composite(fg: u8, alpha: u8, bg: u8) -> u8 {
    let a = alpha as u32;
    let blended = fg as u32 * a + bg as u32 * (255 - a);
    ((blended + 127) / 255) as u8
}

/// Interpret a `bKGD` payload as an 8-bit RGB color
fn background_color(
    chunk: Option<&[u8]>,
    color_type: ColorType,
    bit_depth: u8,
    palette: Option<&[u8]>,
) -> [u8; 3] {
    let Some(data) = chunk else {
        return WHITE;
    };

    match color_type {
        ColorType::Grayscale | ColorType::GrayscaleAlpha if data.len() >= 2 => {
            let gray = scale_sample(u16::from_be_bytes([data[0], data[1]]), bit_depth);
            [gray; 3]
        }
        ColorType::Rgb | ColorType::Rgba if data.len() >= 6 => [0, 2, 4]
            .map(|i| scale_sample(u16::from_be_bytes([data[i], data[i + 1]]), bit_depth)),
        ColorType::Indexed if !data.is_empty() => {
            let index = data[0] as usize * 3;
            palette
                .and_then(|p| p.get(index..index + 3))
                .map(|c| [c[0], c[1], c[2]])
                .unwrap_or(WHITE)
        }
        _ => WHITE,
    }
}

/// Scale a sample of `bit_depth` bits to 8 bits
fn scale_sample(value: u16, bit_depth: u8) -> u8 {
    match bit_depth {
        16 => (value >> 8) as u8,
        8 => value as u8,
        depth => {
            let max = (1u32 << depth) - 1;
            (value as u32).min(max) as u8 * (255 / max) as u8
        }
    }
}

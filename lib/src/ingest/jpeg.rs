use crate::error::{Error, Result};
use crate::filters::luminance;
use crate::raster::Raster;
use image::codecs::jpeg::JpegDecoder;
use image::{ColorType, ImageDecoder};
use log::debug;
use std::io::{BufRead, Seek};

/// Decode a JPEG stream into a grayscale raster
///
/// Grayscale JPEGs are copied through unchanged. Color JPEGs are decoded as
/// interleaved RGB and reduced with BT.709 weights, truncated to 8 bits.
pub fn decode_jpeg<R: BufRead + Seek>(reader: R) -> Result<Raster> {
    let decoder = JpegDecoder::new(reader)?;
    let (width, height) = decoder.dimensions();
    let color = decoder.color_type();
    let components = color.channel_count() as usize;
    debug!(
        "jpeg: {}x{}, {:?}, {} components",
        width, height, color, components
    );

    let grayscale = match color {
        ColorType::L8 => true,
        ColorType::Rgb8 => false,
        other => {
            return Err(Error::Decode {
                format: "JPEG",
                message: format!("unsupported output color type {other:?}"),
            });
        }
    };

    let mut raster = Raster::new(width, height)?;

    let oom = || Error::OutOfMemory { width, height };
    let len = usize::try_from(decoder.total_bytes()).map_err(|_| oom())?;
    let mut scratch = Vec::new();
    scratch.try_reserve_exact(len).map_err(|_| oom())?;
    scratch.resize(len, 0);
    decoder.read_image(&mut scratch)?;

    let line_len = (width as usize * components).max(1);
    for (row, scanline) in raster.rows_mut().zip(scratch.chunks_exact(line_len)) {
        if grayscale {
            row.copy_from_slice(&scanline[..row.len()]);
        } else {
            for (pixel, rgb) in row.iter_mut().zip(scanline.chunks_exact(3)) {
                *pixel = luminance(rgb[0], rgb[1], rgb[2]);
            }
        }
    }

    Ok(raster)
}

use crate::ascii::{render_braille, render_shade};
use crate::config::{RenderConfig, RenderMode};
use crate::error::{Error, Result};
use crate::filters::{otsu, sobel_filter};
use crate::ingest::load_raster;
use crate::raster::Raster;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Binarize with Otsu's threshold and render Braille cells
///
/// Pipeline:
/// 1. Histogram of the raster
/// 2. Otsu threshold maximizing between-class variance
/// 3. Binarize (`> threshold` becomes 1)
/// 4. Pack 2x3 blocks into Braille patterns
pub fn braille_pipeline(gray: &Raster) -> Result<String> {
    let (binary, _threshold) = otsu(gray)?;
    render_braille(&binary)
}

/// Detect Sobel edges and render shading blocks with orientation glyphs
///
/// # Arguments
/// * `gray` - Input grayscale raster
/// * `edge_threshold` - Sobel magnitude above which a pixel is an edge
pub fn shade_pipeline(gray: &Raster, edge_threshold: f64) -> Result<String> {
    let edges = sobel_filter(gray, edge_threshold)?;
    render_shade(gray, &edges)
}

/// Render a grayscale raster to text with the configured pipeline
pub fn process_raster(gray: &Raster, config: &RenderConfig) -> Result<String> {
    config.validate().map_err(Error::InvalidConfig)?;

    match config.mode {
        RenderMode::Braille => braille_pipeline(gray),
        RenderMode::Shade => shade_pipeline(gray, config.edge_threshold),
    }
}

/// Convert an image file into a text file
///
/// The input suffix selects the decoder; the output is created (or
/// truncated) only once rendering has succeeded.
///
/// # Errors
/// Any ingest, render or write failure; an invalid `config` is rejected
/// before the output is touched. A partial write is reported as
/// `Error::Write`.
pub fn convert_file(input: &Path, output: &Path, config: &RenderConfig) -> Result<()> {
    let gray = load_raster(input)?;
    let text = process_raster(&gray, config)?;
    info!(
        "rendered {:?}: {} lines, {} bytes",
        config.mode,
        text.lines().count(),
        text.len()
    );

    let mut file = File::create(output).map_err(|source| Error::Open {
        path: output.to_path_buf(),
        source,
    })?;
    let write_err = |source| Error::Write {
        path: output.to_path_buf(),
        source,
    };
    file.write_all(text.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    Ok(())
}

//! CLI argument parsing with clap.

use clap::{Parser, ValueEnum};
use img2ascii::{RenderConfig, RenderMode};
use std::path::PathBuf;

/// Default output path when none is given
pub const DEFAULT_OUTPUT: &str = "out.txt";

/// Convert a JPEG or PNG image into Braille or block-shaded text
#[derive(Parser, Debug)]
#[command(name = "img2ascii")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Input image (.jpg, .jpeg or .png)
    pub input: PathBuf,

    /// Output text file, created or truncated
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Renderer pipeline
    #[arg(long, short, default_value = "braille")]
    pub mode: Mode,

    /// Sobel magnitude above which a pixel is drawn as an edge (shade mode)
    #[arg(long, default_value_t = img2ascii::filters::DEFAULT_EDGE_THRESHOLD)]
    pub edge_threshold: f64,
}

/// Renderer pipeline choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Otsu threshold, 2x3 pixels per Braille glyph
    #[default]
    Braille,
    /// Shading blocks with Sobel edge glyphs, one glyph per pixel
    Shade,
}

impl From<Mode> for RenderMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Braille => RenderMode::Braille,
            Mode::Shade => RenderMode::Shade,
        }
    }
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            mode: self.mode.into(),
            edge_threshold: self.edge_threshold,
        }
    }
}

//! img2ascii - JPEG/PNG to text converter
//!
//! Images are reduced to one 8-bit grayscale raster, then rendered either as
//! Braille patterns (Otsu binarization, 2x3 pixels per glyph) or as shading
//! blocks overlaid with Sobel edge orientation glyphs (one glyph per pixel).
//!
//! # Example
//! ```no_run
//! use img2ascii::{RenderConfig, RenderMode, convert_file};
//! use std::path::Path;
//!
//! let config = RenderConfig {
//!     mode: RenderMode::Shade,
//!     ..Default::default()
//! };
//! convert_file(Path::new("photo.jpg"), Path::new("out.txt"), &config).unwrap();
//! ```

pub mod ascii;
pub mod config;
pub mod edges;
pub mod error;
pub mod filters;
pub mod ingest;
pub mod lut;
pub mod processor;
pub mod raster;

// Re-export main types for convenience
pub use config::{RenderConfig, RenderMode};
pub use error::{Error, Result};
pub use ingest::{ImageFormat, load_raster};
pub use processor::{braille_pipeline, convert_file, process_raster, shade_pipeline};
pub use raster::Raster;

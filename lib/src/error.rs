//! Error type shared by ingestion, rendering and output.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the conversion pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input suffix is not `.jpg`, `.jpeg` or `.png`
    #[error("Unsupported file type: {}", .path.display())]
    UnsupportedFile { path: PathBuf },

    /// Input could not be opened for reading, or output for writing
    #[error("Cannot open file \"{}\": {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The decoder rejected the stream
    #[error("Failed to decode {format} image: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    /// A raster or scratch buffer could not be allocated
    #[error("Not enough memory for a {width}x{height} raster")]
    OutOfMemory { width: u32, height: u32 },

    /// Raster access outside its bounds
    #[error("Indices out of range: ({x}, {y}) outside {width}x{height} raster")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Two rasters that must share a shape do not
    #[error("Raster dimensions differ: {expected:?} vs {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// A raw sample buffer does not hold `width * height` samples
    #[error("Buffer holds {actual} samples, expected {expected} for {width}x{height}")]
    BufferLength {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Short write or stream error on the output sink
    #[error("Error while writing output \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Render configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<png::DecodingError> for Error {
    fn from(err: png::DecodingError) -> Self {
        Error::Decode {
            format: "PNG",
            message: err.to_string(),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Decode {
            format: "JPEG",
            message: err.to_string(),
        }
    }
}

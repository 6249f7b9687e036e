//! Image ingestion
//!
//! Decodes JPEG and PNG streams into a single canonical 8-bit grayscale
//! [`Raster`], whatever the source color model or bit depth.

pub mod jpeg;
pub mod png;

use crate::error::{Error, Result};
use crate::raster::Raster;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// Input formats recognized by file suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Detect the format from the lowercased suffix of `path`
    ///
    /// Accepts `.jpg`, `.jpeg` and `.png`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_lowercase();
        if name.ends_with(".jpg") || name.ends_with(".jpeg") {
            Some(ImageFormat::Jpeg)
        } else if name.ends_with(".png") {
            Some(ImageFormat::Png)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "JPEG",
            ImageFormat::Png => "PNG",
        }
    }
}

/// Decode a stream of the given format into a grayscale raster
pub fn decode<R: BufRead + Seek>(reader: R, format: ImageFormat) -> Result<Raster> {
    match format {
        ImageFormat::Jpeg => jpeg::decode_jpeg(reader),
        ImageFormat::Png => png::decode_png(reader),
    }
}

/// Check the suffix, open `path` and decode it
///
/// # Errors
/// * `UnsupportedFile` - suffix is not a JPEG or PNG one
/// * `Open` - the file cannot be opened for reading
/// * `Decode` / `OutOfMemory` - from the format decoder
pub fn load_raster(path: &Path) -> Result<Raster> {
    let format = ImageFormat::from_path(path).ok_or_else(|| Error::UnsupportedFile {
        path: path.to_path_buf(),
    })?;

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let raster = decode(BufReader::new(file), format)?;
    info!(
        "loaded {} {} as {}x{} grayscale",
        format.name(),
        path.display(),
        raster.width(),
        raster.height()
    );
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_suffix() {
        assert_eq!(ImageFormat::from_path(Path::new("a.jpg")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("a.jpeg")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("dir/a.png")), Some(ImageFormat::Png));
    }

    #[test]
    fn test_format_suffix_is_case_insensitive() {
        assert_eq!(ImageFormat::from_path(Path::new("PHOTO.JPG")), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_path(Path::new("Scan.Png")), Some(ImageFormat::Png));
    }

    #[test]
    fn test_format_rejects_other_suffixes() {
        for name in ["photo.bmp", "photo.jpg.txt", "png", "photo", "photo.gif"] {
            assert_eq!(ImageFormat::from_path(Path::new(name)), None, "{name}");
        }
    }

    #[test]
    fn test_load_unsupported_before_open() {
        let err = load_raster(Path::new("does-not-exist.bmp")).unwrap_err();
        assert!(matches!(err, Error::UnsupportedFile { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let path = PathBuf::from("definitely-missing-input.jpg");
        let err = load_raster(&path).unwrap_err();
        assert!(matches!(err, Error::Open { .. }));
        assert!(err.to_string().contains("Cannot open file"));
    }
}

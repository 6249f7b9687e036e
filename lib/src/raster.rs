//! Owned 8-bit grayscale raster
//!
//! Samples are stored row-major in one contiguous buffer of exactly
//! `width * height` bytes. `0` is black, `255` is white.

use crate::error::{Error, Result};
use std::iter::Copied;
use std::slice::{ChunksExact, ChunksExactMut, Iter};

/// Rectangular single-channel image with fixed dimensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Allocate a black raster
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Allocate a raster with every sample set to `fill`
    ///
    /// # Errors
    /// `OutOfMemory` when `width * height` overflows or the allocation fails.
    pub fn filled(width: u32, height: u32, fill: u8) -> Result<Self> {
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::OutOfMemory { width, height })?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| Error::OutOfMemory { width, height })?;
        data.resize(size, fill);

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap an existing row-major buffer
    ///
    /// Returns `BufferLength` if `data` does not hold exactly
    /// `width * height` samples, or `OutOfMemory` if that product overflows.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::OutOfMemory { width, height })?;
        if expected != data.len() {
            return Err(Error::BufferLength {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Sample at `(x, y)`
    pub fn get(&self, x: u32, y: u32) -> Result<u8> {
        let idx = self.index(x, y)?;
        Ok(self.data[idx])
    }

    /// Replace the sample at `(x, y)`, returning the previous value
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<u8> {
        let idx = self.index(x, y)?;
        Ok(std::mem::replace(&mut self.data[idx], value))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of samples (`width * height`)
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// All samples in row-major order
    ///
    /// The iterator is `Clone`, so a sequence can be restarted from any
    /// saved position.
    pub fn iter(&self) -> Copied<Iter<'_, u8>> {
        self.data.iter().copied()
    }

    /// One slice per row, top to bottom
    pub fn rows(&self) -> ChunksExact<'_, u8> {
        self.data.chunks_exact(self.row_len())
    }

    /// Mutable row slices into the raster's own buffer, top to bottom
    pub fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let row_len = self.row_len();
        self.data.chunks_exact_mut(row_len)
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Apply `f` to every sample, producing a new raster of the same shape
    pub fn map<F>(&self, mut f: F) -> Result<Raster>
    where
        F: FnMut(u8) -> u8,
    {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| Error::OutOfMemory {
                width: self.width,
                height: self.height,
            })?;
        data.extend(self.data.iter().map(|&v| f(v)));

        Ok(Raster {
            width: self.width,
            height: self.height,
            data,
        })
    }

    fn row_len(&self) -> usize {
        // chunks_exact rejects a zero chunk size; an empty buffer yields no rows anyway
        (self.width as usize).max(1)
    }

    fn index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

impl<'a> IntoIterator for &'a Raster {
    type Item = u8;
    type IntoIter = Copied<Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_raster_has_fill_value() {
        for (w, h) in [(0, 0), (0, 5), (1, 1), (7, 3), (64, 48)] {
            let raster = Raster::filled(w, h, 42).unwrap();
            assert_eq!(raster.size(), (w * h) as usize);
            assert!(raster.iter().all(|v| v == 42));
        }
    }

    #[test]
    fn test_new_is_black() {
        let raster = Raster::new(4, 4).unwrap();
        assert!(raster.iter().all(|v| v == 0));
    }

    #[test]
    fn test_set_returns_previous_and_get_reads_back() {
        let mut raster = Raster::filled(3, 2, 9).unwrap();
        assert_eq!(raster.set(2, 1, 200).unwrap(), 9);
        assert_eq!(raster.get(2, 1).unwrap(), 200);
        assert_eq!(raster.set(2, 1, 7).unwrap(), 200);
        assert_eq!(raster.get(2, 1).unwrap(), 7);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut raster = Raster::new(3, 2).unwrap();
        assert!(matches!(
            raster.get(3, 0),
            Err(Error::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(matches!(raster.get(0, 2), Err(Error::OutOfBounds { .. })));
        assert!(matches!(raster.set(5, 5, 1), Err(Error::OutOfBounds { .. })));

        let empty = Raster::new(0, 0).unwrap();
        assert!(empty.get(0, 0).is_err());
    }

    #[test]
    fn test_row_major_layout() {
        let raster = Raster::from_raw(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(raster.get(0, 1).unwrap(), 3);
        assert_eq!(raster.get(2, 0).unwrap(), 2);

        let rows: Vec<&[u8]> = raster.rows().collect();
        assert_eq!(rows, vec![&[0, 1, 2][..], &[3, 4, 5][..]]);
    }

    #[test]
    fn test_rows_mut_writes_into_buffer() {
        let mut raster = Raster::new(2, 3).unwrap();
        for (y, row) in raster.rows_mut().enumerate() {
            row.fill(y as u8 + 1);
        }
        assert_eq!(raster.as_raw(), &[1, 1, 2, 2, 3, 3]);
    }

    #[test]
    fn test_iter_is_restartable() {
        let raster = Raster::from_raw(2, 2, vec![10, 20, 30, 40]).unwrap();
        let iter = raster.iter();
        let first: Vec<u8> = iter.clone().collect();
        let second: Vec<u8> = iter.collect();
        assert_eq!(first, second);
        assert_eq!((&raster).into_iter().sum::<u8>(), 100);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        assert!(matches!(
            Raster::from_raw(2, 2, vec![0; 3]),
            Err(Error::BufferLength {
                expected: 4,
                actual: 3,
                ..
            })
        ));

        let err = Raster::from_raw(3, 1, Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Buffer holds 0 samples, expected 3 for 3x1");
    }

    #[test]
    fn test_map_leaves_source_untouched() {
        let raster = Raster::from_raw(2, 1, vec![1, 2]).unwrap();
        let doubled = raster.map(|v| v * 2).unwrap();
        assert_eq!(doubled.as_raw(), &[2, 4]);
        assert_eq!(raster.as_raw(), &[1, 2]);
    }

    #[test]
    fn test_overflowing_dimensions_report_oom() {
        assert!(matches!(
            Raster::new(u32::MAX, u32::MAX),
            Err(Error::OutOfMemory { .. })
        ));
    }
}

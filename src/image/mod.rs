//! Owned RGB pixel grids.
//!
//! `PixelGrid` stores interleaved 8-bit RGB samples in row-major order, so the
//! sample for `(x, y, channel)` lives at `(y * width + x) * 3 + channel`. Grids
//! with zero width or height are representable; operations that need pixels
//! reject them with `ChromaError::EmptyGrid`.

use crate::util::{ChromaError, ChromaResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Number of interleaved channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Owned 3-channel 8-bit image indexed by column `x` and row `y`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelGrid {
    /// Wraps an interleaved RGB buffer of exactly `width * height * 3` bytes.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> ChromaResult<Self> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(ChromaError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a grid where every pixel has the value `rgb`.
    pub fn filled(width: usize, height: usize, rgb: [u8; 3]) -> ChromaResult<Self> {
        let len = buffer_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ChromaError::InvalidDimensions { width, height })?;
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Self::new(data, width, height)
    }

    /// Allocates a black grid, reporting allocation failure as an error.
    pub(crate) fn zeroed(width: usize, height: usize) -> ChromaResult<Self> {
        let len = buffer_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| ChromaError::InvalidDimensions { width, height })?;
        data.resize(len, 0);
        Self::new(data, width, height)
    }

    /// Builds a grid from rows of RGB triples (`rows[y][x]`).
    ///
    /// Every row must have the same number of columns.
    pub fn from_rows<R: AsRef<[[u8; 3]]>>(rows: &[R]) -> ChromaResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(buffer_len(width, height)?);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(ChromaError::RaggedRows {
                    row: y,
                    expected: width,
                    got: row.len(),
                });
            }
            for px in row {
                data.extend_from_slice(px);
            }
        }
        Self::new(data, width, height)
    }

    /// Returns the grid width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `true` when the grid has zero area.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the interleaved RGB buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the grid and returns the interleaved RGB buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * CHANNELS;
        let px = self.data.get(idx..idx + CHANNELS)?;
        Some([px[0], px[1], px[2]])
    }

    /// Returns the interleaved samples of row `y` (`width * 3` bytes).
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width * CHANNELS;
        self.data.get(y * stride..(y + 1) * stride)
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| [px[0], px[1], px[2]])
    }

    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        let stride = (self.width * CHANNELS).max(1);
        self.data.chunks_exact_mut(stride)
    }

    #[cfg(feature = "rayon")]
    pub(crate) fn par_rows_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, u8> {
        use rayon::prelude::*;
        let stride = (self.width * CHANNELS).max(1);
        self.data.par_chunks_exact_mut(stride)
    }
}

fn buffer_len(width: usize, height: usize) -> ChromaResult<usize> {
    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(CHANNELS))
        .ok_or(ChromaError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::PixelGrid;
    use crate::util::ChromaError;

    #[test]
    fn from_rows_interleaves_channels() {
        let grid = PixelGrid::from_rows(&[
            vec![[1, 2, 3], [4, 5, 6]],
            vec![[7, 8, 9], [10, 11, 12]],
        ])
        .unwrap();
        assert_eq!((grid.width(), grid.height()), (2, 2));
        assert_eq!(grid.as_raw(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
        assert_eq!(grid.get(1, 1), Some([10, 11, 12]));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.row(1).unwrap(), &[7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let err = PixelGrid::from_rows(&[vec![[0u8; 3]; 3], vec![[0u8; 3]; 2]]).unwrap_err();
        assert_eq!(
            err,
            ChromaError::RaggedRows {
                row: 1,
                expected: 3,
                got: 2,
            }
        );
    }

    #[test]
    fn new_rejects_wrong_buffer_length() {
        let err = PixelGrid::new(vec![0u8; 11], 2, 2).unwrap_err();
        assert_eq!(
            err,
            ChromaError::BufferSizeMismatch {
                expected: 12,
                got: 11,
            }
        );
    }

    #[test]
    fn zero_area_grids_are_representable() {
        let grid = PixelGrid::new(Vec::new(), 0, 5).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.pixels().count(), 0);
        assert!(PixelGrid::from_rows::<Vec<[u8; 3]>>(&[]).unwrap().is_empty());
    }

    #[test]
    fn zeroed_reports_unsatisfiable_allocations() {
        let (width, height) = (1usize << 40, 1usize << 21);
        assert_eq!(
            PixelGrid::zeroed(width, height).unwrap_err(),
            ChromaError::InvalidDimensions { width, height }
        );
        let grid = PixelGrid::zeroed(2, 3).unwrap();
        assert!(grid.pixels().all(|px| px == [0, 0, 0]));
    }

    #[test]
    fn rows_mut_covers_every_row() {
        let mut grid = PixelGrid::filled(3, 4, [9, 9, 9]).unwrap();
        assert_eq!(grid.rows_mut().count(), 4);
        for row in grid.rows_mut() {
            assert_eq!(row.len(), 9);
        }
    }
}

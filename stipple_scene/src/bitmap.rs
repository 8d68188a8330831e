// Copyright 2026 the Stipple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable grids of palette indices.

use alloc::vec::Vec;

use kurbo::Shape;

/// Errors from building a [`Bitmap`] out of caller-supplied rows.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BitmapError {
    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The bitmap is wider or taller than `u32::MAX` cells.
    #[error("bitmap dimensions exceed u32::MAX")]
    TooLarge,
}

/// A rectangular grid of palette indices, stored row-major.
///
/// Bitmaps may be empty (zero rows or zero columns).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from row-major `cells`.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`. Use [`Bitmap::from_rows`] for
    /// input whose shape has not been checked.
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Self {
        let expected = u64::from(width) * u64::from(height);
        assert!(
            u64::try_from(cells.len()).is_ok_and(|n| n == expected),
            "bitmap of {width}x{height} needs {expected} cells, got {}",
            cells.len()
        );
        Self {
            width,
            height,
            cells,
        }
    }

    /// Create a bitmap from rows of indices, checking that every row has the same length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BitmapError> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(BitmapError::RaggedRow {
                    row,
                    expected,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        let width = u32::try_from(expected).map_err(|_| BitmapError::TooLarge)?;
        let height = u32::try_from(rows.len()).map_err(|_| BitmapError::TooLarge)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Rasterize a shape into a `width` x `height` bitmap.
    ///
    /// A cell is set to `index` when the shape contains the cell's center and
    /// left at `0` otherwise. The shape is in bitmap-local coordinates.
    pub fn from_shape(shape: &impl Shape, width: u32, height: u32, index: u8) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let center = kurbo::Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                cells.push(if shape.contains(center) { index } else { 0 });
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the bitmap has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The index at column `x`, row `y`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = y as usize * self.width as usize + x as usize;
        self.cells.get(i).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_rows_row_major() {
        let bm = Bitmap::from_rows(&[[1_u8, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!((bm.width(), bm.height()), (3, 2));
        assert_eq!(bm.get(2, 0), Some(3));
        assert_eq!(bm.get(0, 1), Some(4));
        assert_eq!(bm.get(3, 0), None);
        assert_eq!(bm.get(0, 2), None);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let rows: [&[u8]; 3] = [&[1, 1], &[1, 1], &[1]];
        let err = Bitmap::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            BitmapError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_rows_make_empty_bitmap() {
        let rows: [&[u8]; 0] = [];
        let bm = Bitmap::from_rows(&rows).unwrap();
        assert!(bm.is_empty());
        assert_eq!((bm.width(), bm.height()), (0, 0));
        assert_eq!(bm.get(0, 0), None);
    }

    #[test]
    #[should_panic(expected = "needs 4 cells")]
    fn new_asserts_shape() {
        let _ = Bitmap::new(2, 2, vec![0; 3]);
    }

    #[test]
    fn circle_rasterizes_inside_cells() {
        let bm = Bitmap::from_shape(&kurbo::Circle::new((5.0, 5.0), 5.0), 10, 10, 7);
        assert_eq!(bm.get(5, 5), Some(7));
        assert_eq!(bm.get(0, 0), Some(0));
        assert_eq!(bm.get(9, 9), Some(0));
        assert_eq!(bm.get(0, 5), Some(7));
    }
}

#![forbid(unsafe_code)]

//! The rectangular cell grid handed to the generators.
//!
//! A `Grid` is a row-major snapshot: the editor layer builds or clones one,
//! passes a shared reference into a generation call, and the generators never
//! mutate it. Rectangularity is enforced once, at the construction boundary,
//! so the scan loops can index without per-cell checks.

use std::fmt;

use crate::cell::Cell;

/// Construction errors for [`Grid`]. A jagged input is a caller bug surfaced
/// at the boundary rather than mid-generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differed from the first row's.
    Jagged {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length actually found.
        found: usize,
    },
    /// A flat cell vector did not match `width * height`.
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length actually found.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jagged {
                row,
                expected,
                found,
            } => write!(
                f,
                "jagged grid: row {row} has {found} cells, expected {expected}"
            ),
            Self::SizeMismatch { expected, found } => {
                write!(f, "cell count {found} does not match width*height {expected}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Row-major rectangular matrix of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a blank `width x height` grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    /// Build a grid from per-row cell vectors, validating rectangularity.
    ///
    /// An empty row list yields the 0x0 grid (which generates empty output).
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(width * height);
        for (row, cols) in rows.into_iter().enumerate() {
            if cols.len() != width {
                return Err(GridError::Jagged {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend(cols);
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build a grid from a flat row-major cell vector.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Result<Self, GridError> {
        if cells.len() != width * height {
            return Err(GridError::SizeMismatch {
                expected: width * height,
                found: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// Overwrite the cell at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    /// The cells of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    #[must_use]
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.width..(y + 1) * self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.width.max(1)).take(self.height)
    }
}

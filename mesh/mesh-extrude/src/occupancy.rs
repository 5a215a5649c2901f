//! Binary occupancy matrix.

use std::fmt;
use std::str::FromStr;

use crate::error::{ExtrudeError, ExtrudeResult};

/// A `rows × cols` grid of on/off cells, row-major, origin at top-left.
///
/// Rows map to Y and columns map to X when extruded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl OccupancyMatrix {
    /// An all-empty matrix.
    ///
    /// # Errors
    ///
    /// [`ExtrudeError::EmptyMatrix`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> ExtrudeResult<Self> {
        Self::from_fn(rows, cols, |_, _| false)
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    ///
    /// # Errors
    ///
    /// [`ExtrudeError::EmptyMatrix`] if either dimension is zero.
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut f: impl FnMut(usize, usize) -> bool,
    ) -> ExtrudeResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(ExtrudeError::EmptyMatrix { rows, cols });
        }
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// [`ExtrudeError::EmptyMatrix`] for no rows or empty rows,
    /// [`ExtrudeError::RaggedRows`] if rows differ in length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> ExtrudeResult<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        if rows.is_empty() || cols == 0 {
            return Err(ExtrudeError::EmptyMatrix {
                rows: rows.len(),
                cols,
            });
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(ExtrudeError::RaggedRows {
                    row: index,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `max(rows, cols)`, the side of the square the matrix is fitted into.
    #[must_use]
    pub fn span(&self) -> usize {
        self.rows.max(self.cols)
    }

    /// Cell value, or `None` outside the matrix.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        (row < self.rows && col < self.cols).then(|| self.cells[row * self.cols + col])
    }

    /// Set a cell. Returns `false` if `(row, col)` is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
            true
        } else {
            false
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn count_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// `(row, col)` of every occupied cell, in row-major order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(move |(index, _)| (index / cols, index % cols))
    }

    /// Copy surrounded by `border` empty cells on every side.
    ///
    /// # Errors
    ///
    /// [`ExtrudeError::PaddingOverflow`] if the padded cell count does not
    /// fit in memory.
    pub fn padded(&self, border: usize) -> ExtrudeResult<Self> {
        let overflow = || ExtrudeError::PaddingOverflow {
            rows: self.rows,
            cols: self.cols,
            border,
        };
        let grow = border.checked_mul(2).ok_or_else(overflow)?;
        let rows = self.rows.checked_add(grow).ok_or_else(overflow)?;
        let cols = self.cols.checked_add(grow).ok_or_else(overflow)?;
        let len = rows
            .checked_mul(cols)
            .filter(|&len| isize::try_from(len).is_ok())
            .ok_or_else(overflow)?;

        let mut cells = vec![false; len];
        for (row, col) in self.iter_occupied() {
            cells[(row + border) * cols + col + border] = true;
        }
        Ok(Self { rows, cols, cells })
    }
}

/// Parses one row per line; `#` or `1` is occupied, `.` or `0` is empty.
/// Blank lines and surrounding whitespace are ignored.
impl FromStr for OccupancyMatrix {
    type Err = ExtrudeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '#' | '1' => Ok(true),
                        '.' | '0' => Ok(false),
                        other => Err(ExtrudeError::InvalidCell(other)),
                    })
                    .collect::<ExtrudeResult<Vec<_>>>()
            })
            .collect::<ExtrudeResult<Vec<_>>>()?;
        Self::from_rows(&rows)
    }
}

impl fmt::Display for OccupancyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

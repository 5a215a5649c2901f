//! Error types for extrusion.

use thiserror::Error;

/// Result type for extrusion operations.
pub type ExtrudeResult<T> = Result<T, ExtrudeError>;

/// Errors that can occur while building or extruding an occupancy matrix.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtrudeError {
    /// Footprint must be a positive, finite length.
    #[error("footprint must be positive, got {0} mm")]
    InvalidFootprint(f64),

    /// Extrusion height must be a positive, finite length.
    #[error("extrusion height must be positive, got {0} mm")]
    InvalidHeight(f64),

    /// Matrix with zero rows or zero columns.
    #[error("occupancy matrix must be at least 1x1, got {rows}x{cols}")]
    EmptyMatrix {
        /// Row count.
        rows: usize,
        /// Column count.
        cols: usize,
    },

    /// Rows of different lengths.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// Character other than `#`, `1`, `.`, `0` in a textual matrix.
    #[error("unexpected cell character {0:?}")]
    InvalidCell(char),

    /// Padding would grow the matrix past addressable memory.
    #[error("cannot pad {rows}x{cols} matrix by {border} cells")]
    PaddingOverflow {
        /// Row count before padding.
        rows: usize,
        /// Column count before padding.
        cols: usize,
        /// Requested border width.
        border: usize,
    },
}

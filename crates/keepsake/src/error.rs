//! Error types for the keepsake pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for pipeline operations.
pub type KeepsakeResult<T> = Result<T, KeepsakeError>;

/// Any failure while building a keepsake model.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KeepsakeError {
    /// Configuration file could not be read or parsed.
    #[error("cannot load config {path}: {message}")]
    Config {
        /// Config file path.
        path: PathBuf,
        /// What went wrong.
        message: String,
    },

    /// Configuration values that cannot produce a model.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An output directory could not be created.
    #[error("cannot create output directory {path}")]
    OutputDir {
        /// Directory that was being created.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading or writing a mesh file failed.
    #[error(transparent)]
    Io(#[from] mesh_io::IoError),

    /// QR symbol could not be encoded.
    #[error(transparent)]
    Qr(#[from] qr_matrix::QrError),

    /// QR plaque could not be extruded.
    #[error(transparent)]
    Extrude(#[from] mesh_extrude::ExtrudeError),

    /// Board assets or FEN position were unusable.
    #[error(transparent)]
    Placement(#[from] chess_placement::PlacementError),

    /// Plaque could not be registered onto the board.
    #[error(transparent)]
    Composite(#[from] mesh_composite::CompositeError),
}

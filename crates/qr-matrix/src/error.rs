//! Error types for QR encoding.

use thiserror::Error;

/// Result type for QR encoding.
pub type QrResult<T> = Result<T, QrError>;

/// Errors that can occur while encoding a QR symbol.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QrError {
    /// The encoder rejected the data, e.g. too long even for version 40.
    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// Requested version outside 1..=40.
    #[error("QR version must be in 1..=40, got {0}")]
    InvalidVersion(i16),

    /// Quiet zone wider than [`MAX_BORDER`](crate::MAX_BORDER) modules.
    #[error("QR border must be at most {max} modules, got {0}", max = crate::MAX_BORDER)]
    InvalidBorder(usize),

    /// The encoder produced a symbol that does not fit a matrix.
    #[error(transparent)]
    Matrix(#[from] mesh_extrude::ExtrudeError),
}

//! Error types for registration.

use mesh_types::Axis;
use thiserror::Error;

/// Result type for compositing operations.
pub type CompositeResult<T> = Result<T, CompositeError>;

/// Errors that can occur while registering a mesh into a region.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompositeError {
    /// A bounding box has no usable extent along the axis a scale factor is
    /// computed from.
    #[error("degenerate geometry: extent along {axis} is {extent}")]
    DegenerateGeometry {
        /// Axis the scale was measured along.
        axis: Axis,
        /// Measured extent.
        extent: f64,
    },

    /// The mesh to register has no vertices.
    #[error("cannot register an empty mesh")]
    EmptyMesh,
}

//! Board frame geometry.

use mesh_types::{Aabb, Axis, Point3};

use crate::error::{PlacementError, PlacementResult};
use crate::square::Square;

/// Where the 64 squares of the board mesh are.
///
/// The board is split into an 8×8 grid over its XY bounds. Rank 8 (row 0)
/// is at the far (max Y) edge and file a at min X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    /// Board extents. Default: x ∈ [-8, 8], y ∈ [-1, 15], z ∈ [-1, 1]
    pub bounds: Aabb,

    /// Top of squares where `column + row` is even. Default: 1.0
    pub raised_z: f64,

    /// Top of squares where `column + row` is odd. Default: 0.7
    pub lowered_z: f64,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self {
            bounds: Aabb::from_ranges([-8.0, 8.0], [-1.0, 15.0], [-1.0, 1.0]),
            raised_z: 1.0,
            lowered_z: 0.7,
        }
    }
}

impl BoardGeometry {
    /// Geometry over `bounds` with the default square heights.
    #[must_use]
    pub fn from_bounds(bounds: Aabb) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Set the square heights.
    #[must_use]
    pub const fn with_heights(mut self, raised_z: f64, lowered_z: f64) -> Self {
        self.raised_z = raised_z;
        self.lowered_z = lowered_z;
        self
    }

    /// Check the bounds have positive XY extent and heights are finite.
    ///
    /// # Errors
    ///
    /// [`PlacementError::InvalidBoardBounds`] describing the problem.
    pub fn validate(&self) -> PlacementResult<()> {
        for axis in [Axis::X, Axis::Y] {
            let extent = self.bounds.extent(axis);
            if !(extent.is_finite() && extent > 0.0) {
                return Err(PlacementError::InvalidBoardBounds(format!(
                    "extent along {axis} is {extent}"
                )));
            }
        }
        if !(self.raised_z.is_finite() && self.lowered_z.is_finite()) {
            return Err(PlacementError::InvalidBoardBounds(format!(
                "square heights {} / {} are not finite",
                self.raised_z, self.lowered_z
            )));
        }
        Ok(())
    }

    /// Width (X) and depth (Y) of one square.
    #[must_use]
    pub fn square_size(&self) -> (f64, f64) {
        (
            self.bounds.extent(Axis::X) / 8.0,
            self.bounds.extent(Axis::Y) / 8.0,
        )
    }

    /// Top-center of `square`.
    ///
    /// `x = minX + w·(column + 0.5)`, `y = minY + d·(7 - row + 0.5)`, and
    /// `z` is the raised or lowered height by square parity.
    #[must_use]
    pub fn square_center(&self, square: Square) -> Point3<f64> {
        let (w, d) = self.square_size();
        let column = f64::from(square.column());
        let row = f64::from(square.row());
        let z = if square.is_raised() {
            self.raised_z
        } else {
            self.lowered_z
        };
        Point3::new(
            self.bounds.min.x + w * (column + 0.5),
            self.bounds.min.y + d * (7.0 - row + 0.5),
            z,
        )
    }
}

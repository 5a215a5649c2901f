//! Registration parameters.

use std::f64::consts::PI;

use mesh_types::Aabb;

/// Where and how an overlay mesh is fitted onto a base mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegistrationParams {
    /// Region the overlay is fitted into.
    ///
    /// Only the X width, the XY center and the minimum Z are used; the
    /// overlay keeps its own aspect ratio.
    /// Default: x ∈ [-8, 8], y ∈ [-1, 15], z ∈ [-2.2, 1] (board-local units)
    pub target: Aabb,

    /// Rotation about X applied before scaling, in radians. Default: π
    pub rotation_x: f64,
}

impl Default for RegistrationParams {
    fn default() -> Self {
        Self {
            target: Aabb::from_ranges([-8.0, 8.0], [-1.0, 15.0], [-2.2, 1.0]),
            rotation_x: PI,
        }
    }
}

impl RegistrationParams {
    /// Params fitting into `target` with the default half-turn.
    #[must_use]
    pub fn new(target: Aabb) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Set the target region.
    #[must_use]
    pub const fn with_target(mut self, target: Aabb) -> Self {
        self.target = target;
        self
    }

    /// Set the rotation about X.
    #[must_use]
    pub const fn with_rotation_x(mut self, radians: f64) -> Self {
        self.rotation_x = radians;
        self
    }
}

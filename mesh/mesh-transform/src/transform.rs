//! 3D transformation matrix operations.

use mesh_types::{IndexedMesh, Point3};
use nalgebra::{Matrix3, Matrix4, Vector3};

/// A 3D affine transformation stored as a homogeneous 4×4 matrix.
///
/// # Example
///
/// ```
/// use mesh_transform::Transform3D;
/// use mesh_types::Point3;
///
/// let t = Transform3D::uniform_scale(2.0);
/// assert_eq!(t.transform_point(&Point3::new(1.0, 2.0, 3.0)), Point3::new(2.0, 4.0, 6.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform3D {
    matrix: Matrix4<f64>,
}

impl Default for Transform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform3D {
    /// Embed a 3×3 linear map (rotation, scale) with no translation.
    #[must_use]
    pub fn from_linear(linear: Matrix3<f64>) -> Self {
        Self {
            matrix: linear.to_homogeneous(),
        }
    }

    /// The identity transformation.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by a vector.
    #[must_use]
    pub fn from_translation(offset: Vector3<f64>) -> Self {
        Self {
            matrix: Matrix4::new_translation(&offset),
        }
    }

    /// Uniform scale about the origin.
    #[must_use]
    pub fn uniform_scale(factor: f64) -> Self {
        Self {
            matrix: Matrix4::new_scaling(factor),
        }
    }

    /// Rotation about the X axis by `angle` radians.
    ///
    /// Uses the standard right-handed matrix
    /// `[[1, 0, 0], [0, cos, -sin], [0, sin, cos]]`.
    #[must_use]
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let linear = Matrix3::new(
            1.0, 0.0, 0.0,
            0.0,   c,  -s,
            0.0,   s,   c,
        );
        Self::from_linear(linear)
    }

    /// `false` when the linear part mirrors space (negative determinant).
    #[must_use]
    pub fn preserves_orientation(&self) -> bool {
        self.matrix.fixed_view::<3, 3>(0, 0).determinant() >= 0.0
    }

    /// Transform a point, including translation.
    #[must_use]
    pub fn transform_point(&self, point: &Point3<f64>) -> Point3<f64> {
        let h = self.matrix * point.to_homogeneous();
        Point3::new(h.x, h.y, h.z)
    }

    /// Transform an owned mesh in place and hand it back.
    ///
    /// Mirroring transforms reverse every face so normals keep pointing
    /// outward.
    #[must_use]
    pub fn apply(&self, mut mesh: IndexedMesh) -> IndexedMesh {
        for vertex in &mut mesh.vertices {
            vertex.position = self.transform_point(&vertex.position);
        }
        if !self.preserves_orientation() {
            for face in &mut mesh.faces {
                face.swap(1, 2);
            }
        }
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::{MeshBounds, cuboid};
    use std::f64::consts::PI;

    #[test]
    fn translation_moves_points() {
        let t = Transform3D::from_translation(Vector3::new(10.0, 20.0, 30.0));
        assert_eq!(
            t.transform_point(&Point3::new(1.0, 2.0, 3.0)),
            Point3::new(11.0, 22.0, 33.0)
        );
        assert!(t.preserves_orientation());
    }

    #[test]
    fn rotation_x_half_turn_flips_y_and_z() {
        let t = Transform3D::rotation_x(PI);
        let p = t.transform_point(&Point3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(p, Point3::new(1.0, -2.0, -3.0), epsilon = 1e-12);
        assert!(t.preserves_orientation());
    }

    #[test]
    fn rotation_x_quarter_turn() {
        let p = Transform3D::rotation_x(PI / 2.0).transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(p, Point3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn default_is_identity() {
        let p = Point3::new(5.0, 10.0, 15.0);
        assert_eq!(Transform3D::default().transform_point(&p), p);
    }

    #[test]
    fn rotated_cuboid_stays_outward() {
        let block = cuboid(Point3::origin(), Point3::new(4.0, 2.0, 1.0));
        let rotated = Transform3D::rotation_x(PI).apply(block);
        assert_relative_eq!(rotated.signed_volume(), 8.0, epsilon = 1e-9);
        let b = rotated.bounds();
        assert_relative_eq!(b.min.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(b.max.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn mirror_keeps_normals_outward() {
        let block = cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let mirror = Transform3D::from_linear(Matrix3::from_diagonal(&Vector3::new(-1.0, 1.0, 1.0)));
        assert!(!mirror.preserves_orientation());
        let mirrored = mirror.apply(block);
        assert!(!mirrored.is_inside_out());
    }

    #[test]
    fn uniform_scale_scales_volume_cubically() {
        let block = cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
        let scaled = Transform3D::uniform_scale(3.0).apply(block);
        assert_relative_eq!(scaled.signed_volume(), 27.0, epsilon = 1e-9);
    }
}

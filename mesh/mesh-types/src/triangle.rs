//! Triangle with resolved vertex positions.

use nalgebra::{Point3, Vector3};

/// A triangle with concrete vertex positions.
///
/// Produced by [`MeshTopology::triangles`](crate::MeshTopology::triangles)
/// when an algorithm needs geometry rather than indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex.
    pub v0: Point3<f64>,
    /// Second vertex.
    pub v1: Point3<f64>,
    /// Third vertex.
    pub v2: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Cross product of the two edges leaving `v0`.
    ///
    /// Its direction follows the winding.
    #[inline]
    #[must_use]
    pub fn normal_unnormalized(&self) -> Vector3<f64> {
        (self.v1 - self.v0).cross(&(self.v2 - self.v0))
    }

    /// Unit normal, or `None` for a degenerate triangle.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Point3, Triangle};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(1.0, 0.0, 0.0),
    ///     Point3::new(0.0, 1.0, 0.0),
    /// );
    /// let n = tri.normal().unwrap();
    /// assert!((n.z - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let n = self.normal_unnormalized();
        let len = n.norm();
        if len > f64::EPSILON {
            Some(n / len)
        } else {
            None
        }
    }

    /// Centroid (average of the three vertices).
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.v0.coords + self.v1.coords + self.v2.coords) / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn right_triangle() -> Triangle {
        Triangle::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 2.0, 0.0),
        )
    }

    #[test]
    fn normal_follows_winding() {
        let tri = right_triangle();
        let flipped = Triangle::new(tri.v0, tri.v2, tri.v1);
        assert!(tri.normal().is_some_and(|n| n.z > 0.0));
        assert!(flipped.normal().is_some_and(|n| n.z < 0.0));
    }

    #[test]
    fn degenerate_has_no_normal() {
        let p = Point3::new(1.0, 1.0, 1.0);
        assert!(Triangle::new(p, p, p).normal().is_none());
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let c = right_triangle().centroid();
        assert_relative_eq!(c.x, 2.0 / 3.0);
        assert_relative_eq!(c.y, 2.0 / 3.0);
    }
}

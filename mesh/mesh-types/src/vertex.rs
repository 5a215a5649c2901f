//! Mesh vertex.

use nalgebra::Point3;

/// A mesh vertex.
///
/// Only the position is stored: the generator never carries normals,
/// colors, or texture coordinates, and STL has no place for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Position in the mesh's coordinate frame.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a vertex at the given position.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.z, 3.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

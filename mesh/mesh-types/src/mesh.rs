//! Indexed triangle mesh.

use nalgebra::{Point3, Vector3};

use crate::{Aabb, MeshBounds, MeshTopology, Triangle, Vertex};

/// Corner order used by [`IndexedMesh::push_cuboid`]: bottom ring then top ring,
/// each counter-clockwise seen from +Z.
const CUBOID_CORNERS: [[bool; 3]; 8] = [
    [false, false, false],
    [true, false, false],
    [true, true, false],
    [false, true, false],
    [false, false, true],
    [true, false, true],
    [true, true, true],
    [false, true, true],
];

/// Two triangles per cuboid face, CCW seen from outside.
const CUBOID_FACES: [[u32; 3]; 12] = [
    // bottom (-Z)
    [0, 2, 1],
    [0, 3, 2],
    // top (+Z)
    [4, 5, 6],
    [4, 6, 7],
    // front (-Y)
    [0, 1, 5],
    [0, 5, 4],
    // back (+Y)
    [3, 7, 6],
    [3, 6, 2],
    // left (-X)
    [0, 4, 7],
    [0, 7, 3],
    // right (+X)
    [1, 2, 6],
    [1, 6, 5],
];

/// A triangle mesh stored as a vertex buffer plus index triples.
///
/// Meshes in this workspace are triangle soups: nothing assumes shared
/// vertices between faces, and appending one mesh to another never welds
/// or deduplicates anything.
///
/// Faces are wound counter-clockwise seen from outside.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexedMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as indices into `vertices`.
    pub faces: Vec<[u32; 3]>,
}

impl IndexedMesh {
    /// Create an empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create an empty mesh with room for the given number of vertices and faces.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Build a soup mesh from resolved triangles, three fresh vertices each.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    #[must_use]
    pub fn from_triangles(triangles: impl IntoIterator<Item = Triangle>) -> Self {
        let mut mesh = Self::new();
        for tri in triangles {
            let base = mesh.vertices.len() as u32;
            mesh.vertices.push(Vertex::new(tri.v0));
            mesh.vertices.push(Vertex::new(tri.v1));
            mesh.vertices.push(Vertex::new(tri.v2));
            mesh.faces.push([base, base + 1, base + 2]);
        }
        mesh
    }

    /// Append an axis-aligned box spanning `min..max` as 8 new vertices and
    /// 12 outward-facing triangles.
    ///
    /// No vertex is shared with existing geometry.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    pub fn push_cuboid(&mut self, min: Point3<f64>, max: Point3<f64>) {
        let base = self.vertices.len() as u32;
        for [hx, hy, hz] in CUBOID_CORNERS {
            self.vertices.push(Vertex::from_coords(
                if hx { max.x } else { min.x },
                if hy { max.y } else { min.y },
                if hz { max.z } else { min.z },
            ));
        }
        self.faces
            .extend(CUBOID_FACES.iter().map(|f| [base + f[0], base + f[1], base + f[2]]));
    }

    /// Translate every vertex by `offset`.
    pub fn translate(&mut self, offset: Vector3<f64>) {
        for vertex in &mut self.vertices {
            vertex.position += offset;
        }
    }

    /// Append another mesh's vertices and faces, re-basing its indices.
    ///
    /// The face count afterwards is exactly the sum of both inputs.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
    pub fn merge(&mut self, other: &Self) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|f| [f[0] + offset, f[1] + offset, f[2] + offset]),
        );
    }

    /// Signed volume by the divergence theorem.
    ///
    /// Positive for a closed mesh whose normals point outward, negative when
    /// it is inside-out. Meaningless for open meshes.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .map(|t| t.v0.coords.dot(&t.v1.coords.cross(&t.v2.coords)))
            .sum::<f64>()
            / 6.0
    }

    /// `true` if the signed volume is negative.
    #[inline]
    #[must_use]
    pub fn is_inside_out(&self) -> bool {
        self.signed_volume() < 0.0
    }
}

impl MeshTopology for IndexedMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    fn faces(&self) -> impl Iterator<Item = [u32; 3]> {
        self.faces.iter().copied()
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn triangles(&self) -> impl Iterator<Item = Triangle> {
        self.faces.iter().map(|&[i0, i1, i2]| {
            Triangle::new(
                self.vertices[i0 as usize].position,
                self.vertices[i1 as usize].position,
                self.vertices[i2 as usize].position,
            )
        })
    }
}

impl MeshBounds for IndexedMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

/// A closed box mesh spanning `min..max`.
///
/// # Example
///
/// ```
/// use mesh_types::{cuboid, MeshTopology, Point3};
///
/// let unit = cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0));
/// assert_eq!(unit.vertex_count(), 8);
/// assert!(!unit.is_inside_out());
/// ```
#[must_use]
pub fn cuboid(min: Point3<f64>, max: Point3<f64>) -> IndexedMesh {
    let mut mesh = IndexedMesh::with_capacity(8, 12);
    mesh.push_cuboid(min, max);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit() -> IndexedMesh {
        cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn cuboid_volume() {
        let block = cuboid(Point3::new(1.0, 2.0, 3.0), Point3::new(3.0, 5.0, 4.0));
        assert_relative_eq!(block.signed_volume(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn cuboid_normals_point_away_from_center() {
        let block = unit();
        let center = block.bounds().center();
        for tri in block.triangles() {
            let normal = tri.normal().unwrap();
            assert!(normal.dot(&(tri.centroid() - center)) > 0.0);
        }
    }

    #[test]
    fn push_cuboid_shares_no_vertices() {
        let mut mesh = unit();
        mesh.push_cuboid(Point3::new(1.0, 0.0, 0.0), Point3::new(2.0, 1.0, 1.0));
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.face_count(), 24);
        assert!(mesh.faces[12..].iter().flatten().all(|&i| i >= 8));
    }

    #[test]
    fn merge_rebases_indices() {
        let mut a = unit();
        let b = unit();
        a.merge(&b);
        assert_eq!(a.face_count(), 24);
        assert_eq!(a.faces[12], [8, 10, 9]);
        assert_relative_eq!(a.signed_volume(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn from_triangles_matches_source() {
        let block = unit();
        let soup = IndexedMesh::from_triangles(block.triangles());
        assert_eq!(soup.face_count(), 12);
        assert_eq!(soup.vertex_count(), 36);
        assert_relative_eq!(soup.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn translate_moves_bounds() {
        let mut block = unit();
        block.translate(Vector3::new(-1.0, -1.0, 0.5));
        let b = block.bounds();
        assert_eq!(b.min, Point3::new(-1.0, -1.0, 0.5));
        assert_eq!(b.max, Point3::new(0.0, 0.0, 1.5));
        assert_relative_eq!(block.signed_volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_mesh_has_empty_bounds() {
        let mesh = IndexedMesh::new();
        assert!(mesh.is_empty());
        assert!(mesh.bounds_opt().is_none());
    }
}

//! Traits for mesh types.

use crate::{Aabb, Triangle, Vertex};

/// Read access to a mesh's vertices and faces.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of faces (triangles).
    fn face_count(&self) -> usize;

    /// A mesh with no faces contributes no geometry.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0 || self.face_count() == 0
    }

    /// Iterate over all faces as vertex index triples.
    fn faces(&self) -> impl Iterator<Item = [u32; 3]>;

    /// Iterate over all vertices.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Iterate over all triangles with resolved vertex positions.
    fn triangles(&self) -> impl Iterator<Item = Triangle>;
}

/// Types that can compute an axis-aligned bounding box.
pub trait MeshBounds {
    /// Bounding box of all vertices; empty if there are none.
    fn bounds(&self) -> Aabb;

    /// Bounding box, or `None` if the mesh has no vertices.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() { None } else { Some(b) }
    }
}

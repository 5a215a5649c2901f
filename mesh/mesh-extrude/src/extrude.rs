//! Cell-to-block extrusion.

use mesh_types::{IndexedMesh, Point3};
use tracing::debug;

use crate::error::ExtrudeResult;
use crate::occupancy::OccupancyMatrix;
use crate::params::ExtrudeParams;

/// Triangles emitted for every occupied cell.
pub const TRIANGLES_PER_BLOCK: usize = 12;

/// Side length of one cell for `matrix` fitted into `footprint_mm`.
#[must_use]
pub fn block_size(matrix: &OccupancyMatrix, footprint_mm: f64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    // Precision: matrix spans are far below 2^52
    let span = matrix.span() as f64;
    footprint_mm / span
}

/// Extrude every occupied cell of `matrix` into an axis-aligned block.
///
/// Cell `(row, col)` becomes the box
/// `[col·b, (col+1)·b] × [row·b, (row+1)·b] × [0, height]` where
/// `b = footprint / max(rows, cols)`. Blocks never share vertices, so the
/// output has exactly `12 × occupied` triangles and `8 × occupied` vertices,
/// emitted in row-major cell order.
///
/// # Errors
///
/// Returns an error if `params` has a non-positive footprint or height.
///
/// # Example
///
/// ```
/// use mesh_extrude::{extrude, ExtrudeParams, OccupancyMatrix};
/// use mesh_types::{MeshBounds, MeshTopology};
///
/// let matrix: OccupancyMatrix = "#.\n##".parse().unwrap();
/// let mesh = extrude(&matrix, &ExtrudeParams::new(10.0, 2.0)).unwrap();
///
/// assert_eq!(mesh.face_count(), 36);
/// assert_eq!(mesh.bounds().max.z, 2.0);
/// ```
pub fn extrude(matrix: &OccupancyMatrix, params: &ExtrudeParams) -> ExtrudeResult<IndexedMesh> {
    params.validate()?;

    let block = block_size(matrix, params.footprint_mm);
    let occupied = matrix.count_occupied();
    let mut mesh = IndexedMesh::with_capacity(occupied * 8, occupied * TRIANGLES_PER_BLOCK);

    for (row, col) in matrix.iter_occupied() {
        #[allow(clippy::cast_precision_loss)]
        let (x0, y0) = (col as f64 * block, row as f64 * block);
        #[allow(clippy::cast_precision_loss)]
        // Far edges are clamped so rounding never pushes a block past the footprint
        let (x1, y1) = (
            ((col + 1) as f64 * block).min(params.footprint_mm),
            ((row + 1) as f64 * block).min(params.footprint_mm),
        );
        mesh.push_cuboid(
            Point3::new(x0, y0, 0.0),
            Point3::new(x1, y1, params.height_mm),
        );
    }

    debug!(
        rows = matrix.rows(),
        cols = matrix.cols(),
        occupied,
        block_mm = block,
        triangles = mesh.faces.len(),
        "Extruded occupancy matrix"
    );

    Ok(mesh)
}

//! Occupancy-matrix extrusion.
//!
//! Turns a 2D grid of on/off cells (a QR symbol, typically) into a 3D mesh
//! by emitting one axis-aligned block per occupied cell:
//!
//! - the whole matrix fits in a `footprint × footprint` square, so each cell
//!   is `footprint / max(rows, cols)` wide
//! - cell `(row, col)` sits at `x = col · block`, `y = row · block`
//! - every block spans `z = 0..height`
//! - every block has its own 8 vertices and 12 outward-facing triangles
//!
//! # Example
//!
//! ```
//! use mesh_extrude::{extrude, ExtrudeParams, OccupancyMatrix};
//! use mesh_types::MeshTopology;
//!
//! let matrix: OccupancyMatrix = "#.\n.#".parse().unwrap();
//! let mesh = extrude(&matrix, &ExtrudeParams::default()).unwrap();
//! assert_eq!(mesh.face_count(), 24);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod extrude;
mod occupancy;
mod params;

pub use error::{ExtrudeError, ExtrudeResult};
pub use extrude::{TRIANGLES_PER_BLOCK, block_size, extrude};
pub use occupancy::OccupancyMatrix;
pub use params::ExtrudeParams;

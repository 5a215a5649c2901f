//! FEN-driven piece placement.
//!
//! Reads the piece-placement field of a FEN string, and for every occupied
//! square translates the matching piece mesh so that the bottom center of
//! its bounding box lands on the square's center. Pieces are appended after
//! the board's own triangles in scan order (rank 8 to rank 1, file a to h).
//!
//! Board squares alternate in height: square `(column, row)` has its top at
//! the raised height when `column + row` is even and at the lowered height
//! otherwise.
//!
//! # Example
//!
//! ```
//! use chess_placement::{BoardGeometry, PieceKind, PieceSet, place_all_pieces};
//! use mesh_types::{MeshTopology, Point3, cuboid};
//!
//! let board = cuboid(Point3::new(-8.0, -1.0, -1.0), Point3::new(8.0, 15.0, 1.0));
//! let pawn = cuboid(Point3::origin(), Point3::new(1.0, 1.0, 2.0));
//! let pieces = PieceSet::from_meshes(PieceKind::ALL.map(|kind| (kind, pawn.clone())));
//!
//! let report = place_all_pieces(board, "8/8/8/8/8/8/8/4K3 w - - 0 1", &pieces, &BoardGeometry::default()).unwrap();
//! assert_eq!(report.placed.len(), 1);
//! assert_eq!(report.mesh.face_count(), 24);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod assets;
mod board;
mod error;
mod fen;
mod piece;
mod place;
mod square;

pub use assets::{PieceAssets, PieceSet};
pub use board::BoardGeometry;
pub use error::{FenError, FenResult, PlacementError, PlacementResult};
pub use fen::{Placement, parse_placement, rank_width};
pub use piece::{Color, PieceKind, Role};
pub use place::{PlacementReport, place_all_pieces, place_pieces};
pub use square::Square;

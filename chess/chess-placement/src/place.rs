//! Piece placement onto the board mesh.

use std::fmt;

use mesh_types::{IndexedMesh, MeshBounds, MeshTopology, Vector3};
use tracing::{debug, info};

use crate::assets::PieceSet;
use crate::board::BoardGeometry;
use crate::error::{PlacementError, PlacementResult};
use crate::fen::{Placement, parse_placement};
use crate::piece::{Color, PieceKind};
use crate::square::Square;

/// Result of placing a position on the board.
#[derive(Debug, Clone)]
pub struct PlacementReport {
    /// Board triangles followed by every placed piece, in scan order.
    pub mesh: IndexedMesh,
    /// Squares that received a piece, in scan order.
    pub placed: Vec<(Square, PieceKind)>,
    /// Unknown FEN letters that were passed over.
    pub skipped: Vec<(Square, char)>,
    /// Faces that came from the board mesh.
    pub board_faces: usize,
}

impl PlacementReport {
    /// Number of placed pieces of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.placed.iter().filter(|(_, k)| k.color == color).count()
    }
}

impl fmt::Display for PlacementReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pieces ({} white, {} black), {} skipped, {} -> {} triangles",
            self.placed.len(),
            self.count(Color::White),
            self.count(Color::Black),
            self.skipped.len(),
            self.board_faces,
            self.mesh.face_count()
        )
    }
}

/// Place every piece of the FEN position `fen` onto `board`.
///
/// Each piece mesh is translated so that the XY midpoint and the minimum Z
/// of its bounding box land on the square's top-center, then appended.
///
/// # Errors
///
/// - [`PlacementError::Fen`] if the placement field is malformed
/// - [`PlacementError::InvalidBoardBounds`] for unusable `geometry`
/// - [`PlacementError::PieceMeshMissing`] if `pieces` lacks a needed kind
/// - [`PlacementError::EmptyPieceMesh`] if a needed piece mesh is empty
pub fn place_all_pieces(
    board: IndexedMesh,
    fen: &str,
    pieces: &PieceSet,
    geometry: &BoardGeometry,
) -> PlacementResult<PlacementReport> {
    let placement = parse_placement(fen)?;
    place_pieces(board, &placement, pieces, geometry)
}

/// Place an already parsed [`Placement`] onto `board`.
///
/// # Errors
///
/// Same as [`place_all_pieces`] minus FEN errors.
pub fn place_pieces(
    board: IndexedMesh,
    placement: &Placement,
    pieces: &PieceSet,
    geometry: &BoardGeometry,
) -> PlacementResult<PlacementReport> {
    geometry.validate()?;

    let board_faces = board.face_count();
    info!(
        pieces = placement.pieces.len(),
        board_faces,
        "Placing pieces on board"
    );

    let mut mesh = board;
    for &(square, kind) in &placement.pieces {
        let piece = pieces
            .get(kind)
            .ok_or(PlacementError::PieceMeshMissing { kind })?;
        let bounds = piece
            .bounds_opt()
            .ok_or(PlacementError::EmptyPieceMesh { kind })?;

        let target = geometry.square_center(square);
        let anchor = bounds.center();
        let offset = Vector3::new(
            target.x - anchor.x,
            target.y - anchor.y,
            target.z - bounds.min.z,
        );

        let mut placed = piece.clone();
        placed.translate(offset);
        mesh.merge(&placed);

        debug!(%square, %kind, faces = placed.face_count(), "Placed piece");
    }

    let report = PlacementReport {
        mesh,
        placed: placement.pieces.clone(),
        skipped: placement.skipped.clone(),
        board_faces,
    };
    info!(%report, "Placement complete");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FenError;
    use crate::piece::Role;
    use approx::assert_relative_eq;
    use mesh_types::{Aabb, Point3, cuboid};

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn board() -> IndexedMesh {
        cuboid(Point3::new(-8.0, -1.0, -1.0), Point3::new(8.0, 15.0, 1.0))
    }

    /// Off-center 1×1×2 block so translation is observable.
    fn piece_mesh() -> IndexedMesh {
        cuboid(Point3::new(10.0, 20.0, 30.0), Point3::new(11.0, 21.0, 32.0))
    }

    fn full_set() -> PieceSet {
        PieceSet::from_meshes(PieceKind::ALL.map(|kind| (kind, piece_mesh())))
    }

    #[test]
    fn start_position_places_thirty_two() {
        let report = place_all_pieces(board(), START, &full_set(), &BoardGeometry::default()).unwrap();
        assert_eq!(report.placed.len(), 32);
        assert_eq!(report.count(Color::White), 16);
        assert_eq!(report.count(Color::Black), 16);
        assert_eq!(report.mesh.face_count(), 12 + 32 * 12);
        for (square, kind) in &report.placed {
            if kind.role == Role::Pawn {
                assert!(square.row() == 1 || square.row() == 6);
            }
        }
        assert_eq!(
            report.to_string(),
            "32 pieces (16 white, 16 black), 0 skipped, 12 -> 396 triangles"
        );
    }

    #[test]
    fn lone_king_lands_on_e1() {
        let geometry = BoardGeometry::default();
        let report = place_all_pieces(board(), "8/8/8/8/8/8/8/4K3 w - - 0 1", &full_set(), &geometry).unwrap();
        assert_eq!(report.placed.len(), 1);

        let king = Aabb::from_points(report.mesh.vertices[8..].iter().map(|v| &v.position));
        let (w, d) = geometry.square_size();
        let center = king.center();
        assert_relative_eq!(center.x, -8.0 + w * 4.5, epsilon = 1e-12);
        assert_relative_eq!(center.y, -1.0 + d * 0.5, epsilon = 1e-12);
        // (4 + 7) is odd: lowered square.
        assert_relative_eq!(king.min.z, 0.7, epsilon = 1e-12);
        assert_relative_eq!(king.max.z, 2.7, epsilon = 1e-12);
    }

    #[test]
    fn board_triangles_come_first_and_untouched() {
        let base = board();
        let report = place_all_pieces(base.clone(), START, &full_set(), &BoardGeometry::default()).unwrap();
        assert_eq!(&report.mesh.faces[..12], &base.faces[..]);
        assert_eq!(&report.mesh.vertices[..8], &base.vertices[..]);
    }

    #[test]
    fn pieces_follow_scan_order() {
        let report = place_all_pieces(board(), START, &full_set(), &BoardGeometry::default()).unwrap();
        // First piece is the a8 rook: far-left corner of the board.
        let first = Aabb::from_points(report.mesh.vertices[8..16].iter().map(|v| &v.position));
        assert_relative_eq!(first.center().x, -7.0, epsilon = 1e-12);
        assert_relative_eq!(first.center().y, 14.0, epsilon = 1e-12);
        assert_relative_eq!(first.min.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn placed_pieces_keep_outward_winding() {
        let report = place_all_pieces(board(), START, &full_set(), &BoardGeometry::default()).unwrap();
        assert!(report.mesh.signed_volume() > 0.0);
    }

    #[test]
    fn malformed_fen_fails_fast() {
        let err = place_all_pieces(board(), "8/8/8/8/8/8/8/5K3", &full_set(), &BoardGeometry::default()).unwrap_err();
        assert!(matches!(
            err,
            PlacementError::Fen(FenError::RankWidth { rank: 1, squares: 9 })
        ));
    }

    #[test]
    fn missing_mesh_for_needed_kind() {
        let pieces = PieceSet::new().with_piece(PieceKind::from_fen_char('K').unwrap(), piece_mesh());
        let err = place_all_pieces(board(), "k7/8/8/8/8/8/8/4K3", &pieces, &BoardGeometry::default()).unwrap_err();
        assert!(matches!(err, PlacementError::PieceMeshMissing { kind } if kind.fen_char() == 'k'));
    }

    #[test]
    fn empty_piece_mesh_is_rejected() {
        let king = PieceKind::from_fen_char('K').unwrap();
        let pieces = PieceSet::new().with_piece(king, IndexedMesh::new());
        let err = place_all_pieces(board(), "8/8/8/8/8/8/8/4K3", &pieces, &BoardGeometry::default()).unwrap_err();
        assert!(matches!(err, PlacementError::EmptyPieceMesh { .. }));
    }

    #[test]
    fn unknown_letters_are_reported() {
        let report = place_all_pieces(board(), "8/8/8/8/8/8/8/3xK3", &full_set(), &BoardGeometry::default()).unwrap();
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.placed[0].0.to_string(), "e1");
    }
}

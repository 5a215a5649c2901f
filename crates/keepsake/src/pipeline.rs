//! End-to-end model building.

use std::fmt;
use std::path::{Path, PathBuf};

use chess_placement::{PieceSet, PlacementReport, parse_placement, place_pieces};
use mesh_composite::{Composition, composite};
use mesh_extrude::extrude;
use mesh_io::{load_stl, save_stl};
use mesh_types::{IndexedMesh, MeshTopology};
use tracing::info;

use crate::config::KeepsakeConfig;
use crate::error::KeepsakeResult;

/// Encode `link` and extrude it into a QR plaque.
///
/// Writes the plaque to `config.qr_output` when set.
///
/// # Errors
///
/// Encoding, extrusion, or writing the optional output failed.
pub fn build_qr_plaque(link: &str, config: &KeepsakeConfig) -> KeepsakeResult<IndexedMesh> {
    let matrix = qr_matrix::encode(link, &config.qr)?;
    let plaque = extrude(&matrix, &config.extrude_params())?;
    info!(
        modules = matrix.rows(),
        triangles = plaque.face_count(),
        "Built QR plaque"
    );

    if let Some(path) = &config.qr_output {
        save_stl(&plaque, path, config.binary_stl)?;
    }
    Ok(plaque)
}

/// Load the board and place the position `fen` on it.
///
/// Only the piece meshes the position uses are loaded. Writes the result
/// to `config.board_output` when set.
///
/// # Errors
///
/// Malformed FEN, a missing asset, or writing the optional output failed.
pub fn build_board(fen: &str, config: &KeepsakeConfig) -> KeepsakeResult<PlacementReport> {
    let placement = parse_placement(fen).map_err(chess_placement::PlacementError::from)?;
    let assets = config.piece_assets();
    let board = assets.load_board()?;
    let pieces = PieceSet::load(&assets, placement.kinds())?;

    let report = place_pieces(board, &placement, &pieces, &config.board_geometry())?;

    if let Some(path) = &config.board_output {
        save_stl(&report.mesh, path, config.binary_stl)?;
    }
    Ok(report)
}

/// Register `plaque` onto `board` and write the result to `config.output`.
///
/// # Errors
///
/// Degenerate plaque geometry or an unwritable output path.
pub fn compose(
    board: IndexedMesh,
    plaque: IndexedMesh,
    config: &KeepsakeConfig,
) -> KeepsakeResult<Composition> {
    let composition = composite(board, plaque, &config.registration_params())?;
    save_stl(&composition.mesh, &config.output, config.binary_stl)?;
    Ok(composition)
}

/// Like [`compose`], reading both meshes from STL files.
///
/// # Errors
///
/// Either input cannot be loaded, or see [`compose`].
pub fn compose_files(
    board_path: &Path,
    plaque_path: &Path,
    config: &KeepsakeConfig,
) -> KeepsakeResult<Composition> {
    let board = load_stl(board_path)?;
    let plaque = load_stl(plaque_path)?;
    compose(board, plaque, config)
}

/// What [`build_keepsake`] produced.
#[derive(Debug, Clone)]
pub struct KeepsakeSummary {
    /// Where the final model was written.
    pub output: PathBuf,
    /// Pieces placed on the board.
    pub pieces: usize,
    /// Unknown FEN letters passed over.
    pub skipped: usize,
    /// Triangles from the board and pieces.
    pub board_triangles: usize,
    /// Triangles from the QR plaque.
    pub plaque_triangles: usize,
    /// Plaque scale factor applied during registration.
    pub plaque_scale: f64,
}

impl KeepsakeSummary {
    /// Triangles in the written model.
    #[must_use]
    pub const fn total_triangles(&self) -> usize {
        self.board_triangles + self.plaque_triangles
    }
}

impl fmt::Display for KeepsakeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} triangles ({} pieces, plaque x{:.4})",
            self.output.display(),
            self.total_triangles(),
            self.pieces,
            self.plaque_scale
        )
    }
}

/// Build the QR plaque for `link`, the board for `fen`, and write the
/// composited model.
///
/// Nothing is written to `config.output` unless every stage succeeds.
///
/// # Errors
///
/// The first stage that fails.
///
/// # Example
///
/// ```no_run
/// use keepsake::{KeepsakeConfig, build_keepsake};
///
/// let summary = build_keepsake(
///     "https://lichess.org/abc12345",
///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
///     &KeepsakeConfig::default(),
/// )?;
/// println!("{summary}");
/// # Ok::<(), keepsake::KeepsakeError>(())
/// ```
pub fn build_keepsake(link: &str, fen: &str, config: &KeepsakeConfig) -> KeepsakeResult<KeepsakeSummary> {
    config.validate()?;

    let plaque = build_qr_plaque(link, config)?;
    let board = build_board(fen, config)?;
    let composition = compose(board.mesh, plaque, config)?;

    let summary = KeepsakeSummary {
        output: config.output.clone(),
        pieces: board.placed.len(),
        skipped: board.skipped.len(),
        board_triangles: composition.base_faces,
        plaque_triangles: composition.overlay_faces,
        plaque_scale: composition.registration.scale,
    };
    info!(%summary, "Keepsake model written");
    Ok(summary)
}

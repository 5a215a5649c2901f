//! Error types for FEN parsing and piece placement.

use std::path::PathBuf;

use mesh_io::IoError;
use thiserror::Error;

use crate::piece::PieceKind;

/// Result type for FEN parsing.
pub type FenResult<T> = Result<T, FenError>;

/// Result type for placement operations.
pub type PlacementResult<T> = Result<T, PlacementError>;

/// A malformed FEN piece-placement field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FenError {
    /// Nothing before the first space.
    #[error("FEN has no piece-placement field")]
    EmptyPlacement,

    /// Wrong number of `/`-separated ranks.
    #[error("FEN placement must have 8 ranks, found {found}")]
    RankCount {
        /// Number of ranks present.
        found: usize,
    },

    /// A rank whose pieces and empty runs do not add up to 8 squares.
    #[error("FEN rank {rank} covers {squares} squares, expected 8")]
    RankWidth {
        /// Chess rank number (8 is the first rank in the string).
        rank: u8,
        /// Squares the rank actually covers.
        squares: usize,
    },
}

/// Errors that can occur while loading assets or placing pieces.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlacementError {
    /// The FEN could not be parsed.
    #[error(transparent)]
    Fen(#[from] FenError),

    /// A board or piece mesh file could not be loaded.
    #[error("cannot load {asset} mesh from {path}: {source}")]
    AssetMissing {
        /// Which asset, e.g. `board` or `white knight`.
        asset: String,
        /// Path that was tried.
        path: PathBuf,
        /// Underlying load failure.
        #[source]
        source: IoError,
    },

    /// The piece set has no mesh for a piece the position needs.
    #[error("no mesh loaded for {kind}")]
    PieceMeshMissing {
        /// Missing piece.
        kind: PieceKind,
    },

    /// A piece mesh has no vertices, so it has no footprint to place.
    #[error("mesh for {kind} is empty")]
    EmptyPieceMesh {
        /// Offending piece.
        kind: PieceKind,
    },

    /// Board bounds with no area, or square heights that are not finite.
    #[error("invalid board geometry: {0}")]
    InvalidBoardBounds(String),
}

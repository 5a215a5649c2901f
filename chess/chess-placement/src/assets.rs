//! Board and piece mesh assets.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use mesh_io::load_stl;
use mesh_types::IndexedMesh;
use tracing::debug;

use crate::error::{PlacementError, PlacementResult};
use crate::piece::PieceKind;

/// Fixed table of asset paths: one board, one mesh per piece kind.
///
/// # Example
///
/// ```
/// use chess_placement::{PieceAssets, PieceKind};
/// use std::path::Path;
///
/// let assets = PieceAssets::from_dir("models");
/// let king = PieceKind::from_fen_char('K').unwrap();
/// assert_eq!(assets.piece_path(king), Path::new("models/pieces/white_king.stl"));
/// assert_eq!(assets.board_path(), Path::new("models/board.stl"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceAssets {
    board: PathBuf,
    pieces: HashMap<PieceKind, PathBuf>,
}

impl PieceAssets {
    /// Standard layout under `root`: `board.stl` and
    /// `pieces/{white,black}_{pawn,knight,bishop,rook,queen,king}.stl`.
    pub fn from_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let pieces = PieceKind::ALL
            .into_iter()
            .map(|kind| {
                let path = root.join("pieces").join(format!("{}.stl", kind.asset_stem()));
                (kind, path)
            })
            .collect();
        Self {
            board: root.join("board.stl"),
            pieces,
        }
    }

    /// Replace the board path.
    #[must_use]
    pub fn with_board_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.board = path.into();
        self
    }

    /// Replace the path for one piece kind.
    #[must_use]
    pub fn with_piece_path(mut self, kind: PieceKind, path: impl Into<PathBuf>) -> Self {
        self.pieces.insert(kind, path.into());
        self
    }

    /// Path of the board mesh.
    #[must_use]
    pub fn board_path(&self) -> &Path {
        &self.board
    }

    /// Path of the mesh for `kind`.
    #[must_use]
    pub fn piece_path(&self, kind: PieceKind) -> &Path {
        // Every kind is inserted at construction and never removed.
        self.pieces.get(&kind).map_or(Path::new(""), PathBuf::as_path)
    }

    /// Load the board mesh.
    ///
    /// # Errors
    ///
    /// [`PlacementError::AssetMissing`] if the file cannot be read or parsed.
    pub fn load_board(&self) -> PlacementResult<IndexedMesh> {
        load_asset("board", &self.board)
    }
}

fn load_asset(asset: &str, path: &Path) -> PlacementResult<IndexedMesh> {
    load_stl(path).map_err(|source| PlacementError::AssetMissing {
        asset: asset.to_string(),
        path: path.to_path_buf(),
        source,
    })
}

/// Piece meshes keyed by kind.
#[derive(Debug, Clone, Default)]
pub struct PieceSet {
    meshes: HashMap<PieceKind, IndexedMesh>,
}

impl PieceSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the meshes for `kinds` from `assets`, each file once.
    ///
    /// # Errors
    ///
    /// [`PlacementError::AssetMissing`] for the first file that cannot be
    /// loaded.
    pub fn load(
        assets: &PieceAssets,
        kinds: impl IntoIterator<Item = PieceKind>,
    ) -> PlacementResult<Self> {
        let mut set = Self::new();
        for kind in kinds {
            if set.meshes.contains_key(&kind) {
                continue;
            }
            let path = assets.piece_path(kind);
            let mesh = load_asset(&kind.to_string(), path)?;
            debug!(%kind, path = %path.display(), faces = mesh.faces.len(), "Loaded piece mesh");
            set.meshes.insert(kind, mesh);
        }
        Ok(set)
    }

    /// Build a set from in-memory meshes.
    pub fn from_meshes(meshes: impl IntoIterator<Item = (PieceKind, IndexedMesh)>) -> Self {
        Self {
            meshes: meshes.into_iter().collect(),
        }
    }

    /// Add or replace the mesh for `kind`.
    #[must_use]
    pub fn with_piece(mut self, kind: PieceKind, mesh: IndexedMesh) -> Self {
        self.meshes.insert(kind, mesh);
        self
    }

    /// Mesh for `kind`, if loaded.
    #[must_use]
    pub fn get(&self, kind: PieceKind) -> Option<&IndexedMesh> {
        self.meshes.get(&kind)
    }

    /// Number of kinds with a mesh.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// `true` if no mesh is loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_io::{IoError, save_stl};
    use mesh_types::{Point3, cuboid};

    fn write_assets(root: &Path, kinds: &[PieceKind]) {
        std::fs::create_dir_all(root.join("pieces")).unwrap();
        save_stl(
            &cuboid(Point3::new(-8.0, -1.0, -1.0), Point3::new(8.0, 15.0, 1.0)),
            root.join("board.stl"),
            true,
        )
        .unwrap();
        for kind in kinds {
            let path = root.join("pieces").join(format!("{}.stl", kind.asset_stem()));
            save_stl(&cuboid(Point3::origin(), Point3::new(1.0, 1.0, 3.0)), path, true).unwrap();
        }
    }

    #[test]
    fn table_covers_all_kinds() {
        let assets = PieceAssets::from_dir("/assets");
        for kind in PieceKind::ALL {
            let path = assets.piece_path(kind);
            assert!(path.starts_with("/assets/pieces"));
            assert!(path.to_string_lossy().ends_with(&format!("{}.stl", kind.asset_stem())));
        }
    }

    #[test]
    fn overrides() {
        let king = PieceKind::from_fen_char('k').unwrap();
        let assets = PieceAssets::from_dir("a")
            .with_board_path("b.stl")
            .with_piece_path(king, "k.stl");
        assert_eq!(assets.board_path(), Path::new("b.stl"));
        assert_eq!(assets.piece_path(king), Path::new("k.stl"));
    }

    #[test]
    fn load_only_requested_kinds() {
        let dir = tempfile::tempdir().unwrap();
        let king = PieceKind::from_fen_char('K').unwrap();
        write_assets(dir.path(), &[king]);

        let assets = PieceAssets::from_dir(dir.path());
        let set = PieceSet::load(&assets, [king, king]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.get(king).is_some());
        assert_eq!(assets.load_board().unwrap().faces.len(), 12);
    }

    #[test]
    fn missing_piece_asset_names_path() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path(), &[]);
        let assets = PieceAssets::from_dir(dir.path());
        let queen = PieceKind::from_fen_char('q').unwrap();

        let err = PieceSet::load(&assets, [queen]).unwrap_err();
        match err {
            PlacementError::AssetMissing { asset, path, source } => {
                assert_eq!(asset, "black queen");
                assert!(path.ends_with("pieces/black_queen.stl"));
                assert!(matches!(source, IoError::FileNotFound { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_board_asset() {
        let dir = tempfile::tempdir().unwrap();
        let err = PieceAssets::from_dir(dir.path()).load_board().unwrap_err();
        assert!(err.to_string().starts_with("cannot load board mesh"));
    }
}

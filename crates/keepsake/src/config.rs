//! Pipeline configuration.
//!
//! Everything has a default, so an empty JSON object is a valid config.
//! Lengths on the plaque are millimeters; board and target coordinates are
//! in the board model's own units.

use std::path::{Path, PathBuf};

use chess_placement::{BoardGeometry, PieceAssets};
use mesh_composite::RegistrationParams;
use mesh_extrude::ExtrudeParams;
use mesh_types::Aabb;
use qr_matrix::QrParams;
use serde::{Deserialize, Serialize};

use crate::error::{KeepsakeError, KeepsakeResult};

/// Default location of the composited model.
pub const DEFAULT_OUTPUT: &str = "final-product/final_model.stl";

/// Create the parent directory of `path` if it has one.
///
/// # Errors
///
/// [`KeepsakeError::OutputDir`] if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> KeepsakeResult<()> {
    let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).map_err(|source| KeepsakeError::OutputDir {
        path: parent.to_path_buf(),
        source,
    })
}

/// `[[min_x, max_x], [min_y, max_y], [min_z, max_z]]`.
pub type Region = [[f64; 2]; 3];

fn region_to_aabb(region: &Region) -> Aabb {
    Aabb::from_ranges(region[0], region[1], region[2])
}

/// Physical size of the QR plaque before registration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaqueConfig {
    /// Side of the square footprint. Default: 100.0
    pub footprint_mm: f64,
    /// Block height. Default: 5.0
    pub height_mm: f64,
}

impl Default for PlaqueConfig {
    fn default() -> Self {
        let params = ExtrudeParams::default();
        Self {
            footprint_mm: params.footprint_mm,
            height_mm: params.height_mm,
        }
    }
}

/// Board frame and square heights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Board extents. Default: `[[-8, 8], [-1, 15], [-1, 1]]`
    pub bounds: Region,
    /// Top of even-parity squares. Default: 1.0
    pub raised_z: f64,
    /// Top of odd-parity squares. Default: 0.7
    pub lowered_z: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            bounds: [[-8.0, 8.0], [-1.0, 15.0], [-1.0, 1.0]],
            raised_z: 1.0,
            lowered_z: 0.7,
        }
    }
}

/// Where the plaque goes on the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Target region. Default: `[[-8, 8], [-1, 15], [-2.2, 1]]`
    pub target: Region,
    /// Rotation about X before scaling, in degrees. Default: 180
    pub rotation_x_deg: f64,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            target: [[-8.0, 8.0], [-1.0, 15.0], [-2.2, 1.0]],
            rotation_x_deg: 180.0,
        }
    }
}

/// Full pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeepsakeConfig {
    /// Directory holding `board.stl` and `pieces/*.stl`. Default: `assets`
    pub assets_dir: PathBuf,
    /// Final model path. Default: [`DEFAULT_OUTPUT`]
    pub output: PathBuf,
    /// Also write the bare QR plaque here.
    pub qr_output: Option<PathBuf>,
    /// Also write the board with pieces, before the plaque, here.
    pub board_output: Option<PathBuf>,
    /// Binary STL when `true`, ASCII otherwise. Default: true
    pub binary_stl: bool,
    /// QR symbol parameters.
    pub qr: QrParams,
    /// Plaque size.
    pub plaque: PlaqueConfig,
    /// Board frame.
    pub board: BoardConfig,
    /// Plaque placement.
    pub registration: RegistrationConfig,
}

impl Default for KeepsakeConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            output: PathBuf::from(DEFAULT_OUTPUT),
            qr_output: None,
            board_output: None,
            binary_stl: true,
            qr: QrParams::default(),
            plaque: PlaqueConfig::default(),
            board: BoardConfig::default(),
            registration: RegistrationConfig::default(),
        }
    }
}

impl KeepsakeConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// [`KeepsakeError::Config`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> KeepsakeResult<Self> {
        let path = path.as_ref();
        let config_error = |message: String| KeepsakeError::Config {
            path: path.to_path_buf(),
            message,
        };
        let text = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))
    }

    /// Serialize to pretty JSON.
    ///
    /// # Errors
    ///
    /// [`KeepsakeError::InvalidConfig`] if a value cannot be represented.
    pub fn to_json(&self) -> KeepsakeResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| KeepsakeError::InvalidConfig(e.to_string()))
    }

    /// Check every section can drive the pipeline.
    ///
    /// # Errors
    ///
    /// The first section that is invalid.
    pub fn validate(&self) -> KeepsakeResult<()> {
        self.qr.validate()?;
        self.extrude_params().validate()?;
        self.board_geometry().validate()?;
        let rotation = self.registration.rotation_x_deg;
        if !rotation.is_finite() {
            return Err(KeepsakeError::InvalidConfig(format!(
                "rotation_x_deg must be finite, got {rotation}"
            )));
        }
        Ok(())
    }

    /// Create the parent directories of every file this config writes.
    ///
    /// # Errors
    ///
    /// [`KeepsakeError::OutputDir`] for the first directory that cannot be
    /// created.
    pub fn create_output_dirs(&self) -> KeepsakeResult<()> {
        ensure_parent_dir(&self.output)?;
        for path in [&self.qr_output, &self.board_output].into_iter().flatten() {
            ensure_parent_dir(path)?;
        }
        Ok(())
    }

    /// Extrusion parameters for the plaque.
    #[must_use]
    pub fn extrude_params(&self) -> ExtrudeParams {
        ExtrudeParams::new(self.plaque.footprint_mm, self.plaque.height_mm)
    }

    /// Board frame for piece placement.
    #[must_use]
    pub fn board_geometry(&self) -> BoardGeometry {
        BoardGeometry::from_bounds(region_to_aabb(&self.board.bounds))
            .with_heights(self.board.raised_z, self.board.lowered_z)
    }

    /// Registration of the plaque onto the board.
    #[must_use]
    pub fn registration_params(&self) -> RegistrationParams {
        RegistrationParams::new(region_to_aabb(&self.registration.target))
            .with_rotation_x(self.registration.rotation_x_deg.to_radians())
    }

    /// Asset table rooted at `assets_dir`.
    #[must_use]
    pub fn piece_assets(&self) -> PieceAssets {
        PieceAssets::from_dir(&self.assets_dir)
    }
}

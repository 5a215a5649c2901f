//! Text to module matrix.

use mesh_extrude::OccupancyMatrix;
use qrcode::{Color, QrCode, Version};
use tracing::debug;

use crate::error::{QrError, QrResult};
use crate::params::{MAX_VERSION, QrParams};

/// Modules per side of a normal QR symbol of `version`.
#[must_use]
pub const fn symbol_width(version: i16) -> i16 {
    17 + 4 * version
}

/// Encode `data` and return its dark modules.
///
/// Starts at `params.version` and steps up one version at a time until the
/// data fits. The result is `symbol_width(v) + 2·border` on each side.
///
/// # Errors
///
/// - [`QrError::InvalidVersion`] for a version outside 1..=40
/// - [`QrError::InvalidBorder`] for a border wider than [`MAX_BORDER`](crate::MAX_BORDER)
/// - [`QrError::Encode`] if the data does not fit even version 40
pub fn encode(data: &str, params: &QrParams) -> QrResult<OccupancyMatrix> {
    params.validate()?;

    let ec_level = params.ec_level.to_qrcode();
    let mut version = params.version;
    let code = loop {
        match QrCode::with_version(data.as_bytes(), Version::Normal(version), ec_level) {
            Ok(code) => break code,
            Err(qrcode::types::QrError::DataTooLong) if version < MAX_VERSION => version += 1,
            Err(e) => return Err(QrError::Encode(e)),
        }
    };

    let width = code.width();
    let colors = code.to_colors();
    let symbol = OccupancyMatrix::from_fn(width, width, |row, col| {
        colors[row * width + col] == Color::Dark
    })?;
    let matrix = symbol.padded(params.border)?;

    debug!(
        requested_version = params.version,
        version,
        ec_level = %params.ec_level,
        modules = width,
        dark = matrix.count_occupied(),
        "Encoded QR symbol"
    );

    Ok(matrix)
}

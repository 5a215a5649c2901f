//! Chess keepsake model builder.
//!
//! Combines a QR plaque (encoding a game link) and a chessboard showing a
//! FEN position into a single printable STL:
//!
//! - [`build_qr_plaque`]: link → occupancy matrix → extruded plaque
//! - [`build_board`]: board asset + piece assets + FEN → board with pieces
//! - [`compose`]: plaque registered under the board and appended
//! - [`build_keepsake`]: all of the above, writing the final model
//!
//! Stages are deterministic and only write the files they are configured
//! to write, each atomically, so any of them can be re-run safely.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod config;
mod error;
mod pipeline;

pub use config::{
    BoardConfig, DEFAULT_OUTPUT, KeepsakeConfig, PlaqueConfig, Region, RegistrationConfig,
    ensure_parent_dir,
};
pub use error::{KeepsakeError, KeepsakeResult};
pub use pipeline::{
    KeepsakeSummary, build_board, build_keepsake, build_qr_plaque, compose, compose_files,
};

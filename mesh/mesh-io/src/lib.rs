//! STL file I/O for the keepsake generator.
//!
//! Loads the pre-built board and piece assets (binary or ASCII STL, detected
//! automatically) and writes the composed model.
//!
//! Saving is atomic: the mesh is written to a temporary file next to the
//! destination and renamed into place, so a failed write never leaves a
//! truncated STL behind.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{load_stl, save_stl};
//!
//! let board = load_stl("assets/board.stl").unwrap();
//! save_stl(&board, "final-product/final_model.stl", true).unwrap();
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{load_stl, read_stl, save_stl, write_stl};

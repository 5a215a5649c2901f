//! QR symbol rasterization.
//!
//! Encodes a string with the `qrcode` crate and returns its modules as an
//! [`OccupancyMatrix`] (dark module = occupied), ready for extrusion.
//!
//! # Example
//!
//! ```
//! use qr_matrix::{QrParams, encode};
//!
//! let matrix = encode("https://lichess.org/abc12345", &QrParams::default()).unwrap();
//! assert_eq!((matrix.rows(), matrix.cols()), (25, 25));
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod encode;
mod error;
mod params;

pub use encode::{encode, symbol_width};
pub use error::{QrError, QrResult};
pub use mesh_extrude::OccupancyMatrix;
pub use params::{ErrorCorrection, MAX_BORDER, QrParams};

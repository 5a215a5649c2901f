//! Mesh registration and compositing.
//!
//! Fits an overlay mesh (the QR plaque) into a target box on a base mesh
//! (the board) and appends it:
//!
//! 1. rotate the overlay about X (a half turn by default)
//! 2. scale it uniformly so its X width equals the target's X width
//! 3. move its XY center onto the target's XY center and its lowest point
//!    onto the target's floor
//! 4. append its faces after the base mesh's faces
//!
//! No welding or boolean union happens; overlapping geometry is kept as is.
//!
//! # Example
//!
//! ```
//! use mesh_composite::{RegistrationParams, composite};
//! use mesh_types::{MeshTopology, Point3, cuboid};
//!
//! let board = cuboid(Point3::new(-8.0, -1.0, -1.0), Point3::new(8.0, 15.0, 1.0));
//! let plaque = cuboid(Point3::origin(), Point3::new(100.0, 100.0, 5.0));
//!
//! let result = composite(board, plaque, &RegistrationParams::default()).unwrap();
//! assert_eq!(result.mesh.face_count(), 24);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod composite;
mod error;
mod params;

pub use composite::{Composition, Registration, composite, concatenate, register_to_region};
pub use error::{CompositeError, CompositeResult};
pub use params::RegistrationParams;

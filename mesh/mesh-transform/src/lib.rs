//! Affine mesh transformations.
//!
//! [`Transform3D`] wraps a homogeneous 4×4 matrix and applies it to every
//! vertex of an [`IndexedMesh`](mesh_types::IndexedMesh). The QR plaque is
//! rotated and scaled with it before compositing.
//!
//! # Example
//!
//! ```
//! use std::f64::consts::PI;
//! use mesh_transform::Transform3D;
//! use mesh_types::{cuboid, Point3};
//!
//! let plaque = cuboid(Point3::origin(), Point3::new(100.0, 100.0, 5.0));
//! let flipped = Transform3D::rotation_x(PI).apply(plaque);
//! let shrunk = Transform3D::uniform_scale(0.16).apply(flipped);
//! assert!(!shrunk.is_inside_out());
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod transform;

pub use transform::Transform3D;

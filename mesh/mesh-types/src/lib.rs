//! Core mesh types shared by every stage of the keepsake pipeline.
//!
//! - [`Vertex`] - A point in 3D space
//! - [`Triangle`] - A triangle with resolved vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//! - [`IndexedMesh`] - A triangle soup stored as a vertex buffer plus index triples
//!
//! # Units
//!
//! Coordinates are unit-agnostic `f64`. The QR plaque is generated in
//! millimeters; the board and pieces live in the board model's own frame.
//!
//! # Coordinate System
//!
//! Right-handed, Z up. Faces are wound **counter-clockwise when viewed from
//! outside**, so normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use mesh_types::{cuboid, MeshTopology, Point3};
//!
//! let block = cuboid(Point3::origin(), Point3::new(2.0, 2.0, 1.0));
//! assert_eq!(block.face_count(), 12);
//! assert!((block.signed_volume() - 4.0).abs() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod mesh;
mod traits;
mod triangle;
mod vertex;

pub use bounds::{Aabb, Axis};
pub use mesh::{IndexedMesh, cuboid};
pub use traits::{MeshBounds, MeshTopology};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

//! Overlay registration and triangle-buffer concatenation.

use std::fmt;

use mesh_transform::Transform3D;
use mesh_types::{Axis, IndexedMesh, MeshBounds, MeshTopology, Vector3};
use tracing::{debug, info};

use crate::error::{CompositeError, CompositeResult};
use crate::params::RegistrationParams;

/// Widths at or below this are treated as zero.
const MIN_EXTENT: f64 = 1e-12;

/// The transform actually applied to a registered overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Registration {
    /// Uniform scale factor applied after rotation.
    pub scale: f64,
    /// Translation applied after scaling.
    pub offset: Vector3<f64>,
}

impl fmt::Display for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scale {:.6}, offset ({:.4}, {:.4}, {:.4})",
            self.scale, self.offset.x, self.offset.y, self.offset.z
        )
    }
}

/// Result of [`composite`].
#[derive(Debug, Clone)]
pub struct Composition {
    /// Base faces followed by the registered overlay faces.
    pub mesh: IndexedMesh,
    /// How the overlay was placed.
    pub registration: Registration,
    /// Faces contributed by the base mesh.
    pub base_faces: usize,
    /// Faces contributed by the overlay.
    pub overlay_faces: usize,
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} + {} = {} triangles ({})",
            self.base_faces,
            self.overlay_faces,
            self.mesh.face_count(),
            self.registration
        )
    }
}

/// Rotate, scale and translate `mesh` into `params.target`.
///
/// After registration the mesh's X width equals the target's X width, its XY
/// center sits on the target's XY center, and its minimum Z equals the
/// target's minimum Z. Y and Z are scaled by the same factor as X.
///
/// # Errors
///
/// - [`CompositeError::EmptyMesh`] if `mesh` has no vertices
/// - [`CompositeError::DegenerateGeometry`] if the rotated mesh or the
///   target has no width along X
pub fn register_to_region(
    mesh: IndexedMesh,
    params: &RegistrationParams,
) -> CompositeResult<(IndexedMesh, Registration)> {
    let target = params.target;
    let target_width = target.extent(Axis::X);
    if !(target_width.is_finite() && target_width > MIN_EXTENT) {
        return Err(CompositeError::DegenerateGeometry {
            axis: Axis::X,
            extent: target_width,
        });
    }

    let rotated = Transform3D::rotation_x(params.rotation_x).apply(mesh);
    let bounds = rotated.bounds_opt().ok_or(CompositeError::EmptyMesh)?;

    let width = bounds.extent(Axis::X);
    if !(width.is_finite() && width > MIN_EXTENT) {
        return Err(CompositeError::DegenerateGeometry {
            axis: Axis::X,
            extent: width,
        });
    }

    let scale = target_width / width;
    let scaled = Transform3D::uniform_scale(scale).apply(rotated);

    let bounds = scaled.bounds();
    let center = bounds.center();
    let target_center = target.center();
    let offset = Vector3::new(
        target_center.x - center.x,
        target_center.y - center.y,
        target.min.z - bounds.min.z,
    );
    let placed = Transform3D::from_translation(offset).apply(scaled);

    let registration = Registration { scale, offset };
    debug!(%registration, "Registered overlay into target region");

    Ok((placed, registration))
}

/// Register `overlay` into `params.target` and append it to `base`.
///
/// The output has exactly `base.face_count() + overlay.face_count()` faces,
/// base faces first and untouched.
///
/// # Errors
///
/// See [`register_to_region`].
pub fn composite(
    base: IndexedMesh,
    overlay: IndexedMesh,
    params: &RegistrationParams,
) -> CompositeResult<Composition> {
    let base_faces = base.face_count();
    let overlay_faces = overlay.face_count();
    info!(base_faces, overlay_faces, "Compositing overlay onto base mesh");

    let (registered, registration) = register_to_region(overlay, params)?;
    let mut mesh = base;
    mesh.merge(&registered);

    let result = Composition {
        mesh,
        registration,
        base_faces,
        overlay_faces,
    };
    info!(%result, "Composite complete");
    Ok(result)
}

/// Concatenate meshes in order without welding or deduplication.
#[must_use]
pub fn concatenate<'a>(meshes: impl IntoIterator<Item = &'a IndexedMesh>) -> IndexedMesh {
    let mut out = IndexedMesh::new();
    for mesh in meshes {
        out.merge(mesh);
    }
    out
}

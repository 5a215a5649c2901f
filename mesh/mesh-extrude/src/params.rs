//! Extrusion parameters.

use crate::error::{ExtrudeError, ExtrudeResult};

/// Physical size of the extruded plaque.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeParams {
    /// Side of the square the whole matrix is fitted into, in millimeters.
    /// Default: 100.0 (10 cm)
    pub footprint_mm: f64,

    /// Height of every block, in millimeters. Default: 5.0
    pub height_mm: f64,
}

impl Default for ExtrudeParams {
    fn default() -> Self {
        Self {
            footprint_mm: 100.0,
            height_mm: 5.0,
        }
    }
}

impl ExtrudeParams {
    /// Params with the given footprint and height.
    #[must_use]
    pub const fn new(footprint_mm: f64, height_mm: f64) -> Self {
        Self {
            footprint_mm,
            height_mm,
        }
    }

    /// Set the footprint.
    #[must_use]
    pub const fn with_footprint_mm(mut self, footprint_mm: f64) -> Self {
        self.footprint_mm = footprint_mm;
        self
    }

    /// Set the block height.
    #[must_use]
    pub const fn with_height_mm(mut self, height_mm: f64) -> Self {
        self.height_mm = height_mm;
        self
    }

    /// Check that both lengths are positive and finite.
    ///
    /// # Errors
    ///
    /// [`ExtrudeError::InvalidFootprint`] or [`ExtrudeError::InvalidHeight`].
    pub fn validate(&self) -> ExtrudeResult<()> {
        if !(self.footprint_mm.is_finite() && self.footprint_mm > 0.0) {
            return Err(ExtrudeError::InvalidFootprint(self.footprint_mm));
        }
        if !(self.height_mm.is_finite() && self.height_mm > 0.0) {
            return Err(ExtrudeError::InvalidHeight(self.height_mm));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plaque_size() {
        let params = ExtrudeParams::default();
        assert!((params.footprint_mm - 100.0).abs() < f64::EPSILON);
        assert!((params.height_mm - 5.0).abs() < f64::EPSILON);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_lengths() {
        assert!(matches!(
            ExtrudeParams::new(0.0, 5.0).validate(),
            Err(ExtrudeError::InvalidFootprint(_))
        ));
        assert!(matches!(
            ExtrudeParams::default().with_height_mm(-1.0).validate(),
            Err(ExtrudeError::InvalidHeight(_))
        ));
        assert!(ExtrudeParams::default().with_footprint_mm(f64::NAN).validate().is_err());
    }
}

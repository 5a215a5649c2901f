//! QR encoding parameters.

use std::fmt;
use std::str::FromStr;

use crate::error::{QrError, QrResult};

/// Highest normal QR version.
pub(crate) const MAX_VERSION: i16 = 40;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Widest quiet zone, in modules, accepted around a symbol.
pub const MAX_BORDER: usize = 64;

/// Error-correction tier, lowest to highest redundancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCorrection {
    /// ~7% recovery, most compact.
    #[default]
    L,
    /// ~15% recovery.
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl ErrorCorrection {
    pub(crate) const fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            Self::L => qrcode::EcLevel::L,
            Self::M => qrcode::EcLevel::M,
            Self::Q => qrcode::EcLevel::Q,
            Self::H => qrcode::EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::L => "L",
            Self::M => "M",
            Self::Q => "Q",
            Self::H => "H",
        };
        f.write_str(s)
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(format!("unknown error-correction level {s:?}, expected L, M, Q or H")),
        }
    }
}

/// Symbol parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QrParams {
    /// Smallest version to try; larger versions are used when the data does
    /// not fit. Default: 2 (25×25 modules)
    pub version: i16,

    /// Error-correction tier. Default: [`ErrorCorrection::L`]
    pub ec_level: ErrorCorrection,

    /// Empty modules added around the symbol. Default: 0
    pub border: usize,
}

impl Default for QrParams {
    fn default() -> Self {
        Self {
            version: 2,
            ec_level: ErrorCorrection::L,
            border: 0,
        }
    }
}

impl QrParams {
    /// Set the minimum version.
    #[must_use]
    pub const fn with_version(mut self, version: i16) -> Self {
        self.version = version;
        self
    }

    /// Set the error-correction tier.
    #[must_use]
    pub const fn with_ec_level(mut self, ec_level: ErrorCorrection) -> Self {
        self.ec_level = ec_level;
        self
    }

    /// Set the quiet-zone width in modules.
    #[must_use]
    pub const fn with_border(mut self, border: usize) -> Self {
        self.border = border;
        self
    }

    /// Check the parameters before encoding.
    ///
    /// # Errors
    ///
    /// - [`QrError::InvalidVersion`] for a version outside 1..=40
    /// - [`QrError::InvalidBorder`] for a border wider than [`MAX_BORDER`]
    pub fn validate(&self) -> QrResult<()> {
        if !(1..=MAX_VERSION).contains(&self.version) {
            return Err(QrError::InvalidVersion(self.version));
        }
        if self.border > MAX_BORDER {
            return Err(QrError::InvalidBorder(self.border));
        }
        Ok(())
    }
}

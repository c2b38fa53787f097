//! Error types for grid construction and access.

use std::fmt;

/// Errors arising from grid construction, access, or reshaping.
///
/// Coordinates and extents are carried as their `Display` rendering so the
/// one error type serves every grid rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside the bounds of the grid.
    OutOfBounds {
        /// The offending coordinate.
        coord: String,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// Attempted to construct a grid with fewer than one cell on some axis.
    EmptyExtents {
        /// The rejected extents.
        extents: String,
    },
    /// The product of the requested extents exceeds addressable memory.
    VolumeTooLarge {
        /// The rejected extents.
        extents: String,
    },
    /// A slice or construction request is inconsistent with the source rank.
    DimensionMismatch {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::EmptyExtents { extents } => {
                write!(f, "grid extents {extents} must be at least 1 on every axis")
            }
            Self::VolumeTooLarge { extents } => {
                write!(f, "grid extents {extents} overflow the addressable volume")
            }
            Self::DimensionMismatch { reason } => {
                write!(f, "dimension mismatch: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}

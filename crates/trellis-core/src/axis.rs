//! Axis selectors for slicing higher-dimensional grids.

use std::fmt;

/// Names one axis of a three-dimensional grid.
///
/// Iteration order is row-major with `x` innermost, so `x` varies fastest
/// and `z` slowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis3 {
    /// The `x` axis (varies fastest).
    X,
    /// The `y` axis.
    Y,
    /// The `z` axis (varies slowest).
    Z,
}

impl fmt::Display for Axis3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// Names one axis of a four-dimensional grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis4 {
    /// The `x` axis (varies fastest).
    X,
    /// The `y` axis.
    Y,
    /// The `z` axis.
    Z,
    /// The `w` axis (varies slowest).
    W,
}

impl fmt::Display for Axis4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
            Self::W => write!(f, "w"),
        }
    }
}

//! Trellis: a dimension-generic bounded grid framework.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Trellis sub-crates. For most users, adding `trellis` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! // Parse a pattern, count neighbours, and label its regions.
//! let grid = Grid2::from_lines(["##.", "#..", "..#"], |ch| ch == '#').unwrap();
//! assert_eq!(count_matching(&grid, Point2::new(1, 1), true), 4);
//!
//! let labels = label_regions(&grid, |filled| filled);
//! let sizes = region_sizes(&labels);
//! assert_eq!(sizes.len(), 2);
//! assert_eq!(sizes[&0], 3);
//! assert_eq!(sizes[&1], 1);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trellis-core` | Point types, axis selectors, the error type |
//! | [`grid`] | `trellis-grid` | Bounded container, value counts, transforms |
//! | [`stencil`] | `trellis-stencil` | Neighbourhood tables and counting queries |
//! | [`ops`] | `trellis-ops` | Region labelling and generation stepping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Point types, axis selectors, and the error type (`trellis-core`).
///
/// Contains the concrete coordinates [`types::Point2`],
/// [`types::Point3`], and [`types::Point4`], the [`types::GridPoint`]
/// trait they share, and [`types::GridError`].
pub use trellis_core as types;

/// The bounded container and its derived views (`trellis-grid`).
///
/// [`grid::Grid`] is the dense storage every other layer builds on;
/// this module also carries the frequency index
/// ([`grid::ValueCounts`]), rotations, flips, slices, and the ASCII
/// boundary.
pub use trellis_grid as grid;

/// Neighbourhood tables and counting queries (`trellis-stencil`).
///
/// [`stencil::Stencil`] applies orthogonal, full, or hexagonal offset
/// tables at a coordinate; [`stencil::Lattice`] keys the Cartesian
/// tables by point type.
pub use trellis_stencil as stencil;

/// Whole-grid algorithms (`trellis-ops`).
///
/// [`ops::label_regions`] for connected-component segmentation,
/// [`ops::next_generation`] and [`ops::padded`] for
/// cellular-automaton stepping.
pub use trellis_ops as ops;

/// Common imports for typical Trellis usage.
///
/// ```rust
/// use trellis::prelude::*;
/// ```
///
/// This imports the point and grid types, the error type, the stencil
/// machinery, and the whole-grid algorithms.
pub mod prelude {
    // Coordinates
    pub use trellis_core::{Axis3, Axis4, GridPoint, Point2, Point3, Point4};

    // Errors
    pub use trellis_core::GridError;

    // Grids
    pub use trellis_grid::{Grid, Grid2, Grid3, Grid4, ValueCounts};

    // Stencils
    pub use trellis_stencil::{count_matching, hex_stencil, Lattice, Stencil};

    // Whole-grid algorithms
    pub use trellis_ops::{label_regions, next_generation, padded, region_sizes, UNLABELLED};
}

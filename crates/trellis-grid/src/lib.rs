//! Dense bounded grids with incrementally maintained value counts.
//!
//! This crate defines [`Grid`], the hyperrectangular cell container at the
//! heart of the framework, generic over the point types from
//! [`trellis_core`]. Every write goes through [`Grid::set`], which updates
//! the owned [`ValueCounts`] index in the same operation, so frequency
//! queries are O(1) and can never drift from the cells.
//!
//! # Capabilities
//!
//! - Construction from extents plus a fill value, an init function, a flat
//!   row-major buffer, or lines of text ([`Grid::from_lines`])
//! - Bounds-checked reads and writes with paired count maintenance
//! - Grow/crop with offset ([`Grid::resize_with_offset`]), the mechanism by
//!   which automaton universes grow and results are cropped tight
//! - Quarter-turn rotation and axis flips in 2D, cross-section slicing from
//!   3D and 4D
//! - Row-major iteration, searching, and rendering back to text

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod counts;
pub mod grid;

mod ascii;
mod transform;

#[cfg(test)]
pub(crate) mod conformance;

pub use counts::ValueCounts;
pub use grid::{Grid, Grid2, Grid3, Grid4};

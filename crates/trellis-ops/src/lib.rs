//! Whole-grid algorithms: region labelling and generation stepping.
//!
//! Everything here consumes the grid, stencil, and coordinate layers
//! without adding state of its own. [`label_regions`] segments a grid
//! into orthogonally-connected regions under a caller-supplied
//! predicate; [`next_generation`] and [`padded`] form the
//! cellular-automaton drive loop, with the rule itself staying in the
//! caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod evolve;
pub mod label;

pub use evolve::{next_generation, padded};
pub use label::{label_regions, region_sizes, UNLABELLED};

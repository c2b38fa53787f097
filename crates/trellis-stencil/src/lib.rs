//! Neighbourhood stencils and counting queries over bounded grids.
//!
//! A [`Stencil`] is a fixed table of relative offsets. Applied at a
//! coordinate it yields that cell's in-bounds neighbours; offsets that
//! leave the grid are skipped, never wrapped. The crate ships the
//! orthogonal and full (Moore) tables for every supported rank, keyed
//! by point type through the [`Lattice`] trait, plus a six-direction
//! hexagonal stencil over axial coordinates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod hex;
pub mod lattice;
pub mod stencil;

pub use hex::{axial_distance, hex_stencil};
pub use lattice::{count_matching, Lattice};
pub use stencil::Stencil;

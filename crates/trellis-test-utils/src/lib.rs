//! Test fixtures for Trellis development.
//!
//! Canned patterns ([`patterns::cross`], [`patterns::glider`]) and
//! seeded random fills for property tests and benchmark setup.
//! Everything here is deterministic; random grids take an explicit
//! seed.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod patterns;
pub mod random;

pub use patterns::{blinker, checkerboard, cross, glider, ring};
pub use random::{random_booleans, random_grid};

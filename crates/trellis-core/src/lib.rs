//! Coordinate types and addressing primitives for the Trellis grid framework.
//!
//! This is the leaf crate with zero dependencies. It defines the concrete
//! point types ([`Point2`], [`Point3`], [`Point4`]), the [`GridPoint`] trait
//! that ties them to row-major addressing, the axis selectors used when
//! slicing higher-dimensional grids, and the shared [`GridError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod point;

pub use axis::{Axis3, Axis4};
pub use error::GridError;
pub use point::{GridPoint, Point2, Point3, Point4};

//! Hexagonal adjacency over axial coordinates.
//!
//! Hex fields reuse [`Point2`] as an axial coordinate: `x` is the `q`
//! column and `y` the `r` row of a pointy-top layout. Storage is
//! unchanged, so every grid operation works as-is; only adjacency
//! differs, through [`hex_stencil`].
//!
//! # Coordinate System
//!
//! An axial field of extents `(w, h)` is a rhombus of `w * h` cells.
//! The six neighbours of a cell, in table order: east, north-east,
//! north-west, west, south-west, south-east. As with the Cartesian
//! stencils, offsets that leave the field are skipped, so edge cells
//! have fewer than six neighbours.
//!
//! # Distance
//!
//! [`axial_distance`] is the walking distance between two cells,
//! `max(|dq|, |dr|, |dq + dr|)`.

use trellis_core::Point2;

use crate::stencil::Stencil;

/// Pointy-top axial offsets: E, NE, NW, W, SW, SE.
const HEX_OFFSETS: [Point2; 6] = [
    Point2::new(1, 0),
    Point2::new(1, -1),
    Point2::new(0, -1),
    Point2::new(-1, 0),
    Point2::new(-1, 1),
    Point2::new(0, 1),
];

/// The six-direction hexagonal stencil.
///
/// # Examples
///
/// ```
/// use trellis_core::Point2;
/// use trellis_grid::Grid2;
/// use trellis_stencil::hex_stencil;
///
/// let field = Grid2::new(Point2::new(5, 5), 0u8).unwrap();
/// let corner = hex_stencil().neighbours(&field, Point2::new(0, 0));
/// assert_eq!(corner.len(), 2);
/// ```
pub const fn hex_stencil() -> Stencil<Point2> {
    Stencil::from_offsets(&HEX_OFFSETS)
}

/// Hex-grid walking distance between two axial coordinates.
pub fn axial_distance(a: Point2, b: Point2) -> i32 {
    let dq = b.x - a.x;
    let dr = b.y - a.y;
    dq.abs().max(dr.abs()).max((dq + dr).abs())
}

//! Cartesian neighbourhood tables for square, cubic, and tesseractic
//! lattices.
//!
//! # Table Order
//!
//! The 2D tables follow compass order: north, south, west, east, then
//! the diagonals NW, NE, SW, SE. The higher-rank tables are generated
//! in the scan order grids iterate in. Table order is stable across
//! releases; neighbour lists and discovery-order tie-breaks may rely
//! on it.

use std::hash::Hash;
use std::sync::LazyLock;

use trellis_core::{GridPoint, Point2, Point3, Point4};
use trellis_grid::Grid;

use crate::stencil::Stencil;

/// Orthogonal unit offsets in 2D: N, S, W, E.
const ORTHOGONAL_2: [Point2; 4] = [
    Point2::new(0, -1),
    Point2::new(0, 1),
    Point2::new(-1, 0),
    Point2::new(1, 0),
];

/// Full 2D neighbourhood: the orthogonal offsets followed by the
/// diagonals NW, NE, SW, SE.
const MOORE_2: [Point2; 8] = [
    Point2::new(0, -1),
    Point2::new(0, 1),
    Point2::new(-1, 0),
    Point2::new(1, 0),
    Point2::new(-1, -1),
    Point2::new(1, -1),
    Point2::new(-1, 1),
    Point2::new(1, 1),
];

/// Orthogonal unit offsets in 3D, one axis at a time.
const ORTHOGONAL_3: [Point3; 6] = [
    Point3::new(-1, 0, 0),
    Point3::new(1, 0, 0),
    Point3::new(0, -1, 0),
    Point3::new(0, 1, 0),
    Point3::new(0, 0, -1),
    Point3::new(0, 0, 1),
];

/// Orthogonal unit offsets in 4D, one axis at a time.
const ORTHOGONAL_4: [Point4; 8] = [
    Point4::new(-1, 0, 0, 0),
    Point4::new(1, 0, 0, 0),
    Point4::new(0, -1, 0, 0),
    Point4::new(0, 1, 0, 0),
    Point4::new(0, 0, -1, 0),
    Point4::new(0, 0, 1, 0),
    Point4::new(0, 0, 0, -1),
    Point4::new(0, 0, 0, 1),
];

/// The 26 offsets of the full 3D neighbourhood, generated once in scan
/// order.
static MOORE_3: LazyLock<Vec<Point3>> = LazyLock::new(|| {
    let mut offsets = Vec::with_capacity(26);
    for dz in -1..=1 {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let offset = Point3::new(dx, dy, dz);
                if !offset.is_zero() {
                    offsets.push(offset);
                }
            }
        }
    }
    offsets
});

/// The 80 offsets of the full 4D neighbourhood, generated once in scan
/// order.
static MOORE_4: LazyLock<Vec<Point4>> = LazyLock::new(|| {
    let mut offsets = Vec::with_capacity(80);
    for dw in -1..=1 {
        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let offset = Point4::new(dx, dy, dz, dw);
                    if !offset.is_zero() {
                        offsets.push(offset);
                    }
                }
            }
        }
    }
    offsets
});

/// Ties a point type to its Cartesian neighbourhood tables.
///
/// Code that is generic over rank reaches stencils through this trait
/// rather than naming per-rank tables. Hexagonal adjacency is not a
/// `Lattice`: it reinterprets [`Point2`] and lives in
/// [`hex`](crate::hex).
pub trait Lattice: GridPoint {
    /// The `2 * RANK` orthogonal unit offsets.
    fn orthogonal_offsets() -> &'static [Self];

    /// The `3 ^ RANK - 1` offsets of the full neighbourhood.
    fn moore_offsets() -> &'static [Self];
}

impl Lattice for Point2 {
    fn orthogonal_offsets() -> &'static [Self] {
        &ORTHOGONAL_2
    }

    fn moore_offsets() -> &'static [Self] {
        &MOORE_2
    }
}

impl Lattice for Point3 {
    fn orthogonal_offsets() -> &'static [Self] {
        &ORTHOGONAL_3
    }

    fn moore_offsets() -> &'static [Self] {
        MOORE_3.as_slice()
    }
}

impl Lattice for Point4 {
    fn orthogonal_offsets() -> &'static [Self] {
        &ORTHOGONAL_4
    }

    fn moore_offsets() -> &'static [Self] {
        MOORE_4.as_slice()
    }
}

/// Counts neighbours of `centre` equal to `target` under the full
/// neighbourhood for the grid's rank.
///
/// Convenience for [`Stencil::moore`] followed by
/// [`Stencil::count_matching`]. Pass an explicit stencil instead when
/// orthogonal or hexagonal adjacency is wanted.
pub fn count_matching<P, T>(grid: &Grid<P, T>, centre: P, target: T) -> usize
where
    P: Lattice,
    T: Copy + Eq + Hash,
{
    Stencil::moore().count_matching(grid, centre, target)
}

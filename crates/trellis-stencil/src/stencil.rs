//! The [`Stencil`] type: a fixed set of relative offsets applied at a
//! grid coordinate.
//!
//! A stencil never wraps. Offsets that land outside the grid are
//! skipped, so cells on an edge or corner simply have fewer neighbours
//! than interior cells.

use std::hash::Hash;

use smallvec::SmallVec;
use trellis_core::GridPoint;
use trellis_grid::Grid;

use crate::lattice::Lattice;

/// A fixed neighbourhood: a borrowed table of relative offsets.
///
/// Stencils are cheap to copy and carry no per-grid state. The standard
/// Cartesian tables are exposed through [`Stencil::orthogonal`] and
/// [`Stencil::moore`]; the hexagonal table lives in [`hex`](crate::hex).
///
/// # Examples
///
/// ```
/// use trellis_core::Point2;
/// use trellis_grid::Grid2;
/// use trellis_stencil::Stencil;
///
/// let grid = Grid2::from_lines([".#.", "#.#", ".#."], |ch| ch == '#').unwrap();
/// let around_centre = Stencil::moore().count_matching(&grid, Point2::new(1, 1), true);
/// assert_eq!(around_centre, 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Stencil<P: 'static> {
    offsets: &'static [P],
}

impl<P: GridPoint> Stencil<P> {
    /// Wraps a table of relative offsets.
    ///
    /// The table is borrowed for the life of the process, so stencils
    /// are built over `const` tables or lazily-initialised statics.
    pub const fn from_offsets(offsets: &'static [P]) -> Self {
        Self { offsets }
    }

    /// The relative offsets, in their fixed table order.
    pub const fn offsets(&self) -> &'static [P] {
        self.offsets
    }

    /// Number of offsets in the stencil.
    pub const fn len(&self) -> usize {
        self.offsets.len()
    }

    /// `true` if the stencil has no offsets.
    pub const fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Counts neighbours of `centre` whose value equals `target`.
    ///
    /// Offsets that leave the grid contribute nothing.
    pub fn count_matching<T>(&self, grid: &Grid<P, T>, centre: P, target: T) -> usize
    where
        T: Copy + Eq + Hash,
    {
        self.offsets
            .iter()
            .filter(|&&offset| grid.value_at(centre + offset) == Some(target))
            .count()
    }

    /// Counts neighbours of `centre` whose value satisfies `predicate`.
    ///
    /// Offsets that leave the grid contribute nothing.
    pub fn count_where<T, F>(&self, grid: &Grid<P, T>, centre: P, mut predicate: F) -> usize
    where
        T: Copy + Eq + Hash,
        F: FnMut(T) -> bool,
    {
        self.offsets
            .iter()
            .filter_map(|&offset| grid.value_at(centre + offset))
            .filter(|&value| predicate(value))
            .count()
    }

    /// Collects the in-bounds neighbours of `centre` as coordinate and
    /// value pairs, in table order.
    ///
    /// The inline capacity covers every 2D stencil; the 3D and 4D full
    /// neighbourhoods spill to the heap.
    pub fn neighbours<T>(&self, grid: &Grid<P, T>, centre: P) -> SmallVec<[(P, T); 8]>
    where
        T: Copy + Eq + Hash,
    {
        self.offsets
            .iter()
            .filter_map(|&offset| {
                let point = centre + offset;
                grid.value_at(point).map(|value| (point, value))
            })
            .collect()
    }
}

impl<P: Lattice> Stencil<P> {
    /// The orthogonal ("adjacent") stencil for the point's rank: the
    /// `2 * RANK` unit steps along each axis.
    pub fn orthogonal() -> Self {
        Self::from_offsets(P::orthogonal_offsets())
    }

    /// The full (Moore) stencil for the point's rank: all
    /// `3 ^ RANK - 1` offsets whose components lie in `{-1, 0, 1}`,
    /// excluding the origin.
    pub fn moore() -> Self {
        Self::from_offsets(P::moore_offsets())
    }
}

//! Grid invariant conformance helpers.
//!
//! These functions verify that a grid upholds the frequency-index and
//! iteration contracts after arbitrary operation sequences. Reused across
//! the 2D/3D/4D test modules.

use crate::Grid;
use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;
use trellis_core::GridPoint;

/// Assert that every frequency count matches a fresh scan of the cells.
pub fn assert_counts_mirror_cells<P, T>(grid: &Grid<P, T>)
where
    P: GridPoint,
    T: Copy + Eq + Hash + Debug,
{
    let mut scanned: IndexMap<T, usize> = IndexMap::new();
    for (_, value) in grid.iter() {
        *scanned.entry(value).or_insert(0) += 1;
    }
    assert_eq!(
        grid.value_counts().len(),
        scanned.len(),
        "index tracks {} distinct values, cell scan found {}",
        grid.value_counts().len(),
        scanned.len()
    );
    for (value, expected) in &scanned {
        let counted = grid.value_counts().count(*value);
        assert_eq!(
            counted, *expected,
            "count for {value:?} is {counted}, cell scan found {expected}"
        );
    }
}

/// Assert that the frequency counts sum to the grid volume.
pub fn assert_counts_total_is_volume<P, T>(grid: &Grid<P, T>)
where
    P: GridPoint,
    T: Copy + Eq + Hash,
{
    assert_eq!(
        grid.value_counts().total(),
        grid.volume(),
        "counts total ({}) != volume ({})",
        grid.value_counts().total(),
        grid.volume()
    );
}

/// Assert that iteration is complete, in-bounds, and in row-major order.
pub fn assert_iteration_row_major<P, T>(grid: &Grid<P, T>)
where
    P: GridPoint,
    T: Copy + Eq + Hash,
{
    let mut visited = 0usize;
    let mut previous: Option<P> = None;
    for (point, _) in grid.iter() {
        assert!(
            point.in_bounds(grid.extents()),
            "iterated point {point} out of bounds"
        );
        assert_eq!(
            point.linear_index(grid.extents()),
            visited,
            "point {point} out of row-major position"
        );
        if let Some(prev) = previous {
            assert!(prev < point, "scan order violated: {prev} before {point}");
        }
        previous = Some(point);
        visited += 1;
    }
    assert_eq!(
        visited,
        grid.volume(),
        "iteration visited {visited} of {} cells",
        grid.volume()
    );
}

/// Run all conformance checks on a grid.
pub fn run_full_conformance<P, T>(grid: &Grid<P, T>)
where
    P: GridPoint,
    T: Copy + Eq + Hash + Debug,
{
    assert_counts_mirror_cells(grid);
    assert_counts_total_is_volume(grid);
    assert_iteration_row_major(grid);
}

//! Generation stepping for cellular automata.
//!
//! The drive loop every automaton needs: apply a rule to each cell
//! against the frozen previous generation, and pad the universe by a
//! uniform margin when a pattern's support grows. Rule logic stays
//! with the caller as a closure over the counting primitives.

use std::hash::Hash;

use trellis_core::{GridError, GridPoint};
use trellis_grid::Grid;

/// Computes the next generation by applying `rule` to every cell.
///
/// The rule receives the whole previous generation, the cell's
/// coordinate, and its current value, and returns the cell's next
/// value. Every read the rule performs sees the previous generation;
/// writes land only in the grid being built.
///
/// # Examples
///
/// ```
/// use trellis_grid::Grid2;
/// use trellis_ops::next_generation;
/// use trellis_stencil::count_matching;
///
/// let bar = Grid2::from_lines(["...", "###", "..."], |ch| ch == '#').unwrap();
/// let next = next_generation(&bar, |prev, point, alive| {
///     matches!((alive, count_matching(prev, point, true)), (true, 2) | (_, 3))
/// });
/// assert_eq!(next.render(|alive| if alive { '#' } else { '.' }), ".#.\n.#.\n.#.");
/// ```
pub fn next_generation<P, T, R>(grid: &Grid<P, T>, mut rule: R) -> Grid<P, T>
where
    P: GridPoint,
    T: Copy + Eq + Hash,
    R: FnMut(&Grid<P, T>, P, T) -> T,
{
    let mut cells = Vec::with_capacity(grid.volume());
    for (point, value) in grid.iter() {
        cells.push(rule(grid, point, value));
    }
    Grid::from_cells(grid.extents(), cells).expect("one output cell per input cell")
}

/// Grows the grid by `margin` cells of `default` on every side.
///
/// The per-generation expansion idiom for automata whose support is
/// unbounded: pad, then step. A negative margin trims a border of the
/// same width instead; extents that would drop below 1 on any axis are
/// [`GridError::EmptyExtents`].
pub fn padded<P, T>(grid: &Grid<P, T>, margin: i32, default: T) -> Result<Grid<P, T>, GridError>
where
    P: GridPoint,
    T: Copy + Eq + Hash,
{
    let new_extents = grid.extents() + P::splat(2 * margin);
    grid.resize_with_offset(new_extents, P::splat(margin), default)
}

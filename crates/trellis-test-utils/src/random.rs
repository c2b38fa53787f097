//! Seeded random grid builders.
//!
//! Deterministic by construction: the same seed always produces the
//! same grid, so property tests and benches can name their inputs.

use std::hash::Hash;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use trellis_core::GridPoint;
use trellis_grid::Grid;

/// A grid filled by uniform draws from `choices`.
///
/// # Panics
///
/// Panics if `choices` is empty or `extents` is not a valid grid shape.
pub fn random_grid<P, T>(extents: P, seed: u64, choices: &[T]) -> Grid<P, T>
where
    P: GridPoint,
    T: Copy + Eq + Hash,
{
    assert!(!choices.is_empty(), "choices must be non-empty");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(extents, |_| choices[rng.random_range(0..choices.len())])
        .expect("fixture extents are valid")
}

/// A boolean grid where each cell is `true` with probability `density`.
///
/// # Panics
///
/// Panics if `density` is outside `[0, 1]` or `extents` is not a valid
/// grid shape.
pub fn random_booleans<P: GridPoint>(extents: P, seed: u64, density: f64) -> Grid<P, bool> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Grid::from_fn(extents, |_| rng.random_bool(density)).expect("fixture extents are valid")
}

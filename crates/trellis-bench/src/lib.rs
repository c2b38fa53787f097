//! Benchmark profiles for the Trellis grid framework.
//!
//! Pre-built grids sized like the workloads the benches measure:
//!
//! - [`reference_field`]: 100×100 boolean field (10K cells), seeded fill
//! - [`reference_values`]: 100×100 grid over a five-symbol alphabet
//! - [`stress_field`]: 316×316 boolean field (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trellis_core::Point2;
use trellis_grid::Grid2;
use trellis_test_utils::{random_booleans, random_grid};

/// A 100×100 boolean field at 50% density, deterministic in `seed`.
pub fn reference_field(seed: u64) -> Grid2<bool> {
    random_booleans(Point2::new(100, 100), seed, 0.5)
}

/// A 100×100 grid drawing uniformly from the alphabet `0..5`.
pub fn reference_values(seed: u64) -> Grid2<u8> {
    random_grid(Point2::new(100, 100), seed, &[0, 1, 2, 3, 4])
}

/// A 316×316 boolean field (~100K cells) for stress runs.
pub fn stress_field(seed: u64) -> Grid2<bool> {
    random_booleans(Point2::new(316, 316), seed, 0.5)
}

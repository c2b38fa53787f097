//! Connected-component labelling over a predicate view of a grid.
//!
//! [`label_regions`] segments the cells a predicate admits into
//! orthogonally-connected regions (four-connectivity in 2D, six in 3D,
//! eight in 4D) and returns a same-shaped map of region identifiers.
//! Diagonal contact never joins regions.

use std::collections::VecDeque;
use std::hash::Hash;

use indexmap::IndexMap;
use trellis_core::GridPoint;
use trellis_grid::Grid;
use trellis_stencil::Lattice;

/// Sentinel held by cells the predicate excluded from labelling.
pub const UNLABELLED: i32 = -1;

/// Segments `grid` into orthogonally-connected regions of cells that
/// satisfy `included`.
///
/// Returns a same-shaped map in which each included cell holds its
/// region's identifier and each excluded cell holds [`UNLABELLED`].
/// Identifiers start at 0 and follow the scan order in which unvisited
/// included cells are first encountered; they carry no meaning beyond
/// distinguishing regions.
///
/// # Examples
///
/// ```
/// use trellis_grid::Grid2;
/// use trellis_ops::{label_regions, region_sizes};
///
/// let grid = Grid2::from_lines(["##.", "...", ".##"], |ch| ch == '#').unwrap();
/// let labels = label_regions(&grid, |filled| filled);
/// let sizes = region_sizes(&labels);
/// assert_eq!(sizes.len(), 2);
/// assert_eq!(sizes[&0], 2);
/// ```
pub fn label_regions<P, T, F>(grid: &Grid<P, T>, mut included: F) -> Grid<P, i32>
where
    P: Lattice,
    T: Copy + Eq + Hash,
    F: FnMut(T) -> bool,
{
    let extents = grid.extents();
    let mask: Vec<bool> = grid.iter().map(|(_, value)| included(value)).collect();
    let mut labels = vec![UNLABELLED; mask.len()];
    let mut queue = VecDeque::new();
    let mut next_label = 0;

    for seed in 0..mask.len() {
        if !mask[seed] || labels[seed] != UNLABELLED {
            continue;
        }
        // Flood one region outward from the seed. Cells are labelled
        // as they are queued, so no cell enters the queue twice.
        labels[seed] = next_label;
        queue.push_back(seed);
        while let Some(index) = queue.pop_front() {
            let point = P::from_linear_index(index, extents);
            for &offset in P::orthogonal_offsets() {
                let neighbour = point + offset;
                if !neighbour.in_bounds(extents) {
                    continue;
                }
                let neighbour_index = neighbour.linear_index(extents);
                if mask[neighbour_index] && labels[neighbour_index] == UNLABELLED {
                    labels[neighbour_index] = next_label;
                    queue.push_back(neighbour_index);
                }
            }
        }
        next_label += 1;
    }

    Grid::from_cells(extents, labels).expect("one label per source cell")
}

/// Cell count per region identifier, in ascending identifier order.
///
/// Read straight off the label map's value counts; the [`UNLABELLED`]
/// sentinel is omitted.
pub fn region_sizes<P: GridPoint>(labels: &Grid<P, i32>) -> IndexMap<i32, usize> {
    labels
        .value_counts()
        .iter()
        .filter(|&(label, _)| label != UNLABELLED)
        .collect()
}

//! The dense bounded grid container.

use crate::counts::ValueCounts;
use std::hash::Hash;
use trellis_core::{GridError, GridPoint, Point2, Point3, Point4};

/// A hyperrectangular array of cells indexed by a point type.
///
/// Cells live in one flat row-major buffer (`x` innermost), and the grid
/// owns a [`ValueCounts`] index that is updated as part of every write.
/// Addressable points satisfy `0 <= component < extent` per axis; anything
/// else is rejected with [`GridError::OutOfBounds`]. Grids never grow on
/// their own — callers reshape explicitly with
/// [`resize_with_offset`](Grid::resize_with_offset).
///
/// # Examples
///
/// ```
/// use trellis_core::Point2;
/// use trellis_grid::Grid;
///
/// let mut grid = Grid::new(Point2::new(3, 3), '.').unwrap();
/// let old = grid.set(Point2::new(1, 1), '#').unwrap();
/// assert_eq!(old, '.');
/// assert_eq!(grid.get(Point2::new(1, 1)).unwrap(), '#');
/// assert_eq!(grid.value_counts().count('.'), 8);
/// assert_eq!(grid.value_counts().count('#'), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Grid<P, T> {
    extents: P,
    cells: Vec<T>,
    counts: ValueCounts<T>,
}

/// A two-dimensional grid.
pub type Grid2<T> = Grid<Point2, T>;

/// A three-dimensional grid.
pub type Grid3<T> = Grid<Point3, T>;

/// A four-dimensional grid.
pub type Grid4<T> = Grid<Point4, T>;

impl<P: GridPoint, T: Copy + Eq + Hash> Grid<P, T> {
    /// Create a grid with the given extents, every cell set to `fill`.
    ///
    /// Returns [`GridError::EmptyExtents`] when any axis is below 1 and
    /// [`GridError::VolumeTooLarge`] when the cell count overflows `usize`.
    pub fn new(extents: P, fill: T) -> Result<Self, GridError> {
        let volume = Self::validated_volume(extents)?;
        Ok(Self {
            extents,
            cells: vec![fill; volume],
            counts: ValueCounts::seeded(fill, volume),
        })
    }

    /// Create a grid by evaluating `init` at every point in row-major order.
    pub fn from_fn(extents: P, init: impl FnMut(P) -> T) -> Result<Self, GridError> {
        Self::validated_volume(extents)?;
        Ok(Self::build(extents, init))
    }

    /// Create a grid from a row-major cell buffer.
    ///
    /// Returns [`GridError::DimensionMismatch`] when the buffer length does
    /// not equal the volume of `extents`.
    pub fn from_cells(extents: P, cells: Vec<T>) -> Result<Self, GridError> {
        let volume = Self::validated_volume(extents)?;
        if cells.len() != volume {
            return Err(GridError::DimensionMismatch {
                reason: format!(
                    "{} cells supplied for extents {} ({volume} cells)",
                    cells.len(),
                    extents,
                ),
            });
        }
        let mut counts = ValueCounts::new();
        for &value in &cells {
            counts.increment(value);
        }
        Ok(Self {
            extents,
            cells,
            counts,
        })
    }

    /// Build without re-validating extents.
    ///
    /// Reshaping and slicing derive their extents from a grid that already
    /// passed construction, so the volume is known to fit.
    pub(crate) fn build(extents: P, mut init: impl FnMut(P) -> T) -> Self {
        let volume = P::checked_volume(extents).expect("extents validated by source grid");
        let mut cells = Vec::with_capacity(volume);
        let mut counts = ValueCounts::new();
        for index in 0..volume {
            let value = init(P::from_linear_index(index, extents));
            counts.increment(value);
            cells.push(value);
        }
        Self {
            extents,
            cells,
            counts,
        }
    }

    fn validated_volume(extents: P) -> Result<usize, GridError> {
        match P::checked_volume(extents) {
            Some(0) => Err(GridError::EmptyExtents {
                extents: extents.to_string(),
            }),
            Some(volume) => Ok(volume),
            None if extents.is_non_negative() => Err(GridError::VolumeTooLarge {
                extents: extents.to_string(),
            }),
            None => Err(GridError::EmptyExtents {
                extents: extents.to_string(),
            }),
        }
    }

    /// Per-axis extents.
    pub fn extents(&self) -> P {
        self.extents
    }

    /// The centre point: extents divided by 2 on each axis (truncating).
    ///
    /// Always addressable, since every axis extent is at least 1.
    pub fn center(&self) -> P {
        self.extents / 2
    }

    /// Total cell count.
    pub fn volume(&self) -> usize {
        self.cells.len()
    }

    /// The value at `point`, or [`GridError::OutOfBounds`].
    pub fn get(&self, point: P) -> Result<T, GridError> {
        let index = self.checked_index(point)?;
        Ok(self.cells[index])
    }

    /// `true` when `point` is addressable in this grid.
    pub fn contains(&self, point: P) -> bool {
        point.in_bounds(self.extents)
    }

    /// The value at `point`, or `None` when `point` is out of bounds.
    ///
    /// The non-erroring lookup used by neighbourhood queries, where falling
    /// off the edge is expected rather than a caller bug.
    pub fn value_at(&self, point: P) -> Option<T> {
        if point.in_bounds(self.extents) {
            Some(self.cells[point.linear_index(self.extents)])
        } else {
            None
        }
    }

    /// Write `value` at `point`, returning the previous value.
    ///
    /// The frequency index is updated before the method returns; there is
    /// no other mutation path, so it can never drift from the cells.
    pub fn set(&mut self, point: P, value: T) -> Result<T, GridError> {
        let index = self.checked_index(point)?;
        Ok(self.write_indexed(index, value))
    }

    /// Read-only view of the value-frequency index.
    pub fn value_counts(&self) -> &ValueCounts<T> {
        &self.counts
    }

    /// Number of cells holding `value`. O(1) via the frequency index.
    pub fn count_of(&self, value: T) -> usize {
        self.counts.count(value)
    }

    /// Number of cells satisfying `pred`. O(volume) scan.
    pub fn count_where(&self, mut pred: impl FnMut(T) -> bool) -> usize {
        self.cells.iter().filter(|&&value| pred(value)).count()
    }

    /// Iterate `(point, value)` pairs in row-major order.
    ///
    /// Lazy and restartable: each call starts a fresh pass.
    pub fn iter(&self) -> impl Iterator<Item = (P, T)> + '_ {
        let extents = self.extents;
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, &value)| (P::from_linear_index(index, extents), value))
    }

    /// The first point holding `value` in row-major order, if any.
    pub fn position_of(&self, value: T) -> Option<P> {
        self.cells
            .iter()
            .position(|&cell| cell == value)
            .map(|index| P::from_linear_index(index, self.extents))
    }

    /// Iterate every point holding `value` in row-major order.
    pub fn positions_of(&self, value: T) -> impl Iterator<Item = P> + '_ {
        self.iter()
            .filter(move |&(_, cell)| cell == value)
            .map(|(point, _)| point)
    }

    /// Copy this grid into a new one with `new_extents`, shifted by
    /// `offset`.
    ///
    /// For every point `p` of the new grid, the cell is the old value at
    /// `p - offset` when that lands in the old bounds, and `default`
    /// otherwise. A positive offset with larger extents grows the grid (a
    /// cellular-automaton universe adding a margin); a negative offset
    /// crops it to a tight bounding box. Cells that map back into the old
    /// bounds are never lost.
    pub fn resize_with_offset(
        &self,
        new_extents: P,
        offset: P,
        default: T,
    ) -> Result<Self, GridError> {
        let volume = Self::validated_volume(new_extents)?;

        // Pure growth keeps every old cell, so the frequency index can be
        // inherited without a rescan.
        let pure_growth = offset.is_non_negative()
            && (new_extents - (offset + self.extents)).is_non_negative();
        if pure_growth {
            let mut cells = vec![default; volume];
            for (index, &value) in self.cells.iter().enumerate() {
                let target = P::from_linear_index(index, self.extents) + offset;
                cells[target.linear_index(new_extents)] = value;
            }
            let introduced = volume - self.volume();
            return Ok(Self {
                extents: new_extents,
                cells,
                counts: ValueCounts::inherited(&self.counts, default, introduced),
            });
        }

        // Crop: some cells fall away, so counts are rebuilt per cell.
        Ok(Self::build(new_extents, |point| {
            let source = point - offset;
            if source.in_bounds(self.extents) {
                self.cells[source.linear_index(self.extents)]
            } else {
                default
            }
        }))
    }

    /// Copy every cell of `other` into this grid at `offset`.
    ///
    /// Fails without modifying anything when the pasted block does not fit
    /// entirely within this grid's bounds.
    pub fn paste(&mut self, other: &Grid<P, T>, offset: P) -> Result<(), GridError> {
        let far = offset + other.extents;
        if !offset.is_non_negative() || !(self.extents - far).is_non_negative() {
            return Err(GridError::OutOfBounds {
                coord: offset.to_string(),
                bounds: format!(
                    "pasting extents {} into extents {}",
                    other.extents, self.extents
                ),
            });
        }
        for (point, value) in other.iter() {
            self.write_indexed((point + offset).linear_index(self.extents), value);
        }
        Ok(())
    }

    /// A new grid of the same extents with every cell set to `fill`.
    ///
    /// Infallible: the shape is inherited from a grid that already passed
    /// construction. The cell type may differ, which is how derived layers
    /// (region labels, distance fields) are allocated.
    pub fn same_shape<U: Copy + Eq + Hash>(&self, fill: U) -> Grid<P, U> {
        Grid {
            extents: self.extents,
            cells: vec![fill; self.volume()],
            counts: ValueCounts::seeded(fill, self.volume()),
        }
    }

    /// A new grid of the same extents with every cell passed through `f`.
    pub fn map<U: Copy + Eq + Hash>(&self, mut f: impl FnMut(T) -> U) -> Grid<P, U> {
        let mut cells = Vec::with_capacity(self.volume());
        let mut counts = ValueCounts::new();
        for &value in &self.cells {
            let mapped = f(value);
            counts.increment(mapped);
            cells.push(mapped);
        }
        Grid {
            extents: self.extents,
            cells,
            counts,
        }
    }

    /// Unchecked crate-internal read; `point` must be in bounds.
    pub(crate) fn cell(&self, point: P) -> T {
        self.cells[point.linear_index(self.extents)]
    }

    /// Write through a known-valid linear index, keeping the counts paired.
    ///
    /// Rewriting a cell with its current value is a no-op, so it cannot
    /// disturb the index's insertion order.
    fn write_indexed(&mut self, index: usize, value: T) -> T {
        let old = self.cells[index];
        if old != value {
            self.counts.decrement(old);
            self.counts.increment(value);
            self.cells[index] = value;
        }
        old
    }

    fn checked_index(&self, point: P) -> Result<usize, GridError> {
        if !point.in_bounds(self.extents) {
            return Err(GridError::OutOfBounds {
                coord: point.to_string(),
                bounds: format!("extents {}", self.extents),
            });
        }
        Ok(point.linear_index(self.extents))
    }
}

impl<T: Copy + Eq + Hash> Grid<Point2, T> {
    /// Horizontal extent.
    pub fn width(&self) -> i32 {
        self.extents.x
    }

    /// Vertical extent.
    pub fn height(&self) -> i32 {
        self.extents.y
    }

    /// The values of row `y` in increasing `x` order.
    pub fn row_values(&self, y: i32) -> Result<Vec<T>, GridError> {
        if y < 0 || y >= self.extents.y {
            return Err(GridError::OutOfBounds {
                coord: format!("y = {y}"),
                bounds: format!("[0, {})", self.extents.y),
            });
        }
        Ok((0..self.extents.x)
            .map(|x| self.cell(Point2::new(x, y)))
            .collect())
    }

    /// The values of column `x` in increasing `y` order.
    pub fn column_values(&self, x: i32) -> Result<Vec<T>, GridError> {
        if x < 0 || x >= self.extents.x {
            return Err(GridError::OutOfBounds {
                coord: format!("x = {x}"),
                bounds: format!("[0, {})", self.extents.x),
            });
        }
        Ok((0..self.extents.y)
            .map(|y| self.cell(Point2::new(x, y)))
            .collect())
    }
}

// Counts are derived from the cells, so cell equality covers them.
impl<P: GridPoint, T: PartialEq> PartialEq for Grid<P, T> {
    fn eq(&self, other: &Self) -> bool {
        self.extents == other.extents && self.cells == other.cells
    }
}

impl<P: GridPoint, T: Eq> Eq for Grid<P, T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conformance;
    use proptest::prelude::*;

    fn p2(x: i32, y: i32) -> Point2 {
        Point2::new(x, y)
    }

    fn p3(x: i32, y: i32, z: i32) -> Point3 {
        Point3::new(x, y, z)
    }

    // ── Construction ────────────────────────────────────────────

    #[test]
    fn new_seeds_counts_with_fill() {
        let grid = Grid::new(p2(4, 3), '.').unwrap();
        assert_eq!(grid.volume(), 12);
        assert_eq!(grid.value_counts().count('.'), 12);
        assert_eq!(grid.value_counts().total(), 12);
        assert_eq!(grid.value_counts().len(), 1);
    }

    #[test]
    fn new_rejects_empty_extents() {
        assert!(matches!(
            Grid::new(p2(0, 5), 0u8),
            Err(GridError::EmptyExtents { .. })
        ));
        assert!(matches!(
            Grid::new(p2(5, -1), 0u8),
            Err(GridError::EmptyExtents { .. })
        ));
        assert!(matches!(
            Grid::new(p3(3, 0, 3), 0u8),
            Err(GridError::EmptyExtents { .. })
        ));
    }

    #[test]
    fn new_rejects_oversized_volume() {
        let max = Point4::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        assert!(matches!(
            Grid::new(max, 0u8),
            Err(GridError::VolumeTooLarge { .. })
        ));
    }

    #[test]
    fn from_fn_evaluates_every_point() {
        let grid = Grid::from_fn(p2(3, 2), |p| p.x + 10 * p.y).unwrap();
        assert_eq!(grid.get(p2(0, 0)).unwrap(), 0);
        assert_eq!(grid.get(p2(2, 0)).unwrap(), 2);
        assert_eq!(grid.get(p2(1, 1)).unwrap(), 11);
        assert_eq!(grid.value_counts().total(), 6);
    }

    #[test]
    fn from_cells_checks_length() {
        let grid = Grid::from_cells(p2(2, 2), vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.get(p2(1, 1)).unwrap(), 4);
        assert!(matches!(
            Grid::from_cells(p2(2, 2), vec![1, 2, 3]),
            Err(GridError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn center_is_half_extents() {
        let grid = Grid::new(p2(3, 3), 0u8).unwrap();
        assert_eq!(grid.center(), p2(1, 1));
        let grid = Grid::new(p2(4, 6), 0u8).unwrap();
        assert_eq!(grid.center(), p2(2, 3));
        let grid = Grid::new(Point3::new(5, 5, 5), 0u8).unwrap();
        assert_eq!(grid.center(), p3(2, 2, 2));
    }

    // ── Reads and writes ────────────────────────────────────────

    #[test]
    fn set_returns_previous_and_updates_counts() {
        let mut grid = Grid::new(p2(3, 3), '.').unwrap();
        let old = grid.set(p2(2, 0), '#').unwrap();
        assert_eq!(old, '.');
        assert_eq!(grid.get(p2(2, 0)).unwrap(), '#');
        assert_eq!(grid.value_counts().count('.'), 8);
        assert_eq!(grid.value_counts().count('#'), 1);
        assert_eq!(grid.value_counts().total(), 9);
    }

    #[test]
    fn set_same_value_leaves_counts_unchanged() {
        let mut grid = Grid::from_cells(p2(3, 1), vec![5u8, 7, 7]).unwrap();
        grid.set(p2(0, 0), 5).unwrap();
        assert_eq!(grid.value_counts().count(5), 1);
        assert_eq!(grid.value_counts().count(7), 2);
        // Rewriting the sole 5 must not cycle it to the back of the index.
        let order: Vec<_> = grid.value_counts().iter().collect();
        assert_eq!(order, vec![(5, 1), (7, 2)]);
    }

    #[test]
    fn overwriting_last_occurrence_drops_the_value() {
        let mut grid = Grid::new(p2(2, 2), 0u8).unwrap();
        grid.set(p2(1, 1), 5).unwrap();
        grid.set(p2(1, 1), 0).unwrap();
        assert_eq!(grid.value_counts().count(5), 0);
        assert_eq!(grid.value_counts().len(), 1);
    }

    #[test]
    fn out_of_bounds_access_errors() {
        let mut grid = Grid::new(p2(3, 3), 0u8).unwrap();
        assert!(matches!(
            grid.get(p2(3, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.get(p2(0, -1)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.set(p2(0, 3), 1),
            Err(GridError::OutOfBounds { .. })
        ));
        // A failed write changes nothing.
        assert_eq!(grid.value_counts().count(0), 9);
    }

    #[test]
    fn value_at_is_silent_on_out_of_bounds() {
        let grid = Grid::new(p2(2, 2), 'x').unwrap();
        assert_eq!(grid.value_at(p2(1, 1)), Some('x'));
        assert_eq!(grid.value_at(p2(2, 0)), None);
        assert_eq!(grid.value_at(p2(-1, 0)), None);
    }

    #[test]
    fn contains_matches_the_addressable_range() {
        let grid = Grid::new(p2(3, 2), 0u8).unwrap();
        assert!(grid.contains(p2(0, 0)));
        assert!(grid.contains(p2(2, 1)));
        assert!(!grid.contains(p2(3, 1)));
        assert!(!grid.contains(p2(0, 2)));
        assert!(!grid.contains(p2(-1, 0)));
    }

    // ── Iteration and search ────────────────────────────────────

    #[test]
    fn iter_is_row_major_and_complete() {
        let grid = Grid::from_fn(p2(2, 2), |p| p.x + 2 * p.y).unwrap();
        let pairs: Vec<_> = grid.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (p2(0, 0), 0),
                (p2(1, 0), 1),
                (p2(0, 1), 2),
                (p2(1, 1), 3),
            ]
        );
        // Restartable: a second pass sees the same sequence.
        assert_eq!(grid.iter().count(), 4);
    }

    #[test]
    fn position_search_is_row_major() {
        let mut grid = Grid::new(p2(3, 3), '.').unwrap();
        grid.set(p2(2, 1), '#').unwrap();
        grid.set(p2(0, 2), '#').unwrap();
        assert_eq!(grid.position_of('#'), Some(p2(2, 1)));
        let all: Vec<_> = grid.positions_of('#').collect();
        assert_eq!(all, vec![p2(2, 1), p2(0, 2)]);
        assert_eq!(grid.position_of('x'), None);
    }

    #[test]
    fn count_where_scans_cells() {
        let grid = Grid::from_fn(p2(4, 1), |p| p.x).unwrap();
        assert_eq!(grid.count_where(|v| v % 2 == 0), 2);
        assert_eq!(grid.count_of(3), 1);
    }

    // ── Resize ──────────────────────────────────────────────────

    #[test]
    fn grow_with_offset_pads_with_default() {
        let small = Grid::new(p2(2, 2), 0u8).unwrap();
        let grown = small.resize_with_offset(p2(4, 4), p2(1, 1), 9).unwrap();
        assert_eq!(grown.extents(), p2(4, 4));
        // Centre 2x2 block is the original, border is all default.
        for (point, value) in grown.iter() {
            let inside = (1..3).contains(&point.x) && (1..3).contains(&point.y);
            assert_eq!(value, if inside { 0 } else { 9 }, "at {point}");
        }
        assert_eq!(grown.value_counts().count(0), 4);
        assert_eq!(grown.value_counts().count(9), 12);
        assert_eq!(grown.value_counts().total(), 16);
    }

    #[test]
    fn crop_rebuilds_counts() {
        let mut grid = Grid::new(p2(4, 4), 0u8).unwrap();
        grid.set(p2(1, 1), 5).unwrap();
        grid.set(p2(3, 3), 7).unwrap();
        // Keep the 2x2 block whose origin is (1, 1); the 7 falls away.
        let cropped = grid.resize_with_offset(p2(2, 2), p2(-1, -1), 0).unwrap();
        assert_eq!(cropped.get(p2(0, 0)).unwrap(), 5);
        assert_eq!(cropped.value_counts().count(5), 1);
        assert_eq!(cropped.value_counts().count(7), 0);
        assert_eq!(cropped.value_counts().total(), 4);
        conformance::run_full_conformance(&cropped);
    }

    #[test]
    fn grow_then_crop_round_trips() {
        let original = Grid::from_fn(p3(3, 2, 2), |p| p.x + 10 * p.y + 100 * p.z).unwrap();
        let grown = original
            .resize_with_offset(p3(5, 4, 4), p3(1, 1, 1), -1)
            .unwrap();
        let back = grown
            .resize_with_offset(p3(3, 2, 2), p3(-1, -1, -1), -1)
            .unwrap();
        assert_eq!(back, original);
    }

    #[test]
    fn resize_rejects_empty_target() {
        let grid = Grid::new(p2(2, 2), 0u8).unwrap();
        assert!(matches!(
            grid.resize_with_offset(p2(0, 2), p2(0, 0), 0),
            Err(GridError::EmptyExtents { .. })
        ));
    }

    // ── Paste ───────────────────────────────────────────────────

    #[test]
    fn paste_copies_block_and_counts() {
        let mut canvas = Grid::new(p2(4, 4), '.').unwrap();
        let stamp = Grid::new(p2(2, 2), '#').unwrap();
        canvas.paste(&stamp, p2(1, 2)).unwrap();
        assert_eq!(canvas.get(p2(1, 2)).unwrap(), '#');
        assert_eq!(canvas.get(p2(2, 3)).unwrap(), '#');
        assert_eq!(canvas.get(p2(0, 0)).unwrap(), '.');
        assert_eq!(canvas.value_counts().count('#'), 4);
        assert_eq!(canvas.value_counts().count('.'), 12);
    }

    #[test]
    fn paste_must_fit() {
        let mut canvas = Grid::new(p2(3, 3), '.').unwrap();
        let stamp = Grid::new(p2(2, 2), '#').unwrap();
        assert!(matches!(
            canvas.paste(&stamp, p2(2, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            canvas.paste(&stamp, p2(-1, 0)),
            Err(GridError::OutOfBounds { .. })
        ));
        // Failed paste leaves the canvas untouched.
        assert_eq!(canvas.value_counts().count('.'), 9);
    }

    // ── Derived grids ───────────────────────────────────────────

    #[test]
    fn same_shape_changes_cell_type() {
        let grid = Grid::new(p2(3, 2), 'x').unwrap();
        let labels: Grid<Point2, i32> = grid.same_shape(-1);
        assert_eq!(labels.extents(), p2(3, 2));
        assert_eq!(labels.value_counts().count(-1), 6);
    }

    #[test]
    fn map_preserves_shape_and_reindexes() {
        let grid = Grid::from_fn(p2(2, 2), |p| p.x + 2 * p.y).unwrap();
        let doubled = grid.map(|v| v * 2);
        assert_eq!(doubled.get(p2(1, 1)).unwrap(), 6);
        assert_eq!(doubled.value_counts().count(4), 1);
        assert_eq!(doubled.value_counts().total(), 4);
    }

    #[test]
    fn clone_is_independent() {
        let original = Grid::new(p2(2, 2), 0u8).unwrap();
        let mut copy = original.clone();
        copy.set(p2(0, 0), 9).unwrap();
        assert_eq!(original.get(p2(0, 0)).unwrap(), 0);
        assert_eq!(original.value_counts().count(9), 0);
        assert_eq!(copy.value_counts().count(9), 1);
    }

    // ── Rows and columns ────────────────────────────────────────

    #[test]
    fn row_and_column_extraction() {
        let grid = Grid::from_fn(p2(3, 2), |p| p.x + 10 * p.y).unwrap();
        assert_eq!(grid.row_values(1).unwrap(), vec![10, 11, 12]);
        assert_eq!(grid.column_values(2).unwrap(), vec![2, 12]);
        assert!(matches!(
            grid.row_values(2),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.column_values(-1),
            Err(GridError::OutOfBounds { .. })
        ));
    }

    // ── Conformance ─────────────────────────────────────────────

    #[test]
    fn conformance_after_write_sequence() {
        let mut grid = Grid::new(p2(5, 4), 0u8).unwrap();
        let points: Vec<_> = grid.iter().map(|(point, _)| point).collect();
        for (i, point) in points.into_iter().enumerate() {
            grid.set(point, (i % 3) as u8).unwrap();
        }
        conformance::run_full_conformance(&grid);
    }

    #[test]
    fn conformance_3d_and_4d() {
        let grid3 = Grid::from_fn(p3(3, 3, 3), |p| p.component_sum() % 4).unwrap();
        conformance::run_full_conformance(&grid3);
        let grid4 = Grid::from_fn(Point4::new(2, 3, 2, 3), |p| p.component_sum() % 3).unwrap();
        conformance::run_full_conformance(&grid4);
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn counts_total_tracks_volume(
            width in 1i32..8,
            height in 1i32..8,
            writes in prop::collection::vec((0i32..8, 0i32..8, 0u8..4), 0..40),
        ) {
            let mut grid = Grid::new(p2(width, height), 0u8).unwrap();
            for (x, y, value) in writes {
                let point = p2(x % width, y % height);
                grid.set(point, value).unwrap();
            }
            prop_assert_eq!(grid.value_counts().total(), grid.volume());
            conformance::run_full_conformance(&grid);
        }

        #[test]
        fn set_get_round_trip(
            width in 1i32..8,
            height in 1i32..8,
            x in 0i32..8,
            y in 0i32..8,
            value in 1u8..255,
        ) {
            let mut grid = Grid::new(p2(width, height), 0u8).unwrap();
            let point = p2(x % width, y % height);
            let before = grid.value_counts().count(value);
            grid.set(point, value).unwrap();
            prop_assert_eq!(grid.get(point).unwrap(), value);
            prop_assert_eq!(grid.value_counts().count(value), before + 1);
        }

        #[test]
        fn resize_round_trip_preserves_content(
            width in 1i32..6,
            height in 1i32..6,
            margin in 0i32..4,
            seed in prop::collection::vec(0u8..5, 36),
        ) {
            let original = Grid::from_fn(p2(width, height), |p| {
                seed[(p.y * width + p.x) as usize % seed.len()]
            }).unwrap();
            let grown = original
                .resize_with_offset(
                    p2(width + 2 * margin, height + 2 * margin),
                    p2(margin, margin),
                    99,
                )
                .unwrap();
            let back = grown
                .resize_with_offset(p2(width, height), p2(-margin, -margin), 99)
                .unwrap();
            prop_assert_eq!(back, original);
        }
    }
}

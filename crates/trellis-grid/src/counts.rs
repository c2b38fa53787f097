//! Value-frequency accounting for grid contents.

use indexmap::IndexMap;
use std::hash::Hash;

/// Occurrence counts for every value currently stored in a grid.
///
/// Each [`Grid`](crate::Grid) owns exactly one `ValueCounts` and updates it
/// as part of every cell write, so for each value `v` the count equals the
/// number of cells holding `v`, and the counts sum to the grid's volume.
/// Mutation is crate-private: the only way to change the index from outside
/// is through grid operations, which keep it paired with cell storage.
///
/// Iteration order is deterministic: values appear in the order they
/// entered the grid. A value whose count reaches zero leaves the index,
/// and re-enters at the back if written again later.
#[derive(Debug, Clone)]
pub struct ValueCounts<T> {
    counts: IndexMap<T, usize>,
    total: usize,
}

impl<T: Copy + Eq + Hash> ValueCounts<T> {
    /// An empty index.
    pub(crate) fn new() -> Self {
        Self {
            counts: IndexMap::new(),
            total: 0,
        }
    }

    /// An index holding `count` occurrences of a single value.
    pub(crate) fn seeded(value: T, count: usize) -> Self {
        let mut counts = IndexMap::new();
        if count > 0 {
            counts.insert(value, count);
        }
        Self {
            counts,
            total: count,
        }
    }

    /// Bulk constructor for grow/crop: copy an existing index, then add
    /// `introduced` occurrences of the fill value for newly created cells.
    ///
    /// Only valid when every cell behind `source` survives into the new
    /// grid; the resize path falls back to a per-cell rebuild otherwise.
    pub(crate) fn inherited(source: &Self, fill: T, introduced: usize) -> Self {
        let mut counts = source.counts.clone();
        if introduced > 0 {
            *counts.entry(fill).or_insert(0) += introduced;
        }
        Self {
            counts,
            total: source.total + introduced,
        }
    }

    /// Record one more occurrence of `value`.
    pub(crate) fn increment(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
        self.total += 1;
    }

    /// Record one fewer occurrence of `value`, dropping the entry at zero.
    pub(crate) fn decrement(&mut self, value: T) {
        // Every decrement pairs with a value just read out of a cell.
        let count = self
            .counts
            .get_mut(&value)
            .expect("decremented value present in index");
        *count -= 1;
        self.total -= 1;
        if *count == 0 {
            self.counts.shift_remove(&value);
        }
    }

    /// Number of cells currently holding `value`; 0 if none do.
    pub fn count(&self, value: T) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Sum of all counts. Always equals the owning grid's volume.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// `true` when no values are present.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate `(value, count)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (T, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }

    /// The value held by the most cells, with its count.
    ///
    /// Ties resolve to the value that entered the grid first.
    pub fn most_common(&self) -> Option<(T, usize)> {
        let mut best: Option<(T, usize)> = None;
        for (value, count) in self.iter() {
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((value, count)),
            }
        }
        best
    }
}

//! ASCII parsing and rendering for two-dimensional grids.
//!
//! The framework never interprets characters itself: callers supply the
//! mapping in each direction, so the same machinery serves boolean masks,
//! digit heightmaps, and tile glyphs alike.

use crate::Grid;
use std::hash::Hash;
use trellis_core::{GridError, Point2};

impl<T: Copy + Eq + Hash> Grid<Point2, T> {
    /// Build a grid from lines of text, one character per cell.
    ///
    /// Line `y` supplies row `y`, and character `x` within it the cell at
    /// `(x, y)`; `parse` maps each character to a cell value. All lines
    /// must have equal length, and at least one non-empty line is required.
    ///
    /// # Examples
    ///
    /// ```
    /// use trellis_core::Point2;
    /// use trellis_grid::Grid2;
    ///
    /// let grid = Grid2::from_lines(["#.", ".#"], |c| c == '#').unwrap();
    /// assert!(grid.get(Point2::new(0, 0)).unwrap());
    /// assert!(!grid.get(Point2::new(1, 0)).unwrap());
    /// assert_eq!(grid.value_counts().count(true), 2);
    /// ```
    pub fn from_lines<I>(lines: I, mut parse: impl FnMut(char) -> T) -> Result<Self, GridError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        for line in lines {
            let line = line.as_ref();
            let mut row_len = 0usize;
            for ch in line.chars() {
                cells.push(parse(ch));
                row_len += 1;
            }
            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(GridError::DimensionMismatch {
                        reason: format!(
                            "row {height} has {row_len} cells, previous rows have {expected}"
                        ),
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }
        let width = width.unwrap_or(0);
        let extents = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => Point2::new(w, h),
            _ => {
                return Err(GridError::VolumeTooLarge {
                    extents: format!("({width}, {height})"),
                })
            }
        };
        Self::from_cells(extents, cells)
    }

    /// Render the grid as text, one line of characters per row, rows in
    /// increasing `y` order.
    ///
    /// `display` maps each cell value to a single character. This format is
    /// write-only: nothing in the framework parses it back.
    pub fn render(&self, mut display: impl FnMut(T) -> char) -> String {
        let width = self.width() as usize;
        let height = self.height() as usize;
        let mut out = String::with_capacity(height * (width + 1));
        for y in 0..self.height() {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width() {
                out.push(display(self.cell(Point2::new(x, y))));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p2(x: i32, y: i32) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn from_lines_maps_positions() {
        let grid = Grid::from_lines(["ab", "cd", "ef"], |c| c).unwrap();
        assert_eq!(grid.extents(), p2(2, 3));
        assert_eq!(grid.get(p2(0, 0)).unwrap(), 'a');
        assert_eq!(grid.get(p2(1, 0)).unwrap(), 'b');
        assert_eq!(grid.get(p2(0, 2)).unwrap(), 'e');
        assert_eq!(grid.value_counts().total(), 6);
    }

    #[test]
    fn from_lines_rejects_ragged_rows() {
        let err = Grid::from_lines(["abc", "ab"], |c| c).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { .. }));
    }

    #[test]
    fn from_lines_rejects_empty_input() {
        let none: [&str; 0] = [];
        assert!(matches!(
            Grid::from_lines(none, |c| c),
            Err(GridError::EmptyExtents { .. })
        ));
        assert!(matches!(
            Grid::from_lines([""], |c| c),
            Err(GridError::EmptyExtents { .. })
        ));
    }

    #[test]
    fn render_rows_in_increasing_y() {
        let grid = Grid::from_lines(["#..", ".#.", "..#"], |c| c == '#').unwrap();
        let text = grid.render(|v| if v { '#' } else { '.' });
        assert_eq!(text, "#..\n.#.\n..#");
    }

    #[test]
    fn parse_render_round_trip() {
        let art = ["##..#", ".#.#.", "#...#"];
        let grid = Grid::from_lines(art, |c| c).unwrap();
        assert_eq!(grid.render(|c| c), art.join("\n"));
    }
}

//! Canned 2D patterns shared across the workspace's tests.

use trellis_core::Point2;
use trellis_grid::Grid2;

fn parse(lines: &[&str]) -> Grid2<bool> {
    Grid2::from_lines(lines, |ch| ch == '#').expect("fixture patterns are rectangular")
}

/// The 3×3 cross: four filled arms around an empty centre.
pub fn cross() -> Grid2<bool> {
    parse(&[".#.", "#.#", ".#."])
}

/// A 3×3 ring: filled border around an empty centre.
pub fn ring() -> Grid2<bool> {
    parse(&["###", "#.#", "###"])
}

/// A horizontal period-two oscillator centred on a 5×5 field.
pub fn blinker() -> Grid2<bool> {
    parse(&[".....", ".....", ".###.", ".....", "....."])
}

/// The standard glider in the top-left corner of a 6×6 field.
///
/// Under the usual B3/S23 rule it translates by `(1, 1)` every four
/// generations.
pub fn glider() -> Grid2<bool> {
    parse(&[".#....", "..#...", "###...", "......", "......", "......"])
}

/// An alternating checkerboard with `true` at the origin.
pub fn checkerboard(width: i32, height: i32) -> Grid2<bool> {
    Grid2::from_fn(Point2::new(width, height), |p| (p.x + p.y) % 2 == 0)
        .expect("fixture extents are valid")
}

//! Cross-crate pipelines: parse, transform, count, and label together,
//! the way puzzle solvers drive the framework.

use trellis_core::{Point2, Point3};
use trellis_grid::Grid2;
use trellis_ops::{label_regions, next_generation, padded, region_sizes};
use trellis_stencil::{count_matching, Stencil};
use trellis_test_utils::{cross, glider, random_booleans};

fn conway(grid: &Grid2<bool>, point: Point2, alive: bool) -> bool {
    matches!(
        (alive, count_matching(grid, point, true)),
        (true, 2) | (_, 3)
    )
}

fn glyph(alive: bool) -> char {
    if alive {
        '#'
    } else {
        '.'
    }
}

#[test]
fn automaton_pads_then_steps() {
    let seed = Grid2::from_lines(["###"], |ch| ch == '#').expect("pattern is rectangular");
    let universe = padded(&seed, 1, false).expect("growth is valid");
    assert_eq!(universe.render(glyph), ".....\n.###.\n.....");

    let second = next_generation(&universe, conway);
    assert_eq!(second.render(glyph), "..#..\n..#..\n..#..");
    assert_eq!(second.count_of(true), 3);

    let third = next_generation(&second, conway);
    assert_eq!(third, universe);
}

#[test]
fn growth_feeds_counting_and_labelling() {
    let seed = Grid2::new(Point2::new(2, 2), 0).expect("valid extents");
    let grown = seed
        .resize_with_offset(Point2::new(4, 4), Point2::new(1, 1), 9)
        .expect("growth is valid");

    assert_eq!(grown.count_of(0), 4);
    assert_eq!(grown.count_of(9), 12);

    let border = label_regions(&grown, |value| value == 9);
    assert_eq!(region_sizes(&border)[&0], 12);

    let interior = label_regions(&grown, |value| value == 0);
    let sizes = region_sizes(&interior);
    assert_eq!(sizes.len(), 1);
    assert_eq!(sizes[&0], 4);
}

#[test]
fn region_structure_survives_rotation() {
    let sheet = Grid2::from_lines(["##..", "#..#", "...#"], |ch| ch == '#')
        .expect("pattern is rectangular");
    let upright = region_sizes(&label_regions(&sheet, |filled| filled));
    let turned = sheet.rotate_clockwise(1);
    let rotated = region_sizes(&label_regions(&turned, |filled| filled));

    let mut upright_sizes: Vec<usize> = upright.values().copied().collect();
    let mut rotated_sizes: Vec<usize> = rotated.values().copied().collect();
    upright_sizes.sort_unstable();
    rotated_sizes.sort_unstable();
    assert_eq!(upright_sizes, rotated_sizes);
}

#[test]
fn diagonal_regions_stay_apart_after_flipping() {
    let pair = Grid2::from_lines(["#.", ".#"], |ch| ch == '#').expect("pattern is rectangular");
    assert_eq!(region_sizes(&label_regions(&pair, |filled| filled)).len(), 2);
    let mirrored = pair.flip_horizontal();
    assert_eq!(
        region_sizes(&label_regions(&mirrored, |filled| filled)).len(),
        2
    );
}

#[test]
fn single_cell_universe() {
    let dot = Grid2::new(Point2::new(1, 1), true).expect("valid extents");
    assert_eq!(count_matching(&dot, Point2::new(0, 0), true), 0);
    assert_eq!(count_matching(&dot, Point2::new(0, 0), false), 0);
    assert_eq!(
        Stencil::orthogonal().count_matching(&dot, Point2::new(0, 0), true),
        0
    );

    let labels = label_regions(&dot, |alive| alive);
    assert_eq!(region_sizes(&labels)[&0], 1);

    let grown = padded(&dot, 1, false).expect("growth is valid");
    assert_eq!(grown.count_of(true), 1);
    assert_eq!(grown.count_of(false), 8);
}

#[test]
fn cross_counts_from_every_stencil() {
    let pattern = cross();
    assert_eq!(count_matching(&pattern, Point2::new(1, 1), true), 4);
    assert_eq!(
        Stencil::orthogonal().count_matching(&pattern, Point2::new(1, 1), true),
        4
    );
    assert_eq!(count_matching(&pattern, Point2::new(0, 0), true), 2);
}

#[test]
fn glider_survives_a_padded_flight() {
    // Pad first so the ship never reaches the boundary, then fly it
    // four generations and check the translation.
    let launched = padded(&glider(), 2, false).expect("growth is valid");
    let mut grid = launched.clone();
    for _ in 0..4 {
        grid = next_generation(&grid, conway);
    }
    let expected: Vec<Point2> = launched
        .positions_of(true)
        .map(|p| p + Point2::new(1, 1))
        .collect();
    assert_eq!(grid.positions_of(true).collect::<Vec<_>>(), expected);
}

#[test]
fn random_fields_label_deterministically() {
    let field = random_booleans(Point3::new(12, 12, 4), 42, 0.5);
    let first = region_sizes(&label_regions(&field, |filled| filled));
    let second = region_sizes(&label_regions(&field, |filled| filled));
    assert_eq!(first, second);

    let total: usize = first.values().sum();
    assert_eq!(total, field.count_of(true));
}

#[test]
fn tiles_assemble_after_rotation() {
    let tile = Grid2::from_lines(["ab", "cd"], |ch| ch).expect("tile is rectangular");
    let turned = tile.rotate_clockwise(1);
    assert_eq!(turned.render(|ch| ch), "ca\ndb");

    let mut sheet = Grid2::new(Point2::new(4, 2), '.').expect("valid extents");
    sheet.paste(&tile, Point2::new(0, 0)).expect("tile fits");
    sheet.paste(&turned, Point2::new(2, 0)).expect("tile fits");
    assert_eq!(sheet.render(|ch| ch), "abca\ncddb");
    assert_eq!(sheet.count_of('.'), 0);
    assert_eq!(sheet.count_of('a'), 2);
}

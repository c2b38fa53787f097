//! Structural transforms: quarter-turn rotation, axis flips, and
//! dimensional slicing.
//!
//! Every transform produces a new grid and leaves the source untouched;
//! frequency indexes are rebuilt as the new cells are laid down, so the
//! results carry correct counts by construction.

use crate::Grid;
use std::fmt;
use std::hash::Hash;
use trellis_core::{Axis3, Axis4, GridError, Point2, Point3, Point4};

impl<T: Copy + Eq + Hash> Grid<Point2, T> {
    /// Rotate by `quarter_turns` x 90 degrees clockwise.
    ///
    /// Extents swap on odd turn counts, so rectangles rotate as well as
    /// squares. Four turns compose to the identity for any content.
    pub fn rotate_clockwise(&self, quarter_turns: u32) -> Self {
        let mut out = self.clone();
        for _ in 0..(quarter_turns % 4) {
            out = out.rotate_cw_once();
        }
        out
    }

    /// Rotate by `quarter_turns` x 90 degrees counterclockwise.
    pub fn rotate_counterclockwise(&self, quarter_turns: u32) -> Self {
        let mut out = self.clone();
        for _ in 0..(quarter_turns % 4) {
            out = out.rotate_ccw_once();
        }
        out
    }

    // One clockwise turn maps the old cell (x, y) to (height - 1 - y, x).
    fn rotate_cw_once(&self) -> Self {
        let e = self.extents();
        Grid::build(Point2::new(e.y, e.x), |p| {
            self.cell(Point2::new(p.y, e.y - 1 - p.x))
        })
    }

    // One counterclockwise turn maps the old cell (x, y) to (y, width - 1 - x).
    fn rotate_ccw_once(&self) -> Self {
        let e = self.extents();
        Grid::build(Point2::new(e.y, e.x), |p| {
            self.cell(Point2::new(e.x - 1 - p.y, p.x))
        })
    }

    /// Mirror across the vertical midline: `x` reverses, rows stay.
    ///
    /// Applying the same flip twice is the identity.
    pub fn flip_horizontal(&self) -> Self {
        let e = self.extents();
        Grid::build(e, |p| self.cell(Point2::new(e.x - 1 - p.x, p.y)))
    }

    /// Mirror across the horizontal midline: `y` reverses, columns stay.
    pub fn flip_vertical(&self) -> Self {
        let e = self.extents();
        Grid::build(e, |p| self.cell(Point2::new(p.x, e.y - 1 - p.y)))
    }
}

impl<T: Copy + Eq + Hash> Grid<Point3, T> {
    /// Copy the two-dimensional cross-section at `axis = index`.
    ///
    /// The free axes keep their relative order: fixing `z` yields an
    /// `(x, y)` plane, fixing `y` an `(x, z)` plane, and fixing `x` a
    /// `(y, z)` plane.
    pub fn slice_plane(&self, axis: Axis3, index: i32) -> Result<Grid<Point2, T>, GridError> {
        let e = self.extents();
        let span = match axis {
            Axis3::X => e.x,
            Axis3::Y => e.y,
            Axis3::Z => e.z,
        };
        check_fixed_axis(axis, index, span)?;
        let plane = match axis {
            Axis3::X => Point2::new(e.y, e.z),
            Axis3::Y => Point2::new(e.x, e.z),
            Axis3::Z => Point2::new(e.x, e.y),
        };
        Ok(Grid::build(plane, |p| {
            let source = match axis {
                Axis3::X => Point3::new(index, p.x, p.y),
                Axis3::Y => Point3::new(p.x, index, p.y),
                Axis3::Z => Point3::new(p.x, p.y, index),
            };
            self.cell(source)
        }))
    }
}

impl<T: Copy + Eq + Hash> Grid<Point4, T> {
    /// Copy the three-dimensional cross-section at `axis = index`.
    ///
    /// The free axes keep their relative order, mapping onto `(x, y, z)`
    /// of the result.
    pub fn slice_volume(&self, axis: Axis4, index: i32) -> Result<Grid<Point3, T>, GridError> {
        let e = self.extents();
        check_fixed_axis(axis, index, axis_extent(e, axis))?;
        let volume = match axis {
            Axis4::X => Point3::new(e.y, e.z, e.w),
            Axis4::Y => Point3::new(e.x, e.z, e.w),
            Axis4::Z => Point3::new(e.x, e.y, e.w),
            Axis4::W => Point3::new(e.x, e.y, e.z),
        };
        Ok(Grid::build(volume, |p| {
            let source = match axis {
                Axis4::X => Point4::new(index, p.x, p.y, p.z),
                Axis4::Y => Point4::new(p.x, index, p.y, p.z),
                Axis4::Z => Point4::new(p.x, p.y, index, p.z),
                Axis4::W => Point4::new(p.x, p.y, p.z, index),
            };
            self.cell(source)
        }))
    }

    /// Copy the two-dimensional cross-section with two axes held fixed.
    ///
    /// The free axes keep their relative order, mapping onto `(x, y)` of
    /// the result; the order of the two fixed arguments does not matter.
    /// Fixing the same axis twice is a [`GridError::DimensionMismatch`],
    /// since only one axis would remain free for a two-axis result.
    pub fn slice_plane(
        &self,
        first: (Axis4, i32),
        second: (Axis4, i32),
    ) -> Result<Grid<Point2, T>, GridError> {
        let (axis_a, index_a) = first;
        let (axis_b, index_b) = second;
        if axis_a == axis_b {
            return Err(GridError::DimensionMismatch {
                reason: format!(
                    "slice axis {axis_a} fixed twice; a plane needs two distinct fixed axes"
                ),
            });
        }
        let e = self.extents();
        check_fixed_axis(axis_a, index_a, axis_extent(e, axis_a))?;
        check_fixed_axis(axis_b, index_b, axis_extent(e, axis_b))?;

        let mut fixed: [Option<i32>; 4] = [None; 4];
        fixed[axis_slot(axis_a)] = Some(index_a);
        fixed[axis_slot(axis_b)] = Some(index_b);
        let spans = [e.x, e.y, e.z, e.w];
        let mut free = [0usize; 2];
        let mut next = 0;
        for (slot, value) in fixed.iter().enumerate() {
            if value.is_none() {
                free[next] = slot;
                next += 1;
            }
        }

        let plane = Point2::new(spans[free[0]], spans[free[1]]);
        Ok(Grid::build(plane, |p| {
            let mut components = [0i32; 4];
            for (slot, value) in fixed.iter().enumerate() {
                if let Some(v) = value {
                    components[slot] = *v;
                }
            }
            components[free[0]] = p.x;
            components[free[1]] = p.y;
            self.cell(Point4::new(
                components[0],
                components[1],
                components[2],
                components[3],
            ))
        }))
    }
}

fn check_fixed_axis(axis: impl fmt::Display, index: i32, span: i32) -> Result<(), GridError> {
    if index < 0 || index >= span {
        return Err(GridError::OutOfBounds {
            coord: format!("{axis} = {index}"),
            bounds: format!("[0, {span})"),
        });
    }
    Ok(())
}

fn axis_extent(e: Point4, axis: Axis4) -> i32 {
    match axis {
        Axis4::X => e.x,
        Axis4::Y => e.y,
        Axis4::Z => e.z,
        Axis4::W => e.w,
    }
}

fn axis_slot(axis: Axis4) -> usize {
    match axis {
        Axis4::X => 0,
        Axis4::Y => 1,
        Axis4::Z => 2,
        Axis4::W => 3,
    }
}

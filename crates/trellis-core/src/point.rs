//! Concrete integer points and the [`GridPoint`] addressing trait.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A point on a two-dimensional grid.
///
/// Components are signed so that arithmetic on offsets and differences stays
/// closed; grids only *address* the non-negative orthant below their extents.
/// All arithmetic is component-wise and pure. Arithmetic is total over the
/// representable range; callers are responsible for not overflowing.
///
/// # Examples
///
/// ```
/// use trellis_core::Point2;
///
/// let a = Point2::new(3, 1);
/// let b = Point2::new(1, 2);
/// assert_eq!(a + b, Point2::new(4, 3));
/// assert_eq!(a.manhattan_distance(b), 3);
/// assert_eq!(a.direction_to(b), Point2::new(-1, 1));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point2 {
    /// Horizontal component (column).
    pub x: i32,
    /// Vertical component (row).
    pub y: i32,
}

/// A point on a three-dimensional grid.
///
/// Mirrors [`Point2`] with a `z` axis added; see there for the arithmetic
/// contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point3 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
    /// Depth component.
    pub z: i32,
}

/// A point on a four-dimensional grid.
///
/// Mirrors [`Point2`] with `z` and `w` axes added; see there for the
/// arithmetic contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point4 {
    /// Horizontal component.
    pub x: i32,
    /// Vertical component.
    pub y: i32,
    /// Depth component.
    pub z: i32,
    /// Fourth-axis component.
    pub w: i32,
}

impl Point2 {
    /// Construct a point from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Sum of the components.
    pub const fn component_sum(self) -> i32 {
        self.x + self.y
    }

    /// Product of the components.
    pub const fn component_product(self) -> i32 {
        self.x * self.y
    }

    /// Per-axis absolute value.
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    /// Per-axis sign: each component mapped to `-1`, `0`, or `1`.
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// `true` when every component is zero.
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0
    }

    /// Manhattan (L1) norm: sum of per-axis absolute values.
    pub const fn manhattan_norm(self) -> i32 {
        self.x.abs() + self.y.abs()
    }

    /// Manhattan (L1) distance to `other`.
    pub const fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev (L-inf) distance to `other`.
    ///
    /// Matches the graph geodesic under the full neighbourhood, where a
    /// diagonal step costs 1.
    pub const fn chebyshev_distance(self, other: Self) -> i32 {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        if dx > dy {
            dx
        } else {
            dy
        }
    }

    /// Signed unit direction toward `other`: component-wise sign of the
    /// difference. The zero point when `self == other`.
    pub const fn direction_to(self, other: Self) -> Self {
        Self::new((other.x - self.x).signum(), (other.y - self.y).signum())
    }
}

impl Point3 {
    /// Construct a point from its components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Sum of the components.
    pub const fn component_sum(self) -> i32 {
        self.x + self.y + self.z
    }

    /// Product of the components.
    pub const fn component_product(self) -> i32 {
        self.x * self.y * self.z
    }

    /// Per-axis absolute value.
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Per-axis sign: each component mapped to `-1`, `0`, or `1`.
    pub const fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum(), self.z.signum())
    }

    /// `true` when every component is zero.
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0
    }

    /// Manhattan (L1) norm: sum of per-axis absolute values.
    pub const fn manhattan_norm(self) -> i32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Manhattan (L1) distance to `other`.
    pub const fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Signed unit direction toward `other`: component-wise sign of the
    /// difference. The zero point when `self == other`.
    pub const fn direction_to(self, other: Self) -> Self {
        Self::new(
            (other.x - self.x).signum(),
            (other.y - self.y).signum(),
            (other.z - self.z).signum(),
        )
    }
}

impl Point4 {
    /// Construct a point from its components.
    pub const fn new(x: i32, y: i32, z: i32, w: i32) -> Self {
        Self { x, y, z, w }
    }

    /// Sum of the components.
    pub const fn component_sum(self) -> i32 {
        self.x + self.y + self.z + self.w
    }

    /// Product of the components.
    pub const fn component_product(self) -> i32 {
        self.x * self.y * self.z * self.w
    }

    /// Per-axis absolute value.
    pub const fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs(), self.w.abs())
    }

    /// Per-axis sign: each component mapped to `-1`, `0`, or `1`.
    pub const fn signum(self) -> Self {
        Self::new(
            self.x.signum(),
            self.y.signum(),
            self.z.signum(),
            self.w.signum(),
        )
    }

    /// `true` when every component is zero.
    pub const fn is_zero(self) -> bool {
        self.x == 0 && self.y == 0 && self.z == 0 && self.w == 0
    }

    /// Manhattan (L1) norm: sum of per-axis absolute values.
    pub const fn manhattan_norm(self) -> i32 {
        self.x.abs() + self.y.abs() + self.z.abs() + self.w.abs()
    }

    /// Manhattan (L1) distance to `other`.
    pub const fn manhattan_distance(self, other: Self) -> i32 {
        (self.x - other.x).abs()
            + (self.y - other.y).abs()
            + (self.z - other.z).abs()
            + (self.w - other.w).abs()
    }

    /// Signed unit direction toward `other`: component-wise sign of the
    /// difference. The zero point when `self == other`.
    pub const fn direction_to(self, other: Self) -> Self {
        Self::new(
            (other.x - self.x).signum(),
            (other.y - self.y).signum(),
            (other.z - self.z).signum(),
            (other.w - self.w).signum(),
        )
    }
}

// ── Operators ───────────────────────────────────────────────────────

macro_rules! point_ops {
    ($point:ident { $($axis:ident),+ }) => {
        impl Add for $point {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis + rhs.$axis),+ }
            }
        }

        impl AddAssign for $point {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $point {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis - rhs.$axis),+ }
            }
        }

        impl SubAssign for $point {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Neg for $point {
            type Output = Self;
            fn neg(self) -> Self {
                Self { $($axis: -self.$axis),+ }
            }
        }

        /// Component-wise product.
        impl Mul for $point {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis * rhs.$axis),+ }
            }
        }

        /// Scalar product.
        impl Mul<i32> for $point {
            type Output = Self;
            fn mul(self, rhs: i32) -> Self {
                Self { $($axis: self.$axis * rhs),+ }
            }
        }

        /// Component-wise quotient (truncating toward zero).
        impl Div for $point {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Self { $($axis: self.$axis / rhs.$axis),+ }
            }
        }

        /// Scalar quotient (truncating toward zero).
        impl Div<i32> for $point {
            type Output = Self;
            fn div(self, rhs: i32) -> Self {
                Self { $($axis: self.$axis / rhs),+ }
            }
        }
    };
}

point_ops!(Point2 { x, y });
point_ops!(Point3 { x, y, z });
point_ops!(Point4 { x, y, z, w });

// ── Ordering and formatting ─────────────────────────────────────────

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scan order: `y` first, then `x`, matching row-major iteration.
impl Ord for Point2 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point3 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scan order: `z`, then `y`, then `x`.
impl Ord for Point3 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.z, self.y, self.x).cmp(&(other.z, other.y, other.x))
    }
}

impl PartialOrd for Point4 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Scan order: `w`, then `z`, then `y`, then `x`.
impl Ord for Point4 {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.w, self.z, self.y, self.x).cmp(&(other.w, other.z, other.y, other.x))
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Point4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.x, self.y, self.z, self.w)
    }
}

impl From<(i32, i32)> for Point2 {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32, i32)> for Point3 {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i32, i32, i32, i32)> for Point4 {
    fn from((x, y, z, w): (i32, i32, i32, i32)) -> Self {
        Self::new(x, y, z, w)
    }
}

// ── Row-major addressing ────────────────────────────────────────────

/// Row-major addressing for a concrete point type.
///
/// Implemented by [`Point2`], [`Point3`], and [`Point4`]. An `extents`
/// value is a point whose components give the grid size along each axis;
/// bounds checks treat each axis as the half-open range `[0, extent)`.
///
/// Linear indices enumerate cells with `x` varying fastest and the last
/// axis slowest, which agrees with the point types' `Ord`: for two
/// in-bounds points, `a < b` exactly when `a` is addressed before `b`.
pub trait GridPoint:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<i32, Output = Self>
    + Div<i32, Output = Self>
    + 'static
{
    /// Number of axes.
    const RANK: usize;

    /// The origin.
    const ZERO: Self;

    /// The point with every component equal to `v`.
    fn splat(v: i32) -> Self;

    /// `true` when every component lies in `[0, extent)` for the paired
    /// axis of `extents`.
    fn in_bounds(self, extents: Self) -> bool;

    /// `true` when every component is non-negative.
    fn is_non_negative(self) -> bool;

    /// Cell count of a grid with these extents, or `None` when a component
    /// is negative or the product overflows `usize`.
    fn checked_volume(extents: Self) -> Option<usize>;

    /// Row-major linear index of `self` within `extents`.
    ///
    /// Callers must establish `self.in_bounds(extents)` first; the index of
    /// an out-of-bounds point is meaningless.
    fn linear_index(self, extents: Self) -> usize;

    /// Inverse of [`linear_index`](Self::linear_index) for
    /// `index < volume`.
    fn from_linear_index(index: usize, extents: Self) -> Self;
}

impl GridPoint for Point2 {
    const RANK: usize = 2;
    const ZERO: Self = Self::new(0, 0);

    fn splat(v: i32) -> Self {
        Self::new(v, v)
    }

    fn in_bounds(self, extents: Self) -> bool {
        self.x >= 0 && self.x < extents.x && self.y >= 0 && self.y < extents.y
    }

    fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    fn checked_volume(extents: Self) -> Option<usize> {
        let x = usize::try_from(extents.x).ok()?;
        let y = usize::try_from(extents.y).ok()?;
        x.checked_mul(y)
    }

    fn linear_index(self, extents: Self) -> usize {
        (self.y as usize) * (extents.x as usize) + (self.x as usize)
    }

    fn from_linear_index(index: usize, extents: Self) -> Self {
        let ex = extents.x as usize;
        Self::new((index % ex) as i32, (index / ex) as i32)
    }
}

impl GridPoint for Point3 {
    const RANK: usize = 3;
    const ZERO: Self = Self::new(0, 0, 0);

    fn splat(v: i32) -> Self {
        Self::new(v, v, v)
    }

    fn in_bounds(self, extents: Self) -> bool {
        self.x >= 0
            && self.x < extents.x
            && self.y >= 0
            && self.y < extents.y
            && self.z >= 0
            && self.z < extents.z
    }

    fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.z >= 0
    }

    fn checked_volume(extents: Self) -> Option<usize> {
        let x = usize::try_from(extents.x).ok()?;
        let y = usize::try_from(extents.y).ok()?;
        let z = usize::try_from(extents.z).ok()?;
        x.checked_mul(y)?.checked_mul(z)
    }

    fn linear_index(self, extents: Self) -> usize {
        let ex = extents.x as usize;
        let ey = extents.y as usize;
        ((self.z as usize) * ey + (self.y as usize)) * ex + (self.x as usize)
    }

    fn from_linear_index(index: usize, extents: Self) -> Self {
        let ex = extents.x as usize;
        let ey = extents.y as usize;
        let x = index % ex;
        let rest = index / ex;
        Self::new(x as i32, (rest % ey) as i32, (rest / ey) as i32)
    }
}

impl GridPoint for Point4 {
    const RANK: usize = 4;
    const ZERO: Self = Self::new(0, 0, 0, 0);

    fn splat(v: i32) -> Self {
        Self::new(v, v, v, v)
    }

    fn in_bounds(self, extents: Self) -> bool {
        self.x >= 0
            && self.x < extents.x
            && self.y >= 0
            && self.y < extents.y
            && self.z >= 0
            && self.z < extents.z
            && self.w >= 0
            && self.w < extents.w
    }

    fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0 && self.z >= 0 && self.w >= 0
    }

    fn checked_volume(extents: Self) -> Option<usize> {
        let x = usize::try_from(extents.x).ok()?;
        let y = usize::try_from(extents.y).ok()?;
        let z = usize::try_from(extents.z).ok()?;
        let w = usize::try_from(extents.w).ok()?;
        x.checked_mul(y)?.checked_mul(z)?.checked_mul(w)
    }

    fn linear_index(self, extents: Self) -> usize {
        let ex = extents.x as usize;
        let ey = extents.y as usize;
        let ez = extents.z as usize;
        (((self.w as usize) * ez + (self.z as usize)) * ey + (self.y as usize)) * ex
            + (self.x as usize)
    }

    fn from_linear_index(index: usize, extents: Self) -> Self {
        let ex = extents.x as usize;
        let ey = extents.y as usize;
        let ez = extents.z as usize;
        let x = index % ex;
        let rest = index / ex;
        let y = rest % ey;
        let rest = rest / ey;
        Self::new(x as i32, y as i32, (rest % ez) as i32, (rest / ez) as i32)
    }
}

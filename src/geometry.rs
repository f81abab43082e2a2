//! Plain 2D value types shared by the grid and the settings buffer
//!
//! `Size` is used both for cell counts (grid dimensions) and for surface
//! units (tile size, border, footprint). Callers are responsible for only
//! combining sizes of compatible meaning: `grid_size * tile_size` is a
//! footprint, `grid_size + tile_size` is meaningless.
//!
//! Arithmetic on `Size` saturates at the `i32` bounds, so an oversized
//! footprint stays oversized instead of wrapping around.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Width/height pair in either cell counts or surface units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Same value on both axes
    pub const fn square(side: i32) -> Self {
        Self::new(side, side)
    }

    pub fn increment(self) -> Self {
        Self::new(self.width.saturating_add(1), self.height.saturating_add(1))
    }

    pub fn decrement(self) -> Self {
        Self::new(self.width.saturating_sub(1), self.height.saturating_sub(1))
    }

    pub fn abs(self) -> Self {
        Self::new(self.width.saturating_abs(), self.height.saturating_abs())
    }

    /// Number of cells when the size is a cell count
    pub fn area(self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Component-wise `<=`
    pub fn fits_within(self, bound: Size) -> bool {
        self.width <= bound.width && self.height <= bound.height
    }

    /// True when both components are strictly positive
    pub fn is_positive(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_add(rhs.width),
            self.height.saturating_add(rhs.height),
        )
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_sub(rhs.width),
            self.height.saturating_sub(rhs.height),
        )
    }
}

impl Mul for Size {
    type Output = Size;

    fn mul(self, rhs: Size) -> Size {
        Size::new(
            self.width.saturating_mul(rhs.width),
            self.height.saturating_mul(rhs.height),
        )
    }
}

impl Mul<i32> for Size {
    type Output = Size;

    fn mul(self, rhs: i32) -> Size {
        Size::new(self.width.saturating_mul(rhs), self.height.saturating_mul(rhs))
    }
}

/// Truncating component-wise division. Panics on a zero divisor component,
/// like integer division does.
impl Div for Size {
    type Output = Size;

    fn div(self, rhs: Size) -> Size {
        Size::new(self.width / rhs.width, self.height / rhs.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Position of a tile inside the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub col: usize,
    pub row: usize,
}

impl Point {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Per-edge padding of a laid out tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    /// Lay out padding for a tile that must occupy `allotment` units per axis
    /// including `border` units on each side.
    pub fn from_allotment(allotment: Size, border: Size) -> Self {
        let (left, right) = split_padding(allotment.width, border.width);
        let (top, bottom) = split_padding(allotment.height, border.height);
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combined padding per axis
    pub fn total(&self) -> Size {
        Size::new(
            self.left.saturating_add(self.right),
            self.top.saturating_add(self.bottom),
        )
    }
}

/// Split `size` into leading (top/left) and trailing (bottom/right) padding
/// around a border of `border` units per side.
///
/// The two halves always sum to `size - 2 * border`: odd sizes give the
/// extra unit to the trailing edge.
pub fn split_padding(size: i32, border: i32) -> (i32, i32) {
    let half = size.div_euclid(2);
    (half - border, size - half - border)
}

// File: crates/linegraph-core/src/geometry.rs
// Summary: Lightweight geometry primitives for pixel math (points, sizes, frames, value ranges).

/// A location in view pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same X, different Y. Used for baseline drops.
    pub const fn with_y(self, y: f64) -> Self {
        Self { x: self.x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Origin + size frame, top-left origin with Y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { origin: Point::new(x, y), size: Size::new(width, height) }
    }
    pub fn min_x(&self) -> f64 { self.origin.x }
    pub fn min_y(&self) -> f64 { self.origin.y }
    pub fn max_x(&self) -> f64 { self.origin.x + self.size.width }
    pub fn max_y(&self) -> f64 { self.origin.y + self.size.height }
    pub fn mid_y(&self) -> f64 { self.origin.y + self.size.height * 0.5 }
    pub fn width(&self) -> f64 { self.size.width }
    pub fn height(&self) -> f64 { self.size.height }

    /// Smallest rect containing both points.
    pub fn spanning(a: Point, b: Point) -> Self {
        let x0 = a.x.min(b.x);
        let y0 = a.y.min(b.y);
        Self::from_xywh(x0, y0, a.x.max(b.x) - x0, a.y.max(b.y) - y0)
    }

    pub fn union(&self, other: &Rect) -> Self {
        let x0 = self.min_x().min(other.min_x());
        let y0 = self.min_y().min(other.min_y());
        let x1 = self.max_x().max(other.max_x());
        let y1 = self.max_y().max(other.max_y());
        Self::from_xywh(x0, y0, x1 - x0, y1 - y0)
    }
}

/// Visible value domain of the Y axis.
/// Contract: consumers doing Y-position math require `min != max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Raise `max` by `fraction` of the span, leaving room above the highest value.
    /// The direction is independent of sign, so an all-negative range never flips.
    pub fn with_headroom(self, fraction: f64) -> Self {
        Self::new(self.min, self.max + self.span().abs() * fraction)
    }

    /// True when the range cannot be used as a divisor (equal or non-finite bounds).
    pub fn is_degenerate(&self) -> bool {
        !self.min.is_finite() || !self.max.is_finite() || self.min == self.max
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

impl From<(f64, f64)> for ValueRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self { min, max }
    }
}

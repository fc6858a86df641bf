// File: crates/linegraph-core/src/scale.rs
// Summary: Value <-> Y pixel mapping shared by point placement and the separator overlay.

use crate::error::{GraphError, Result};
use crate::geometry::ValueRange;
use crate::types::Margins;

/// Linear mapping of a value range onto the plot height, max at the top margin.
///
/// The forward and inverse functions must stay algebraic inverses of each other:
/// data points are placed with one and the horizontal separator with the other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueMapping {
    range: ValueRange,
    viewport_height: f64,
    margins: Margins,
}

impl ValueMapping {
    /// Rejects ranges with `min == max` (or non-finite bounds).
    pub fn new(range: ValueRange, viewport_height: f64, margins: Margins) -> Result<Self> {
        if range.is_degenerate() {
            return Err(GraphError::DegenerateRange { min: range.min, max: range.max });
        }
        Ok(Self { range, viewport_height, margins })
    }

    pub fn range(&self) -> ValueRange {
        self.range
    }

    pub fn plot_height(&self) -> f64 {
        self.viewport_height - self.margins.vsum()
    }

    #[inline]
    pub fn y_position_for_value(&self, value: f64) -> f64 {
        let t = (value - self.range.max) / (self.range.min - self.range.max);
        normalize_zero(t * self.plot_height() + self.margins.top)
    }

    #[inline]
    pub fn value_for_y_position(&self, y: f64) -> f64 {
        let h = self.plot_height();
        if h == 0.0 {
            return self.range.max;
        }
        let t = (y - self.margins.top) / h;
        normalize_zero(self.range.max + t * (self.range.min - self.range.max))
    }
}

// -0.0 -> 0.0
#[inline]
fn normalize_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

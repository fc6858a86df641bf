// File: crates/linegraph-core/src/types.rs
// Summary: Shared layout constants and vertical margins.

/// Gap between the vertical separator line and its flanking labels.
pub const LABEL_INSET: f64 = 10.0;
/// X origin of the caller-owned horizontal-line label view.
pub const Y_LABEL_ORIGIN_X: f64 = 5.0;
/// Gap between the horizontal-line label view and the start of the line.
pub const Y_LABEL_GAP: f64 = 10.0;

/// Vertical margins around the plot area, in points.
/// Contract: both fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
}

impl Margins {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(10.0, 10.0)
    }
}

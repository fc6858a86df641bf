// File: crates/demo/src/series.rs
// Summary: Sparse data series exposed to the drawing layers as point provider and drawing delegate.

use std::ops::Range;

use linegraph_core::{DrawingDelegate, GraphPoint, GraphPointProvider, Margins, Point, Result, ValueMapping, ValueRange};

/// Values laid out left to right at a fixed spacing, scrolled by a horizontal offset.
pub struct ScrollingSeries {
    values: Vec<Option<f64>>,
    spacing: f64,
    left_padding: f64,
    offset: f64,
    viewport_width: f64,
    mapping: ValueMapping,
    margins: Margins,
    viewport_height: f64,
}

impl ScrollingSeries {
    pub fn new(values: Vec<Option<f64>>, spacing: f64, viewport_width: f64, viewport_height: f64) -> Result<Self> {
        let margins = Margins::default();
        let mapping = ValueMapping::new(ValueRange::new(0.0, 1.0), viewport_height, margins)?;
        let mut s = Self {
            values,
            spacing,
            left_padding: spacing * 0.5,
            offset: 0.0,
            viewport_width,
            mapping,
            margins,
            viewport_height,
        };
        s.refresh_range()?;
        Ok(s)
    }

    pub fn set_offset(&mut self, offset: f64) -> Result<()> {
        let max_offset = (self.content_width() - self.viewport_width).max(0.0);
        self.offset = offset.clamp(0.0, max_offset);
        self.refresh_range()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn content_width(&self) -> f64 {
        self.left_padding * 2.0 + self.spacing * self.values.len().saturating_sub(1) as f64
    }

    /// Re-fit the value range to the points in view, keeping zero in range.
    fn refresh_range(&mut self) -> Result<()> {
        let (mut min, mut max) = (0.0f64, f64::NEG_INFINITY);
        for v in self.active_points_interval().filter_map(|i| self.values[i]) {
            min = min.min(v);
            max = max.max(v);
        }
        if !max.is_finite() || max <= min {
            max = min + 1.0;
        }
        let range = ValueRange::new(min, max).with_headroom(0.05);
        self.mapping = ValueMapping::new(range, self.viewport_height, self.margins)?;
        Ok(())
    }
}

impl GraphPointProvider for ScrollingSeries {
    fn graph_point(&self, index: usize) -> GraphPoint {
        match self.values.get(index).copied().flatten() {
            Some(v) => GraphPoint::Present(self.position_for_point(index, v)),
            None => GraphPoint::Absent,
        }
    }
}

impl DrawingDelegate for ScrollingSeries {
    fn active_points_interval(&self) -> Range<usize> {
        if self.values.is_empty() {
            return 0..0;
        }
        let first = ((self.offset - self.left_padding) / self.spacing).floor().max(0.0) as usize;
        let last = ((self.offset + self.viewport_width - self.left_padding) / self.spacing).ceil().max(0.0) as usize;
        first.min(self.values.len())..(last + 1).min(self.values.len())
    }

    fn range_for_active_points(&self) -> ValueRange {
        self.mapping.range()
    }

    /// Positions are in viewport space: content X minus the scroll offset.
    fn position_for_point(&self, index: usize, value: f64) -> Point {
        let x = self.left_padding + index as f64 * self.spacing - self.offset;
        Point::new(x, self.mapping.y_position_for_value(value))
    }
}

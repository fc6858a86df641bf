// File: crates/linegraph-core/src/line_layer.rs
// Summary: Gap-aware line path construction and the line drawing layer that publishes it.

use std::ops::Range;

use log::{debug, trace};

use crate::error::{GraphError, Result};
use crate::geometry::{Point, Size};
use crate::path::LinePath;
use crate::provider::{DrawingDelegate, GraphPoint, GraphPointProvider, PathRenderer};
use crate::style::{LineRenderConfig, ShapeStyle};

/// Build the drawable path for the points in `interval`.
///
/// Gaps drop to the baseline (`zero_y`) at the last present point, run along the
/// baseline and rise again at the next present point; missing data is never bridged.
/// With `should_fill` the shape is closed against the baseline at both ends.
///
/// Returns an empty path for an empty interval or when no point in it is present.
pub fn build_line_path<P>(
    provider: &P,
    interval: Range<usize>,
    zero_y: f64,
    config: &LineRenderConfig,
) -> LinePath
where
    P: GraphPointProvider + ?Sized,
{
    if interval.start >= interval.end {
        return LinePath::new();
    }

    let Some((first_index, first)) = interval
        .clone()
        .find_map(|i| provider.graph_point(i).location().map(|p| (i, p)))
    else {
        return LinePath::new();
    };
    // A present point exists, so the reverse scan stops at `first_index` at the latest.
    let (last_index, last) = interval
        .clone()
        .rev()
        .find_map(|i| provider.graph_point(i).location().map(|p| (i, p)))
        .unwrap_or((first_index, first));

    let segment = config.segment_kind();
    let mut path = LinePath::with_capacity(last_index - first_index + 3);

    if config.should_fill {
        let left_bottom = first.with_y(zero_y);
        path.move_to(left_bottom);
        segment.add_segment(&mut path, left_bottom, first);
    } else {
        path.move_to(first);
    }

    let mut previous = GraphPoint::Present(first);
    let mut drop_point: Option<Point> = None;

    for index in (first_index + 1)..=last_index {
        let current = provider.graph_point(index);
        match (previous, current) {
            (GraphPoint::Present(start), GraphPoint::Present(end)) => {
                segment.add_segment(&mut path, start, end);
            }
            (GraphPoint::Present(start), GraphPoint::Absent) => {
                let bottom = start.with_y(zero_y);
                trace!("gap opens after index {}", index - 1);
                segment.add_segment(&mut path, start, bottom);
                drop_point = Some(bottom);
            }
            (GraphPoint::Absent, GraphPoint::Present(end)) => {
                let bottom = end.with_y(zero_y);
                trace!("gap closes at index {}", index);
                if let Some(dropped) = drop_point.take() {
                    segment.add_segment(&mut path, dropped, bottom);
                }
                segment.add_segment(&mut path, bottom, end);
            }
            (GraphPoint::Absent, GraphPoint::Absent) => {}
        }
        previous = current;
    }

    if config.should_fill {
        segment.add_segment(&mut path, last, last.with_y(zero_y));
    }

    path
}

/// Baseline Y: the minimum of the active range projected at index 0.
pub fn zero_y_position(delegate: &dyn DrawingDelegate) -> f64 {
    let min = delegate.range_for_active_points().min;
    delegate.position_for_point(0, min).y
}

/// Draws one data series as a stroked line.
#[derive(Clone, Debug)]
pub struct LineDrawingLayer {
    viewport: Size,
    config: LineRenderConfig,
}

impl LineDrawingLayer {
    pub fn new(viewport: Size, config: LineRenderConfig) -> Self {
        Self { viewport, config }
    }

    pub fn config(&self) -> &LineRenderConfig {
        &self.config
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) -> Result<()> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(GraphError::InvalidViewport { width, height });
        }
        self.viewport = Size::new(width, height);
        Ok(())
    }

    pub fn stroke_style(&self) -> ShapeStyle {
        self.config.stroke_style()
    }

    /// Fresh path from the owner's current points. Without an owner or delegate
    /// there is nothing to draw and the path is empty.
    pub fn create_line_path(
        &self,
        owner: Option<&dyn GraphPointProvider>,
        delegate: Option<&dyn DrawingDelegate>,
    ) -> LinePath {
        let (Some(owner), Some(delegate)) = (owner, delegate) else {
            return LinePath::new();
        };

        let interval = delegate.active_points_interval();
        let zero_y = zero_y_position(delegate);
        let path = build_line_path(owner, interval.clone(), zero_y, &self.config);
        debug!(
            "line path rebuilt: interval {}..{}, zero_y {:.2}, {} instructions",
            interval.start,
            interval.end,
            zero_y,
            path.len()
        );
        path
    }

    /// Recompute the path and hand it to the renderer.
    pub fn update_path(
        &self,
        owner: Option<&dyn GraphPointProvider>,
        delegate: Option<&dyn DrawingDelegate>,
        renderer: &mut dyn PathRenderer,
    ) {
        let path = self.create_line_path(owner, delegate);
        renderer.render_path(&path, &self.stroke_style());
    }
}

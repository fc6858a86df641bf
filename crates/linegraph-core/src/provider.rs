// File: crates/linegraph-core/src/provider.rs
// Summary: Collaborator interfaces consumed by the layout code (point source, drawing delegate, renderer, text metrics).

use std::ops::Range;

use crate::geometry::{Point, Size, ValueRange};
use crate::path::LinePath;
use crate::style::{FontSpec, ShapeStyle};

/// One data sample projected to pixel space, or a hole in the data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphPoint {
    Present(Point),
    Absent,
}

impl GraphPoint {
    pub fn location(&self) -> Option<Point> {
        match *self {
            GraphPoint::Present(p) => Some(p),
            GraphPoint::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, GraphPoint::Present(_))
    }
}

impl From<Option<Point>> for GraphPoint {
    fn from(p: Option<Point>) -> Self {
        match p {
            Some(p) => GraphPoint::Present(p),
            None => GraphPoint::Absent,
        }
    }
}

/// Random-access lookup of projected points. Out-of-range indices are the provider's concern.
pub trait GraphPointProvider {
    fn graph_point(&self, index: usize) -> GraphPoint;
}

impl<F> GraphPointProvider for F
where
    F: Fn(usize) -> GraphPoint,
{
    fn graph_point(&self, index: usize) -> GraphPoint {
        self(index)
    }
}

/// Range and projection information owned by the host graph view.
pub trait DrawingDelegate {
    /// Half-open index interval of the points currently visible.
    fn active_points_interval(&self) -> Range<usize>;
    fn range_for_active_points(&self) -> ValueRange;
    fn position_for_point(&self, index: usize, value: f64) -> Point;
}

/// Rendering backend. Accepts a path and a style; gives nothing back.
pub trait PathRenderer {
    fn render_path(&mut self, path: &LinePath, style: &ShapeStyle);
}

/// Font-metrics text measurement.
pub trait TextMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

// File: crates/linegraph-core/tests/line_layer.rs
// Purpose: Line drawing layer wiring: owner/delegate absence, baseline lookup, publishing to a renderer.

use std::ops::Range;

use linegraph_core::{
    Color, DrawingDelegate, GraphError, GraphPoint, GraphPointProvider, LineCap, LineDrawingLayer, LineJoin,
    LinePath, LineRenderConfig, LineStrokeStyle, Margins, PathInstruction, PathRenderer, Point, ShapeStyle,
    Size, ValueMapping, ValueRange,
};

/// Host graph: values placed at x = 20 * index, Y via the shared value mapping.
struct Graph {
    values: Vec<Option<f64>>,
    interval: Range<usize>,
    mapping: ValueMapping,
}

impl Graph {
    fn new(values: Vec<Option<f64>>) -> Self {
        let interval = 0..values.len();
        let mapping = ValueMapping::new(ValueRange::new(0.0, 100.0), 220.0, Margins::default()).expect("mapping");
        Self { values, interval, mapping }
    }
}

impl GraphPointProvider for Graph {
    fn graph_point(&self, index: usize) -> GraphPoint {
        match self.values.get(index).copied().flatten() {
            Some(v) => GraphPoint::Present(self.position_for_point(index, v)),
            None => GraphPoint::Absent,
        }
    }
}

impl DrawingDelegate for Graph {
    fn active_points_interval(&self) -> Range<usize> {
        self.interval.clone()
    }
    fn range_for_active_points(&self) -> ValueRange {
        self.mapping.range()
    }
    fn position_for_point(&self, index: usize, value: f64) -> Point {
        Point::new(index as f64 * 20.0, self.mapping.y_position_for_value(value))
    }
}

#[derive(Default)]
struct Recorder {
    calls: Vec<(LinePath, ShapeStyle)>,
}

impl PathRenderer for Recorder {
    fn render_path(&mut self, path: &LinePath, style: &ShapeStyle) {
        self.calls.push((path.clone(), style.clone()));
    }
}

fn layer(config: LineRenderConfig) -> LineDrawingLayer {
    LineDrawingLayer::new(Size::new(320.0, 220.0), config)
}

#[test]
fn missing_owner_or_delegate_yields_empty_path() {
    let graph = Graph::new(vec![Some(1.0), Some(2.0)]);
    let l = layer(LineRenderConfig::default());
    assert!(l.create_line_path(None, Some(&graph)).is_empty());
    assert!(l.create_line_path(Some(&graph), None).is_empty());
    assert!(l.create_line_path(None, None).is_empty());
}

#[test]
fn baseline_comes_from_range_minimum() {
    let graph = Graph::new(vec![Some(50.0), None, Some(75.0)]);
    let l = layer(LineRenderConfig::default().with_fill(true));
    let path = l.create_line_path(Some(&graph), Some(&graph));

    // range min 0 maps to the bottom margin: 220 - 10
    let zero_y = 210.0;
    assert_eq!(path.instructions()[0], PathInstruction::MoveTo(Point::new(0.0, zero_y)));
    assert_eq!(path.current_point(), Some(Point::new(40.0, zero_y)));
}

#[test]
fn active_interval_limits_the_path() {
    let mut graph = Graph::new(vec![Some(10.0); 10]);
    graph.interval = 3..6;
    let path = layer(LineRenderConfig::default()).create_line_path(Some(&graph), Some(&graph));
    assert_eq!(path.len(), 3);
    assert_eq!(path.instructions()[0].end_point().x, 60.0);
}

#[test]
fn update_path_publishes_stroke_only_style() {
    let graph = Graph::new(vec![Some(10.0), Some(20.0), Some(30.0)]);
    let config = LineRenderConfig::default()
        .with_stroke_style(LineStrokeStyle::Dashed)
        .with_line(3.0, Color::from_argb(255, 64, 160, 255))
        .with_join_cap(LineJoin::Bevel, LineCap::Square)
        .with_fill(true);
    let mut rec = Recorder::default();
    layer(config).update_path(Some(&graph), Some(&graph), &mut rec);

    assert_eq!(rec.calls.len(), 1);
    let (path, style) = &rec.calls[0];
    assert_eq!(path.len(), 5);
    assert_eq!(style.dash, Some([5.0, 5.0]));
    assert_eq!(style.stroke, Some(Color::from_argb(255, 64, 160, 255)));
    assert_eq!(style.stroke_width, 3.0);
    assert_eq!(style.join, LineJoin::Bevel);
    assert_eq!(style.cap, LineCap::Square);
    assert_eq!(style.fill, None);
}

#[test]
fn viewport_rejects_negative_sizes() {
    let mut l = layer(LineRenderConfig::default());
    assert!(matches!(l.set_viewport(-1.0, 10.0), Err(GraphError::InvalidViewport { .. })));
    l.set_viewport(640.0, 480.0).expect("valid viewport");
    assert_eq!(l.viewport(), Size::new(640.0, 480.0));
}

#[test]
fn join_and_cap_parse_platform_names() {
    assert_eq!("miter".parse::<LineJoin>(), Ok(LineJoin::Miter));
    assert_eq!(" Round ".parse::<LineCap>(), Ok(LineCap::Round));
    assert_eq!("zigzag".parse::<LineJoin>(), Err(GraphError::UnknownLineJoin("zigzag".into())));
    assert_eq!("flat".parse::<LineCap>(), Err(GraphError::UnknownLineCap("flat".into())));
}

#[test]
fn curviness_is_clamped() {
    assert_eq!(LineRenderConfig::default().with_curviness(4.0).curviness(), 1.0);
    assert_eq!(LineRenderConfig::default().with_curviness(-1.0).curviness(), 0.0);
    assert_eq!(LineRenderConfig::default().with_curviness(f64::NAN).curviness(), 0.0);
}

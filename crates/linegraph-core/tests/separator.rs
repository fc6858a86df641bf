// File: crates/linegraph-core/tests/separator.rs
// Purpose: Separator-line layout math and the rebuild cycle against a recording overlay host.

use std::collections::BTreeMap;

use linegraph_core::{
    layout_separator_lines, AccessoryView, FontSpec, GraphError, LabelId, LinePath, Margins, OverlayHost,
    PathInstruction, PathRenderer, Point, Rect, SeparatorLineView, SeparatorLines, ShapeStyle, Size, TextLabel,
    TextMeasure, ValueMapping, ValueRange, ViewId,
};

/// 6pt per character, 1.2 x font size tall.
struct FixedMeasure;

impl TextMeasure for FixedMeasure {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        Size::new(text.chars().count() as f64 * 6.0, f64::from(font.size) * 1.2)
    }
}

#[derive(Default)]
struct Host {
    next: u64,
    attached: BTreeMap<u64, TextLabel>,
    detached: usize,
    views: BTreeMap<u64, Rect>,
    paths: Vec<(LinePath, ShapeStyle)>,
}

impl PathRenderer for Host {
    fn render_path(&mut self, path: &LinePath, style: &ShapeStyle) {
        self.paths.push((path.clone(), style.clone()));
    }
}

impl TextMeasure for Host {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        FixedMeasure.measure(text, font)
    }
}

impl OverlayHost for Host {
    fn attach_label(&mut self, label: &TextLabel) -> LabelId {
        self.next += 1;
        self.attached.insert(self.next, label.clone());
        LabelId(self.next)
    }
    fn detach_label(&mut self, id: LabelId) {
        if self.attached.remove(&id.0).is_some() {
            self.detached += 1;
        }
    }
    fn place_view(&mut self, view: ViewId, frame: Rect) {
        self.views.insert(view.0, frame);
    }
}

fn settings() -> SeparatorLines {
    SeparatorLines {
        position_x: 150.0,
        position_y: 50.0,
        left_label: "Left".into(),
        right_label: "Right".into(),
        ..SeparatorLines::default()
    }
}

const FRAME: Rect = Rect::from_xywh(0.0, 0.0, 300.0, 200.0);

#[test]
fn vertical_line_spans_margins_minus_font() {
    let layout =
        layout_separator_lines(&settings(), FRAME, Margins::default(), ValueRange::new(0.0, 100.0), &FixedMeasure)
            .expect("layout");
    let (top, bottom) = layout.vertical.expect("vertical line");
    assert_eq!(top, Point::new(150.0, 10.0));
    // 200 - 10 - 10 - 10pt font
    assert_eq!(bottom, Point::new(150.0, 170.0));
}

#[test]
fn horizontal_line_uses_inverse_mapping() {
    let range = ValueRange::new(0.0, 100.0);
    let layout = layout_separator_lines(&settings(), FRAME, Margins::default(), range, &FixedMeasure).expect("layout");
    let (start, end) = layout.horizontal.expect("horizontal line");

    // plot height 180: ((50 - 100) / (0 - 100)) * 180 + 10
    assert_eq!(start.y, 100.0);
    assert_eq!(end.y, 100.0);
    assert_eq!(start.x, 10.0);
    assert_eq!(end.x, 310.0);

    let mapping = ValueMapping::new(range, FRAME.height(), Margins::default()).expect("mapping");
    assert!((mapping.value_for_y_position(start.y) - 50.0).abs() < 1e-9);
}

#[test]
fn labels_flank_the_vertical_line() {
    let layout =
        layout_separator_lines(&settings(), FRAME, Margins::default(), ValueRange::new(0.0, 100.0), &FixedMeasure)
            .expect("layout");
    assert_eq!(layout.labels.len(), 2);

    let left = &layout.labels[0];
    assert_eq!(left.text, "Left");
    assert_eq!(left.frame, Rect::from_xywh(150.0 - 24.0 - 10.0, 10.0, 24.0, 12.0));
    assert_eq!(left.frame.max_x(), 140.0);

    let right = &layout.labels[1];
    assert_eq!(right.frame.origin, Point::new(160.0, 10.0));
    assert_eq!(right.frame.size.width, 30.0);
}

#[test]
fn caller_view_is_centred_on_horizontal_line() {
    let mut s = settings();
    s.position_y_label = Some(AccessoryView { id: ViewId(7), size: Size::new(40.0, 16.0) });
    let layout =
        layout_separator_lines(&s, FRAME, Margins::default(), ValueRange::new(0.0, 100.0), &FixedMeasure)
            .expect("layout");

    assert_eq!(layout.y_label, Some((ViewId(7), Rect::from_xywh(5.0, 92.0, 40.0, 16.0))));
    let (start, _) = layout.horizontal.expect("horizontal line");
    assert_eq!(start.x, 50.0);
}

#[test]
fn hidden_lines_produce_nothing() {
    let mut s = settings();
    s.should_show_separator_lines = false;
    let layout =
        layout_separator_lines(&s, FRAME, Margins::default(), ValueRange::new(0.0, 100.0), &FixedMeasure)
            .expect("layout");
    assert!(layout.path().is_empty());
    assert!(layout.labels.is_empty());
    assert!(layout.y_label.is_none());
}

#[test]
fn hidden_labels_keep_lines() {
    let mut s = settings();
    s.should_show_labels = false;
    let layout =
        layout_separator_lines(&s, FRAME, Margins::default(), ValueRange::new(0.0, 100.0), &FixedMeasure)
            .expect("layout");
    assert!(layout.labels.is_empty());
    let path = layout.path();
    assert_eq!(path.len(), 4);
    assert!(matches!(path.instructions()[0], PathInstruction::MoveTo(_)));
    assert!(matches!(path.instructions()[2], PathInstruction::MoveTo(_)));
}

#[test]
fn degenerate_range_is_a_configuration_error() {
    let err = layout_separator_lines(&settings(), FRAME, Margins::default(), ValueRange::new(5.0, 5.0), &FixedMeasure)
        .unwrap_err();
    assert_eq!(err, GraphError::DegenerateRange { min: 5.0, max: 5.0 });
}

#[test]
fn every_rebuild_replaces_labels() {
    let mut host = Host::default();
    let mut view = SeparatorLineView::new(FRAME, Margins::default(), settings());

    view.set_range(ValueRange::new(0.0, 100.0), &mut host).expect("range");
    view.set_range(ValueRange::new(0.0, 200.0), &mut host).expect("range");
    view.set_viewport_size(400.0, 300.0, &mut host).expect("viewport");

    assert_eq!(host.attached.len(), 2);
    assert_eq!(host.detached, 4);
    assert_eq!(host.paths.len(), 3);
    assert_eq!(view.attached_labels().len(), 2);

    let (path, style) = host.paths.last().expect("published path");
    assert_eq!(path.len(), 4);
    assert_eq!(style.stroke_width, 0.5);
    assert_eq!(style.fill, None);
}

#[test]
fn rejected_range_leaves_state_untouched() {
    let mut host = Host::default();
    let mut view = SeparatorLineView::new(FRAME, Margins::default(), settings());
    view.set_range(ValueRange::new(10.0, 20.0), &mut host).expect("range");

    let err = view.set_range(ValueRange::new(3.0, 3.0), &mut host).unwrap_err();
    assert!(matches!(err, GraphError::DegenerateRange { .. }));
    assert_eq!(view.range(), ValueRange::new(10.0, 20.0));
    assert_eq!(host.paths.len(), 1);
}

#[test]
fn offset_moves_vertical_line_with_view_origin() {
    let mut host = Host::default();
    let mut view = SeparatorLineView::new(FRAME, Margins::default(), settings());
    view.set_offset(100.0, &mut host).expect("offset");

    assert_eq!(view.offset(), 100.0);
    assert_eq!(view.frame().origin.x, 100.0);
    let (top, _) = view.layout().vertical.expect("vertical line");
    assert_eq!(top.x, 50.0);
}

#[test]
fn non_finite_offset_is_rejected() {
    let mut host = Host::default();
    let mut view = SeparatorLineView::new(FRAME, Margins::default(), settings());
    view.set_offset(100.0, &mut host).expect("offset");

    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = view.set_offset(bad, &mut host).unwrap_err();
        assert!(matches!(err, GraphError::InvalidOffset(_)));
    }
    assert_eq!(view.offset(), 100.0);
    assert_eq!(view.frame().origin.x, 100.0);
    let (top, _) = view.layout().vertical.expect("vertical line");
    assert_eq!(top.x, 50.0);
    assert_eq!(host.paths.len(), 1);
}

#[test]
fn caller_view_is_repositioned_not_recreated() {
    let mut host = Host::default();
    let mut s = settings();
    s.position_y_label = Some(AccessoryView { id: ViewId(3), size: Size::new(20.0, 10.0) });
    let mut view = SeparatorLineView::new(FRAME, Margins::default(), s);

    view.set_range(ValueRange::new(0.0, 100.0), &mut host).expect("range");
    view.set_range(ValueRange::new(50.0, 150.0), &mut host).expect("range");

    assert_eq!(host.views.len(), 1);
    // 50 is now the range minimum: bottom of the plot (190) minus half the view height
    assert_eq!(host.views[&3], Rect::from_xywh(5.0, 185.0, 20.0, 10.0));
}

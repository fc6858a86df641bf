// File: crates/linegraph-core/src/separator.rs
// Summary: Separator-line overlay: settings snapshot, pure frame layout, and the view that applies it.

use log::{debug, warn};

use crate::error::{GraphError, Result};
use crate::geometry::{Point, Rect, Size, ValueRange};
use crate::path::LinePath;
use crate::provider::{PathRenderer, TextMeasure};
use crate::scale::ValueMapping;
use crate::style::{Color, FontSpec, ShapeStyle};
use crate::types::{Margins, LABEL_INSET, Y_LABEL_GAP, Y_LABEL_ORIGIN_X};

/// Identifier of a view owned by the caller (e.g. the horizontal line's label).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewId(pub u64);

/// Identifier handed out by an [`OverlayHost`] for an attached text label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LabelId(pub u64);

/// Caller-owned view that is repositioned in place, never recreated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AccessoryView {
    pub id: ViewId,
    pub size: Size,
}

/// Settings for the separator lines. Read as a snapshot on every rebuild.
#[derive(Clone, Debug, PartialEq)]
pub struct SeparatorLines {
    pub should_show_separator_lines: bool,
    pub line_color: Color,
    pub line_thickness: f32,
    /// X of the vertical line in the host graph's coordinate space.
    pub position_x: f64,
    /// Data value marked by the horizontal line.
    pub position_y: f64,
    pub position_y_label: Option<AccessoryView>,
    pub left_label: String,
    pub right_label: String,
    pub should_show_labels: bool,
    pub label_font: FontSpec,
    pub label_color: Color,
}

impl Default for SeparatorLines {
    fn default() -> Self {
        Self {
            should_show_separator_lines: true,
            line_color: Color::BLACK,
            line_thickness: 0.5,
            position_x: 0.0,
            position_y: 0.0,
            position_y_label: None,
            left_label: String::new(),
            right_label: String::new(),
            should_show_labels: true,
            label_font: FontSpec::system(10.0),
            label_color: Color::WHITE,
        }
    }
}

impl SeparatorLines {
    pub fn stroke_style(&self) -> ShapeStyle {
        ShapeStyle::stroked(self.line_color, self.line_thickness)
    }
}

/// A text label positioned next to the vertical separator line.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub frame: Rect,
    pub color: Color,
    pub font: FontSpec,
}

/// Computed positions for one rebuild.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeparatorLayout {
    pub vertical: Option<(Point, Point)>,
    pub horizontal: Option<(Point, Point)>,
    pub labels: Vec<TextLabel>,
    pub y_label: Option<(ViewId, Rect)>,
}

impl SeparatorLayout {
    /// Both lines as independent move/line pairs, vertical first.
    pub fn path(&self) -> LinePath {
        let mut path = LinePath::new();
        for (from, to) in self.vertical.iter().chain(self.horizontal.iter()) {
            path.add_line(*from, *to);
        }
        path
    }
}

/// Compute line endpoints and label frames for a view with `frame`, without touching any view tree.
pub fn layout_separator_lines<M>(
    settings: &SeparatorLines,
    frame: Rect,
    margins: Margins,
    range: ValueRange,
    measure: &M,
) -> Result<SeparatorLayout>
where
    M: TextMeasure + ?Sized,
{
    if !settings.should_show_separator_lines {
        return Ok(SeparatorLayout::default());
    }
    let mapping = ValueMapping::new(range, frame.height(), margins)?;

    let x = settings.position_x - frame.origin.x;
    let font_size = f64::from(settings.label_font.size);
    let vertical = (
        Point::new(x, margins.top),
        Point::new(x, frame.height() - margins.bottom - margins.top - font_size),
    );

    let mut labels = Vec::with_capacity(2);
    if settings.should_show_labels {
        if !settings.left_label.is_empty() {
            let size = measure.measure(&settings.left_label, &settings.label_font);
            labels.push(TextLabel {
                text: settings.left_label.clone(),
                frame: Rect::new(Point::new(x - size.width - LABEL_INSET, margins.top), size),
                color: settings.label_color,
                font: settings.label_font.clone(),
            });
        }
        if !settings.right_label.is_empty() {
            let size = measure.measure(&settings.right_label, &settings.label_font);
            labels.push(TextLabel {
                text: settings.right_label.clone(),
                frame: Rect::new(Point::new(x + LABEL_INSET, margins.top), size),
                color: settings.label_color,
                font: settings.label_font.clone(),
            });
        }
    }

    let y = mapping.y_position_for_value(settings.position_y);
    let y_view_size = settings.position_y_label.map(|v| v.size).unwrap_or(Size::ZERO);
    let start = Point::new(y_view_size.width + Y_LABEL_GAP, y);
    let horizontal = (start, Point::new(start.x + frame.width(), y));

    let y_label = settings.position_y_label.map(|view| {
        let origin = Point::new(Y_LABEL_ORIGIN_X, y - view.size.height / 2.0);
        (view.id, Rect::new(origin, view.size))
    });

    Ok(SeparatorLayout { vertical: Some(vertical), horizontal: Some(horizontal), labels, y_label })
}

/// View tree the overlay applies its layout to. Also renders the separator path and measures text.
pub trait OverlayHost: PathRenderer + TextMeasure {
    fn attach_label(&mut self, label: &TextLabel) -> LabelId;
    fn detach_label(&mut self, id: LabelId);
    /// Move a caller-owned view to `frame`, attaching it if needed.
    fn place_view(&mut self, view: ViewId, frame: Rect);
}

/// Overlay drawing a vertical and a horizontal reference line with labels.
///
/// Every setter performs a full rebuild: previous labels are detached, new ones
/// attached, and the separator path republished.
#[derive(Clone, Debug)]
pub struct SeparatorLineView {
    settings: SeparatorLines,
    frame: Rect,
    margins: Margins,
    range: ValueRange,
    offset: f64,
    labels: Vec<LabelId>,
    layout: SeparatorLayout,
}

impl SeparatorLineView {
    pub fn new(frame: Rect, margins: Margins, settings: SeparatorLines) -> Self {
        Self {
            settings,
            frame,
            margins,
            range: ValueRange::default(),
            offset: 0.0,
            labels: Vec::new(),
            layout: SeparatorLayout::default(),
        }
    }

    pub fn settings(&self) -> &SeparatorLines { &self.settings }
    pub fn frame(&self) -> Rect { self.frame }
    pub fn range(&self) -> ValueRange { self.range }
    pub fn offset(&self) -> f64 { self.offset }
    /// Layout from the most recent rebuild.
    pub fn layout(&self) -> &SeparatorLayout { &self.layout }
    pub fn attached_labels(&self) -> &[LabelId] { &self.labels }

    /// Degenerate ranges are rejected and leave the current state untouched.
    pub fn set_range(&mut self, range: ValueRange, host: &mut dyn OverlayHost) -> Result<()> {
        if range.is_degenerate() {
            warn!("rejecting degenerate separator range [{}, {}]", range.min, range.max);
            return Err(GraphError::DegenerateRange { min: range.min, max: range.max });
        }
        self.range = range;
        self.rebuild(host)
    }

    /// Horizontal scroll offset. The overlay stays pinned to the visible viewport,
    /// so its frame origin follows the offset.
    pub fn set_offset(&mut self, offset: f64, host: &mut dyn OverlayHost) -> Result<()> {
        if !offset.is_finite() {
            return Err(GraphError::InvalidOffset(offset));
        }
        self.offset = offset;
        self.frame.origin.x = offset;
        self.rebuild(host)
    }

    pub fn set_viewport_size(&mut self, width: f64, height: f64, host: &mut dyn OverlayHost) -> Result<()> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(GraphError::InvalidViewport { width, height });
        }
        self.frame.size = Size::new(width, height);
        self.rebuild(host)
    }

    pub fn set_settings(&mut self, settings: SeparatorLines, host: &mut dyn OverlayHost) -> Result<()> {
        self.settings = settings;
        self.rebuild(host)
    }

    /// Recompute everything and apply it to `host`.
    pub fn rebuild(&mut self, host: &mut dyn OverlayHost) -> Result<()> {
        let layout = layout_separator_lines(&self.settings, self.frame, self.margins, self.range, &*host)?;

        for id in self.labels.drain(..) {
            host.detach_label(id);
        }
        for label in &layout.labels {
            let id = host.attach_label(label);
            self.labels.push(id);
        }
        if let Some((view, frame)) = layout.y_label {
            host.place_view(view, frame);
        }
        let path = layout.path();
        host.render_path(&path, &self.settings.stroke_style());

        debug!(
            "separator lines rebuilt: {} labels, {} path instructions, range [{}, {}]",
            self.labels.len(),
            path.len(),
            self.range.min,
            self.range.max
        );
        self.layout = layout;
        Ok(())
    }
}

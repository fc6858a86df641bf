// File: crates/linegraph-core/src/style.rs
// Summary: Stroke/fill styling and the per-build line configuration bundle.

use std::str::FromStr;

use crate::error::GraphError;
use crate::path::SegmentKind;

/// 8-bit ARGB color, renderer agnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_argb(255, 0, 0, 0);
    pub const WHITE: Color = Color::from_argb(255, 255, 255, 255);
    pub const TRANSPARENT: Color = Color::from_argb(0, 0, 0, 0);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStyle {
    #[default]
    Straight,
    Smooth,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineStrokeStyle {
    #[default]
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl FromStr for LineJoin {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "miter" => Ok(LineJoin::Miter),
            "round" => Ok(LineJoin::Round),
            "bevel" => Ok(LineJoin::Bevel),
            _ => Err(GraphError::UnknownLineJoin(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl FromStr for LineCap {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "butt" => Ok(LineCap::Butt),
            "round" => Ok(LineCap::Round),
            "square" => Ok(LineCap::Square),
            _ => Err(GraphError::UnknownLineCap(s.to_string())),
        }
    }
}

/// Dash lengths used for dashed strokes (on, off).
pub const DASH_PATTERN: [f32; 2] = [5.0, 5.0];

/// Style descriptor handed to the rendering backend alongside a path.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeStyle {
    /// `None` draws no outline.
    pub stroke: Option<Color>,
    pub stroke_width: f32,
    pub dash: Option<[f32; 2]>,
    pub dash_phase: f32,
    pub join: LineJoin,
    pub cap: LineCap,
    /// `None` leaves the interior unpainted.
    pub fill: Option<Color>,
}

impl ShapeStyle {
    pub fn stroked(color: Color, width: f32) -> Self {
        Self {
            stroke: Some(color),
            stroke_width: width,
            dash: None,
            dash_phase: 0.0,
            join: LineJoin::default(),
            cap: LineCap::default(),
            fill: None,
        }
    }

    /// Area fill under a line, no outline.
    pub fn filled(color: Color) -> Self {
        Self { stroke: None, fill: Some(color), ..Self::stroked(Color::TRANSPARENT, 0.0) }
    }
}

/// Font request for label text. Family list is a preference order.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub families: Vec<String>,
}

impl FontSpec {
    pub fn system(size: f32) -> Self {
        Self { size, families: Vec::new() }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::system(10.0)
    }
}

/// Immutable-per-build configuration for a line layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LineRenderConfig {
    pub line_style: LineStyle,
    pub stroke_style: LineStrokeStyle,
    pub should_fill: bool,
    // Always in [0, 1]; written only by `with_curviness`.
    curviness: f64,
    pub line_width: f32,
    pub line_color: Color,
    pub line_join: LineJoin,
    pub line_cap: LineCap,
}

impl Default for LineRenderConfig {
    fn default() -> Self {
        Self {
            line_style: LineStyle::Straight,
            stroke_style: LineStrokeStyle::Solid,
            should_fill: false,
            curviness: 0.5,
            line_width: 2.0,
            line_color: Color::BLACK,
            line_join: LineJoin::Round,
            line_cap: LineCap::Round,
        }
    }
}

impl LineRenderConfig {
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = style;
        self
    }

    pub fn with_stroke_style(mut self, style: LineStrokeStyle) -> Self {
        self.stroke_style = style;
        self
    }

    pub fn with_fill(mut self, should_fill: bool) -> Self {
        self.should_fill = should_fill;
        self
    }

    /// Fraction of a segment's horizontal span used to offset Bezier controls, in [0, 1].
    pub fn curviness(&self) -> f64 {
        self.curviness
    }

    /// Clamped into [0, 1]; NaN falls back to 0.
    pub fn with_curviness(mut self, curviness: f64) -> Self {
        self.curviness = if curviness.is_nan() { 0.0 } else { curviness.clamp(0.0, 1.0) };
        self
    }

    pub fn with_line(mut self, width: f32, color: Color) -> Self {
        self.line_width = width.max(0.0);
        self.line_color = color;
        self
    }

    pub fn with_join_cap(mut self, join: LineJoin, cap: LineCap) -> Self {
        self.line_join = join;
        self.line_cap = cap;
        self
    }

    pub fn segment_kind(&self) -> SegmentKind {
        match self.line_style {
            LineStyle::Straight => SegmentKind::Straight,
            LineStyle::Smooth => SegmentKind::Curved { curviness: self.curviness },
        }
    }

    pub fn dash_pattern(&self) -> Option<[f32; 2]> {
        match self.stroke_style {
            LineStrokeStyle::Solid => None,
            LineStrokeStyle::Dashed => Some(DASH_PATTERN),
        }
    }

    /// Stroke-only style; the line layer never fills its own path.
    pub fn stroke_style(&self) -> ShapeStyle {
        ShapeStyle {
            stroke: Some(self.line_color),
            stroke_width: self.line_width,
            dash: self.dash_pattern(),
            dash_phase: 0.0,
            join: self.line_join,
            cap: self.line_cap,
            fill: None,
        }
    }
}

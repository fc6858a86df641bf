// File: crates/linegraph-core/src/lib.rs
// Summary: Core library entry point; path geometry and separator layout for scrollable line graphs.

pub mod error;
pub mod geometry;
pub mod line_layer;
pub mod path;
pub mod provider;
pub mod scale;
pub mod separator;
pub mod style;
pub mod types;

pub use error::{GraphError, Result};
pub use geometry::{Point, Rect, Size, ValueRange};
pub use line_layer::{build_line_path, zero_y_position, LineDrawingLayer};
pub use path::{curve_control_points, LinePath, PathInstruction, SegmentKind};
pub use provider::{DrawingDelegate, GraphPoint, GraphPointProvider, PathRenderer, TextMeasure};
pub use scale::ValueMapping;
pub use separator::{
    layout_separator_lines, AccessoryView, LabelId, OverlayHost, SeparatorLayout, SeparatorLineView,
    SeparatorLines, TextLabel, ViewId,
};
pub use style::{
    Color, FontSpec, LineCap, LineJoin, LineRenderConfig, LineStrokeStyle, LineStyle, ShapeStyle,
};
pub use types::Margins;

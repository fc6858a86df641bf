// File: crates/linegraph-render-skia/src/lib.rs
// Summary: Skia backend: path conversion, stroke/fill painting, text metrics, overlay labels, PNG output.

pub mod overlay;
pub mod paint;
pub mod surface;
pub mod text;

pub use overlay::SkiaOverlay;
pub use paint::{draw_shape, to_skia_color, to_skia_path};
pub use surface::{RenderOptions, SkiaSurface};
pub use text::TextShaper;

// File: crates/linegraph-render-skia/src/overlay.rs
// Summary: Overlay host that keeps attached separator labels and draws them with Skia.

use std::collections::{BTreeMap, HashMap};

use linegraph_core::{
    FontSpec, LabelId, LinePath, OverlayHost, PathRenderer, Rect, ShapeStyle, Size, TextLabel, TextMeasure, ViewId,
};
use log::trace;
use skia_safe as skia;

use crate::paint::draw_shape;
use crate::text::TextShaper;

/// Retained overlay: labels and caller views stay attached until detached,
/// the separator path is replaced on every publish.
pub struct SkiaOverlay {
    shaper: TextShaper,
    next_id: u64,
    labels: BTreeMap<u64, TextLabel>,
    views: HashMap<ViewId, Rect>,
    separator: Option<(LinePath, ShapeStyle)>,
}

impl SkiaOverlay {
    pub fn new() -> Self {
        Self::with_shaper(TextShaper::new())
    }

    pub fn with_shaper(shaper: TextShaper) -> Self {
        Self { shaper, next_id: 0, labels: BTreeMap::new(), views: HashMap::new(), separator: None }
    }

    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> {
        self.labels.values()
    }

    pub fn view_frame(&self, view: ViewId) -> Option<Rect> {
        self.views.get(&view).copied()
    }

    pub fn separator_path(&self) -> Option<&LinePath> {
        self.separator.as_ref().map(|(p, _)| p)
    }

    pub fn shaper(&self) -> &TextShaper {
        &self.shaper
    }

    /// Separator lines first, labels on top.
    pub fn draw(&self, canvas: &skia::Canvas) {
        if let Some((path, style)) = &self.separator {
            draw_shape(canvas, path, style);
        }
        for label in self.labels.values() {
            self.shaper.draw_top_left(canvas, &label.text, label.frame.origin, &label.font, label.color);
        }
    }
}

impl Default for SkiaOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl PathRenderer for SkiaOverlay {
    fn render_path(&mut self, path: &LinePath, style: &ShapeStyle) {
        self.separator = Some((path.clone(), style.clone()));
    }
}

impl TextMeasure for SkiaOverlay {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        self.shaper.measure(text, font)
    }
}

impl OverlayHost for SkiaOverlay {
    fn attach_label(&mut self, label: &TextLabel) -> LabelId {
        self.next_id += 1;
        trace!("attach label #{} '{}'", self.next_id, label.text);
        self.labels.insert(self.next_id, label.clone());
        LabelId(self.next_id)
    }

    fn detach_label(&mut self, id: LabelId) {
        self.labels.remove(&id.0);
    }

    fn place_view(&mut self, view: ViewId, frame: Rect) {
        self.views.insert(view, frame);
    }
}

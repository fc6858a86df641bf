// File: crates/linegraph-render-skia/src/text.rs
// Summary: Label text shaping, measuring and drawing using Skia textlayout.

use linegraph_core::{Color, FontSpec, Point, Size, TextMeasure};
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use crate::paint::to_skia_color;

const FALLBACK_FAMILIES: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(font: &FontSpec, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(font.size.max(1.0));
        ts.set_color(color);
        if font.families.is_empty() {
            ts.set_font_families(FALLBACK_FAMILIES);
        } else {
            ts.set_font_families(font.families.as_slice());
        }
        ts
    }

    pub fn layout(&self, text: &str, font: &FontSpec, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(font, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the paragraph's top-left corner at `origin`.
    pub fn draw_top_left(&self, canvas: &skia::Canvas, text: &str, origin: Point, font: &FontSpec, color: Color) {
        let p = self.layout(text, font, to_skia_color(color));
        p.paint(canvas, (origin.x as f32, origin.y as f32));
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasure for TextShaper {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let p = self.layout(text, font, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        Size::new(f64::from(p.longest_line()), f64::from(p.height()))
    }
}

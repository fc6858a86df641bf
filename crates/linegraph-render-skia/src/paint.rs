// File: crates/linegraph-render-skia/src/paint.rs
// Summary: Conversion of path instructions and shape styles into Skia paths and paints.

use linegraph_core::{Color, LineCap, LineJoin, LinePath, PathInstruction, ShapeStyle};
use skia_safe as skia;

pub fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn pt(p: linegraph_core::Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

/// Replay the instruction sequence into a Skia path, in order.
pub fn to_skia_path(path: &LinePath) -> skia::Path {
    let mut out = skia::Path::new();
    for ins in path {
        match *ins {
            PathInstruction::MoveTo(p) => {
                out.move_to(pt(p));
            }
            PathInstruction::LineTo(p) => {
                out.line_to(pt(p));
            }
            PathInstruction::CurveTo { end, ctrl1, ctrl2 } => {
                out.cubic_to(pt(ctrl1), pt(ctrl2), pt(end));
            }
        }
    }
    out
}

fn join(j: LineJoin) -> skia::paint::Join {
    match j {
        LineJoin::Miter => skia::paint::Join::Miter,
        LineJoin::Round => skia::paint::Join::Round,
        LineJoin::Bevel => skia::paint::Join::Bevel,
    }
}

fn cap(c: LineCap) -> skia::paint::Cap {
    match c {
        LineCap::Butt => skia::paint::Cap::Butt,
        LineCap::Round => skia::paint::Cap::Round,
        LineCap::Square => skia::paint::Cap::Square,
    }
}

/// Fill first, then stroke on top, like a shape layer.
pub fn draw_shape(canvas: &skia::Canvas, path: &LinePath, style: &ShapeStyle) {
    if path.is_empty() {
        return;
    }
    let sk_path = to_skia_path(path);

    if let Some(fill) = style.fill {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(fill));
        canvas.draw_path(&sk_path, &paint);
    }

    if let Some(stroke) = style.stroke {
        if style.stroke_width <= 0.0 {
            return;
        }
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.stroke_width);
        paint.set_color(to_skia_color(stroke));
        paint.set_stroke_join(join(style.join));
        paint.set_stroke_cap(cap(style.cap));
        if let Some(dash) = style.dash {
            paint.set_path_effect(skia::PathEffect::dash(&dash, style.dash_phase));
        }
        canvas.draw_path(&sk_path, &paint);
    }
}

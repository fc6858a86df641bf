// File: crates/demo/src/main.rs
// Summary: Demo loads a sparse value CSV (blank cells are gaps) and renders line graph variants with separator lines to PNGs.

mod series;

use anyhow::{Context, Result};
use linegraph_core::{
    build_line_path, zero_y_position, AccessoryView, Color, DrawingDelegate, FontSpec, LineDrawingLayer,
    LineRenderConfig, LineStrokeStyle, LineStyle, Margins, PathRenderer, Point, Rect, SeparatorLineView,
    SeparatorLines, ShapeStyle, Size, TextMeasure, ViewId,
};
use linegraph_render_skia::{RenderOptions, SkiaOverlay, SkiaSurface};
use log::{info, warn};
use series::ScrollingSeries;
use std::path::{Path, PathBuf};

const WIDTH: i32 = 640;
const HEIGHT: i32 = 360;
const SPACING: f64 = 40.0;
const Y_LABEL_VIEW: ViewId = ViewId(1);

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = DemoArgs::parse(std::env::args().skip(1))?;
    let values = match &args.csv {
        Some(path) => load_values_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => {
            info!("no CSV given, using generated data");
            generated_values(48)
        }
    };
    let (out_dir, offset) = (args.out_dir, args.offset);

    if values.iter().all(Option::is_none) {
        anyhow::bail!("no values loaded; check the value column.");
    }
    let gaps = values.iter().filter(|v| v.is_none()).count();
    info!("Loaded {} points ({} gaps)", values.len(), gaps);

    let mut series = ScrollingSeries::new(values, SPACING, WIDTH as f64, HEIGHT as f64)?;
    series.set_offset(offset)?;
    let interval = series.active_points_interval();
    info!("Offset {:.1}px shows points {}..{}", series.offset(), interval.start, interval.end);

    let variants = [
        ("straight", LineRenderConfig::default(), false),
        ("straight_filled", LineRenderConfig::default().with_fill(true), true),
        ("smooth", LineRenderConfig::default().with_line_style(LineStyle::Smooth).with_curviness(0.5), false),
        (
            "smooth_dashed_filled",
            LineRenderConfig::default()
                .with_line_style(LineStyle::Smooth)
                .with_stroke_style(LineStrokeStyle::Dashed)
                .with_fill(true),
            true,
        ),
    ];

    for (name, config, area) in variants {
        let config = config.with_line(2.0, Color::from_argb(255, 64, 160, 255));
        let out = out_dir.join(format!("linegraph_{name}.png"));
        render_variant(&series, config, area, &out)?;
        info!("Wrote {}", out.display());
    }
    Ok(())
}

/// Positional arguments: `[values.csv|-] [out_dir] [offset_px]`.
#[derive(Debug, PartialEq)]
struct DemoArgs {
    /// `None` (no argument or `-`) means generated data.
    csv: Option<PathBuf>,
    out_dir: PathBuf,
    offset: f64,
}

impl DemoArgs {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut args = args.into_iter();
        let csv = args.next().filter(|raw| raw != "-").map(PathBuf::from);
        let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
        let offset = match args.next() {
            Some(raw) => raw.parse::<f64>().with_context(|| format!("offset '{raw}' is not a number"))?,
            None => 0.0,
        };
        Ok(Self { csv, out_dir, offset })
    }
}

fn render_variant(series: &ScrollingSeries, config: LineRenderConfig, area: bool, out: &Path) -> Result<()> {
    let opts = RenderOptions { width: WIDTH, height: HEIGHT, ..RenderOptions::default() };
    let mut surface = SkiaSurface::new(&opts)?;
    let viewport = Size::new(WIDTH as f64, HEIGHT as f64);

    if area {
        // Fill layer shares the line path, closed against the baseline.
        let zero_y = zero_y_position(series);
        let path = build_line_path(series, series.active_points_interval(), zero_y, &config);
        surface.render_path(&path, &ShapeStyle::filled(Color::from_argb(80, 64, 160, 255)));
    }

    let layer = LineDrawingLayer::new(viewport, config);
    layer.update_path(Some(series), Some(series), &mut surface);

    let mut overlay = SkiaOverlay::new();
    let range = series.range_for_active_points();
    let label_font = FontSpec::system(11.0);
    let marker = (range.min + range.max) * 0.5;
    let marker_text = format!("{marker:.1}");
    let marker_size = overlay.measure(&marker_text, &label_font);
    let settings = SeparatorLines {
        position_x: series.offset() + WIDTH as f64 * 0.5,
        position_y: marker,
        position_y_label: Some(AccessoryView { id: Y_LABEL_VIEW, size: marker_size }),
        left_label: "earlier".into(),
        right_label: "later".into(),
        line_color: Color::from_argb(255, 180, 180, 190),
        label_font: label_font.clone(),
        label_color: Color::from_argb(255, 235, 235, 245),
        ..SeparatorLines::default()
    };
    let frame = Rect::new(Point::ZERO, viewport);
    let mut view = SeparatorLineView::new(frame, Margins::default(), settings);
    view.set_offset(series.offset(), &mut overlay)?;
    if let Err(e) = view.set_range(range, &mut overlay) {
        warn!("separator lines skipped: {e}");
    }
    surface.draw_overlay(&overlay);

    // The horizontal line's label is a caller-owned view; draw its content where the overlay placed it.
    if let Some(frame) = overlay.view_frame(Y_LABEL_VIEW) {
        overlay.shaper().draw_top_left(
            surface.canvas(),
            &marker_text,
            frame.origin,
            &label_font,
            Color::from_argb(255, 255, 230, 70),
        );
    }

    surface.write_png(out)
}

/// Load a one- or two-column CSV; the last column holds values, blank or unparsable cells are gaps.
fn load_values_csv(path: &Path) -> Result<Vec<Option<f64>>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let col = headers.iter().position(|h| h == "value" || h == "y").unwrap_or(headers.len().saturating_sub(1));
    info!("Headers: {:?}, using column {}", headers, col);

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        out.push(rec.get(col).and_then(|s| s.trim().parse::<f64>().ok()));
    }
    Ok(out)
}

/// Smooth wave with a few holes punched in it.
fn generated_values(n: usize) -> Vec<Option<f64>> {
    (0..n)
        .map(|i| {
            if i % 11 == 7 || i % 11 == 8 {
                None
            } else {
                Some(50.0 + (i as f64 * 0.35).sin() * 30.0 + i as f64 * 0.4)
            }
        })
        .collect()
}

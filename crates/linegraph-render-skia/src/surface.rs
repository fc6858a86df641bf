// File: crates/linegraph-render-skia/src/surface.rs
// Summary: CPU raster surface that receives published paths and encodes PNG output.

use anyhow::{Context, Result};
use linegraph_core::{LinePath, PathRenderer, ShapeStyle};
use log::debug;
use skia_safe as skia;

use crate::overlay::SkiaOverlay;
use crate::paint::draw_shape;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 400,
            background: skia::Color::from_argb(255, 18, 18, 20), // near-black
        }
    }
}

/// Raster target for line layers and overlays. Paths are painted as they are published.
pub struct SkiaSurface {
    surface: skia::Surface,
}

impl SkiaSurface {
    pub fn new(opts: &RenderOptions) -> Result<Self> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        surface.canvas().clear(opts.background);
        Ok(Self { surface })
    }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    pub fn draw_overlay(&mut self, overlay: &SkiaOverlay) {
        overlay.draw(self.surface.canvas());
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn write_png(&mut self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.encode_png()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}

impl PathRenderer for SkiaSurface {
    fn render_path(&mut self, path: &LinePath, style: &ShapeStyle) {
        draw_shape(self.surface.canvas(), path, style);
    }
}

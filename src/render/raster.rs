use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{ChainError, ChainResult};
use crate::render::svg::tree_to_svg;
use crate::render::visual::VisualTree;

/// Raster size ceiling per axis.
const MAX_DIM: u32 = 16_384;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced here are premultiplied alpha; the flag makes that explicit at API boundaries.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Bytes with straight (unpremultiplied) alpha.
    pub fn to_straight(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        if !self.premultiplied {
            return out;
        }
        for px in out.chunks_exact_mut(4) {
            let a = px[3] as u16;
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Write the frame as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> ChainResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            &self.to_straight(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Rasterizes emitted SVG through `usvg`/`resvg`.
///
/// Relative image references resolve against `resources_dir`. Fonts come from the system plus
/// any `.ttf`/`.otf`/`.ttc` files in `resources_dir` and its `fonts/` subdirectory.
#[derive(Clone, Debug)]
pub struct Rasterizer {
    resources_dir: Option<PathBuf>,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    /// Rasterizer resolving relative image references against `resources_dir`.
    pub fn new(resources_dir: Option<PathBuf>) -> Self {
        let fontdb = build_fontdb(resources_dir.as_deref());
        Self {
            resources_dir,
            fontdb,
        }
    }

    /// Render a visual tree at its own size.
    #[tracing::instrument(
        skip(self, tree),
        fields(width = tree.size.width, height = tree.size.height)
    )]
    pub fn render_tree(&self, tree: &VisualTree) -> ChainResult<FrameRGBA> {
        self.render_svg(&tree_to_svg(tree))
    }

    /// Render SVG text at its intrinsic size.
    pub fn render_svg(&self, svg: &str) -> ChainResult<FrameRGBA> {
        let opts = usvg::Options {
            resources_dir: self.resources_dir.clone(),
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| ChainError::render(format!("parse svg tree: {e}")))?;

        let (width, height) = raster_size(&tree)?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| ChainError::render("failed to allocate pixmap"))?;
        resvg::render(
            &tree,
            resvg::tiny_skia::Transform::identity(),
            &mut pixmap.as_mut(),
        );
        tracing::debug!(width, height, "frame rasterized");

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(None)
    }
}

fn raster_size(tree: &usvg::Tree) -> ChainResult<(u32, u32)> {
    fn to_px(v: f32) -> ChainResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ChainError::render("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let w = to_px(size.width())?;
    let h = to_px(size.height())?;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(ChainError::render(format!(
            "raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }
    Ok((w, h))
}

fn build_fontdb(resources_dir: Option<&Path>) -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if let Some(dir) = resources_dir {
        load_fonts_from_dir(&mut db, dir);
        load_fonts_from_dir(&mut db, &dir.join("fonts"));
    }
    Arc::new(db)
}

fn load_fonts_from_dir(db: &mut usvg::fontdb::Database, dir: &Path) {
    let Ok(rd) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in rd.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            continue;
        };
        let ext = ext.to_ascii_lowercase();
        if ext != "ttf" && ext != "otf" && ext != "ttc" {
            continue;
        }
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "font not loaded");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;

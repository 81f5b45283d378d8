use anyhow::Context as _;

use crate::{
    foundation::core::Canvas,
    foundation::error::{GalaxiaError, GalaxiaResult},
    scene::assemble::Scene,
};

/// Largest preview edge, in pixels.
const MAX_DIM: u32 = 16_384;

/// Straight (non-premultiplied) RGBA8 raster of a scene's first frame.
#[derive(Clone, Debug)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Rasterize the static state of `scene` (animations at their base values) at `scale`.
pub fn rasterize_scene(scene: &Scene, scale: u32) -> GalaxiaResult<PreviewImage> {
    if scale == 0 {
        return Err(GalaxiaError::validation("preview scale must be > 0"));
    }
    let Canvas { width, height } = scene.canvas();
    let w = width.saturating_mul(scale);
    let h = height.saturating_mul(scale);
    if w == 0 || h == 0 || w > MAX_DIM || h > MAX_DIM {
        return Err(GalaxiaError::render(format!(
            "preview size {w}x{h} out of range (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    let opts = usvg::Options {
        fontdb: std::sync::Arc::new(fontdb),
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(scene.document().as_bytes(), &opts)
        .context("parse scene document")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| GalaxiaError::render("failed to allocate preview pixmap"))?;
    let s = scale as f32;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(s, s),
        &mut pixmap.as_mut(),
    );

    let mut data = pixmap.take();
    unpremultiply_rgba8_in_place(&mut data);
    Ok(PreviewImage {
        width: w,
        height: h,
        data,
    })
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;

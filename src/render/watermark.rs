use crate::assets::font::{FontResource, TextBrush, TextShaper};
use crate::config::model::WatermarkConfig;
use crate::foundation::core::{Affine, CanvasSize};
use crate::foundation::error::CoverResult;
use crate::render::surface::{Painter, Surface};
use crate::render::text::{PlacedLine, fill_lines};

/// Slant of the synthesized italic, in degrees.
pub const WATERMARK_OBLIQUE_DEG: f64 = 12.0;

/// Label-local to canvas transform.
///
/// Label space has its baseline on `y = 0` and its advance ending at `x = 0`; the oblique skew
/// pivots on that anchor so the right end stays pinned to the corner margin.
pub(crate) fn watermark_transform(cfg: &WatermarkConfig, canvas: CanvasSize) -> Affine {
    let anchor = cfg.anchor(canvas);
    let slant = -WATERMARK_OBLIQUE_DEG.to_radians().tan();
    Affine::translate(anchor.to_vec2()) * Affine::skew(slant, 0.0)
}

/// Collapse line breaks so the label shapes as one line; blank lines are dropped.
pub(crate) fn single_line_label(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Paint the watermark label right-aligned at the bottom-right corner.
///
/// Empty text or a missing font leaves the layer empty.
pub(crate) fn render_watermark(
    surface: &mut Surface,
    cfg: &WatermarkConfig,
    font: Option<&FontResource>,
    font_size_px: f64,
    shaper: &mut TextShaper,
    painter: &mut Painter,
    max_pixels: u64,
) -> CoverResult<()> {
    surface.clear();
    let Some(font) = font else {
        return Ok(());
    };
    let label = single_line_label(&cfg.text);
    if label.is_empty() || cfg.color.a == 0 {
        return Ok(());
    }

    let shaped = shaper.shape_line(&label, font, font_size_px as f32, TextBrush::from(cfg.color))?;
    let line = PlacedLine {
        x: -shaped.width,
        baseline: 0.0,
        shaped,
    };

    let canvas = surface.size();
    let transform = watermark_transform(cfg, canvas);
    let label_px = painter.paint(canvas.width, canvas.height, max_pixels, |ctx| {
        fill_lines(ctx, font, std::slice::from_ref(&line), cfg.color, transform);
        Ok(())
    })?;
    surface.data_mut().copy_from_slice(label_px.data_as_u8_slice());
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/watermark.rs"]
mod tests;

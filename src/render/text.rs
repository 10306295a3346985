use crate::assets::font::{FontResource, ShapedLine, TextBrush, TextShaper};
use crate::config::model::TextConfig;
use crate::effects::shadow::apply_drop_shadow;
use crate::foundation::core::{Affine, Color, Vec2};
use crate::foundation::error::CoverResult;
use crate::render::surface::{Painter, Surface, affine_to_cpu};

/// Baseline y of every line of a block centered vertically on `center_y`.
///
/// The first baseline sits at `center_y - total/2 + line_height/2`; each following line advances
/// by `line_height`.
pub fn line_baselines(center_y: f64, line_height: f64, line_count: usize) -> Vec<f64> {
    let total = line_height * line_count as f64;
    let first = center_y - total / 2.0 + line_height / 2.0;
    (0..line_count)
        .map(|i| first + line_height * i as f64)
        .collect()
}

/// One shaped line positioned on the canvas.
pub(crate) struct PlacedLine {
    pub(crate) shaped: ShapedLine,
    /// Left edge of the line's advance box.
    pub(crate) x: f64,
    pub(crate) baseline: f64,
}

/// Draw positioned glyph runs with a single solid color under `transform`.
pub(crate) fn fill_lines(
    ctx: &mut vello_cpu::RenderContext,
    font: &FontResource,
    lines: &[PlacedLine],
    color: Color,
    transform: Affine,
) {
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(color.to_cpu());
    for line in lines {
        for layout_line in line.shaped.layout.lines() {
            for item in layout_line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let dx = line.x as f32;
                let dy = line.baseline as f32 - run.baseline();
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x + dx,
                    y: g.y + dy,
                });
                ctx.glyph_run(font.data())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }
}

/// Paint the text layer: each line centered on `center.x`, plus the optional extrusion shadow.
///
/// Without a font the layer stays empty.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_text(
    surface: &mut Surface,
    text: &TextConfig,
    font: Option<&FontResource>,
    shaper: &mut TextShaper,
    painter: &mut Painter,
    max_pixels: u64,
    extrusion_color: Color,
) -> CoverResult<()> {
    surface.clear();
    let Some(font) = font else {
        return Ok(());
    };
    if text.lines.iter().all(|l| l.is_empty()) {
        return Ok(());
    }

    let baselines = line_baselines(text.center.y, text.line_height(), text.lines.len());
    let mut placed = Vec::with_capacity(text.lines.len());
    for (line, baseline) in text.lines.iter().zip(baselines) {
        if line.is_empty() {
            continue;
        }
        let shaped = shaper.shape_line(
            line,
            font,
            text.font_size_px as f32,
            TextBrush::from(text.color),
        )?;
        let x = text.center.x - shaped.width / 2.0;
        placed.push(PlacedLine {
            shaped,
            x,
            baseline,
        });
    }

    let (w, h) = (surface.width(), surface.height());
    let glyphs = painter.paint(w, h, max_pixels, |ctx| {
        fill_lines(ctx, font, &placed, text.color, Affine::IDENTITY);
        Ok(())
    })?;

    let dst = surface.data_mut();
    dst.copy_from_slice(glyphs.data_as_u8_slice());
    let depth = text.extrusion_depth_px;
    if depth > 0.0 {
        apply_drop_shadow(
            dst,
            w,
            h,
            extrusion_color,
            depth * 0.5,
            Vec2::new(depth, depth),
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;

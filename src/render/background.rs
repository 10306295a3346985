use crate::assets::decode::ImageResource;
use crate::config::model::BackgroundConfig;
use crate::effects::blur::gaussian_blur_rgba8_premul;
use crate::effects::composite::{fill_in_place, multiply_fill_in_place, over_in_place};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::CoverResult;
use crate::geometry::fit::cover_fit;
use crate::render::surface::{Painter, Surface, affine_to_cpu};

/// Rasterize `image` scaled to cover `target`, into a fresh `width x height` buffer.
pub(crate) fn paint_image_cover(
    painter: &mut Painter,
    width: u32,
    height: u32,
    max_pixels: u64,
    image: &ImageResource,
    target: Rect,
) -> CoverResult<vello_cpu::Pixmap> {
    let fit = cover_fit(image.size(), target);
    painter.paint(width, height, max_pixels, |ctx| {
        ctx.set_transform(affine_to_cpu(fit.to_affine()));
        ctx.set_paint(image.paint());
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(image.width()),
            f64::from(image.height()),
        ));
        Ok(())
    })
}

/// Paint the background layer: fill color, then the blurred cover-fit photo and its tint.
pub(crate) fn render_background(
    surface: &mut Surface,
    cfg: &BackgroundConfig,
    painter: &mut Painter,
    max_pixels: u64,
) -> CoverResult<()> {
    fill_in_place(surface.data_mut(), cfg.fill_color.to_premul());

    let Some(image) = cfg.image.as_ref() else {
        return Ok(());
    };

    let (w, h) = (surface.width(), surface.height());
    let target = Rect::from_origin_size(Point::ORIGIN, surface.size().to_size());
    let photo = paint_image_cover(painter, w, h, max_pixels, image, target)?;

    if cfg.blur_radius_px > 0.0 {
        let blurred =
            gaussian_blur_rgba8_premul(photo.data_as_u8_slice(), w, h, cfg.blur_radius_px)?;
        over_in_place(surface.data_mut(), &blurred)?;
    } else {
        over_in_place(surface.data_mut(), photo.data_as_u8_slice())?;
    }

    if let Some(tint) = cfg.effective_tint() {
        multiply_fill_in_place(surface.data_mut(), tint.to_premul());
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;

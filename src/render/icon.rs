use std::sync::Arc;

use crate::assets::decode::premul_bytes_to_pixmap;
use crate::config::model::IconConfig;
use crate::effects::composite::over_in_place;
use crate::effects::mask::apply_disc_mask;
use crate::effects::shadow::apply_drop_shadow;
use crate::foundation::core::{Affine, Point, Rect, Size, Vec2};
use crate::foundation::error::CoverResult;
use crate::foundation::math::ceil_px;
use crate::render::background::paint_image_cover;
use crate::render::surface::{Painter, Surface, affine_to_cpu, checked_dims};

/// Emblem-local to canvas transform: rotate around the emblem's own center, then place it.
pub(crate) fn emblem_transform(icon: &IconConfig) -> Affine {
    let half = icon.radius();
    Affine::translate(icon.center.to_vec2())
        * Affine::rotate(icon.rotation_deg.to_radians())
        * Affine::translate(Vec2::new(-half, -half))
}

/// Build the square working surface: ring plate plus the image clipped to the inner disc.
fn paint_emblem(
    icon: &IconConfig,
    painter: &mut Painter,
    max_pixels: u64,
) -> CoverResult<Option<(Vec<u8>, u32)>> {
    let Some(image) = icon.image.as_ref() else {
        return Ok(None);
    };
    let d = icon.diameter_px;
    let side = ceil_px(d);
    checked_dims(side, side, max_pixels)?;
    let center = Point::new(d / 2.0, d / 2.0);

    let mut work = vec![0u8; side as usize * side as usize * 4];

    if icon.ring_thickness_px > 0.0 && icon.ring_color.a > 0 {
        let plate = painter.paint(side, side, max_pixels, |ctx| {
            let circle = vello_cpu::kurbo::Circle::new((center.x, center.y), d / 2.0);
            ctx.set_paint(icon.ring_color.to_cpu());
            ctx.fill_path(&vello_cpu::kurbo::Shape::to_path(&circle, 0.1));
            Ok(())
        })?;
        work.copy_from_slice(plate.data_as_u8_slice());
    }

    let inner = icon.inner_diameter();
    if inner > 0.0 {
        let target = Rect::from_center_size(center, Size::new(inner, inner));
        let photo = paint_image_cover(painter, side, side, max_pixels, image, target)?;
        let mut photo = photo.data_as_u8_slice().to_vec();
        apply_disc_mask(&mut photo, side, side, center, inner / 2.0);
        over_in_place(&mut work, &photo)?;
    }

    Ok(Some((work, side)))
}

/// Paint the icon layer. Without an image the layer stays empty.
pub(crate) fn render_icon(
    surface: &mut Surface,
    icon: &IconConfig,
    painter: &mut Painter,
    max_pixels: u64,
) -> CoverResult<()> {
    surface.clear();
    let Some((work, side)) = paint_emblem(icon, painter, max_pixels)? else {
        return Ok(());
    };

    let emblem = vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(premul_bytes_to_pixmap(&work, side, side)?)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    };
    let (w, h) = (surface.width(), surface.height());
    let placed = painter.paint(w, h, max_pixels, |ctx| {
        ctx.set_transform(affine_to_cpu(emblem_transform(icon)));
        ctx.set_paint(emblem);
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(side),
            f64::from(side),
        ));
        Ok(())
    })?;

    let dst = surface.data_mut();
    dst.copy_from_slice(placed.data_as_u8_slice());
    if icon.shadow.is_visible() {
        apply_drop_shadow(
            dst,
            w,
            h,
            icon.shadow.color,
            icon.shadow.blur_px,
            icon.shadow.offset,
        )?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/icon.rs"]
mod tests;

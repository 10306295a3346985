use crate::foundation::core::Point;
use crate::foundation::math::mul_div255_u8;

/// Anti-aliased coverage of the pixel centered at `(x + 0.5, y + 0.5)` by a disc.
pub(crate) fn disc_coverage(x: u32, y: u32, center: Point, radius: f64) -> f64 {
    if radius <= 0.0 {
        return 0.0;
    }
    let dx = f64::from(x) + 0.5 - center.x;
    let dy = f64::from(y) + 0.5 - center.y;
    let dist = (dx * dx + dy * dy).sqrt();
    (radius - dist + 0.5).clamp(0.0, 1.0)
}

/// Scale every pixel of a premultiplied buffer by its disc coverage (destination-in).
pub(crate) fn apply_disc_mask(buf: &mut [u8], width: u32, height: u32, center: Point, radius: f64) {
    for y in 0..height {
        for x in 0..width {
            let idx = ((y as usize) * (width as usize) + x as usize) * 4;
            let Some(px) = buf.get_mut(idx..idx + 4) else {
                return;
            };
            let cov = disc_coverage(x, y, center, radius);
            if cov >= 1.0 {
                continue;
            }
            let k = (cov * 255.0).round() as u16;
            for c in px.iter_mut() {
                *c = mul_div255_u8(u16::from(*c), k);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mask.rs"]
mod tests;

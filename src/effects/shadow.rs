use crate::effects::blur::{gaussian_blur_rgba8_premul, kernel_radius};
use crate::effects::composite::over;
use crate::foundation::core::{Color, Vec2};
use crate::foundation::error::{CoverError, CoverResult};
use crate::foundation::math::mul_div255_u8;

/// Half-open pixel rectangle `[x0, x1) x [y0, y1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct PixelBox {
    pub(crate) x0: i64,
    pub(crate) y0: i64,
    pub(crate) x1: i64,
    pub(crate) y1: i64,
}

impl PixelBox {
    pub(crate) fn width(self) -> i64 {
        self.x1 - self.x0
    }

    pub(crate) fn height(self) -> i64 {
        self.y1 - self.y0
    }

    pub(crate) fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    fn translate(self, dx: i64, dy: i64) -> Self {
        Self {
            x0: self.x0 + dx,
            y0: self.y0 + dy,
            x1: self.x1 + dx,
            y1: self.y1 + dy,
        }
    }

    fn inflate(self, pad: i64) -> Self {
        Self {
            x0: self.x0 - pad,
            y0: self.y0 - pad,
            x1: self.x1 + pad,
            y1: self.y1 + pad,
        }
    }

    fn intersect(self, other: Self) -> Self {
        Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        }
    }
}

/// Tight bounds of all pixels with non-zero alpha.
pub(crate) fn alpha_bounds(buf: &[u8], width: u32, height: u32) -> Option<PixelBox> {
    let w = width as usize;
    let mut b: Option<PixelBox> = None;
    for (i, px) in buf.chunks_exact(4).enumerate().take(w * height as usize) {
        if px[3] == 0 {
            continue;
        }
        let x = (i % w) as i64;
        let y = (i / w) as i64;
        b = Some(match b {
            None => PixelBox {
                x0: x,
                y0: y,
                x1: x + 1,
                y1: y + 1,
            },
            Some(b) => PixelBox {
                x0: b.x0.min(x),
                y0: b.y0.min(y),
                x1: b.x1.max(x + 1),
                y1: b.y1.max(y + 1),
            },
        });
    }
    b
}

/// Paint a blurred, offset silhouette of `buf`'s alpha underneath its existing content.
///
/// The offset is rounded to whole pixels.
pub(crate) fn apply_drop_shadow(
    buf: &mut [u8],
    width: u32,
    height: u32,
    color: Color,
    blur_sigma: f64,
    offset: Vec2,
) -> CoverResult<()> {
    if buf.len() != width as usize * height as usize * 4 {
        return Err(CoverError::render("drop shadow buffer size mismatch"));
    }
    if color.a == 0 {
        return Ok(());
    }
    let Some(bounds) = alpha_bounds(buf, width, height) else {
        return Ok(());
    };

    let (ox, oy) = (offset.x.round() as i64, offset.y.round() as i64);
    let pad = i64::from(kernel_radius(blur_sigma));
    let canvas = PixelBox {
        x0: 0,
        y0: 0,
        x1: i64::from(width),
        y1: i64::from(height),
    };
    let region = bounds.translate(ox, oy).inflate(pad).intersect(canvas);
    if region.is_empty() {
        return Ok(());
    }

    let rw = region.width() as usize;
    let rh = region.height() as usize;
    let tint = color.to_premul().to_array();
    let w = width as i64;

    let mut shadow = vec![0u8; rw * rh * 4];
    for ry in 0..rh {
        let sy = region.y0 + ry as i64 - oy;
        if sy < 0 || sy >= i64::from(height) {
            continue;
        }
        for rx in 0..rw {
            let sx = region.x0 + rx as i64 - ox;
            if sx < 0 || sx >= w {
                continue;
            }
            let a = buf[((sy * w + sx) as usize) * 4 + 3];
            if a == 0 {
                continue;
            }
            let o = (ry * rw + rx) * 4;
            for c in 0..4 {
                shadow[o + c] = mul_div255_u8(u16::from(tint[c]), u16::from(a));
            }
        }
    }

    let shadow = gaussian_blur_rgba8_premul(&shadow, rw as u32, rh as u32, blur_sigma)?;

    for ry in 0..rh {
        let y = region.y0 + ry as i64;
        for rx in 0..rw {
            let s = (ry * rw + rx) * 4;
            if shadow[s + 3] == 0 {
                continue;
            }
            let d = ((y * w + region.x0 + rx as i64) as usize) * 4;
            let top = [buf[d], buf[d + 1], buf[d + 2], buf[d + 3]];
            let under = [shadow[s], shadow[s + 1], shadow[s + 2], shadow[s + 3]];
            buf[d..d + 4].copy_from_slice(&over(under, top));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{CoverError, CoverResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied pixel in `[r, g, b, a]` order.
pub(crate) type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over on premultiplied pixels.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// `dst = src over dst` for two equally sized buffers.
pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> CoverResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(CoverError::render(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite a solid color over every pixel of `dst` with a separable blend function.
///
/// `blend_fn` receives unpremultiplied `(src, dst)` channels in `0..=1`.
pub(crate) fn blend_fill_in_place<F>(dst: &mut [u8], color: Rgba8Premul, blend_fn: F)
where
    F: Fn(f32, f32) -> f32,
{
    let s = color.to_array();
    let sa = f32::from(s[3]) / 255.0;
    if sa <= 0.0 {
        return;
    }
    let sp = [
        f32::from(s[0]) / 255.0,
        f32::from(s[1]) / 255.0,
        f32::from(s[2]) / 255.0,
    ];
    let sc = sp.map(|c| (c / sa).clamp(0.0, 1.0));

    for d in dst.chunks_exact_mut(4) {
        // out_a = sa + da * (1 - sa)
        // out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da
        let da = f32::from(d[3]) / 255.0;
        let out_a = (sa + da * (1.0 - sa)).clamp(0.0, 1.0);
        for i in 0..3 {
            let dp = f32::from(d[i]) / 255.0;
            let dc = if da > 0.0 {
                (dp / da).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let b = blend_fn(sc[i], dc).clamp(0.0, 1.0);
            let out_p = (sp[i] * (1.0 - da) + dp * (1.0 - sa) + b * sa * da).clamp(0.0, out_a);
            d[i] = (out_p * 255.0).round() as u8;
        }
        d[3] = (out_a * 255.0).round() as u8;
    }
}

/// Multiply blend of a solid tint over `dst`.
pub(crate) fn multiply_fill_in_place(dst: &mut [u8], color: Rgba8Premul) {
    blend_fill_in_place(dst, color, |s, d| s * d);
}

/// Fill every pixel with one premultiplied color.
pub(crate) fn fill_in_place(dst: &mut [u8], color: Rgba8Premul) {
    let px = color.to_array();
    for d in dst.chunks_exact_mut(4) {
        d.copy_from_slice(&px);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;

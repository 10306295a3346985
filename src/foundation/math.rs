pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// Clamp `v` into `[lo, hi]`; collapses to the midpoint when the range is inverted.
///
/// Inverted ranges happen when an element is larger than the canvas it is clamped to.
pub(crate) fn clamp_or_mid(v: f64, lo: f64, hi: f64) -> f64 {
    if lo > hi {
        return (lo + hi) / 2.0;
    }
    v.clamp(lo, hi)
}

/// Round a floating extent up to whole pixels, at least one.
pub(crate) fn ceil_px(v: f64) -> u32 {
    if !v.is_finite() || v <= 1.0 {
        return 1;
    }
    v.ceil().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;

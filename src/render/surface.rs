use crate::foundation::core::{Affine, CanvasSize};
use crate::foundation::error::{CoverError, CoverResult};

/// Largest surface accepted by default (8192 x 8192).
pub const DEFAULT_MAX_SURFACE_PIXELS: u64 = 8192 * 8192;

/// Validate surface dimensions against the rasterizer limits and the configured pixel budget.
pub(crate) fn checked_dims(width: u32, height: u32, max_pixels: u64) -> CoverResult<(u16, u16)> {
    if width == 0 || height == 0 {
        return Err(CoverError::surface_allocation(width, height, "zero-sized surface"));
    }
    let w: u16 = width
        .try_into()
        .map_err(|_| CoverError::surface_allocation(width, height, "width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CoverError::surface_allocation(width, height, "height exceeds u16"))?;
    let pixels = u64::from(width) * u64::from(height);
    if pixels > max_pixels {
        return Err(CoverError::surface_allocation(
            width,
            height,
            format!("{pixels} pixels exceeds the limit of {max_pixels}"),
        ));
    }
    Ok((w, h))
}

/// Off-screen premultiplied RGBA8 surface owned by one layer renderer (or the compositor).
pub(crate) struct Surface {
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    pub(crate) fn new(size: CanvasSize, max_pixels: u64) -> CoverResult<Self> {
        let (w, h) = checked_dims(size.width, size.height, max_pixels)?;
        Ok(Self {
            pixmap: vello_cpu::Pixmap::new(w, h),
        })
    }

    pub(crate) fn width(&self) -> u32 {
        u32::from(self.pixmap.width())
    }

    pub(crate) fn height(&self) -> u32 {
        u32::from(self.pixmap.height())
    }

    pub(crate) fn size(&self) -> CanvasSize {
        CanvasSize {
            width: self.width(),
            height: self.height(),
        }
    }

    pub(crate) fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        self.pixmap.data_as_u8_slice_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// Reusable `vello_cpu` render context for vector fills, image draws and glyph runs.
#[derive(Default)]
pub(crate) struct Painter {
    ctx: Option<vello_cpu::RenderContext>,
}

impl Painter {
    /// Record draw calls with `f` and rasterize them into a fresh `width x height` buffer.
    pub(crate) fn paint(
        &mut self,
        width: u32,
        height: u32,
        max_pixels: u64,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> CoverResult<()>,
    ) -> CoverResult<vello_cpu::Pixmap> {
        let (w, h) = checked_dims(width, height, max_pixels)?;
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        f(&mut ctx)?;
        ctx.flush();
        let mut out = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut out);
        self.ctx = Some(ctx);
        Ok(out)
    }
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

use std::sync::Arc;

use crate::assets::cache::ContentFingerprint;
use crate::foundation::core::Size;
use crate::foundation::error::{CoverError, CoverResult};

/// Decoded bitmap handle shared by config fields and the image cache.
///
/// Cloning is cheap: the premultiplied pixels live behind an `Arc`d `vello_cpu` pixmap.
#[derive(Clone)]
pub struct ImageResource {
    width: u32,
    height: u32,
    fingerprint: ContentFingerprint,
    paint: vello_cpu::Image,
}

impl ImageResource {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Source extent as floating point.
    pub fn size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }

    /// Fingerprint of the encoded bytes this image was decoded from.
    pub fn fingerprint(&self) -> ContentFingerprint {
        self.fingerprint
    }

    pub(crate) fn paint(&self) -> vello_cpu::Image {
        self.paint.clone()
    }

    #[cfg(test)]
    pub(crate) fn premul_bytes(&self) -> &[u8] {
        match &self.paint.image {
            vello_cpu::ImageSource::Pixmap(p) => p.data_as_u8_slice(),
            _ => &[],
        }
    }
}

impl std::fmt::Debug for ImageResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageResource")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl PartialEq for ImageResource {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
            && self.width == other.width
            && self.height == other.height
    }
}

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied [`ImageResource`].
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8]) -> CoverResult<ImageResource> {
    let fingerprint = ContentFingerprint::of(bytes);
    decode_image_with_fingerprint(bytes, fingerprint)
}

pub(crate) fn decode_image_with_fingerprint(
    bytes: &[u8],
    fingerprint: ContentFingerprint,
) -> CoverResult<ImageResource> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| CoverError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(CoverError::decode("decoded image has zero size"));
    }

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);
    let pixmap = premul_bytes_to_pixmap(&rgba8_premul, width, height)
        .map_err(|e| CoverError::decode(e.to_string()))?;

    Ok(ImageResource {
        width,
        height,
        fingerprint,
        paint: vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        },
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// Wrap tightly packed premultiplied RGBA8 bytes in a `vello_cpu` pixmap.
pub(crate) fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> CoverResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CoverError::render(format!("image width {width} exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CoverError::render(format!("image height {height} exceeds u16")))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(CoverError::render("image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;

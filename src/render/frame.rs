use std::io::Cursor;

use image::ImageEncoder;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{CoverError, CoverResult};

/// A rendered cover in CPU memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Premultiplied RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

/// Encoded export format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Lossless PNG with alpha.
    Png,
    /// JPEG; alpha is flattened onto black.
    Jpeg {
        /// Quality in `1..=100`.
        quality: u8,
    },
}

impl ExportFormat {
    /// Guess the format from a file extension (`png`, `jpg`, `jpeg`).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg { quality: 90 }),
            _ => None,
        }
    }
}

impl FrameRGBA {
    /// Pixel at `(x, y)` in premultiplied `[r, g, b, a]`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy of the pixels with alpha un-premultiplied.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }

    /// Encode the frame for download or upload.
    pub fn encode(&self, format: ExportFormat) -> CoverResult<Vec<u8>> {
        let mut buf = Vec::new();
        match format {
            ExportFormat::Png => {
                let straight = self.to_straight_rgba8();
                image::codecs::png::PngEncoder::new(Cursor::new(&mut buf))
                    .write_image(&straight, self.width, self.height, image::ExtendedColorType::Rgba8)
                    .map_err(|e| CoverError::render(format!("encode png: {e}")))?;
            }
            ExportFormat::Jpeg { quality } => {
                // Premultiplied color over black is the flattened straight color.
                let rgb: Vec<u8> = self
                    .data
                    .chunks_exact(4)
                    .flat_map(|px| [px[0], px[1], px[2]])
                    .collect();
                image::codecs::jpeg::JpegEncoder::new_with_quality(
                    Cursor::new(&mut buf),
                    quality.clamp(1, 100),
                )
                .write_image(&rgb, self.width, self.height, image::ExtendedColorType::Rgb8)
                .map_err(|e| CoverError::render(format!("encode jpeg: {e}")))?;
            }
        }
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;

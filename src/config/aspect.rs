use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::CanvasSize;
use crate::foundation::error::{CoverError, CoverResult};

/// Supported cover aspect ratios plus an explicit custom size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AspectRatio {
    /// 2:1 blog header, 1200x600.
    Wide2x1,
    /// 16:9 video thumbnail, 1200x675.
    Wide16x9,
    /// 4:3 slide, 1200x900.
    Classic4x3,
    /// 3:2 photo, 1200x800.
    Photo3x2,
    /// 1:1 social post, 1000x1000.
    Square,
    /// 3:4 portrait card, 900x1200.
    Portrait3x4,
    /// Any other raster size.
    Custom {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl AspectRatio {
    /// The fixed ratios, in menu order.
    pub const PRESETS: [AspectRatio; 6] = [
        AspectRatio::Wide2x1,
        AspectRatio::Wide16x9,
        AspectRatio::Classic4x3,
        AspectRatio::Photo3x2,
        AspectRatio::Square,
        AspectRatio::Portrait3x4,
    ];

    /// Raster size used for this ratio.
    pub fn size(self) -> CoverResult<CanvasSize> {
        match self {
            AspectRatio::Wide2x1 => CanvasSize::new(1200, 600),
            AspectRatio::Wide16x9 => CanvasSize::new(1200, 675),
            AspectRatio::Classic4x3 => CanvasSize::new(1200, 900),
            AspectRatio::Photo3x2 => CanvasSize::new(1200, 800),
            AspectRatio::Square => CanvasSize::new(1000, 1000),
            AspectRatio::Portrait3x4 => CanvasSize::new(900, 1200),
            AspectRatio::Custom { width, height } => CanvasSize::new(width, height),
        }
    }

    /// Short label such as `"16:9"`.
    pub fn label(self) -> String {
        match self {
            AspectRatio::Wide2x1 => "2:1".to_string(),
            AspectRatio::Wide16x9 => "16:9".to_string(),
            AspectRatio::Classic4x3 => "4:3".to_string(),
            AspectRatio::Photo3x2 => "3:2".to_string(),
            AspectRatio::Square => "1:1".to_string(),
            AspectRatio::Portrait3x4 => "3:4".to_string(),
            AspectRatio::Custom { width, height } => format!("{width}x{height}"),
        }
    }

    /// Preset matching `size` exactly, or a custom ratio.
    pub fn for_size(size: CanvasSize) -> Self {
        Self::PRESETS
            .into_iter()
            .find(|r| r.size().ok() == Some(size))
            .unwrap_or(AspectRatio::Custom {
                width: size.width,
                height: size.height,
            })
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for AspectRatio {
    type Err = CoverError;

    /// Accepts preset labels (`"16:9"`), `"square"`, or a custom `"WIDTHxHEIGHT"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s == "square" {
            return Ok(AspectRatio::Square);
        }
        if let Some(r) = Self::PRESETS.into_iter().find(|r| r.label() == s) {
            return Ok(r);
        }
        let Some((w, h)) = s.split_once('x') else {
            return Err(CoverError::validation(format!(
                "unknown aspect ratio '{s}' (expected 2:1, 16:9, 4:3, 3:2, 1:1, 3:4 or WxH)"
            )));
        };
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| CoverError::validation(format!("invalid custom size '{s}': {e}")))
        };
        let size = CanvasSize::new(parse(w)?, parse(h)?)?;
        Ok(AspectRatio::Custom {
            width: size.width,
            height: size.height,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/aspect.rs"]
mod tests;

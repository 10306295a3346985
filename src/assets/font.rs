use std::collections::HashMap;
use std::path::Path;

use crate::assets::cache::ContentFingerprint;
use crate::foundation::core::Color;
use crate::foundation::error::{CoverError, CoverResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley layouts.
pub(crate) struct TextBrush {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

impl From<Color> for TextBrush {
    fn from(c: Color) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// A registered font face used by the text and watermark layers.
#[derive(Clone)]
pub struct FontResource {
    family: String,
    fingerprint: ContentFingerprint,
    data: vello_cpu::peniko::FontData,
}

impl FontResource {
    /// Family name resolved from the font tables.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Fingerprint of the font file bytes.
    pub fn fingerprint(&self) -> ContentFingerprint {
        self.fingerprint
    }

    pub(crate) fn data(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }
}

impl std::fmt::Debug for FontResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontResource")
            .field("family", &self.family)
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}

impl PartialEq for FontResource {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint
    }
}

/// Shaped single line of text plus its advance width.
pub(crate) struct ShapedLine {
    pub(crate) layout: parley::Layout<TextBrush>,
    pub(crate) width: f64,
}

/// Stateful Parley wrapper: owns the font and layout contexts and remembers registered faces.
pub(crate) struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    families: HashMap<ContentFingerprint, String>,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub(crate) fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            families: HashMap::new(),
        }
    }

    /// Register font bytes (TTF/OTF) and return a handle to the first family they contain.
    #[tracing::instrument(skip(self, bytes), fields(len = bytes.len()))]
    pub(crate) fn load_font(&mut self, bytes: Vec<u8>) -> CoverResult<FontResource> {
        if bytes.is_empty() {
            return Err(CoverError::decode("font bytes are empty"));
        }
        let fingerprint = ContentFingerprint::of(&bytes);

        let family = match self.families.get(&fingerprint) {
            Some(f) => f.clone(),
            None => {
                let families = self
                    .font_ctx
                    .collection
                    .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
                let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                    CoverError::decode("no font families registered from font bytes")
                })?;
                let name = self
                    .font_ctx
                    .collection
                    .family_name(family_id)
                    .ok_or_else(|| CoverError::decode("registered font family has no name"))?
                    .to_string();
                tracing::debug!(family = %name, "registered font");
                self.families.insert(fingerprint, name.clone());
                name
            }
        };

        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(FontResource {
            family,
            fingerprint,
            data,
        })
    }

    /// Read and register a font file from disk.
    pub(crate) fn load_font_path(&mut self, path: &Path) -> CoverResult<FontResource> {
        let bytes = std::fs::read(path).map_err(|e| {
            CoverError::decode(format!("read font '{}': {e}", path.display()))
        })?;
        self.load_font(bytes)
    }

    /// Shape one unwrapped line.
    pub(crate) fn shape_line(
        &mut self,
        text: &str,
        font: &FontResource,
        size_px: f32,
        brush: TextBrush,
    ) -> CoverResult<ShapedLine> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CoverError::validation("font size must be finite and > 0"));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(font.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        let width = f64::from(layout.width());
        Ok(ShapedLine { layout, width })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;

use crate::effects::composite::over_in_place;
use crate::foundation::core::CanvasSize;
use crate::foundation::error::CoverResult;
use crate::render::layer::Layer;
use crate::render::surface::Surface;

/// The four off-screen layer surfaces, all sized to the canvas.
#[derive(Debug)]
pub(crate) struct LayerSurfaces {
    background: Surface,
    icon: Surface,
    text: Surface,
    watermark: Surface,
}

impl LayerSurfaces {
    pub(crate) fn new(size: CanvasSize, max_pixels: u64) -> CoverResult<Self> {
        Ok(Self {
            background: Surface::new(size, max_pixels)?,
            icon: Surface::new(size, max_pixels)?,
            text: Surface::new(size, max_pixels)?,
            watermark: Surface::new(size, max_pixels)?,
        })
    }

    pub(crate) fn get(&self, layer: Layer) -> &Surface {
        match layer {
            Layer::Background => &self.background,
            Layer::Icon => &self.icon,
            Layer::Text => &self.text,
            Layer::Watermark => &self.watermark,
        }
    }

    pub(crate) fn get_mut(&mut self, layer: Layer) -> &mut Surface {
        match layer {
            Layer::Background => &mut self.background,
            Layer::Icon => &mut self.icon,
            Layer::Text => &mut self.text,
            Layer::Watermark => &mut self.watermark,
        }
    }
}

/// Clear `visible` and blit every layer onto it, bottom to top in [`Layer::Z_ORDER`].
pub(crate) fn composite(visible: &mut Surface, layers: &LayerSurfaces) -> CoverResult<()> {
    visible.clear();
    for layer in Layer::Z_ORDER {
        over_in_place(visible.data_mut(), layers.get(layer).data())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;

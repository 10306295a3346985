use std::fmt;

/// One independently rendered off-screen surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    /// Photo or fill color.
    Background,
    /// Circular emblem.
    Icon,
    /// Title text.
    Text,
    /// Corner label.
    Watermark,
}

impl Layer {
    /// All layers in compositing order, bottom to top.
    ///
    /// Text sits beneath the icon so an emblem dragged over the title occludes it; the watermark
    /// is always the top-most layer.
    pub const Z_ORDER: [Layer; 4] = [Layer::Background, Layer::Text, Layer::Icon, Layer::Watermark];

    fn bit(self) -> u8 {
        match self {
            Layer::Background => 1 << 0,
            Layer::Icon => 1 << 1,
            Layer::Text => 1 << 2,
            Layer::Watermark => 1 << 3,
        }
    }
}

/// Small set of layers, used for dirty tracking and redraw reports.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LayerSet(u8);

impl LayerSet {
    /// No layers.
    pub const EMPTY: Self = Self(0);
    /// Every layer.
    pub const ALL: Self = Self(0b1111);

    /// Set holding a single layer.
    pub fn only(layer: Layer) -> Self {
        Self(layer.bit())
    }

    /// Whether `layer` is in the set.
    pub fn contains(self, layer: Layer) -> bool {
        self.0 & layer.bit() != 0
    }

    /// Add `layer` to the set.
    pub fn insert(&mut self, layer: Layer) {
        self.0 |= layer.bit();
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of layers in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Members in compositing order.
    pub fn iter(self) -> impl Iterator<Item = Layer> {
        Layer::Z_ORDER.into_iter().filter(move |l| self.contains(*l))
    }
}

impl std::ops::BitOr for LayerSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for LayerSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl From<Layer> for LayerSet {
    fn from(layer: Layer) -> Self {
        Self::only(layer)
    }
}

impl fmt::Debug for LayerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/layer.rs"]
mod tests;

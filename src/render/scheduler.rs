use crate::render::layer::{Layer, LayerSet};

/// What a [`crate::CoverEngine::flush`] call actually did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlushReport {
    /// Layers re-rendered in this pass.
    pub redrawn: LayerSet,
    /// Whether the visible surface was recomposited.
    pub composited: bool,
}

impl FlushReport {
    /// Whether the flush was a no-op.
    pub fn is_noop(&self) -> bool {
        self.redrawn.is_empty() && !self.composited
    }
}

/// Per-layer dirty flags plus a compose flag.
///
/// Updates only mark; the engine drains the flags once per tick so several changes in the same
/// event coalesce into a single redraw of each affected layer.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct RedrawScheduler {
    dirty: LayerSet,
    compose: bool,
}

impl RedrawScheduler {
    /// A scheduler with every layer dirty, used for the first frame and after resizes.
    pub(crate) fn all_dirty() -> Self {
        Self {
            dirty: LayerSet::ALL,
            compose: true,
        }
    }

    pub(crate) fn mark(&mut self, layers: LayerSet) {
        if layers.is_empty() {
            return;
        }
        self.dirty |= layers;
        self.compose = true;
    }

    pub(crate) fn mark_layer(&mut self, layer: Layer) {
        self.mark(layer.into());
    }

    /// Recomposite without re-rendering any layer.
    pub(crate) fn mark_compose(&mut self) {
        self.compose = true;
    }

    pub(crate) fn pending(&self) -> LayerSet {
        self.dirty
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.dirty.is_empty() && !self.compose
    }

    /// Drain the flags.
    pub(crate) fn take(&mut self) -> (LayerSet, bool) {
        let out = (self.dirty, self.compose);
        *self = Self::default();
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;

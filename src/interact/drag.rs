//! Direct-manipulation drag state machine.
//!
//! Every pointer move is committed to the configuration immediately; releasing the pointer only
//! ends the session. There is no cancel-and-revert.

use crate::config::model::CanvasConfig;
use crate::foundation::core::{Point, Vec2};
use crate::geometry::hit::{clamp_icon_center, clamp_text_center, is_inside_icon, is_inside_text};
use crate::render::layer::Layer;

/// Element that can be repositioned by dragging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragTarget {
    /// The circular emblem.
    Icon,
    /// The title text block.
    Text,
}

impl DragTarget {
    /// Layer redrawn while this target moves.
    pub fn layer(self) -> Layer {
        match self {
            DragTarget::Icon => Layer::Icon,
            DragTarget::Text => Layer::Text,
        }
    }
}

/// Current drag session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Moving the icon.
    DraggingIcon {
        /// Pointer position minus icon center at pointer-down.
        offset: Vec2,
    },
    /// Moving the text block.
    DraggingText {
        /// Pointer position minus text center at pointer-down.
        offset: Vec2,
    },
}

impl DragState {
    /// Whether no drag is in progress.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    /// Element being dragged, if any.
    pub fn target(&self) -> Option<DragTarget> {
        match self {
            DragState::Idle => None,
            DragState::DraggingIcon { .. } => Some(DragTarget::Icon),
            DragState::DraggingText { .. } => Some(DragTarget::Text),
        }
    }

    /// Grab offset recorded at pointer-down.
    pub fn offset(&self) -> Option<Vec2> {
        match self {
            DragState::Idle => None,
            DragState::DraggingIcon { offset } | DragState::DraggingText { offset } => {
                Some(*offset)
            }
        }
    }
}

/// Live position feedback emitted for every committed move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragFeedback {
    /// Element that moved.
    pub target: DragTarget,
    /// Its new (clamped) center in canvas pixels.
    pub center: Point,
}

#[derive(Debug, Default)]
pub(crate) struct DragController {
    state: DragState,
}

impl DragController {
    pub(crate) fn state(&self) -> DragState {
        self.state
    }

    /// Start a session if `p` hits the icon (checked first) or the text block.
    pub(crate) fn pointer_down(&mut self, p: Point, cfg: &CanvasConfig) -> Option<DragTarget> {
        self.state = if is_inside_icon(p, &cfg.icon) {
            DragState::DraggingIcon {
                offset: p - cfg.icon.center,
            }
        } else if is_inside_text(p, &cfg.text) {
            DragState::DraggingText {
                offset: p - cfg.text.center,
            }
        } else {
            DragState::Idle
        };
        let target = self.state.target();
        if let Some(t) = target {
            tracing::debug!(target = ?t, x = p.x, y = p.y, "drag start");
        }
        target
    }

    /// Move the dragged element to `p - offset`, clamped onto the canvas.
    pub(crate) fn pointer_move(&mut self, p: Point, cfg: &mut CanvasConfig) -> Option<DragFeedback> {
        match self.state {
            DragState::Idle => None,
            DragState::DraggingIcon { offset } => {
                let center = clamp_icon_center(p - offset, &cfg.icon, cfg.canvas_size);
                cfg.icon.center = center;
                Some(DragFeedback {
                    target: DragTarget::Icon,
                    center,
                })
            }
            DragState::DraggingText { offset } => {
                let center = clamp_text_center(p - offset, &cfg.text, cfg.canvas_size);
                cfg.text.center = center;
                Some(DragFeedback {
                    target: DragTarget::Text,
                    center,
                })
            }
        }
    }

    /// End the session on pointer-up or pointer-leave.
    pub(crate) fn release(&mut self) -> Option<DragTarget> {
        let ended = self.state.target();
        if let Some(t) = ended {
            tracing::debug!(target = ?t, "drag end");
        }
        self.state = DragState::Idle;
        ended
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/drag.rs"]
mod tests;

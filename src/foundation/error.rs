/// Convenience result type used across coverkit.
pub type CoverResult<T> = Result<T, CoverError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum CoverError {
    /// Invalid user-provided configuration, presets or resources.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image source could not be read or decoded.
    ///
    /// Decode failures are recoverable: the engine reports them through
    /// [`crate::LoadOutcome::Failed`] and keeps rendering.
    #[error("decode error: {0}")]
    Decode(String),

    /// An off-screen surface could not be allocated for a render pass.
    #[error("surface allocation error: {width}x{height}: {reason}")]
    SurfaceAllocation {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
        /// Why the allocation was refused.
        reason: String,
    },

    /// Inconsistent buffers or sizes inside a render pass.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoverError {
    /// Build a [`CoverError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CoverError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CoverError::SurfaceAllocation`] value.
    pub fn surface_allocation(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::SurfaceAllocation {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Build a [`CoverError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CoverError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error is a recoverable decode failure rather than a fatal render failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Result type used across scrollfx.
pub type ScrollFxResult<T> = Result<T, ScrollFxError>;

/// Errors raised while loading and validating configs, layouts and timelines.
///
/// Runtime problems on a live page (missing elements, unmeasurable geometry) are not errors:
/// the engine goes inert or pauses instead.
#[derive(thiserror::Error, Debug)]
pub enum ScrollFxError {
    /// Values that parse but break an invariant (non-finite params, unsorted timelines).
    #[error("validation error: {0}")]
    Validation(String),

    /// A config, layout or timeline file that could not be opened.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing JSON documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ScrollFxError {
    /// Build a [`ScrollFxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ScrollFxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`ScrollFxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ScrollFxError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

/// Convenience result type used across luxfx.
pub type LuxResult<T> = Result<T, LuxError>;

/// Top-level error taxonomy used by the scheduler, frame loop and page APIs.
#[derive(thiserror::Error, Debug)]
pub enum LuxError {
    /// Invalid caller-provided values (viewport, frame rate, element indices).
    #[error("validation error: {0}")]
    Validation(String),

    /// Misuse of the scheduler or a frame source, e.g. a re-entrant tick or a double request.
    #[error("scheduler error: {0}")]
    Scheduler(String),

    /// A page config field outside its allowed range.
    #[error("config error: {0}")]
    Config(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or callbacks.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LuxError {
    /// Build a [`LuxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LuxError::Scheduler`] value.
    pub fn scheduler(msg: impl Into<String>) -> Self {
        Self::Scheduler(msg.into())
    }

    /// Build a [`LuxError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LuxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LuxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

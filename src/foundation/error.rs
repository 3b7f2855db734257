/// Convenience result type used across farmjob.
pub type FarmResult<T> = Result<T, FarmError>;

/// Top-level error taxonomy used by the assembly and submission APIs.
#[derive(thiserror::Error, Debug)]
pub enum FarmError {
    /// Missing required layer input or an unrecognized layer/engine type.
    #[error("validation error: {0}")]
    Validation(String),

    /// Invalid or unreadable submit configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The submission interface rejected or failed to launch the job.
    #[error("submission error: {0}")]
    Submission(String),

    /// Errors when serializing or deserializing job descriptors.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FarmError {
    /// Build a [`FarmError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FarmError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`FarmError::Submission`] value.
    pub fn submission(msg: impl Into<String>) -> Self {
        Self::Submission(msg.into())
    }

    /// Build a [`FarmError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether this error came out of command building or layer validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

use thiserror::Error;

/// Failures surfaced by the chance engine.
///
/// Impossible draws (`k > n`, an exact split that cannot happen) are not
/// errors; they flow through the arithmetic as zero probability.
#[derive(Error, Debug)]
pub enum ChanceError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Resource limit exceeded: {message}")]
    ResourceLimit { message: String },

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl ChanceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ChanceError::InvalidArgument { message: message.into() }
    }

    pub fn limit(message: impl Into<String>) -> Self {
        ChanceError::ResourceLimit { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, ChanceError>;

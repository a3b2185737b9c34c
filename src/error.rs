use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolveError>;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SolveError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        SolveError::Parse(message.into())
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        SolveError::Validation(message.into())
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// A record is missing a required field, carries an out-of-range value,
    /// or names a task outside the recognized set.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The reference has no tokens after normalization, so an overlap
    /// metric has no denominator.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Sink error: {0}")]
    Sink(String),
}

impl CoreError {
    /// Errors that cost one record rather than the whole batch.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CoreError::Schema(_) | CoreError::DegenerateInput(_))
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(err: validator::ValidationErrors) -> Self {
        CoreError::Validation(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        CoreError::Sink(err.to_string())
    }
}

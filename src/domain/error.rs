use thiserror::Error;

/// Failures surfaced to the person using the app.
///
/// Every variant except `Internal` is recoverable: the submission is blocked
/// and nothing is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    /// The message without the variant prefix, as shown in the UI.
    pub fn user_message(&self) -> &str {
        match self {
            DomainError::Validation(msg)
            | DomainError::Unauthorized(msg)
            | DomainError::NotFound(msg)
            | DomainError::Internal(msg) => msg,
        }
    }
}

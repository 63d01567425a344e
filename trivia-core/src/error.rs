/// Error types for trivia-core operations.
///
/// Running out of quiz questions is not an error; see
/// [`QuizSelection::Exhausted`](crate::quiz::QuizSelection::Exhausted).
use thiserror::Error;

/// Main error type for trivia-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    /// Required field missing or malformed
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Referenced record does not exist, or a page lies past the end
    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },
}

/// Result type alias for trivia-core operations
pub type Result<T> = std::result::Result<T, TriviaError>;

impl TriviaError {
    /// Create an invalid input error
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

//! Error types for the order builder library.

use thiserror::Error;

use crate::services::chat::ChatError;

/// Comprehensive error type for all order builder operations.
#[derive(Error, Debug)]
pub enum OrderError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Audio capture or session lifecycle errors
    #[error("Audio error: {message}")]
    Audio { message: String },
    /// Voice interpretation call failed (network or API failure)
    #[error("Voice interpretation failed: {source}")]
    Interpretation {
        #[source]
        source: ChatError,
    },
    /// Voice interpretation returned content that is not valid JSON
    #[error("Voice interpretation returned unparseable content: {source}")]
    InterpretationFormat {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> OrderError {
        OrderError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl OrderError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an audio session error.
    pub fn audio(message: impl Into<String>) -> Self {
        OrderError::Audio {
            message: message.into(),
        }
    }
}

impl From<ChatError> for OrderError {
    fn from(source: ChatError) -> Self {
        OrderError::Interpretation { source }
    }
}

/// Result type alias for order builder operations
pub type Result<T> = std::result::Result<T, OrderError>;

//! Content store error types.

use thiserror::Error;

/// Errors surfaced by the content store adapter.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum StoreError {
    #[error("network error while querying the store: {message}")]
    Network { message: String },

    #[error("store rejected the request: {message}")]
    Rejected { message: String },

    #[error("failed to decode store response: {message}")]
    Decode { message: String },

    #[error("unexpected store error: {message}")]
    Unexpected { message: String },
}

impl StoreError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a rejected-request error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an unexpected error.
    #[must_use]
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Returns whether retrying the request could help.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Network { .. })
    }
}

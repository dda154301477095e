//! Media host error types.

use thiserror::Error;

/// Errors surfaced by the media host adapter.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum MediaError {
    #[error("network error while talking to the media host: {message}")]
    Network { message: String },

    #[error("media host rejected the upload: {message}")]
    UploadRejected { message: String },

    #[error("failed to decode media host response: {message}")]
    Decode { message: String },

    #[error("unexpected media host error: {message}")]
    Unexpected { message: String },
}

impl MediaError {
    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an upload-rejected error.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::UploadRejected {
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
}

//! Error taxonomy for backend calls.
//!
//! Every failure (transport, non-2xx status, undecodable body) collapses to
//! one generic human-readable message per call. No status code or payload
//! detail survives past this boundary; the details go to the tracing log and
//! the UI shows the message as-is.

use thiserror::Error;

/// What went wrong talking to the backend.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// Login or register failed.
    #[error("{0}")]
    Auth(String),
    /// Reading the favorites list failed.
    #[error("{0}")]
    Fetch(String),
    /// Create, update, or delete failed.
    #[error("{0}")]
    Write(String),
}

impl ApiError {
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch(message.into())
    }

    pub fn write(message: impl Into<String>) -> Self {
        Self::Write(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_bare_message() {
        assert_eq!(ApiError::auth("Login failed").to_string(), "Login failed");
        assert_eq!(
            ApiError::write("Failed to delete favorite").to_string(),
            "Failed to delete favorite"
        );
    }
}

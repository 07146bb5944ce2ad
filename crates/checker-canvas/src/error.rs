//! Gateway error types.

use thiserror::Error;

/// Errors that can occur when talking to the Canvas API.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// HTTP transport error (connection, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Canvas returned a non-success status code.
    #[error("Canvas API error ({status}): {body}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by Canvas.
        body: String,
    },

    /// A success response whose body is not the expected JSON.
    #[error("malformed response from {url}: {reason}")]
    Malformed { url: String, reason: String },

    /// The configured base URL or a path could not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The token cannot be sent as an HTTP header.
    #[error("invalid Canvas token: {0}")]
    InvalidToken(String),
}

impl CanvasError {
    /// Status code of a [`CanvasError::Remote`].
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.status(), Some(404))
    }
}

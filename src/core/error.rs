//! Request errors raised by the portfolio API client

use super::links::LinkHeaderError;

/// Failure of a backend call.
///
/// Never retried; the message ends up in the state slice and the page banner.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Portfolio {0} not found")]
    NotFound(i64),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid pagination header: {0}")]
    Header(#[from] LinkHeaderError),

    #[error("Portfolio has no identifier")]
    MissingId,

    #[error("API is not reachable during server rendering")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::NotFound(_) => Some(404),
            _ => None,
        }
    }
}

//! Error type for the catalog client.

use reqwest::StatusCode;
use thiserror::Error;

/// Everything a catalog call can fail with.
///
/// All variants are user-visible inline text in the views; nothing is retried
/// automatically and nothing is fatal to the app.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No stored credential; the call was never sent.
    #[error("Session token is missing. Please login.")]
    MissingCredential,

    /// The service rejected the credential (HTTP 401).
    #[error("Unauthorized. Please login again.")]
    Unauthorized,

    /// Any other non-success status.
    #[error("Request failed. HTTP status: {status}")]
    RequestFailed { status: u16 },

    /// The request never completed (network failure, malformed response).
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// Map a non-success HTTP status to the matching error variant.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized
        } else {
            ApiError::RequestFailed {
                status: status.as_u16(),
            }
        }
    }

    /// Whether the user should be sent back to the login view.
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::MissingCredential | ApiError::Unauthorized)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Request-pipeline error taxonomy.

use thiserror::Error;

use crate::session::SessionError;

/// Terminal failure of a single API call. None of these are retried further.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure; no response was obtained.
    #[error("network error")]
    Network(#[from] reqwest::Error),

    /// No valid session could be established or maintained. Local session
    /// state has already been cleared when this surfaces, and the registered
    /// session-expired hook has fired.
    #[error("authentication expired")]
    AuthExpired(#[source] SessionError),

    /// The server rejected or errored the call for a non-auth reason.
    #[error("request failed with status {status}: {body}")]
    RequestFailed {
        status: u16,
        /// Raw response text, useful for surfacing server messages.
        body: String,
    },

    /// A success response carried a body that did not decode as the expected
    /// type.
    #[error("failed to decode response body")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Status code of a server rejection, when that is what happened.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

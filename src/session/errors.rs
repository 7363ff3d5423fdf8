//! Session and auth-flow errors.

use thiserror::Error;

/// Terminal outcome of a refresh attempt.
///
/// Cloneable because one outcome object is fanned out to every waiter of a
/// single refresh exchange; waiters never recompute it independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No refresh token is stored; no network exchange was attempted.
    #[error("no refresh token available")]
    NoRefreshToken,

    /// The refresh exchange failed; local session state has been cleared.
    #[error("session expired")]
    Expired,
}

/// Errors from the login and registration flows.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials were rejected or transport failed. Deliberately
    /// undifferentiated at this layer.
    #[error("login failed")]
    LoginFailed,

    /// Company self-registration was rejected.
    #[error("company registration failed: {0}")]
    RegistrationFailed(String),
}

//! Session data models.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Access/refresh token pair.
///
/// Always persisted as a single record so a crash between writes can never
/// leave a mismatched pair behind.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    /// A stored pair is only usable when both credentials are non-empty.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.access_token.is_empty() && !self.refresh_token.is_empty()
    }
}

impl fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenPair(**redacted**)")
    }
}

impl Drop for TokenPair {
    fn drop(&mut self) {
        self.access_token.zeroize();
        self.refresh_token.zeroize();
    }
}

/// Role attached to a user account.
///
/// Display-only on the client; authorization is enforced server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Client,
    Warehouse,
    Staff,
    Admin,
}

/// Profile cached at login time for display purposes.
///
/// Replaced wholesale on each login; removed on logout or when the session
/// expires irrecoverably.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub last_login_at: Option<Timestamp>,
    #[serde(default)]
    pub customer_company_id: Option<i64>,
    #[serde(default)]
    pub employee_id: Option<i64>,
}

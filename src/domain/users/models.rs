//! User account models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::session::UserRole;

/// User account in domain form.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login_at: Option<Timestamp>,
    /// Only populated on creation input; the list endpoint does not report
    /// linkage.
    pub customer_company_id: Option<i64>,
    pub employee_id: Option<i64>,
}

/// Payload for creating a user account.
///
/// At most one of `employee_id` / `customer_company_id` should be set; when
/// both are, the employee linkage wins (matching the original client).
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub customer_company_id: Option<i64>,
    pub employee_id: Option<i64>,
}

/// Partial update of a user account; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_company_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
}

/// User row as the list/detail endpoints report it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireUser {
    pub user_id: i64,
    pub email: String,
    pub role: UserRole,
    pub status: String,
    #[serde(default)]
    pub last_login_at: Option<Timestamp>,
}

impl From<WireUser> for UserAccount {
    fn from(wire: WireUser) -> Self {
        Self {
            id: wire.user_id,
            email: wire.email,
            role: wire.role,
            is_active: wire.status == "ACTIVE",
            last_login_at: wire.last_login_at,
            // Linkage is not reported by these endpoints.
            customer_company_id: None,
            employee_id: None,
        }
    }
}

/// The list envelope has been seen with both spellings of the key.
#[derive(Debug, Deserialize)]
pub(crate) struct ListUsersResponse {
    #[serde(alias = "Users")]
    pub users: Vec<WireUser>,
}

/// Creation body in the server's shape: a single `AssignTo` id qualified by
/// an account type.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireNewUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub role: UserRole,
    #[serde(rename = "AssignTo")]
    pub assign_to: i64,
    pub account_type: WireAccountType,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum WireAccountType {
    CustomerCompany,
    Employee,
    Unspecified,
}

impl<'a> WireNewUser<'a> {
    pub(crate) fn from_new_user(user: &'a NewUser) -> Self {
        let (assign_to, account_type) = match (user.employee_id, user.customer_company_id) {
            (Some(employee_id), _) => (employee_id, WireAccountType::Employee),
            (None, Some(company_id)) => (company_id, WireAccountType::CustomerCompany),
            (None, None) => (0, WireAccountType::Unspecified),
        };

        Self {
            email: &user.email,
            password: &user.password,
            role: user.role,
            assign_to,
            account_type,
        }
    }
}

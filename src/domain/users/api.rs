//! User account endpoints.

use serde_json::Value;

use super::models::{ListUsersResponse, NewUser, UserAccount, UserUpdate, WireNewUser, WireUser};
use crate::client::{ApiError, ErpClient};

/// Calls under `/users`.
#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    client: &'a ErpClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a ErpClient) -> Self {
        Self { client }
    }

    /// List user accounts.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn list(&self) -> Result<Vec<UserAccount>, ApiError> {
        let response: ListUsersResponse = self.client.get("/users").await?;
        Ok(response.users.into_iter().map(Into::into).collect())
    }

    /// Fetch one user account.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn get(&self, user_id: i64) -> Result<UserAccount, ApiError> {
        let wire: WireUser = self.client.get(&format!("/users/{user_id}")).await?;
        Ok(wire.into())
    }

    /// Create a user account.
    ///
    /// The server answers 201 with no body, so the returned account echoes
    /// the submitted data with a placeholder `id` of 0; re-list to obtain the
    /// server-assigned id.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn create(&self, user: &NewUser) -> Result<UserAccount, ApiError> {
        let body = WireNewUser::from_new_user(user);
        let _response: Value = self.client.post("/users", &body).await?;

        Ok(UserAccount {
            id: 0,
            email: user.email.clone(),
            role: user.role,
            is_active: true,
            last_login_at: None,
            customer_company_id: user.customer_company_id,
            employee_id: user.employee_id,
        })
    }

    /// Apply a partial update to a user account.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn update(&self, user_id: i64, update: &UserUpdate) -> Result<UserAccount, ApiError> {
        let wire: WireUser = self
            .client
            .patch(&format!("/users/{user_id}"), update)
            .await?;
        Ok(wire.into())
    }

    /// Block a user account.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn block(&self, user_id: i64) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch_empty(&format!("/users/{user_id}/block"))
            .await?;
        Ok(())
    }

    /// Unblock a user account.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn unblock(&self, user_id: i64) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch_empty(&format!("/users/{user_id}/unblock"))
            .await?;
        Ok(())
    }
}

//! Login, logout, registration and profile flows.
//!
//! These deliberately bypass the refresh-aware wrapper: login operates before
//! a session exists, and a freshly minted access token needs no 401 recovery.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    client::{ApiError, ErpClient, check_status, decode_json},
    session::{AuthError, SessionUser, TokenPair},
};

/// How long the best-effort server logout notification may take before it is
/// abandoned.
const LOGOUT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogoutRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Company self-registration payload.
///
/// Registration is a one-shot unauthenticated submission; success means the
/// application is pending verification, not that a session exists.
#[derive(Debug, Clone)]
pub struct RegisterCompany {
    pub name: String,
    pub tax_id: String,
    pub main_email: String,
    pub phone_number: Option<String>,
    pub address: RegisterAddress,
    /// Initial contact user credentials.
    pub user_email: String,
    pub user_password: String,
}

/// Billing address submitted with a company registration.
#[derive(Debug, Clone)]
pub struct RegisterAddress {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterCompanyRequest<'a> {
    name: &'a str,
    tax_id: &'a str,
    main_email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<&'a str>,
    addresses: [RegisterAddressRequest<'a>; 1],
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterAddressRequest<'a> {
    address: &'a str,
    city: &'a str,
    postal_code: &'a str,
    country: &'a str,
    #[serde(rename = "type")]
    kind: &'a str,
}

impl ErpClient {
    /// Exchange credentials for a session.
    ///
    /// The token pair and the `/me` profile are persisted together; if either
    /// step fails, nothing is stored.
    ///
    /// # Errors
    ///
    /// [`AuthError::LoginFailed`], which deliberately does not reveal whether
    /// credentials or transport were at fault.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let tokens = match self.exchange_credentials(email, password).await {
            Ok(tokens) => tokens,
            Err(error) => {
                debug!(%error, "credential exchange failed");
                return Err(AuthError::LoginFailed);
            }
        };

        let user = match self.fetch_profile(&tokens.access_token).await {
            Ok(user) => user,
            Err(error) => {
                debug!(%error, "profile fetch after login failed");
                return Err(AuthError::LoginFailed);
            }
        };

        self.tokens().save(&tokens);
        self.tokens().save_user(&user);

        Ok(user)
    }

    /// End the session.
    ///
    /// The server is notified best-effort with the current refresh token;
    /// local state is cleared unconditionally. This never fails from the
    /// caller's perspective.
    pub async fn logout(&self) {
        if let Some(refresh_token) = self.tokens().refresh_token() {
            let notified = self
                .http()
                .post(self.config().endpoint("/auth/logout"))
                .json(&LogoutRequest {
                    refresh_token: &refresh_token,
                })
                .timeout(LOGOUT_TIMEOUT)
                .send()
                .await;

            if let Err(error) = notified {
                debug!(%error, "server logout notification failed");
            }
        }

        self.tokens().clear();
    }

    /// Submit a company self-registration.
    ///
    /// # Errors
    ///
    /// [`AuthError::RegistrationFailed`] carrying the server's `error` or
    /// `message` field when one is parseable, otherwise the status code.
    pub async fn register_company(&self, payload: &RegisterCompany) -> Result<(), AuthError> {
        let body = RegisterCompanyRequest {
            name: &payload.name,
            tax_id: &payload.tax_id,
            main_email: &payload.main_email,
            phone_number: payload.phone_number.as_deref(),
            addresses: [RegisterAddressRequest {
                address: &payload.address.address,
                city: &payload.address.city,
                postal_code: &payload.address.postal_code,
                country: &payload.address.country,
                kind: "BILLING",
            }],
            email: &payload.user_email,
            password: &payload.user_password,
        };

        let response = self
            .http()
            .post(self.config().endpoint("/auth/register-company"))
            .json(&body)
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "company registration transport failure");
                return Err(AuthError::RegistrationFailed("network error".to_string()));
            }
        };

        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|value| {
                let field = value.get("error").or_else(|| value.get("message"))?;
                field.as_str().map(str::to_string)
            })
            .unwrap_or_else(|| format!("status {status}"));

        Err(AuthError::RegistrationFailed(message))
    }

    /// Change the current user's password.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), ApiError> {
        // The endpoint answers with a confirmation message; discard it.
        let _response: Value = self
            .post(
                "/me/change-password",
                &ChangePasswordRequest {
                    current_password: current,
                    new_password: new,
                },
            )
            .await?;

        Ok(())
    }

    /// Fetch the current profile through the refresh-aware pipeline.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn profile(&self) -> Result<SessionUser, ApiError> {
        self.get("/me").await
    }

    async fn exchange_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<TokenPair, ApiError> {
        let response = self
            .http()
            .post(self.config().endpoint("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let response = check_status(response).await?;
        decode_json(response).await
    }

    async fn fetch_profile(&self, access_token: &str) -> Result<SessionUser, ApiError> {
        let response = self
            .http()
            .get(self.config().endpoint("/me"))
            .bearer_auth(access_token)
            .send()
            .await?;

        let response = check_status(response).await?;
        decode_json(response).await
    }
}

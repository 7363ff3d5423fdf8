//! The authenticated request pipeline.
//!
//! Every call to a protected endpoint passes through [`ErpClient::request`]:
//! it attaches the current access token, sends the request once, and on a 401
//! runs one coordinated token refresh followed by exactly one retry. The retry
//! outcome is final; there is no loop.

mod errors;
mod flows;

pub use errors::ApiError;
pub use flows::{RegisterAddress, RegisterCompany};

use std::{fmt, sync::Arc};

use reqwest::{Client, Method, Response, StatusCode, header::HeaderMap};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;

use crate::{
    config::ApiConfig,
    domain::{
        companies::CompaniesApi, employees::EmployeesApi, invoices::InvoicesApi,
        orders::OrdersApi, products::ProductsApi, users::UsersApi, warehouse::WarehouseApi,
    },
    session::{RefreshCoordinator, SessionError, SessionUser, TokenStore},
    store::KeyValueStore,
};

type ExpiredHook = Box<dyn Fn() + Send + Sync>;

/// Client for the ERP REST API, owning the session token lifecycle.
///
/// Construct one per process and share it; the refresh coordinator inside it
/// is what guarantees at most one refresh exchange is in flight at a time.
pub struct ErpClient {
    config: ApiConfig,
    http: Client,
    tokens: TokenStore,
    refresh: RefreshCoordinator,
    expired_hook: Option<ExpiredHook>,
}

impl fmt::Debug for ErpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErpClient")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

impl ErpClient {
    /// Create a client over the given storage backend.
    #[must_use]
    pub fn new(config: ApiConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let http = Client::new();
        let tokens = TokenStore::new(store);
        let refresh = RefreshCoordinator::new(config.clone(), http.clone(), tokens.clone());

        Self {
            config,
            http,
            tokens,
            refresh,
            expired_hook: None,
        }
    }

    /// Register a callback invoked when a terminal auth failure clears the
    /// session. The hosting application decides how to route the user back to
    /// its unauthenticated entry point.
    pub fn on_session_expired(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.expired_hook = Some(Box::new(hook));
    }

    /// The profile cached at login, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<SessionUser> {
        self.tokens.load_user()
    }

    /// Whether a session user is cached locally. A UX signal, not a security
    /// boundary.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    pub(crate) fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    pub(crate) fn notify_expired(&self) {
        if let Some(hook) = &self.expired_hook {
            hook();
        }
    }

    // --- resource surfaces -------------------------------------------------

    /// Calls under `/orders`.
    #[must_use]
    pub fn orders(&self) -> OrdersApi<'_> {
        OrdersApi::new(self)
    }

    /// Calls under `/invoices` (and invoice creation under `/orders`).
    #[must_use]
    pub fn invoices(&self) -> InvoicesApi<'_> {
        InvoicesApi::new(self)
    }

    /// Calls under `/products`.
    #[must_use]
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Calls under `/warehouse`, including stock movements.
    #[must_use]
    pub fn warehouse(&self) -> WarehouseApi<'_> {
        WarehouseApi::new(self)
    }

    /// Calls under `/companies`.
    #[must_use]
    pub fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }

    /// Calls under `/employees`.
    #[must_use]
    pub fn employees(&self) -> EmployeesApi<'_> {
        EmployeesApi::new(self)
    }

    /// Calls under `/users`.
    #[must_use]
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    // --- request pipeline --------------------------------------------------

    /// Issue a request through the refresh-aware pipeline and decode the JSON
    /// body.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let response = self
            .send_with_refresh(method, path, body.as_ref(), None)
            .await?;
        decode_json(response).await
    }

    /// Same pipeline, raw bytes out (e.g. invoice PDFs). Caller headers are
    /// merged in; the bearer attachment always wins over them.
    pub(crate) async fn request_bytes(
        &self,
        method: Method,
        path: &str,
        headers: HeaderMap,
    ) -> Result<Vec<u8>, ApiError> {
        let response = self
            .send_with_refresh(method, path, None, Some(&headers))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, None).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Decode)?;
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::POST, path, None).await
    }

    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(ApiError::Decode)?;
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub(crate) async fn patch_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::PATCH, path, None).await
    }

    async fn send_with_refresh(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        headers: Option<&HeaderMap>,
    ) -> Result<Response, ApiError> {
        let token = self.tokens.access_token();
        let response = self
            .send_once(method.clone(), path, body, token.as_deref(), headers)
            .await?;

        // Only an *authenticated* 401 triggers recovery; an anonymous 401 is
        // an ordinary rejection.
        if response.status() != StatusCode::UNAUTHORIZED || token.is_none() {
            return check_status(response).await;
        }

        debug!(%path, "access token rejected, refreshing");
        let fresh = match self.refresh.ensure_fresh_access_token().await {
            Ok(fresh) => fresh,
            Err(error) => {
                self.notify_expired();
                return Err(ApiError::AuthExpired(error));
            }
        };

        let retry = self
            .send_once(method, path, body, Some(&fresh), headers)
            .await?;
        if retry.status() == StatusCode::UNAUTHORIZED {
            // One retry is the whole budget; a second 401 ends the session.
            self.tokens.clear();
            self.notify_expired();
            return Err(ApiError::AuthExpired(SessionError::Expired));
        }

        check_status(retry).await
    }

    async fn send_once(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        token: Option<&str>,
        headers: Option<&HeaderMap>,
    ) -> Result<Response, ApiError> {
        let mut request = self.http.request(method, self.config.endpoint(path));

        if let Some(headers) = headers {
            request = request.headers(headers.clone());
        }
        // Attached after caller headers: the bearer cannot be displaced.
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }
}

/// Map non-success statuses to [`ApiError::RequestFailed`].
pub(crate) async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::RequestFailed {
        status: status.as_u16(),
        body,
    })
}

/// Decode a success body. Empty bodies (201/204) decode as JSON `null`, so
/// unit and `Option` targets succeed instead of failing on "no content".
pub(crate) async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    let payload: &[u8] = if bytes.is_empty() { b"null" } else { &bytes };
    serde_json::from_slice(payload).map_err(ApiError::Decode)
}

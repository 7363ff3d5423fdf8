//! Single-flight access-token refresh.

use std::fmt;

use futures::{
    FutureExt,
    future::{BoxFuture, Shared},
};
use reqwest::Client;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{
    config::ApiConfig,
    session::{SessionError, TokenPair, TokenStore},
};

type SharedExchange = Shared<BoxFuture<'static, Result<String, SessionError>>>;

/// Collapses concurrent "my access token was rejected" signals into exactly
/// one outbound refresh exchange and fans its outcome out to every waiter.
///
/// The token pair in the store is only ever replaced by a *completed*
/// successful exchange, so readers never observe a half-updated pair.
pub struct RefreshCoordinator {
    config: ApiConfig,
    http: Client,
    tokens: TokenStore,
    in_flight: Mutex<Option<SharedExchange>>,
}

impl fmt::Debug for RefreshCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RefreshCoordinator")
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshRequest {
    refresh_token: String,
}

impl RefreshCoordinator {
    #[must_use]
    pub fn new(config: ApiConfig, http: Client, tokens: TokenStore) -> Self {
        Self {
            config,
            http,
            tokens,
            in_flight: Mutex::new(None),
        }
    }

    /// Obtain a fresh access token, joining the in-flight exchange when one
    /// exists instead of starting a second one.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoRefreshToken`] when nothing is stored to exchange
    /// (no network call is made), [`SessionError::Expired`] when the exchange
    /// fails. Both clear the local session state before surfacing.
    pub async fn ensure_fresh_access_token(&self) -> Result<String, SessionError> {
        let exchange = {
            let mut slot = self.in_flight.lock().await;
            match slot.as_ref() {
                Some(existing) => existing.clone(),
                None => {
                    let exchange = run_exchange(
                        self.http.clone(),
                        self.config.clone(),
                        self.tokens.clone(),
                    )
                    .boxed()
                    .shared();
                    *slot = Some(exchange.clone());
                    exchange
                }
            }
        };

        let outcome = exchange.await;

        // Retire the slot once its exchange has resolved. A newer, still
        // pending exchange is left alone.
        let mut slot = self.in_flight.lock().await;
        if slot.as_ref().is_some_and(|pending| pending.peek().is_some()) {
            *slot = None;
        }
        drop(slot);

        outcome
    }
}

async fn run_exchange(
    http: Client,
    config: ApiConfig,
    tokens: TokenStore,
) -> Result<String, SessionError> {
    let Some(refresh_token) = tokens.refresh_token() else {
        tokens.clear();
        return Err(SessionError::NoRefreshToken);
    };

    let response = http
        .post(config.endpoint("/auth/refresh-token"))
        .json(&RefreshRequest { refresh_token })
        .send()
        .await;

    let response = match response {
        Ok(response) if response.status().is_success() => response,
        Ok(response) => {
            warn!(status = %response.status(), "token refresh rejected by server");
            tokens.clear();
            return Err(SessionError::Expired);
        }
        Err(error) => {
            warn!(%error, "token refresh transport failure");
            tokens.clear();
            return Err(SessionError::Expired);
        }
    };

    let pair: TokenPair = match response.json().await {
        Ok(pair) => pair,
        Err(error) => {
            warn!(%error, "token refresh returned an unreadable body");
            tokens.clear();
            return Err(SessionError::Expired);
        }
    };

    tokens.save(&pair);
    debug!("access token refreshed");
    Ok(pair.access_token.clone())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn missing_refresh_token_fails_without_a_network_call() {
        // The configured endpoint is unroutable; reaching it would error with
        // a different variant than the one asserted here.
        let config = ApiConfig::new("http://127.0.0.1:9/api/v1");
        let tokens = TokenStore::new(Arc::new(MemoryStore::new()));
        let coordinator = RefreshCoordinator::new(config, Client::new(), tokens.clone());

        let outcome = coordinator.ensure_fresh_access_token().await;

        assert_eq!(outcome, Err(SessionError::NoRefreshToken));
        assert!(tokens.load().is_none());
    }
}

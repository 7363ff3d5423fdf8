//! Persistence of the token pair and the cached session user.

use std::{fmt, sync::Arc};

use tracing::debug;

use crate::{
    session::{SessionUser, TokenPair},
    store::KeyValueStore,
};

/// Storage key holding the serialized token pair.
pub const TOKENS_KEY: &str = "auth_tokens";

/// Storage key holding the cached session user.
pub const USER_KEY: &str = "auth_user";

/// Reads and writes session state through a [`KeyValueStore`].
///
/// Malformed stored data always reads as absent, never as an error; the next
/// login simply starts from a clean slate.
#[derive(Clone)]
pub struct TokenStore {
    store: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenStore")
    }
}

impl TokenStore {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite the stored pair as one serialized record.
    pub fn save(&self, tokens: &TokenPair) {
        if let Ok(serialized) = serde_json::to_string(tokens) {
            self.store.set(TOKENS_KEY, &serialized);
        }
    }

    /// Load the stored pair. Missing, unparsable, or partially empty data
    /// reads as `None`.
    #[must_use]
    pub fn load(&self) -> Option<TokenPair> {
        let raw = self.store.get(TOKENS_KEY)?;
        let pair: TokenPair = serde_json::from_str(&raw).ok()?;
        pair.is_well_formed().then_some(pair)
    }

    /// Current access token, if a well-formed pair is stored.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.load().map(|pair| pair.access_token.clone())
    }

    /// Current refresh token, if a well-formed pair is stored.
    #[must_use]
    pub fn refresh_token(&self) -> Option<String> {
        self.load().map(|pair| pair.refresh_token.clone())
    }

    /// Cache the profile shown in UIs.
    pub fn save_user(&self, user: &SessionUser) {
        if let Ok(serialized) = serde_json::to_string(user) {
            self.store.set(USER_KEY, &serialized);
        }
    }

    /// Load the cached profile; malformed data reads as `None`.
    #[must_use]
    pub fn load_user(&self) -> Option<SessionUser> {
        let raw = self.store.get(USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    /// Remove both the token pair and the cached user. Idempotent.
    pub fn clear(&self) {
        self.store.delete(TOKENS_KEY);
        self.store.delete(USER_KEY);
        debug!("cleared local session state");
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::store::{MemoryStore, MockKeyValueStore};

    fn pair(access: &str, refresh: &str) -> TokenPair {
        TokenPair {
            access_token: access.to_string(),
            refresh_token: refresh.to_string(),
        }
    }

    #[test]
    fn save_then_load_returns_the_same_pair() {
        let store = TokenStore::new(Arc::new(MemoryStore::new()));

        store.save(&pair("a1", "r1"));
        let loaded = store.load().expect("pair should be present");

        assert_eq!(loaded.access_token, "a1");
        assert_eq!(loaded.refresh_token, "r1");
    }

    #[test]
    fn malformed_record_reads_as_absent() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(TOKENS_KEY, "%%% not json %%%");

        let store = TokenStore::new(backing);
        assert!(store.load().is_none());
        assert!(store.access_token().is_none());
    }

    #[test]
    fn pair_with_empty_field_reads_as_absent() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(TOKENS_KEY, r#"{"accessToken":"","refreshToken":"r1"}"#);

        let store = TokenStore::new(backing);
        assert!(store.load().is_none());
    }

    #[test]
    fn clear_removes_tokens_and_user() {
        let store = TokenStore::new(Arc::new(MemoryStore::new()));
        store.save(&pair("a1", "r1"));
        store.save_user(&serde_json::from_str(r#"{"email":"a@b.c","role":"ADMIN"}"#).expect("user"));

        store.clear();

        assert!(store.load().is_none());
        assert!(store.load_user().is_none());

        // Idempotent.
        store.clear();
    }

    #[test]
    fn pair_is_written_as_a_single_record() {
        let mut backing = MockKeyValueStore::new();
        backing
            .expect_set()
            .with(eq(TOKENS_KEY), eq(r#"{"accessToken":"a1","refreshToken":"r1"}"#))
            .times(1)
            .return_const(());

        let store = TokenStore::new(Arc::new(backing));
        store.save(&pair("a1", "r1"));
    }

    #[test]
    fn malformed_user_reads_as_absent() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(USER_KEY, r#"{"email":"a@b.c","role":"SUPERUSER"}"#);

        let store = TokenStore::new(backing);
        assert!(store.load_user().is_none());
    }
}

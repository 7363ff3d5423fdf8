//! File-backed store for the native CLI.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use tracing::warn;

use super::KeyValueStore;

/// A [`KeyValueStore`] keeping all keys in a single JSON object on disk.
///
/// A missing or corrupt file reads as empty. Write failures are logged and
/// swallowed so a broken disk turns into a logged-out session, never an error
/// surfaced through the session client.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self {
            path,
            values: Mutex::new(values),
        }
    }

    fn persist(&self, values: &HashMap<String, String>) {
        match serde_json::to_string_pretty(values) {
            Ok(serialized) => {
                if let Err(error) = fs::write(&self.path, serialized) {
                    warn!(path = %self.path.display(), %error, "failed to persist session store");
                }
            }
            Err(error) => {
                warn!(%error, "failed to serialize session store");
            }
        }
    }
}

fn load_values(path: &Path) -> HashMap<String, String> {
    let Ok(raw) = fs::read_to_string(path) else {
        return HashMap::new();
    };

    serde_json::from_str(&raw).unwrap_or_default()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
            self.persist(&values);
        }
    }

    fn delete(&self, key: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.remove(key);
            self.persist(&values);
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn values_survive_reopening() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path);
        store.set("auth_tokens", r#"{"accessToken":"a1","refreshToken":"r1"}"#);
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(
            reopened.get("auth_tokens").as_deref(),
            Some(r#"{"accessToken":"a1","refreshToken":"r1"}"#)
        );

        Ok(())
    }

    #[test]
    fn corrupt_file_reads_as_empty() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");
        fs::write(&path, "{not valid json")?;

        let store = FileStore::open(&path);
        assert_eq!(store.get("auth_tokens"), None);

        Ok(())
    }

    #[test]
    fn delete_removes_key_from_disk() -> TestResult {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path);
        store.set("auth_user", "{}");
        store.delete("auth_user");
        drop(store);

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get("auth_user"), None);

        Ok(())
    }
}

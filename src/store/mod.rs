//! Local key-value persistence for session state.
//!
//! The session client depends on a small storage capability rather than any
//! concrete medium, so tests can run on [`MemoryStore`] while the CLI uses
//! [`FileStore`].

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use mockall::automock;

/// Durable, synchronous local storage.
///
/// Storage failure is deliberately invisible to callers: a failed write means
/// the session simply reads back as absent later, which degrades to a
/// logged-out state instead of an error.
#[automock]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn delete(&self, key: &str);
}

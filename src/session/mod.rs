//! Session lifecycle: token persistence and single-flight refresh.

mod coordinator;
mod errors;
mod models;
mod token_store;

pub use coordinator::RefreshCoordinator;
pub use errors::{AuthError, SessionError};
pub use models::{SessionUser, TokenPair, UserRole};
pub use token_store::{TOKENS_KEY, TokenStore, USER_KEY};

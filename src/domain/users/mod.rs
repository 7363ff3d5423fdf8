//! User accounts.

mod api;
mod models;

pub use api::UsersApi;
pub use models::{NewUser, UserAccount, UserUpdate};

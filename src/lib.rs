//! Client SDK for the dairy distribution ERP REST API.
//!
//! The crate owns the client side of the session lifecycle: it persists the
//! access/refresh token pair, attaches the access token to outgoing requests,
//! transparently refreshes it when the server answers 401 (one coordinated
//! refresh shared by all concurrent callers, one retry of the failed request),
//! and escalates to a logged-out state when the session cannot be recovered.
//!
//! On top of that pipeline it exposes a typed surface for the ERP resources:
//! orders, invoices, products, warehouse stock and movements, customer
//! companies, employees and user accounts.

pub mod client;
pub mod config;
pub mod domain;
pub mod session;
pub mod store;

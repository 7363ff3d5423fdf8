//! Invoices

mod api;
mod models;

pub use api::InvoicesApi;
pub use models::{Invoice, InvoiceStatus};

//! Typed resource surface of the ERP API.
//!
//! Each module mirrors one resource family. All calls go through the
//! refresh-aware request pipeline in [`crate::client`]; wire structs follow
//! the server's JSON shapes, with conversions where the domain model differs.

pub mod companies;
pub mod employees;
pub mod invoices;
pub mod orders;
pub mod products;
pub mod users;
pub mod warehouse;

//! Products

mod api;
mod models;

pub use api::ProductsApi;
pub use models::{NewProduct, Product, ProductUpdate};

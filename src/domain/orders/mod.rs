//! Orders

mod api;
mod models;

pub use api::OrdersApi;
pub use models::{NewOrderItem, Order, OrderItem, OrderStatus};

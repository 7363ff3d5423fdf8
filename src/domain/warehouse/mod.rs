//! Warehouse stock and stock movements.

mod api;
mod models;

pub use api::{GenericMovementError, WarehouseApi};
pub use models::{
    GenericMovement, MovementError, MovementType, NewMovement, NewReturnMovement, Stock,
    StockMovement, StockUpdate,
};

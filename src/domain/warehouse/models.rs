//! Warehouse models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction/kind of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Inbound,
    Dispatch,
    Return,
    Loss,
    /// Not a server-side movement kind; accepted by the generic entry point
    /// and translated to inbound or dispatch by quantity sign.
    Adjustment,
}

/// Stock level of one product.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub min_quantity: i32,
    pub is_low: bool,
    pub damaged_count: i32,
    pub returned_count: i32,
}

/// Update of the reorder threshold for one product.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub min_quantity: i32,
}

/// A recorded stock movement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: i64,
    pub product_id: i64,
    pub quantity_change: i32,
    pub movement_type: MovementType,
    #[serde(default)]
    pub related_order_id: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub employee_id: Option<i64>,
}

/// Payload for the typed inbound/dispatch/loss endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovement {
    pub product_id: i64,
    /// Always positive; direction comes from the endpoint.
    pub quantity: i32,
    pub reason: String,
}

/// Payload for the return endpoint, which additionally needs the order the
/// goods came back from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReturnMovement {
    pub product_id: i64,
    pub quantity: i32,
    pub order_id: i64,
    pub reason: String,
}

/// Input of the legacy generic movement entry point: a signed quantity delta
/// plus a movement type, routed to the matching typed endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericMovement {
    pub product_id: i64,
    pub quantity_change: i32,
    pub movement_type: MovementType,
    pub related_order_id: Option<i64>,
    pub reason: Option<String>,
}

/// Local validation failures of the generic movement entry point; no request
/// is sent when these occur.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MovementError {
    /// RETURN movements must reference the order the goods belong to.
    #[error("an order id is required for return movements")]
    MissingOrderId,
}

/// Stock list envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct ListStockResponse {
    pub stocks: Vec<Stock>,
}

/// Movement list envelope. The server names this field `stockMovements`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListMovementsResponse {
    pub stock_movements: Vec<StockMovement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_parses_with_optional_fields_absent() {
        let movement: StockMovement = serde_json::from_str(
            r#"{
                "id": 11,
                "productId": 2,
                "quantityChange": -5,
                "movementType": "DISPATCH",
                "createdAt": "2025-11-02T10:00:00Z"
            }"#,
        )
        .expect("movement should parse");

        assert_eq!(movement.movement_type, MovementType::Dispatch);
        assert_eq!(movement.quantity_change, -5);
        assert_eq!(movement.related_order_id, None);
    }

    #[test]
    fn movement_list_envelope_uses_server_key() {
        let response: ListMovementsResponse = serde_json::from_str(
            r#"{"stockMovements":[{"id":1,"productId":2,"quantityChange":5,"movementType":"INBOUND","createdAt":"2025-11-01T00:00:00Z"}]}"#,
        )
        .expect("movements should parse");

        assert_eq!(response.stock_movements.len(), 1);
    }
}

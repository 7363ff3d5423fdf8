//! Order models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    InPreparation,
    Shipped,
    Invoiced,
    Cancelled,
}

/// Order as returned by the API.
///
/// Amounts are decimal strings; numeric truth lives server-side and the
/// client passes them through untouched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub status: OrderStatus,
    pub total_amount: String,
    pub order_date: Timestamp,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: String,
    pub line_total: String,
}

/// A line of an order being created.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderItem {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListOrdersResponse {
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderItemsResponse {
    // The server names this envelope field in the singular.
    pub item: Vec<OrderItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_parses_from_wire_shape() {
        let order: Order = serde_json::from_str(
            r#"{
                "id": 7,
                "orderNumber": "ORD-2025-0007",
                "status": "IN_PREPARATION",
                "totalAmount": "129.50",
                "orderDate": "2025-11-02T08:30:00Z"
            }"#,
        )
        .expect("order should parse");

        assert_eq!(order.status, OrderStatus::InPreparation);
        assert_eq!(order.total_amount, "129.50");
    }

    #[test]
    fn items_envelope_uses_singular_key() {
        let response: OrderItemsResponse = serde_json::from_str(
            r#"{"item":[{"id":1,"productId":2,"productName":"Milk 1l","quantity":10,"unitPrice":"2.99","lineTotal":"29.90"}]}"#,
        )
        .expect("items should parse");

        assert_eq!(response.item.len(), 1);
        assert_eq!(response.item[0].product_name, "Milk 1l");
    }
}

//! Order endpoints.

use serde::Serialize;
use serde_json::Value;

use super::models::{ListOrdersResponse, NewOrderItem, Order, OrderItem, OrderItemsResponse, OrderStatus};
use crate::client::{ApiError, ErpClient};

/// Calls under `/orders`.
#[derive(Debug, Clone, Copy)]
pub struct OrdersApi<'a> {
    client: &'a ErpClient,
}

impl<'a> OrdersApi<'a> {
    pub(crate) fn new(client: &'a ErpClient) -> Self {
        Self { client }
    }

    /// List the orders visible to the current user.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn list(&self) -> Result<Vec<Order>, ApiError> {
        let response: ListOrdersResponse = self.client.get("/orders").await?;
        Ok(response.orders)
    }

    /// Fetch one order.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn get(&self, order_id: i64) -> Result<Order, ApiError> {
        self.client.get(&format!("/orders/{order_id}")).await
    }

    /// Fetch the lines of an order.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn items(&self, order_id: i64) -> Result<Vec<OrderItem>, ApiError> {
        let response: OrderItemsResponse =
            self.client.get(&format!("/orders/{order_id}/items")).await?;
        Ok(response.item)
    }

    /// Place a new order.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn create(&self, items: &[NewOrderItem]) -> Result<Order, ApiError> {
        #[derive(Serialize)]
        struct CreateOrderRequest<'r> {
            items: &'r [NewOrderItem],
        }

        self.client
            .post("/orders", &CreateOrderRequest { items })
            .await
    }

    /// Move an order to a new status.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn update_status(&self, order_id: i64, status: OrderStatus) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct UpdateStatusRequest {
            status: OrderStatus,
        }

        let _response: Value = self
            .client
            .patch(
                &format!("/orders/{order_id}/status"),
                &UpdateStatusRequest { status },
            )
            .await?;

        Ok(())
    }
}

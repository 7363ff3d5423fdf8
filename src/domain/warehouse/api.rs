//! Warehouse endpoints.

use serde_json::Value;

use super::models::{
    GenericMovement, ListMovementsResponse, ListStockResponse, MovementError, MovementType,
    NewMovement, NewReturnMovement, Stock, StockMovement, StockUpdate,
};
use crate::client::{ApiError, ErpClient};

/// Calls under `/warehouse`, including stock movements.
#[derive(Debug, Clone, Copy)]
pub struct WarehouseApi<'a> {
    client: &'a ErpClient,
}

/// Failure of the generic movement entry point: either local validation or
/// the underlying API call.
#[derive(Debug, thiserror::Error)]
pub enum GenericMovementError {
    #[error(transparent)]
    Movement(#[from] MovementError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl<'a> WarehouseApi<'a> {
    pub(crate) fn new(client: &'a ErpClient) -> Self {
        Self { client }
    }

    /// List current stock levels.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn stock(&self) -> Result<Vec<Stock>, ApiError> {
        let response: ListStockResponse = self.client.get("/warehouse").await?;
        Ok(response.stocks)
    }

    /// Stock level of one product.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn stock_for_product(&self, product_id: i64) -> Result<Stock, ApiError> {
        self.client.get(&format!("/warehouse/{product_id}")).await
    }

    /// Update the reorder threshold of one product.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn update_stock(&self, product_id: i64, update: &StockUpdate) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch(&format!("/warehouse/{product_id}"), update)
            .await?;
        Ok(())
    }

    /// List recorded stock movements.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn movements(&self) -> Result<Vec<StockMovement>, ApiError> {
        let response: ListMovementsResponse = self.client.get("/warehouse/movements").await?;
        Ok(response.stock_movements)
    }

    /// Record goods received into the warehouse.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn inbound(&self, movement: &NewMovement) -> Result<StockMovement, ApiError> {
        self.client
            .post("/warehouse/movements/inbound", movement)
            .await
    }

    /// Record goods dispatched out of the warehouse.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn dispatch(&self, movement: &NewMovement) -> Result<StockMovement, ApiError> {
        self.client
            .post("/warehouse/movements/dispatch", movement)
            .await
    }

    /// Record goods returned against an order.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn record_return(
        &self,
        movement: &NewReturnMovement,
    ) -> Result<StockMovement, ApiError> {
        self.client
            .post("/warehouse/movements/return", movement)
            .await
    }

    /// Record goods written off as lost or damaged.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn loss(&self, movement: &NewMovement) -> Result<StockMovement, ApiError> {
        self.client.post("/warehouse/movements/loss", movement).await
    }

    /// Legacy generic entry point: routes a signed quantity delta to the
    /// matching typed endpoint. ADJUSTMENT has no server-side endpoint and is
    /// translated by sign — positive posts inbound, negative posts dispatch.
    ///
    /// # Errors
    ///
    /// [`GenericMovementError::Movement`] for local validation failures (a
    /// RETURN without an order id sends nothing), otherwise any [`ApiError`]
    /// of the authenticated pipeline.
    pub async fn record(
        &self,
        movement: &GenericMovement,
    ) -> Result<StockMovement, GenericMovementError> {
        let quantity = movement.quantity_change.abs();
        let reason = movement.reason.clone().unwrap_or_default();

        let recorded = match movement.movement_type {
            MovementType::Inbound => {
                self.inbound(&NewMovement {
                    product_id: movement.product_id,
                    quantity,
                    reason,
                })
                .await?
            }
            MovementType::Dispatch => {
                self.dispatch(&NewMovement {
                    product_id: movement.product_id,
                    quantity,
                    reason,
                })
                .await?
            }
            MovementType::Return => {
                let order_id = movement
                    .related_order_id
                    .ok_or(MovementError::MissingOrderId)?;
                self.record_return(&NewReturnMovement {
                    product_id: movement.product_id,
                    quantity,
                    order_id,
                    reason,
                })
                .await?
            }
            MovementType::Loss => {
                self.loss(&NewMovement {
                    product_id: movement.product_id,
                    quantity,
                    reason,
                })
                .await?
            }
            MovementType::Adjustment => {
                let reason = movement
                    .reason
                    .clone()
                    .unwrap_or_else(|| "Stock correction".to_string());
                let adjustment = NewMovement {
                    product_id: movement.product_id,
                    quantity,
                    reason,
                };
                if movement.quantity_change > 0 {
                    self.inbound(&adjustment).await?
                } else {
                    self.dispatch(&adjustment).await?
                }
            }
        };

        Ok(recorded)
    }
}

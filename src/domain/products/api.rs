//! Product endpoints.

use serde_json::Value;

use super::models::{ListProductsResponse, NewProduct, Product, ProductUpdate};
use crate::client::{ApiError, ErpClient};

/// Calls under `/products`.
#[derive(Debug, Clone, Copy)]
pub struct ProductsApi<'a> {
    client: &'a ErpClient,
}

impl<'a> ProductsApi<'a> {
    pub(crate) fn new(client: &'a ErpClient) -> Self {
        Self { client }
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response: ListProductsResponse = self.client.get("/products").await?;
        Ok(response.products)
    }

    /// Fetch one product.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn get(&self, product_id: i64) -> Result<Product, ApiError> {
        self.client.get(&format!("/products/{product_id}")).await
    }

    /// Create a product.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        self.client.post("/products", product).await
    }

    /// Apply a partial update to a product.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn update(&self, product_id: i64, update: &ProductUpdate) -> Result<Product, ApiError> {
        self.client
            .patch(&format!("/products/{product_id}"), update)
            .await
    }

    /// Put a product back on offer.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn activate(&self, product_id: i64) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch_empty(&format!("/products/{product_id}/activate"))
            .await?;
        Ok(())
    }

    /// Withdraw a product from offer.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn deactivate(&self, product_id: i64) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch_empty(&format!("/products/{product_id}/deactivate"))
            .await?;
        Ok(())
    }
}

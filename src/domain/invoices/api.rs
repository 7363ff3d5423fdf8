//! Invoice endpoints.

use reqwest::{
    Method,
    header::{ACCEPT, HeaderMap, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;

use super::models::{Invoice, InvoiceStatus, ListInvoicesResponse};
use crate::client::{ApiError, ErpClient};

/// Calls under `/invoices` (plus invoice creation, which lives under
/// `/orders/{id}/invoices` on the server).
#[derive(Debug, Clone, Copy)]
pub struct InvoicesApi<'a> {
    client: &'a ErpClient,
}

impl<'a> InvoicesApi<'a> {
    pub(crate) fn new(client: &'a ErpClient) -> Self {
        Self { client }
    }

    /// List the invoices visible to the current user.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn list(&self) -> Result<Vec<Invoice>, ApiError> {
        let response: ListInvoicesResponse = self.client.get("/invoices").await?;
        Ok(response.invoices)
    }

    /// Fetch one invoice.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn get(&self, invoice_id: i64) -> Result<Invoice, ApiError> {
        self.client.get(&format!("/invoices/{invoice_id}")).await
    }

    /// Download the rendered PDF for an invoice.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn pdf(&self, invoice_id: i64) -> Result<Vec<u8>, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/pdf"));

        self.client
            .request_bytes(Method::GET, &format!("/invoices/{invoice_id}/pdf"), headers)
            .await
    }

    /// Issue an invoice for an order.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn create_for_order(&self, order_id: i64) -> Result<Invoice, ApiError> {
        self.client
            .post_empty(&format!("/orders/{order_id}/invoices"))
            .await
    }

    /// Move an invoice to a new payment status.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn update_status(
        &self,
        invoice_id: i64,
        status: InvoiceStatus,
    ) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct UpdateStatusRequest {
            status: InvoiceStatus,
        }

        let _response: Value = self
            .client
            .patch(
                &format!("/invoices/{invoice_id}/status"),
                &UpdateStatusRequest { status },
            )
            .await?;

        Ok(())
    }
}

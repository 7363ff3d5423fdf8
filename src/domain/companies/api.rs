//! Company endpoints.

use serde_json::Value;

use super::models::{
    CompanyAddress, CompanyUpdate, CustomerCompany, ListCompaniesResponse, NewCompany, WireCompany,
};
use crate::client::{ApiError, ErpClient};

/// Calls under `/companies`.
#[derive(Debug, Clone, Copy)]
pub struct CompaniesApi<'a> {
    client: &'a ErpClient,
}

impl<'a> CompaniesApi<'a> {
    pub(crate) fn new(client: &'a ErpClient) -> Self {
        Self { client }
    }

    /// List customer companies.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn list(&self) -> Result<Vec<CustomerCompany>, ApiError> {
        let response: ListCompaniesResponse = self.client.get("/companies").await?;
        Ok(response.companies.into_iter().map(Into::into).collect())
    }

    /// Fetch one company.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn get(&self, company_id: i64) -> Result<CustomerCompany, ApiError> {
        let wire: WireCompany = self.client.get(&format!("/companies/{company_id}")).await?;
        Ok(wire.into())
    }

    /// Create a company record directly (staff flow, unlike the public
    /// self-registration).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn create(&self, company: &NewCompany) -> Result<CustomerCompany, ApiError> {
        let wire: WireCompany = self.client.post("/companies", company).await?;
        Ok(wire.into())
    }

    /// Apply a partial update to a company.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn update(&self, company_id: i64, update: &CompanyUpdate) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch(&format!("/companies/{company_id}"), update)
            .await?;
        Ok(())
    }

    /// Mark a company active.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn activate(&self, company_id: i64) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch_empty(&format!("/companies/{company_id}/activate"))
            .await?;
        Ok(())
    }

    /// Mark a company inactive.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn deactivate(&self, company_id: i64) -> Result<(), ApiError> {
        let _response: Value = self
            .client
            .patch_empty(&format!("/companies/{company_id}/deactivate"))
            .await?;
        Ok(())
    }

    /// List the addresses registered for a company.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn addresses(&self, company_id: i64) -> Result<Vec<CompanyAddress>, ApiError> {
        self.client
            .get(&format!("/companies/{company_id}/addresses"))
            .await
    }
}

//! Employee endpoints.

use super::models::{Employee, EmployeeUpdate, ListEmployeesResponse, NewEmployee, WireEmployee};
use crate::client::{ApiError, ErpClient};

/// Calls under `/employees`.
#[derive(Debug, Clone, Copy)]
pub struct EmployeesApi<'a> {
    client: &'a ErpClient,
}

impl<'a> EmployeesApi<'a> {
    pub(crate) fn new(client: &'a ErpClient) -> Self {
        Self { client }
    }

    /// List employees.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        let response: ListEmployeesResponse = self.client.get("/employees").await?;
        Ok(response.employees.into_iter().map(Into::into).collect())
    }

    /// Fetch one employee.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn get(&self, employee_id: i64) -> Result<Employee, ApiError> {
        let wire: WireEmployee = self.client.get(&format!("/employees/{employee_id}")).await?;
        Ok(wire.into())
    }

    /// Create an employee.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn create(&self, employee: &NewEmployee) -> Result<Employee, ApiError> {
        let wire: WireEmployee = self.client.post("/employees", employee).await?;
        Ok(wire.into())
    }

    /// Apply a partial update to an employee.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] of the authenticated pipeline.
    pub async fn update(&self, employee_id: i64, update: &EmployeeUpdate) -> Result<Employee, ApiError> {
        let wire: WireEmployee = self
            .client
            .patch(&format!("/employees/{employee_id}"), update)
            .await?;
        Ok(wire.into())
    }
}

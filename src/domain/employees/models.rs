//! Employee models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Employee in domain form.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub active: bool,
    pub hired_at: Timestamp,
}

/// Payload for creating an employee.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub hire_date: Timestamp,
}

/// Partial update of an employee; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Employee as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireEmployee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    pub is_active: bool,
    pub hire_date: Timestamp,
}

impl From<WireEmployee> for Employee {
    fn from(wire: WireEmployee) -> Self {
        Self {
            id: wire.id,
            first_name: wire.first_name,
            last_name: wire.last_name,
            position: wire.position,
            active: wire.is_active,
            hired_at: wire.hire_date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListEmployeesResponse {
    pub employees: Vec<WireEmployee>,
}

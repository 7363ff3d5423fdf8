//! Customer company models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Customer company in domain form.
///
/// The server reports a three-way `status`; the client splits it into the
/// two flags the original data model uses.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerCompany {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub main_email: String,
    pub phone: Option<String>,
    pub is_active: bool,
    pub risk_flag: bool,
    pub order_count: i64,
    pub created_at: Timestamp,
}

/// Payload for creating a company.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    pub name: String,
    pub tax_id: String,
    pub main_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Partial update of a company; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub main_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Billing or shipping address of a company.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyAddress {
    pub id: i64,
    pub customer_company_id: i64,
    pub address_line: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: AddressType,
}

/// Address classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AddressType {
    Billing,
    Shipping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum WireCompanyStatus {
    Active,
    Inactive,
    AtRisk,
}

/// Company as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireCompany {
    pub id: i64,
    pub name: String,
    pub tax_id: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub order_count: i64,
    pub status: WireCompanyStatus,
    pub registration_date: Timestamp,
}

impl From<WireCompany> for CustomerCompany {
    fn from(wire: WireCompany) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            tax_id: wire.tax_id,
            main_email: wire.email,
            phone: wire.phone_number,
            is_active: wire.status == WireCompanyStatus::Active,
            risk_flag: wire.status == WireCompanyStatus::AtRisk,
            order_count: wire.order_count,
            created_at: wire.registration_date,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListCompaniesResponse {
    pub companies: Vec<WireCompany>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_risk_status_maps_to_risk_flag() {
        let wire: WireCompany = serde_json::from_str(
            r#"{
                "id": 4,
                "name": "Mleko-Pol",
                "taxId": "5261040828",
                "email": "office@mleko-pol.example",
                "phoneNumber": "+48 600 100 200",
                "orderCount": 17,
                "status": "AT_RISK",
                "registrationDate": "2024-03-12T00:00:00Z"
            }"#,
        )
        .expect("company should parse");

        let company = CustomerCompany::from(wire);
        assert!(!company.is_active);
        assert!(company.risk_flag);
        assert_eq!(company.main_email, "office@mleko-pol.example");
    }
}

//! Invoice models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Invoice payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Unpaid,
    Paid,
    Overdue,
}

/// Invoice as returned by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub order_id: i64,
    pub invoice_number: String,
    pub issue_date: Timestamp,
    pub due_date: Timestamp,
    pub total_amount: String,
    pub status: InvoiceStatus,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListInvoicesResponse {
    pub invoices: Vec<Invoice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_parses_from_wire_shape() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "id": 3,
                "orderId": 7,
                "invoiceNumber": "FV/2025/11/0003",
                "issueDate": "2025-11-03T00:00:00Z",
                "dueDate": "2025-11-17T00:00:00Z",
                "totalAmount": "129.50",
                "status": "UNPAID"
            }"#,
        )
        .expect("invoice should parse");

        assert_eq!(invoice.status, InvoiceStatus::Unpaid);
        assert_eq!(invoice.order_id, 7);
    }
}

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One billable invoice as served by the invoice API.
///
/// The typed fields are the ones the application logic reads; anything else
/// the backend attaches travels through `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub id: String,

    #[serde(rename = "invoiceNumber")]
    pub invoice_number: String,

    #[serde(rename = "customerId", default)]
    pub customer_id: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    pub amount: f64,

    /// "pending", "overdue" or "paid".
    pub status: String,

    /// ISO date, `YYYY-MM-DD`. Compares correctly as a plain string.
    #[serde(rename = "dueDate")]
    pub due_date: String,

    pub service: String,

    /// Billing period, first day of the billed month (`YYYY-MM-DD`).
    pub period: String,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Response body of `GET /api/invoice?customerId=...`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceListResponse {
    pub dataset: Vec<InvoiceDto>,
}

/// Error body the invoice API returns alongside a non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub msg: String,
}

use contracts::domain::invoice::{InvoiceDto, InvoiceListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch all invoices of one customer from the invoice API.
pub async fn fetch_invoices(customer_id: &str) -> Result<Vec<InvoiceDto>, String> {
    let url = api_url(&format!("/api/invoice?customerId={}", customer_id));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: InvoiceListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data.dataset)
}

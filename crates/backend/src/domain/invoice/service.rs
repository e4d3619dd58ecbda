use contracts::domain::invoice::InvoiceDto;

use super::mock_data;

/// All invoices of one customer, in dataset order. Unknown customers get an
/// empty list, not an error.
pub fn list_by_customer(customer_id: &str) -> Vec<InvoiceDto> {
    mock_data::dataset()
        .iter()
        .filter(|inv| inv.customer_id == customer_id)
        .cloned()
        .collect()
}

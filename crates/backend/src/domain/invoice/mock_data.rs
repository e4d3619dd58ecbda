use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Utc};
use contracts::domain::invoice::InvoiceDto;
use once_cell::sync::Lazy;

/// Row template: customer, service, amount and the due date as an offset in
/// days from "today", so the pending/overdue split stays realistic no matter
/// when the server runs.
struct MockRow {
    customer_id: &'static str,
    customer_name: &'static str,
    service: &'static str,
    amount: f64,
    status: &'static str,
    due_offset_days: i64,
}

impl MockRow {
    fn new(
        customer_id: &'static str,
        customer_name: &'static str,
        service: &'static str,
        amount: f64,
        status: &'static str,
        due_offset_days: i64,
    ) -> Self {
        Self {
            customer_id,
            customer_name,
            service,
            amount,
            status,
            due_offset_days,
        }
    }
}

fn mock_rows() -> Vec<MockRow> {
    vec![
        // Customer 123 - two pages worth at the default page size
        MockRow::new("123", "Juan Pérez", "Internet", 150.0, "pending", 12),
        MockRow::new("123", "Juan Pérez", "TV Cable", 300.0, "paid", -45),
        MockRow::new("123", "Juan Pérez", "Telefono", 75.5, "overdue", -20),
        MockRow::new("123", "Juan Pérez", "Internet", 150.0, "paid", -75),
        MockRow::new("123", "Juan Pérez", "TV Cable", 310.25, "pending", 25),
        MockRow::new("123", "Juan Pérez", "Telefono", 80.0, "overdue", -8),
        MockRow::new("123", "Juan Pérez", "Internet", 150.0, "pending", 40),
        MockRow::new("123", "Juan Pérez", "TV Cable", 295.75, "paid", -100),
        // Customer 456
        MockRow::new("456", "María Flores", "Internet", 220.0, "pending", 18),
        MockRow::new("456", "María Flores", "Internet", 220.0, "overdue", -30),
        MockRow::new("456", "María Flores", "TV Cable", 180.5, "paid", -60),
        MockRow::new("456", "María Flores", "Telefono", 95.0, "pending", 7),
        MockRow::new("456", "María Flores", "Internet", 220.0, "paid", -90),
        // Customer 789
        MockRow::new("789", "Comercial Andina S.R.L.", "Internet", 560.0, "overdue", -15),
        MockRow::new("789", "Comercial Andina S.R.L.", "Telefono", 410.9, "pending", 30),
        MockRow::new("789", "Comercial Andina S.R.L.", "Internet", 560.0, "paid", -40),
    ]
}

static DATASET: Lazy<Vec<InvoiceDto>> = Lazy::new(|| {
    let today = Utc::now().date_naive();
    mock_rows()
        .iter()
        .enumerate()
        .map(|(index, row)| build_invoice(index, row, today))
        .collect()
});

/// The full mock dataset, built once per process.
pub fn dataset() -> &'static [InvoiceDto] {
    &DATASET
}

fn build_invoice(index: usize, row: &MockRow, today: NaiveDate) -> InvoiceDto {
    let due = today + Duration::days(row.due_offset_days);
    let period = due.with_day(1).unwrap_or(due);
    InvoiceDto {
        id: (index + 1).to_string(),
        invoice_number: format!("FAC-{:03}", index + 1),
        customer_id: row.customer_id.to_string(),
        customer_name: row.customer_name.to_string(),
        amount: row.amount,
        status: row.status.to_string(),
        due_date: due.format("%Y-%m-%d").to_string(),
        service: row.service.to_string(),
        period: period.format("%Y-%m-%d").to_string(),
        extra: HashMap::new(),
    }
}

pub mod card;
pub mod filters_panel;
pub mod list;
pub mod search;
pub mod table;

/// Pill CSS class for an invoice status.
pub(crate) fn status_pill_class(status: &str) -> &'static str {
    match status {
        "pending" => "pill pill--pending",
        "overdue" => "pill pill--overdue",
        "paid" => "pill pill--paid",
        _ => "pill",
    }
}

/// Caption shown on the status pill ("factura" agreement, hence feminine).
/// Unknown statuses are shown as-is.
pub(crate) fn status_pill_label(status: &str) -> String {
    match status {
        "pending" => "Pendiente".to_string(),
        "overdue" => "Vencida".to_string(),
        "paid" => "Pagada".to_string(),
        other => other.to_string(),
    }
}

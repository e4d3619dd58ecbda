use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::aggregate::InvoiceDto;

/// One filter request over the invoice list.
///
/// Every field is kept as the raw string the UI produced. A field is active
/// when it is non-empty (and, for `status`, not `"all"`); the default value
/// leaves the invoice list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceFilters {
    pub status: String,

    #[serde(rename = "minAmount")]
    pub min_amount: String,

    #[serde(rename = "maxAmount")]
    pub max_amount: String,

    /// Lower due-date bound, ISO `YYYY-MM-DD`.
    #[serde(rename = "startDate")]
    pub start_date: String,

    /// Upper due-date bound, ISO `YYYY-MM-DD`.
    #[serde(rename = "endDate")]
    pub end_date: String,
}

impl Default for InvoiceFilters {
    fn default() -> Self {
        Self {
            status: "all".to_string(),
            min_amount: String::new(),
            max_amount: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }
}

impl InvoiceFilters {
    /// Field (key, value) pairs in canonical order. The keys double as the
    /// URL query parameter names.
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("status", self.status.as_str()),
            ("minAmount", self.min_amount.as_str()),
            ("maxAmount", self.max_amount.as_str()),
            ("startDate", self.start_date.as_str()),
            ("endDate", self.end_date.as_str()),
        ]
    }

    /// Reset a single field to its neutral value.
    pub fn clear_field(&mut self, key: &str) {
        match key {
            "status" => self.status = "all".to_string(),
            "minAmount" => self.min_amount.clear(),
            "maxAmount" => self.max_amount.clear(),
            "startDate" => self.start_date.clear(),
            "endDate" => self.end_date.clear(),
            _ => {}
        }
    }
}

/// Spanish caption for a status value, if it is one of the known statuses.
pub fn status_label(value: &str) -> Option<&'static str> {
    match value {
        "paid" => Some("Pagado"),
        "pending" => Some("Pendiente"),
        "overdue" => Some("Vencido"),
        _ => None,
    }
}

/// Caption for a filter field key, used on the active-filter badges.
pub fn filter_label(key: &str) -> &str {
    match key {
        "status" => "Estado",
        "minAmount" => "Monto min",
        "maxAmount" => "Monto max",
        "startDate" => "Desde",
        "endDate" => "Hasta",
        other => other,
    }
}

/// Human-readable rendering of a filter value.
///
/// Statuses map through the fixed label table (unknown values pass through
/// unchanged), amounts get the currency marker, dates are already ISO.
pub fn filter_display_value(key: &str, value: &str) -> String {
    match key {
        "status" => status_label(value)
            .map(str::to_string)
            .unwrap_or_else(|| value.to_string()),
        "minAmount" | "maxAmount" => format!("Bs. {}", value),
        _ => value.to_string(),
    }
}

/// The (key, value) pairs of all active fields, in canonical field order.
pub fn active_filter_entries(filters: &InvoiceFilters) -> Vec<(&'static str, String)> {
    filters
        .entries()
        .iter()
        .filter(|(key, value)| {
            if *key == "status" {
                !value.is_empty() && *value != "all"
            } else {
                !value.is_empty()
            }
        })
        .map(|(key, value)| (*key, value.to_string()))
        .collect()
}

/// Apply `filters` to `invoices`, returning the matching subset in the
/// original order. The input is never mutated.
pub fn filter_invoices(invoices: &[InvoiceDto], filters: &InvoiceFilters) -> Vec<InvoiceDto> {
    invoices
        .iter()
        .filter(|inv| matches_filters(inv, filters))
        .cloned()
        .collect()
}

fn matches_filters(inv: &InvoiceDto, filters: &InvoiceFilters) -> bool {
    if filters.status != "all" && inv.status != filters.status {
        return false;
    }
    // An unparseable bound yields NaN and NaN comparisons are false, so a
    // broken bound excludes every record rather than being ignored.
    if !filters.min_amount.is_empty() && !(inv.amount >= leading_float(&filters.min_amount)) {
        return false;
    }
    if !filters.max_amount.is_empty() && !(inv.amount <= leading_float(&filters.max_amount)) {
        return false;
    }
    if !filters.start_date.is_empty() && inv.due_date < filters.start_date {
        return false;
    }
    if !filters.end_date.is_empty() && inv.due_date > filters.end_date {
        return false;
    }
    true
}

/// Best-effort leading-numeric float parse: `"100abc"` -> 100.0,
/// `"abc"` -> NaN. Accepts an optional sign, decimal point and exponent.
fn leading_float(s: &str) -> f64 {
    let t = s.trim_start();
    let b = t.as_bytes();
    let mut i = 0;
    if !b.is_empty() && (b[0] == b'+' || b[0] == b'-') {
        i += 1;
    }
    let mut digits = 0;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
        digits += 1;
    }
    if i < b.len() && b[i] == b'.' {
        i += 1;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return f64::NAN;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    t[..i].parse().unwrap_or(f64::NAN)
}

/// Rebuild a filter state from URL query parameters.
///
/// Returns `None` when none of the five filter keys is present at all, so a
/// URL without filter state does not overwrite the in-memory defaults.
pub fn parse_url_filters(params: &HashMap<String, String>) -> Option<InvoiceFilters> {
    let status = params.get("status");
    let min_amount = params.get("minAmount");
    let max_amount = params.get("maxAmount");
    let start_date = params.get("startDate");
    let end_date = params.get("endDate");

    if status.is_none()
        && min_amount.is_none()
        && max_amount.is_none()
        && start_date.is_none()
        && end_date.is_none()
    {
        return None;
    }

    Some(InvoiceFilters {
        status: status.cloned().unwrap_or_else(|| "all".to_string()),
        min_amount: min_amount.cloned().unwrap_or_default(),
        max_amount: max_amount.cloned().unwrap_or_default(),
        start_date: start_date.cloned().unwrap_or_default(),
        end_date: end_date.cloned().unwrap_or_default(),
    })
}

/// Map a filter state to URL query parameters. Always emits all five keys;
/// `None` tells the URL writer to delete that parameter.
pub fn build_url_params(filters: &InvoiceFilters) -> Vec<(&'static str, Option<String>)> {
    fn active(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    vec![
        (
            "status",
            if filters.status == "all" {
                None
            } else {
                Some(filters.status.clone())
            },
        ),
        ("minAmount", active(&filters.min_amount)),
        ("maxAmount", active(&filters.max_amount)),
        ("startDate", active(&filters.start_date)),
        ("endDate", active(&filters.end_date)),
    ]
}

/// Selected customer ids from the `customers` query parameter, comma-joined.
/// Order and duplicates are preserved; empty segments are dropped.
pub fn parse_customer_ids(params: &HashMap<String, String>) -> Vec<String> {
    let Some(raw) = params.get("customers") else {
        return Vec::new();
    };
    raw.split(',')
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(
        id: &str,
        number: &str,
        customer: &str,
        amount: f64,
        status: &str,
        due_date: &str,
        service: &str,
        period: &str,
    ) -> InvoiceDto {
        InvoiceDto {
            id: id.to_string(),
            invoice_number: number.to_string(),
            customer_id: String::new(),
            customer_name: customer.to_string(),
            amount,
            status: status.to_string(),
            due_date: due_date.to_string(),
            service: service.to_string(),
            period: period.to_string(),
            extra: HashMap::new(),
        }
    }

    fn mock_invoices() -> Vec<InvoiceDto> {
        vec![
            invoice("1", "FAC-001", "Cliente A", 150.0, "pending", "2024-03-15", "Internet", "2024-03-01"),
            invoice("2", "FAC-002", "Cliente A", 300.0, "paid", "2024-05-20", "TV Cable", "2024-05-01"),
            invoice("3", "FAC-003", "Cliente B", 75.0, "overdue", "2024-01-10", "Telefono", "2024-01-01"),
            invoice("4", "FAC-004", "Cliente B", 500.0, "pending", "2024-07-01", "Internet", "2024-07-01"),
            invoice("5", "FAC-005", "Cliente C", 200.0, "paid", "2024-06-15", "TV Cable", "2024-06-01"),
        ]
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_filters_are_identity() {
        let invoices = mock_invoices();
        let result = filter_invoices(&invoices, &InvoiceFilters::default());
        assert_eq!(result, invoices);
    }

    #[test]
    fn test_filter_by_status_then_clear() {
        let invoices = mock_invoices();
        let pending = InvoiceFilters {
            status: "pending".to_string(),
            ..Default::default()
        };
        let result = filter_invoices(&invoices, &pending);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|inv| inv.status == "pending"));

        let cleared = InvoiceFilters {
            status: "all".to_string(),
            ..pending
        };
        assert_eq!(filter_invoices(&invoices, &cleared).len(), 5);
    }

    #[test]
    fn test_combined_status_and_amount_range() {
        let invoices = mock_invoices();
        let combined = InvoiceFilters {
            status: "pending".to_string(),
            min_amount: "100".to_string(),
            max_amount: "400".to_string(),
            ..Default::default()
        };
        let result = filter_invoices(&invoices, &combined);
        // Only FAC-001 (pending, 150); FAC-004 (pending, 500) exceeds the max.
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].invoice_number, "FAC-001");

        let without_max = InvoiceFilters {
            max_amount: String::new(),
            ..combined
        };
        let result = filter_invoices(&invoices, &without_max);
        assert_eq!(result.len(), 2);
        let mut numbers: Vec<&str> = result.iter().map(|inv| inv.invoice_number.as_str()).collect();
        numbers.sort();
        assert_eq!(numbers, vec!["FAC-001", "FAC-004"]);
    }

    #[test]
    fn test_filter_by_date_range() {
        let invoices = mock_invoices();
        let filters = InvoiceFilters {
            start_date: "2024-03-01".to_string(),
            end_date: "2024-06-30".to_string(),
            ..Default::default()
        };
        let result = filter_invoices(&invoices, &filters);
        // FAC-001 (2024-03-15), FAC-002 (2024-05-20), FAC-005 (2024-06-15).
        let ids: Vec<&str> = result.iter().map(|inv| inv.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "5"]);
        assert!(!result.iter().any(|inv| inv.id == "3" || inv.id == "4"));
    }

    #[test]
    fn test_narrowing_a_range_never_grows_the_result() {
        let invoices = mock_invoices();
        let wide = InvoiceFilters {
            min_amount: "50".to_string(),
            max_amount: "600".to_string(),
            ..Default::default()
        };
        let narrow = InvoiceFilters {
            min_amount: "100".to_string(),
            max_amount: "350".to_string(),
            ..Default::default()
        };
        let wide_result = filter_invoices(&invoices, &wide);
        let narrow_result = filter_invoices(&invoices, &narrow);
        assert!(narrow_result.len() <= wide_result.len());
        assert!(narrow_result.iter().all(|inv| wide_result.contains(inv)));
    }

    #[test]
    fn test_leading_numeric_amount_bound() {
        let invoices = mock_invoices();
        let filters = InvoiceFilters {
            min_amount: "100abc".to_string(),
            ..Default::default()
        };
        // "100abc" parses as 100, same as a clean bound.
        assert_eq!(filter_invoices(&invoices, &filters).len(), 4);
    }

    #[test]
    fn test_unparseable_amount_bound_excludes_everything() {
        let invoices = mock_invoices();
        let filters = InvoiceFilters {
            min_amount: "abc".to_string(),
            ..Default::default()
        };
        assert!(filter_invoices(&invoices, &filters).is_empty());
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(filter_display_value("status", "paid"), "Pagado");
        assert_eq!(filter_display_value("status", "pending"), "Pendiente");
        assert_eq!(filter_display_value("status", "overdue"), "Vencido");
    }

    #[test]
    fn test_unknown_status_passes_through() {
        assert_eq!(filter_display_value("status", "cancelled"), "cancelled");
    }

    #[test]
    fn test_amount_display_gets_currency_prefix() {
        assert_eq!(filter_display_value("minAmount", "100"), "Bs. 100");
        assert_eq!(filter_display_value("maxAmount", "500.50"), "Bs. 500.50");
    }

    #[test]
    fn test_date_display_is_verbatim() {
        assert_eq!(filter_display_value("startDate", "2024-01-01"), "2024-01-01");
        assert_eq!(filter_display_value("endDate", "2024-12-31"), "2024-12-31");
    }

    #[test]
    fn test_no_active_entries_for_defaults() {
        assert!(active_filter_entries(&InvoiceFilters::default()).is_empty());
    }

    #[test]
    fn test_active_entries_follow_field_order() {
        let filters = InvoiceFilters {
            status: "all".to_string(),
            max_amount: "500".to_string(),
            end_date: "2024-12-31".to_string(),
            ..Default::default()
        };
        assert_eq!(
            active_filter_entries(&filters),
            vec![
                ("maxAmount", "500".to_string()),
                ("endDate", "2024-12-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_active_entries_skip_inactive_fields() {
        let filters = InvoiceFilters {
            status: "paid".to_string(),
            min_amount: "100".to_string(),
            ..Default::default()
        };
        assert_eq!(
            active_filter_entries(&filters),
            vec![
                ("status", "paid".to_string()),
                ("minAmount", "100".to_string()),
            ]
        );
    }

    #[test]
    fn test_build_url_params_mixes_values_and_deletions() {
        let filters = InvoiceFilters {
            status: "paid".to_string(),
            min_amount: "100".to_string(),
            end_date: "2024-12-31".to_string(),
            ..Default::default()
        };
        assert_eq!(
            build_url_params(&filters),
            vec![
                ("status", Some("paid".to_string())),
                ("minAmount", Some("100".to_string())),
                ("maxAmount", None),
                ("startDate", None),
                ("endDate", Some("2024-12-31".to_string())),
            ]
        );
    }

    #[test]
    fn test_build_url_params_all_none_at_defaults() {
        let params = build_url_params(&InvoiceFilters::default());
        assert_eq!(params.len(), 5);
        assert!(params.iter().all(|(_, value)| value.is_none()));
    }

    #[test]
    fn test_parse_url_filters_absent_without_filter_keys() {
        assert_eq!(parse_url_filters(&params(&[])), None);
        assert_eq!(parse_url_filters(&params(&[("customers", "123,456")])), None);
    }

    #[test]
    fn test_parse_url_filters_reads_all_fields() {
        let parsed = parse_url_filters(&params(&[
            ("status", "pending"),
            ("minAmount", "50"),
            ("maxAmount", "200"),
            ("startDate", "2024-01-01"),
            ("endDate", "2024-06-30"),
        ]))
        .unwrap();
        assert_eq!(
            parsed,
            InvoiceFilters {
                status: "pending".to_string(),
                min_amount: "50".to_string(),
                max_amount: "200".to_string(),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-06-30".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_url_filters_fills_missing_fields_with_defaults() {
        let parsed = parse_url_filters(&params(&[("status", "paid")])).unwrap();
        assert_eq!(
            parsed,
            InvoiceFilters {
                status: "paid".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_url_round_trip_is_lossless_for_active_fields() {
        // URL -> parse -> filter -> rebuild, as the page does on load.
        let url = params(&[
            ("customers", "123"),
            ("status", "pending"),
            ("minAmount", "100"),
            ("endDate", "2024-12-31"),
        ]);

        let parsed = parse_url_filters(&url).unwrap();
        assert_eq!(parsed.status, "pending");

        let filtered = filter_invoices(&mock_invoices(), &parsed);
        assert!(filtered.iter().all(|inv| inv.status == "pending"));
        assert!(filtered.iter().all(|inv| inv.amount >= 100.0));
        assert!(filtered.iter().all(|inv| inv.due_date.as_str() <= "2024-12-31"));

        let rebuilt = build_url_params(&parsed);
        assert_eq!(
            rebuilt,
            vec![
                ("status", Some("pending".to_string())),
                ("minAmount", Some("100".to_string())),
                ("maxAmount", None),
                ("startDate", None),
                ("endDate", Some("2024-12-31".to_string())),
            ]
        );

        // Feeding the rebuilt pairs back through parse reproduces the state.
        let reencoded: HashMap<String, String> = rebuilt
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.to_string(), v)))
            .collect();
        assert_eq!(parse_url_filters(&reencoded).unwrap(), parsed);

        assert_eq!(parse_customer_ids(&url), vec!["123".to_string()]);
    }

    #[test]
    fn test_parse_customer_ids() {
        assert_eq!(parse_customer_ids(&params(&[("customers", "123")])), vec!["123"]);
        assert_eq!(
            parse_customer_ids(&params(&[("customers", "123,456")])),
            vec!["123", "456"]
        );
        // Empty segments are dropped, duplicates and order are kept.
        assert_eq!(
            parse_customer_ids(&params(&[("customers", "456,,123,456,")])),
            vec!["456", "123", "456"]
        );
        assert!(parse_customer_ids(&params(&[])).is_empty());
        assert!(parse_customer_ids(&params(&[("customers", "")])).is_empty());
    }

    #[test]
    fn test_clear_field_resets_to_neutral() {
        let mut filters = InvoiceFilters {
            status: "paid".to_string(),
            min_amount: "100".to_string(),
            ..Default::default()
        };
        filters.clear_field("status");
        filters.clear_field("minAmount");
        assert_eq!(filters, InvoiceFilters::default());
    }
}

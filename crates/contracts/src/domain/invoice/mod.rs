pub mod aggregate;
pub mod filters;
pub mod pagination;

pub use aggregate::{ApiErrorBody, InvoiceDto, InvoiceListResponse};
pub use filters::{
    active_filter_entries, build_url_params, filter_display_value, filter_invoices, filter_label,
    parse_customer_ids, parse_url_filters, InvoiceFilters,
};
pub use pagination::{pagination_info, PaginationInfo};

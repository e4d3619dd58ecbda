use axum::extract::Query;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use contracts::domain::invoice::{ApiErrorBody, InvoiceListResponse};

use crate::domain::invoice;

#[derive(Debug, Deserialize)]
pub struct InvoiceListQuery {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
}

/// GET /api/invoice?customerId=...
pub async fn list_by_customer(
    Query(query): Query<InvoiceListQuery>,
) -> Result<Json<InvoiceListResponse>, (StatusCode, Json<ApiErrorBody>)> {
    let Some(customer_id) = query.customer_id.filter(|id| !id.is_empty()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ApiErrorBody {
                error: "BAD_REQUEST".to_string(),
                msg: "customerId is required".to_string(),
            }),
        ));
    };

    let dataset = invoice::service::list_by_customer(&customer_id);
    tracing::debug!(
        "invoice lookup for customer {} returned {} rows",
        customer_id,
        dataset.len()
    );
    Ok(Json(InvoiceListResponse { dataset }))
}

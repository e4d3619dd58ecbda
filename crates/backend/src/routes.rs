use axum::{routing::get, Router};

use crate::handlers;

/// All routes the mock invoice API exposes.
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/invoice", get(handlers::invoice::list_by_customer))
}

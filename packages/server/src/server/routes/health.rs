use axum::{extract::Extension, Json};
use catalog::CatalogSummary;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    catalog: CatalogSummary,
}

/// Health check endpoint
///
/// Reports the generation and size of the snapshot currently being served.
/// The catalog lives in memory, so there is nothing external to probe.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    let snapshot = state.deps.catalog.snapshot().await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        catalog: snapshot.summary(),
    })
}

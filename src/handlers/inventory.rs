use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::{
    models::{InventorySummary, Product},
    AppState,
};

pub async fn inventory_summary(
    State(state): State<AppState>,
) -> (StatusCode, Json<InventorySummary>) {
    let start = Instant::now();
    let summary = state.catalog.summary();

    info!(
        total_products = summary.total_products,
        total_value = summary.total_value,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Computed inventory summary"
    );

    (StatusCode::OK, Json(summary))
}

pub async fn stock_alerts(State(state): State<AppState>) -> (StatusCode, Json<Vec<Product>>) {
    let alerts: Vec<Product> = state.catalog.alerts().into_iter().cloned().collect();

    info!(count = alerts.len(), "Listed stock alerts");

    (StatusCode::OK, Json(alerts))
}

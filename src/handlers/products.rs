use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::{
    error::AppResult,
    models::{Product, ProductFilters},
    AppState,
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<Vec<Product>>) {
    let start = Instant::now();
    let filters = ProductFilters::from_pairs(pairs);
    let products: Vec<Product> = state.catalog.list(&filters).into_iter().cloned().collect();

    info!(
        count = products.len(),
        category = ?filters.category,
        stock_status = ?filters.stock_status,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Listed products"
    );

    (StatusCode::OK, Json(products))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state
        .catalog
        .get(&product_id)
        .inspect_err(|_| debug!(id = %product_id, "Product lookup missed"))?;

    info!(id = %product.id, "Fetched product");

    Ok((StatusCode::OK, Json(product.clone())))
}

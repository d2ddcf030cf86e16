pub mod inventory;
pub mod products;

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::error::AppError;

pub const SERVICE_NAME: &str = "Product Inventory API";

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

pub async fn fallback() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

pub async fn method_not_allowed() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "detail": "Method Not Allowed" })),
    )
}

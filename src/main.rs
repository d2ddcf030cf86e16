use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

mod auth;
mod catalog;
mod config;
mod error;
mod handlers;
mod models;
mod seed;


use crate::catalog::Catalog;
use crate::config::Config;

/// Shared application state. Everything behind it is read-only after startup,
/// so handlers share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (ignored in production where env vars are injected)
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,product_inventory_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Product Inventory API — Rust + Axum ║");
    info!("╚══════════════════════════════════════╝");

    if config.uses_default_key() {
        warn!("API_KEY not set; using the built-in development key");
    }

    let state = AppState {
        catalog: Arc::new(seed::seed_catalog()),
        config: Arc::new(config),
    };

    let addr = state.config.bind_addr();
    let app = build_router(state);

    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // ── Protected: require x-api-key ────────────────────────────────────────
    let protected = Router::new()
        .route("/products", get(handlers::products::list_products))
        .route("/products/:product_id", get(handlers::products::get_product))
        .route("/inventory/summary", get(handlers::inventory::inventory_summary))
        .route("/inventory/alerts", get(handlers::inventory::stock_alerts))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/", get(handlers::health))
        .merge(protected)
        .fallback(handlers::fallback)
        .method_not_allowed_fallback(handlers::method_not_allowed)

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

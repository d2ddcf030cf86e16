use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::config::API_KEY_HEADER;
use crate::error::{AppError, AppResult};
use crate::AppState;

/// API-key gate for the protected routes.
///
/// No header (or an empty one) is `Unauthenticated`; any other value that is
/// not the configured key is `Forbidden`.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let candidate = request
        .headers()
        .get(API_KEY_HEADER)
        .filter(|value| !value.is_empty());

    let Some(candidate) = candidate else {
        warn!(path = %request.uri().path(), "Rejected request without API key");
        return Err(AppError::Unauthenticated("API key is missing".to_string()));
    };

    if candidate.to_str().ok() != Some(state.config.api_key.as_str()) {
        warn!(path = %request.uri().path(), "Rejected request with invalid API key");
        return Err(AppError::Forbidden("Invalid API key".to_string()));
    }

    Ok(next.run(request).await)
}

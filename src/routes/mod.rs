use axum::{Json, Router, http::StatusCode, http::Uri, routing::get};

use crate::{response::MessageResponse, state::AppState};

pub mod doc;
pub mod health;
pub mod items;
pub mod params;
pub mod wishlist;

/// Item and wishlist routes, unbound.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .merge(items::router())
        .merge(wishlist::router())
}

/// Full application: API routes, health check, docs and the JSON fallback,
/// bound to `state`. Middleware layers are added by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_api_router())
        .merge(doc::scalar_docs())
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn not_found(uri: Uri) -> (StatusCode, Json<MessageResponse>) {
    tracing::debug!(path = %uri.path(), "no route");
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new("route not found")),
    )
}

async fn method_not_allowed(uri: Uri) -> (StatusCode, Json<MessageResponse>) {
    tracing::debug!(path = %uri.path(), "method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(MessageResponse::new("method not allowed")),
    )
}

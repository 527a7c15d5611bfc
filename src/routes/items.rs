use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Path, State,
        rejection::{BytesRejection, PathRejection},
    },
    http::StatusCode,
    routing::{get, patch},
};

use crate::{
    dto::items::ItemList,
    error::{AppError, AppResult, StoreError},
    models::Item,
    response::MessageResponse,
    routes::params::ItemIdQuery,
    services::item_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/item", get(list_items).post(create_item))
        .route("/item/{id}", get(get_item))
        .route("/checkout", patch(checkout_item))
        .route("/return", patch(return_item))
}

#[utoipa::path(
    get,
    path = "/item",
    responses(
        (status = 200, description = "Full inventory", body = ItemList)
    ),
    tag = "Items"
)]
pub async fn list_items(State(state): State<AppState>) -> Json<ItemList> {
    Json(item_service::list_items(&state).await)
}

#[utoipa::path(
    get,
    path = "/item/{id}",
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item", body = Item),
        (status = 404, description = "Item not found", body = MessageResponse),
    ),
    tag = "Items"
)]
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Item>> {
    // An undecodable segment cannot name a stored item.
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(error = %rejection, "item path rejected");
        StoreError::ItemNotFound
    })?;
    let item = item_service::get_item(&state, &id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    post,
    path = "/item",
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Invalid request body", body = MessageResponse),
    ),
    tag = "Items"
)]
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let invalid = || AppError::BadRequest("invalid request body".into());
    let body = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "item body unreadable");
        invalid()
    })?;
    // Decoded as JSON whatever the content type says.
    let item = serde_json::from_slice::<Item>(&body).map_err(|err| {
        tracing::debug!(error = %err, "item body rejected");
        invalid()
    })?;
    let created = item_service::create_item(&state, item).await;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    patch,
    path = "/checkout",
    params(ItemIdQuery),
    responses(
        (status = 200, description = "Quantity decremented", body = Item),
        (status = 400, description = "Missing id or item not available", body = MessageResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
    ),
    tag = "Items"
)]
pub async fn checkout_item(
    State(state): State<AppState>,
    query: ItemIdQuery,
) -> AppResult<Json<Item>> {
    let id = query.require()?;
    let item = item_service::checkout_item(&state, id).await?;
    Ok(Json(item))
}

#[utoipa::path(
    patch,
    path = "/return",
    params(ItemIdQuery),
    responses(
        (status = 200, description = "Quantity incremented", body = Item),
        (status = 400, description = "Missing id", body = MessageResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
    ),
    tag = "Items"
)]
pub async fn return_item(
    State(state): State<AppState>,
    query: ItemIdQuery,
) -> AppResult<Json<Item>> {
    let id = query.require()?;
    let item = item_service::return_item(&state, id).await?;
    Ok(Json(item))
}

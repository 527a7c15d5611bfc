use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
};

use crate::{
    dto::wishlist::Wishlist,
    error::AppResult,
    response::MessageResponse,
    routes::params::{WishlistEntryQuery, WishlistUserQuery},
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/wishlist", get(get_wishlist))
        .route("/wishlist/add", post(add_to_wishlist))
        .route("/wishlist/remove", delete(remove_from_wishlist))
}

#[utoipa::path(
    post,
    path = "/wishlist/add",
    params(WishlistEntryQuery),
    responses(
        (status = 201, description = "Item added to wishlist", body = MessageResponse),
        (status = 400, description = "Missing user_id or item_id", body = MessageResponse),
    ),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    query: WishlistEntryQuery,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (user_id, item_id) = query.require()?;
    let body = wishlist_service::add_to_wishlist(&state, user_id, item_id).await;
    Ok((StatusCode::CREATED, Json(body)))
}

#[utoipa::path(
    delete,
    path = "/wishlist/remove",
    params(WishlistEntryQuery),
    responses(
        (status = 200, description = "Item removed from wishlist", body = MessageResponse),
        (status = 400, description = "Missing user_id or item_id", body = MessageResponse),
        (status = 404, description = "No wishlist for user, or item not in it", body = MessageResponse),
    ),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    query: WishlistEntryQuery,
) -> AppResult<Json<MessageResponse>> {
    let (user_id, item_id) = query.require()?;
    let body = wishlist_service::remove_from_wishlist(&state, user_id, item_id).await?;
    Ok(Json(body))
}

#[utoipa::path(
    get,
    path = "/wishlist",
    params(WishlistUserQuery),
    responses(
        (status = 200, description = "Item ids on the user's wishlist", body = Wishlist),
        (status = 400, description = "Missing user_id", body = MessageResponse),
        (status = 404, description = "No wishlist for user", body = MessageResponse),
    ),
    tag = "Wishlist"
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    query: WishlistUserQuery,
) -> AppResult<Json<Wishlist>> {
    let user_id = query.require()?;
    let wishlist = wishlist_service::get_wishlist(&state, user_id).await?;
    Ok(Json(wishlist))
}

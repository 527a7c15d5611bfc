use crate::{
    dto::wishlist::Wishlist, error::AppResult, response::MessageResponse, state::AppState,
};

pub async fn add_to_wishlist(state: &AppState, user_id: &str, item_id: &str) -> MessageResponse {
    state.wishlists.write().await.add(user_id, item_id);
    tracing::info!(user_id, item_id, "item added to wishlist");
    MessageResponse::new("item added to wishlist")
}

pub async fn remove_from_wishlist(
    state: &AppState,
    user_id: &str,
    item_id: &str,
) -> AppResult<MessageResponse> {
    state.wishlists.write().await.remove(user_id, item_id)?;
    tracing::info!(user_id, item_id, "item removed from wishlist");
    Ok(MessageResponse::new("item removed from wishlist"))
}

pub async fn get_wishlist(state: &AppState, user_id: &str) -> AppResult<Wishlist> {
    let store = state.wishlists.read().await;
    let item_ids = store.get(user_id)?.to_vec();
    Ok(Wishlist {
        user_id: user_id.to_string(),
        item_ids,
    })
}

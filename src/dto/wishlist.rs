use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct Wishlist {
    pub user_id: String,
    pub item_ids: Vec<String>,
}

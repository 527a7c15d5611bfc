use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{items::ItemList, wishlist::Wishlist},
    models::Item,
    response::MessageResponse,
    routes::{health, items, params, wishlist},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        items::list_items,
        items::get_item,
        items::create_item,
        items::checkout_item,
        items::return_item,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        wishlist::get_wishlist
    ),
    components(
        schemas(
            Item,
            ItemList,
            Wishlist,
            MessageResponse,
            health::HealthData,
            params::ItemIdQuery,
            params::WishlistEntryQuery,
            params::WishlistUserQuery
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Items", description = "Inventory endpoints"),
        (name = "Wishlist", description = "Per-user wishlist endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

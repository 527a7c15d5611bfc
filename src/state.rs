use std::sync::Arc;

use tokio::sync::RwLock;

use crate::store::{ItemStore, WishlistStore};

/// Shared handle to both stores. Cloning is cheap; every clone sees the
/// same data.
#[derive(Clone, Default)]
pub struct AppState {
    pub items: Arc<RwLock<ItemStore>>,
    pub wishlists: Arc<RwLock<WishlistStore>>,
}

impl AppState {
    pub fn new(items: ItemStore) -> Self {
        Self {
            items: Arc::new(RwLock::new(items)),
            wishlists: Arc::new(RwLock::new(WishlistStore::new())),
        }
    }

    pub fn seeded() -> Self {
        Self::new(ItemStore::seeded())
    }
}

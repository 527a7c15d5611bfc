//! In-memory collections backing the service. Both stores are plain owned
//! data; sharing and locking happen in [`crate::state::AppState`].

pub mod items;
pub mod wishlist;

pub use items::ItemStore;
pub use wishlist::WishlistStore;

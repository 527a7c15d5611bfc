pub mod items;
pub mod wishlist;

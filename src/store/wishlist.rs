use std::collections::HashMap;

use crate::error::StoreError;

/// Per-user ordered lists of item ids. Duplicates are allowed and ids are
/// not checked against the inventory.
#[derive(Debug, Default, Clone)]
pub struct WishlistStore {
    entries: HashMap<String, Vec<String>>,
}

impl WishlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, user_id: &str, item_id: &str) {
        self.entries
            .entry(user_id.to_string())
            .or_default()
            .push(item_id.to_string());
    }

    /// Removes the first occurrence of `item_id`. An emptied list stays in
    /// the map.
    pub fn remove(&mut self, user_id: &str, item_id: &str) -> Result<(), StoreError> {
        let ids = self
            .entries
            .get_mut(user_id)
            .ok_or(StoreError::UserNotFound)?;
        let pos = ids
            .iter()
            .position(|id| id == item_id)
            .ok_or(StoreError::ItemNotInWishlist)?;
        ids.remove(pos);
        Ok(())
    }

    pub fn get(&self, user_id: &str) -> Result<&[String], StoreError> {
        self.entries
            .get(user_id)
            .map(Vec::as_slice)
            .ok_or(StoreError::UserNotFound)
    }
}

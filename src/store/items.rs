use crate::{error::StoreError, models::Item};

/// Ordered sequence of items. Lookups scan linearly and the first match
/// wins, so duplicate ids shadow each other.
#[derive(Debug, Default, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// The inventory a fresh server starts with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Item::new("1", "In Search of Lost Time", "30.00", 2),
            Item::new("2", "The Great Gatsby", "50.00", 5),
            Item::new("3", "War and Peace", "25.50", 6),
        ])
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn find(&self, id: &str) -> Result<&Item, StoreError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound)
    }

    pub fn find_mut(&mut self, id: &str) -> Result<&mut Item, StoreError> {
        self.items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(StoreError::ItemNotFound)
    }

    /// Appends without checking for an existing id.
    pub fn create(&mut self, item: Item) -> &Item {
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    pub fn decrement_quantity(&mut self, id: &str) -> Result<&Item, StoreError> {
        let item = self.find_mut(id)?;
        if item.quantity <= 0 {
            return Err(StoreError::Unavailable);
        }
        item.quantity -= 1;
        Ok(&*item)
    }

    /// No upper bound; the counter wraps at `i64::MAX`.
    pub fn increment_quantity(&mut self, id: &str) -> Result<&Item, StoreError> {
        let item = self.find_mut(id)?;
        item.quantity = item.quantity.wrapping_add(1);
        Ok(&*item)
    }
}

use crate::{dto::items::ItemList, error::AppResult, models::Item, state::AppState};

pub async fn list_items(state: &AppState) -> ItemList {
    let store = state.items.read().await;
    ItemList {
        items: store.list().to_vec(),
    }
}

pub async fn get_item(state: &AppState, id: &str) -> AppResult<Item> {
    let store = state.items.read().await;
    Ok(store.find(id)?.clone())
}

pub async fn create_item(state: &AppState, item: Item) -> Item {
    let mut store = state.items.write().await;
    let created = store.create(item).clone();
    tracing::info!(item_id = %created.id, quantity = created.quantity, "item created");
    created
}

pub async fn checkout_item(state: &AppState, id: &str) -> AppResult<Item> {
    let mut store = state.items.write().await;
    let item = store.decrement_quantity(id)?.clone();
    tracing::info!(item_id = %item.id, quantity = item.quantity, "item checked out");
    Ok(item)
}

pub async fn return_item(state: &AppState, id: &str) -> AppResult<Item> {
    let mut store = state.items.write().await;
    let item = store.increment_quantity(id)?.clone();
    tracing::info!(item_id = %item.id, quantity = item.quantity, "item returned");
    Ok(item)
}

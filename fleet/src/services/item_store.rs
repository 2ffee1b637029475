//! In-memory item store

use std::sync::Arc;

use shared::{Item, ItemId};
use tokio::sync::RwLock;

use crate::error::{FleetError, FleetResult};
use crate::traits::ItemStore;

/// Item records kept in insertion order behind an async lock
#[derive(Clone, Default)]
pub struct InMemoryItemStore {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn insert(&self, item: Item) -> FleetResult<Item> {
        let mut items = self.items.write().await;
        if items.iter().any(|i| i.id == item.id) {
            return Err(FleetError::storage(format!("item {} already exists", item.id)));
        }

        items.push(item.clone());
        Ok(item)
    }

    async fn get(&self, id: ItemId) -> FleetResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn get_many(&self, ids: Vec<ItemId>) -> FleetResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|i| ids.contains(&i.id)).cloned().collect())
    }

    async fn update(&self, item: Item) -> FleetResult<Option<Item>> {
        let mut items = self.items.write().await;
        let Some(stored) = items.iter_mut().find(|i| i.id == item.id) else {
            return Ok(None);
        };

        *stored = item.clone();
        Ok(Some(item))
    }

    async fn list(&self) -> FleetResult<Vec<Item>> {
        Ok(self.items.read().await.clone())
    }

    async fn remove(&self, id: ItemId) -> FleetResult<Option<Item>> {
        let mut items = self.items.write().await;
        let removed = items
            .iter()
            .position(|i| i.id == id)
            .map(|index| items.remove(index));
        Ok(removed)
    }
}

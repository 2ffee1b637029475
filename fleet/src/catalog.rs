//! Item catalog

use std::sync::Arc;

use chrono::Utc;
use shared::{Item, ItemId, ItemPatch, NewItem};
use tracing::info;

use crate::core::validation::{validate_name, validate_weight};
use crate::error::{FleetError, FleetResult};
use crate::traits::ItemStore;

/// Administrative access to cargo items
///
/// Editing an item's weight does not touch movers already carrying it; their
/// load was fixed when the item was assigned.
pub struct ItemCatalog<I: ItemStore> {
    store: Arc<I>,
}

impl<I: ItemStore> ItemCatalog<I> {
    pub fn new(store: Arc<I>) -> Self {
        Self { store }
    }

    pub async fn create(&self, name: &str, weight: f64) -> FleetResult<Item> {
        let name = validate_name("name", name)?;
        let weight = validate_weight("weight", weight)?;

        let item = self.store.insert(Item::new(name, weight)).await?;
        info!(item = %item.id, "📦 Added item '{}' ({}kg)", item.name, item.weight);
        Ok(item)
    }

    pub async fn register(&self, request: NewItem) -> FleetResult<Item> {
        self.create(&request.name, request.weight).await
    }

    pub async fn get(&self, id: ItemId) -> FleetResult<Item> {
        self.store.get(id).await?.ok_or(FleetError::ItemNotFound { id })
    }

    pub async fn update(&self, id: ItemId, patch: ItemPatch) -> FleetResult<Item> {
        let mut item = self.get(id).await?;
        if patch.is_empty() {
            return Ok(item);
        }

        if let Some(name) = patch.name.as_deref() {
            item.name = validate_name("name", name)?;
        }
        if let Some(weight) = patch.weight {
            item.weight = validate_weight("weight", weight)?;
        }

        item.updated_at = Utc::now();
        self.store
            .update(item)
            .await?
            .ok_or(FleetError::ItemNotFound { id })
    }

    pub async fn list(&self) -> FleetResult<Vec<Item>> {
        self.store.list().await
    }

    pub async fn delete(&self, id: ItemId) -> FleetResult<Item> {
        let removed = self.store.remove(id).await?.ok_or(FleetError::ItemNotFound { id })?;
        info!(item = %id, "🗑️ Removed item '{}'", removed.name);
        Ok(removed)
    }
}

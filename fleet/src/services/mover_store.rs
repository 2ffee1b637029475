//! In-memory mover store

use std::cmp::Ordering;
use std::sync::Arc;

use shared::{Mover, MoverId};
use tokio::sync::RwLock;

use crate::error::{FleetError, FleetResult};
use crate::traits::{MoverSortField, MoverStore, SortOrder};

/// Mover records kept in insertion order behind an async lock
#[derive(Clone, Default)]
pub struct InMemoryMoverStore {
    movers: Arc<RwLock<Vec<Mover>>>,
}

impl InMemoryMoverStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn compare(field: MoverSortField, a: &Mover, b: &Mover) -> Ordering {
        match field {
            MoverSortField::Name => a.name.cmp(&b.name),
            MoverSortField::WeightLimit => a.weight_limit.total_cmp(&b.weight_limit),
            MoverSortField::CompletedMissions => a.completed_missions.cmp(&b.completed_missions),
            MoverSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        }
    }
}

#[async_trait::async_trait]
impl MoverStore for InMemoryMoverStore {
    async fn insert(&self, mut mover: Mover) -> FleetResult<Mover> {
        let mut movers = self.movers.write().await;
        if movers.iter().any(|m| m.id == mover.id) {
            return Err(FleetError::storage(format!("mover {} already exists", mover.id)));
        }

        mover.revision = 1;
        movers.push(mover.clone());
        Ok(mover)
    }

    async fn get(&self, id: MoverId) -> FleetResult<Option<Mover>> {
        let movers = self.movers.read().await;
        Ok(movers.iter().find(|m| m.id == id).cloned())
    }

    async fn update(&self, mut mover: Mover) -> FleetResult<Option<Mover>> {
        let mut movers = self.movers.write().await;
        let Some(stored) = movers.iter_mut().find(|m| m.id == mover.id) else {
            return Ok(None);
        };

        if stored.revision != mover.revision {
            return Err(FleetError::ConcurrentModification { mover_id: mover.id });
        }

        mover.revision += 1;
        *stored = mover.clone();
        Ok(Some(mover))
    }

    async fn list(&self) -> FleetResult<Vec<Mover>> {
        Ok(self.movers.read().await.clone())
    }

    async fn list_sorted(
        &self,
        field: MoverSortField,
        order: SortOrder,
    ) -> FleetResult<Vec<Mover>> {
        let mut movers = self.movers.read().await.clone();
        // sort_by is stable, so equal keys keep insertion order either way
        match order {
            SortOrder::Ascending => movers.sort_by(|a, b| Self::compare(field, a, b)),
            SortOrder::Descending => movers.sort_by(|a, b| Self::compare(field, b, a)),
        }
        Ok(movers)
    }

    async fn remove(&self, id: MoverId) -> FleetResult<Option<Mover>> {
        let mut movers = self.movers.write().await;
        let removed = movers
            .iter()
            .position(|m| m.id == id)
            .map(|index| movers.remove(index));
        Ok(removed)
    }
}

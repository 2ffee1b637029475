//! Fleet facade
//!
//! Wires the registry, the item catalog and mission control over one set of
//! stores so every entry point sees the same records.

use std::sync::Arc;

use shared::{ItemId, MissionLogEntry, Mover, MoverId};

use crate::catalog::ItemCatalog;
use crate::config::FleetConfig;
use crate::error::FleetResult;
use crate::mission::MissionControl;
use crate::registry::MoverRegistry;
use crate::services::{InMemoryItemStore, InMemoryMissionLog, InMemoryMoverStore};
use crate::traits::{ItemStore, MissionLogStore, MoverStore};

/// Fleet backed by the in-memory adapters
pub type InMemoryFleet = Fleet<InMemoryMoverStore, InMemoryItemStore, InMemoryMissionLog>;

pub struct Fleet<M, I, L>
where
    M: MoverStore,
    I: ItemStore,
    L: MissionLogStore,
{
    movers: MoverRegistry<M>,
    items: ItemCatalog<I>,
    missions: MissionControl<M, I, L>,
}

impl<M, I, L> Fleet<M, I, L>
where
    M: MoverStore,
    I: ItemStore,
    L: MissionLogStore,
{
    /// Create a fleet with injected stores
    pub fn new(movers: M, items: I, log: L, config: FleetConfig) -> Self {
        Self::from_shared(Arc::new(movers), Arc::new(items), Arc::new(log), config)
    }

    /// Create a fleet over stores the caller keeps handles to
    pub fn from_shared(movers: Arc<M>, items: Arc<I>, log: Arc<L>, config: FleetConfig) -> Self {
        Self {
            movers: MoverRegistry::new(Arc::clone(&movers)),
            items: ItemCatalog::new(Arc::clone(&items)),
            missions: MissionControl::new(movers, items, log, config),
        }
    }

    pub fn movers(&self) -> &MoverRegistry<M> {
        &self.movers
    }

    pub fn items(&self) -> &ItemCatalog<I> {
        &self.items
    }

    pub fn missions(&self) -> &MissionControl<M, I, L> {
        &self.missions
    }

    pub fn config(&self) -> &FleetConfig {
        self.missions.config()
    }

    pub async fn load(&self, mover_id: MoverId, item_ids: &[ItemId]) -> FleetResult<Mover> {
        self.missions.load(mover_id, item_ids).await
    }

    pub async fn start_mission(&self, mover_id: MoverId) -> FleetResult<Mover> {
        self.missions.start_mission(mover_id).await
    }

    pub async fn end_mission(&self, mover_id: MoverId) -> FleetResult<Mover> {
        self.missions.end_mission(mover_id).await
    }

    pub async fn most_active(&self) -> FleetResult<Vec<Mover>> {
        self.missions.most_active().await
    }

    /// Mission log newest first, optionally narrowed to one mover
    pub async fn mission_logs(
        &self,
        mover_id: Option<MoverId>,
    ) -> FleetResult<Vec<MissionLogEntry>> {
        match mover_id {
            Some(id) => self.missions.logs_for_mover(id).await,
            None => self.missions.logs().await,
        }
    }
}

impl InMemoryFleet {
    pub fn in_memory(config: FleetConfig) -> Self {
        Self::new(
            InMemoryMoverStore::new(),
            InMemoryItemStore::new(),
            InMemoryMissionLog::new(),
            config,
        )
    }
}

//! Storage port definitions with mockall annotations for testing
//!
//! Movers, items and the mission log are three independently addressable
//! collections. The core only talks to them through these traits, so the
//! state machine can run against the in-memory adapters or a mock.

use shared::{Item, ItemId, MissionLogEntry, Mover, MoverId, NewMissionLogEntry};

use crate::error::FleetResult;

/// Sort direction for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Mover fields a store can sort by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoverSortField {
    Name,
    WeightLimit,
    CompletedMissions,
    CreatedAt,
}

/// Keyed storage for mover records
#[mockall::automock]
#[async_trait::async_trait]
pub trait MoverStore: Send + Sync {
    /// Persist a new mover; the stored record is returned with its first revision
    async fn insert(&self, mover: Mover) -> FleetResult<Mover>;

    async fn get(&self, id: MoverId) -> FleetResult<Option<Mover>>;

    /// Replace a mover, conditional on the stored revision still matching
    /// `mover.revision`
    ///
    /// # Returns
    /// The stored record with its new revision, `None` if the mover no longer
    /// exists, or `ConcurrentModification` if another write got there first.
    async fn update(&self, mover: Mover) -> FleetResult<Option<Mover>>;

    /// All movers in insertion order
    async fn list(&self) -> FleetResult<Vec<Mover>>;

    /// All movers sorted by `field`; ties keep insertion order
    async fn list_sorted(&self, field: MoverSortField, order: SortOrder) -> FleetResult<Vec<Mover>>;

    async fn remove(&self, id: MoverId) -> FleetResult<Option<Mover>>;
}

/// Keyed storage for cargo items
#[mockall::automock]
#[async_trait::async_trait]
pub trait ItemStore: Send + Sync {
    async fn insert(&self, item: Item) -> FleetResult<Item>;

    async fn get(&self, id: ItemId) -> FleetResult<Option<Item>>;

    /// Look up a set of ids; unknown ids are simply absent from the result
    async fn get_many(&self, ids: Vec<ItemId>) -> FleetResult<Vec<Item>>;

    async fn update(&self, item: Item) -> FleetResult<Option<Item>>;

    async fn list(&self) -> FleetResult<Vec<Item>>;

    async fn remove(&self, id: ItemId) -> FleetResult<Option<Item>>;
}

/// Append-only storage for mission log entries
#[mockall::automock]
#[async_trait::async_trait]
pub trait MissionLogStore: Send + Sync {
    /// Append an entry, assigning its id, sequence and timestamp
    async fn append(&self, entry: NewMissionLogEntry) -> FleetResult<MissionLogEntry>;

    async fn list_newest_first(&self) -> FleetResult<Vec<MissionLogEntry>>;

    async fn list_for_mover(&self, mover_id: MoverId) -> FleetResult<Vec<MissionLogEntry>>;
}

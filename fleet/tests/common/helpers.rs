//! Test helpers and builder patterns for fleet tests

use ::fleet::{
    Fleet, FleetConfig, InMemoryFleet, MissingItemPolicy, MockItemStore, MockMissionLogStore,
    MockMoverStore,
};
use shared::{Item, ItemId, MissionAction, MissionLogEntry, Mover, MoverState};

/// Builder for a `Fleet` over mockall stores
///
/// Only `get` expectations are installed by default; write expectations are
/// left to each test so unexpected writes fail loudly.
pub struct FleetBuilder {
    movers: MockMoverStore,
    items: MockItemStore,
    log: MockMissionLogStore,
    config: FleetConfig,
}

impl FleetBuilder {
    pub fn new() -> Self {
        Self {
            movers: MockMoverStore::new(),
            items: MockItemStore::new(),
            log: MockMissionLogStore::new(),
            config: FleetConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FleetConfig) -> Self {
        self.config = config;
        self
    }

    /// Serve `mover` from every `get`
    pub fn with_stored_mover(mut self, mover: Mover) -> Self {
        self.movers
            .expect_get()
            .returning(move |_| Ok(Some(mover.clone())))
            .times(0..);
        self
    }

    /// Serve `items` from every `get_many`, filtered by the requested ids
    pub fn with_stored_items(mut self, items: Vec<Item>) -> Self {
        self.items
            .expect_get_many()
            .returning(move |ids: Vec<ItemId>| {
                Ok(items.iter().filter(|item| ids.contains(&item.id)).cloned().collect())
            })
            .times(0..);
        self
    }

    pub fn with_movers<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockMoverStore),
    {
        setup(&mut self.movers);
        self
    }

    pub fn with_items<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockItemStore),
    {
        setup(&mut self.items);
        self
    }

    pub fn with_log<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockMissionLogStore),
    {
        setup(&mut self.log);
        self
    }

    pub fn build(self) -> Fleet<MockMoverStore, MockItemStore, MockMissionLogStore> {
        Fleet::new(self.movers, self.items, self.log, self.config)
    }
}

impl Default for FleetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for in-memory scenarios and common assertions
pub struct TestHelpers;

impl TestHelpers {
    pub fn in_memory() -> InMemoryFleet {
        InMemoryFleet::in_memory(FleetConfig::default())
    }

    pub fn strict_in_memory() -> InMemoryFleet {
        InMemoryFleet::in_memory(FleetConfig::default().with_missing_items(MissingItemPolicy::Reject))
    }

    /// Register a mover and a set of items, returning their records
    pub async fn seed(fleet: &InMemoryFleet, weight_limit: f64, weights: &[f64]) -> (Mover, Vec<Item>) {
        let mover = fleet.movers().create("Gandalf", weight_limit).await.unwrap();
        let mut items = Vec::with_capacity(weights.len());
        for (index, weight) in weights.iter().enumerate() {
            let item = fleet
                .items()
                .create(&format!("Item {}", index + 1), *weight)
                .await
                .unwrap();
            items.push(item);
        }
        (mover, items)
    }

    /// Run a full Load → Start → End cycle carrying `items`
    pub async fn complete_mission(fleet: &InMemoryFleet, mover: &Mover, items: &[ItemId]) -> Mover {
        fleet.missions().load(mover.id, items).await.unwrap();
        fleet.missions().start_mission(mover.id).await.unwrap();
        fleet.missions().end_mission(mover.id).await.unwrap()
    }

    pub fn actions(entries: &[MissionLogEntry]) -> Vec<MissionAction> {
        entries.iter().map(|entry| entry.action).collect()
    }

    /// Assert the invariants every stored mover must satisfy
    pub fn assert_consistent(mover: &Mover) {
        assert!(mover.current_weight >= 0.0);
        assert!(mover.current_weight <= mover.weight_limit);
        if mover.state == MoverState::Resting {
            assert!(mover.items.is_empty(), "resting mover still carries items");
            assert_eq!(mover.current_weight, 0.0);
        }
    }
}

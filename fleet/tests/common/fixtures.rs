//! Test fixtures and data for fleet tests

use chrono::Utc;
use shared::{Item, ItemId, Mover, MoverId, MoverState};

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const MOVER_1: &'static str = "550e8400-e29b-41d4-a716-446655440001";
    pub const MOVER_2: &'static str = "550e8400-e29b-41d4-a716-446655440002";
    pub const ITEM_1: &'static str = "6ba7b810-9dad-11d1-80b4-00c04fd430c1";
    pub const ITEM_2: &'static str = "6ba7b810-9dad-11d1-80b4-00c04fd430c2";

    pub const WEIGHT_LIMIT: f64 = 100.0;
    pub const HEAVY_ITEM: f64 = 60.0;
    pub const MEDIUM_ITEM: f64 = 50.0;

    pub fn mover_id_1() -> MoverId {
        MoverId::from_string(Self::MOVER_1).unwrap()
    }

    pub fn mover_id_2() -> MoverId {
        MoverId::from_string(Self::MOVER_2).unwrap()
    }

    pub fn item_id_1() -> ItemId {
        ItemId::from_string(Self::ITEM_1).unwrap()
    }

    pub fn item_id_2() -> ItemId {
        ItemId::from_string(Self::ITEM_2).unwrap()
    }

    /// A stored, resting mover with the standard limit
    pub fn resting_mover() -> Mover {
        let mut mover = Mover::new("Gandalf", Self::WEIGHT_LIMIT);
        mover.id = Self::mover_id_1();
        mover.revision = 1;
        mover
    }

    /// A stored mover in `state` carrying `items` of `weight` in total
    pub fn mover_in(state: MoverState, items: Vec<ItemId>, weight: f64) -> Mover {
        let mut mover = Self::resting_mover();
        mover.state = state;
        mover.items = items;
        mover.current_weight = weight;
        mover.updated_at = Utc::now();
        mover
    }

    pub fn item(id: ItemId, name: &str, weight: f64) -> Item {
        let mut item = Item::new(name, weight);
        item.id = id;
        item
    }

    pub fn heavy_item() -> Item {
        Self::item(Self::item_id_1(), "Anvil", Self::HEAVY_ITEM)
    }

    pub fn medium_item() -> Item {
        Self::item(Self::item_id_2(), "Cauldron", Self::MEDIUM_ITEM)
    }
}

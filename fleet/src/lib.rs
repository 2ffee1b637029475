//! Fleet library for the Magic Movers mission lifecycle
//!
//! Movers carry weighted items through Load → StartMission → EndMission.
//! This crate owns the state machine, capacity rules, the mission log and
//! the mover ranking, and talks to storage only through the traits in
//! [`traits`] so it can run against in-memory adapters or mocks.

pub mod audit;
pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
pub mod fleet;
pub mod mission;
pub mod registry;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use audit::AuditLog;
pub use catalog::ItemCatalog;
pub use config::{FleetConfig, MissingItemPolicy};
pub use error::{FleetError, FleetResult};
pub use fleet::{Fleet, InMemoryFleet};
pub use mission::MissionControl;
pub use registry::MoverRegistry;
pub use services::{InMemoryItemStore, InMemoryMissionLog, InMemoryMoverStore};
pub use traits::{
    ItemStore, MissionLogStore, MockItemStore, MockMissionLogStore, MockMoverStore, MoverSortField,
    MoverStore, SortOrder,
};

//! Service implementations
//!
//! In-memory adapters for the storage ports. They back the HTTP server and
//! the integration tests; a durable adapter implements the same traits.

pub mod item_store;
pub mod mission_log;
pub mod mover_store;

#[cfg(test)]
mod tests;

pub use item_store::InMemoryItemStore;
pub use mission_log::InMemoryMissionLog;
pub use mover_store::InMemoryMoverStore;

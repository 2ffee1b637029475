//! Core types used throughout the fleet service

pub mod ids;
pub mod records;

pub use ids::{ItemId, LogEntryId, MoverId};
pub use records::{
    Item, MissionAction, MissionLogEntry, Mover, MoverState, NewMissionLogEntry,
};

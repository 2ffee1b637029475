//! Request payloads exchanged with the fleet service
//!
//! - `catalog`: mover and item administration
//! - `mission`: load / start / end transitions and log queries

pub mod catalog;
pub mod mission;

pub use catalog::{ItemPatch, MoverPatch, NewItem, NewMover};
pub use mission::{LoadRequest, LogQuery, MissionRequest};

//! Shared types for the Magic Movers fleet service
//!
//! Contains the records, identifiers and wire messages used by both the
//! fleet core and the HTTP boundary.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use messages::{
    // Fleet administration
    ItemPatch, MoverPatch, NewItem, NewMover,
    // Mission control
    LoadRequest, LogQuery, MissionRequest,
};

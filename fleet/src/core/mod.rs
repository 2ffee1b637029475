//! Core business logic modules
//!
//! Pure functions with no I/O: capacity checks, state transitions, ranking
//! and input validation. Everything here is deterministic.

pub mod capacity;
pub mod ranking;
pub mod transitions;
pub mod validation;

pub use capacity::{can_load, check_capacity, remaining_capacity};
pub use ranking::rank_most_active;
pub use transitions::{next_state, transition};

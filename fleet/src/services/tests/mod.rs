//! Service-specific tests
//!
//! One file per in-memory adapter.

mod item_store;

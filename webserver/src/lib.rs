//! Webserver library for the Magic Movers fleet
//!
//! JSON over HTTP in front of the `fleet` crate: mover and item
//! administration, mission transitions, the activity ranking and the
//! mission log.

pub mod config;
pub mod error;
pub mod state;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use config::ServerConfig;
pub use error::{WebServerError, WebServerResult};
pub use state::WebServerState;
pub use webserver_impl::WebServer;

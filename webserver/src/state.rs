//! Webserver state management

use std::net::SocketAddr;
use std::time::Instant;

use chrono::{DateTime, Utc};

/// Process-level facts reported by the health endpoint
#[derive(Debug)]
pub struct WebServerState {
    pub bind_address: SocketAddr,
    pub started_at: DateTime<Utc>,
    server_start_time: Instant,
}

impl WebServerState {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            started_at: Utc::now(),
            server_start_time: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }
}

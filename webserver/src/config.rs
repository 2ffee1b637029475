//! HTTP server configuration

use std::net::{IpAddr, SocketAddr};

use crate::error::{WebServerError, WebServerResult};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self { host: host.into(), port }
    }

    /// Resolve the bind address, rejecting hosts that are not IP literals
    pub fn bind_address(&self) -> WebServerResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| WebServerError::config(format!("Invalid host '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

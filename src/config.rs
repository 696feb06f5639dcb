//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default ARP entry lifetime in seconds
    pub arp_timeout: i64,
    /// HTTP control API port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ARP_TIMEOUT` - Entry lifetime in seconds (default: 300)
    /// - `SERVER_PORT` - HTTP control API port (default: 3000)
    ///
    /// The epoch clock ticks every `ARP_TIMEOUT / 10` seconds (at least 1).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            arp_timeout: env::var("ARP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.arp_timeout),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arp_timeout: 300,
            server_port: 3000,
        }
    }
}

//! ARP Cache - lock-free IPv4 to MAC resolution cache
//!
//! Fixed 65,536-slot table keyed by the last two octets of the address,
//! with wait-free lookups and TTL expiry judged against a coarse epoch clock.
//! Ships with an HTTP control API for out-of-process resolvers.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{ArpCache, MacAddr};
pub use config::Config;
pub use error::{ArpCacheError, Result};

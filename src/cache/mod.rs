//! Cache Module
//!
//! Fixed-size, lock-free IPv4 to MAC cache with coarse-epoch TTL expiry.

mod arp;
mod entry;
mod index;
mod stats;
mod store;


// Re-export public types
pub use arp::ArpCache;
pub use entry::{Entry, MacAddr};
pub use index::{slot_key, slot_key_v4, SLOT_COUNT};
pub use stats::CacheStats;
pub use store::SlotStore;

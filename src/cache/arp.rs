//! ARP Cache Module
//!
//! Public façade combining the slot store and the epoch clock.

use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicI64, Ordering};

use tracing::{debug, info};

use crate::cache::{slot_key_v4, CacheStats, Entry, MacAddr, SlotStore};
use crate::error::{ArpCacheError, Result};
use crate::tasks::{period_for_timeout, EpochClock};

// == ARP Cache ==
/// IPv4 to MAC resolution cache with coarse-epoch expiry.
///
/// All lookups and writes are lock-free and safe to call from any thread;
/// share the cache through an `Arc`. Expiry is judged against the epoch
/// clock, which lags real time by at most a tenth of the default timeout.
#[derive(Debug)]
pub struct ArpCache {
    slots: SlotStore,
    clock: EpochClock,
    default_timeout: AtomicI64,
}

impl ArpCache {
    // == Constructor ==
    /// Creates a cache whose entries live for `timeout_secs` by default and
    /// starts its epoch clock.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    /// - `InvalidTimeout` if `timeout_secs` is zero or negative
    /// - `NoRuntime` if no tokio runtime is available
    pub fn new(timeout_secs: i64) -> Result<Self> {
        if timeout_secs <= 0 {
            return Err(ArpCacheError::InvalidTimeout(timeout_secs));
        }

        let clock = EpochClock::start(period_for_timeout(timeout_secs))?;
        info!(
            "ARP cache created: default_timeout={}s, clock_period={}s",
            timeout_secs,
            clock.period().as_secs()
        );

        Ok(Self {
            slots: SlotStore::new(),
            clock,
            default_timeout: AtomicI64::new(timeout_secs),
        })
    }

    // == Default Timeout ==
    /// Sets the lifetime applied by subsequent [`ArpCache::set`] calls.
    ///
    /// Entries already stored keep their expiry. The clock period is fixed
    /// at construction and does not follow this value.
    pub fn set_default_timeout(&self, timeout_secs: i64) {
        self.default_timeout.store(timeout_secs, Ordering::Relaxed);
        debug!("Default ARP timeout set to {}s", timeout_secs);
    }

    /// Returns the lifetime applied by [`ArpCache::set`].
    pub fn default_timeout(&self) -> i64 {
        self.default_timeout.load(Ordering::Relaxed)
    }

    /// Returns the coarse epoch used for expiry decisions.
    pub fn epoch(&self) -> i64 {
        self.clock.now()
    }

    // == Get ==
    /// Looks up the MAC address for `ip`.
    ///
    /// Returns `None` when the slot is empty or its entry has expired, which
    /// callers should treat as "resolution required". A slot owned by an
    /// aliasing address (same last two octets) is returned as-is.
    #[inline]
    pub fn get(&self, ip: Ipv4Addr) -> Option<MacAddr> {
        let entry = self.slots.load(slot_key_v4(ip));
        if entry.is_empty() || entry.is_expired(self.clock.now()) {
            None
        } else {
            Some(entry.mac)
        }
    }

    // == Set ==
    /// Records `mac` for `ip`, expiring one default timeout from now.
    ///
    /// Unconditionally replaces whatever the slot held, including an entry
    /// for an aliasing address.
    #[inline]
    pub fn set(&self, ip: Ipv4Addr, mac: MacAddr) {
        let expires = self.clock.now().saturating_add(self.default_timeout());
        self.slots.store(slot_key_v4(ip), Entry::new(mac, expires));
    }

    // == Set Expiry ==
    /// Moves the expiry of the entry in `ip`'s slot to `epoch_secs`, keeping
    /// its MAC.
    ///
    /// Always returns true. A slot that was never written is left empty.
    /// Concurrent writers to the same slot are not serialized against this
    /// call; the last store wins.
    pub fn set_expiry(&self, ip: Ipv4Addr, epoch_secs: i64) -> bool {
        let key = slot_key_v4(ip);
        let entry = self.slots.load(key);
        if !entry.is_empty() {
            self.slots.store(key, entry.with_expiry(epoch_secs));
        }
        true
    }

    // == Delete ==
    /// Expires the entry in `ip`'s slot immediately. The MAC bytes remain.
    pub fn delete(&self, ip: Ipv4Addr) -> bool {
        self.set_expiry(ip, 0)
    }

    // == Stats ==
    /// Returns an occupancy snapshot. Scans every slot.
    pub fn stats(&self) -> CacheStats {
        let epoch = self.clock.now();
        CacheStats {
            slots: self.slots.slot_count(),
            live_entries: self.slots.count_live(epoch),
            epoch,
            default_timeout: self.default_timeout(),
            clock_running: self.clock.is_running(),
        }
    }

    /// Returns true while the epoch clock is ticking.
    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    // == Stop ==
    /// Stops the epoch clock and waits for it to exit.
    ///
    /// The cache stays usable afterwards with a frozen epoch. Calling this
    /// more than once is harmless.
    pub async fn stop(&self) {
        self.clock.stop().await;
    }

    #[cfg(test)]
    pub(crate) fn set_epoch(&self, epoch: i64) {
        self.clock.set_now(epoch);
    }

    #[cfg(test)]
    pub(crate) fn raw_entry(&self, ip: Ipv4Addr) -> Entry {
        self.slots.load(slot_key_v4(ip))
    }
}

//! Cache Statistics Module
//!
//! Point-in-time snapshot of the cache for operators. Nothing here is
//! updated on the lookup path; the snapshot is computed when requested.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of cache occupancy and timing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Total slot count (fixed)
    pub slots: usize,
    /// Slots holding an entry that has not expired at `epoch`
    pub live_entries: usize,
    /// Coarse epoch the snapshot was evaluated against
    pub epoch: i64,
    /// Lifetime in seconds applied by subsequent sets
    pub default_timeout: i64,
    /// Whether the epoch clock is still ticking
    pub clock_running: bool,
}

impl CacheStats {
    // == Occupancy ==
    /// Fraction of slots holding a live entry.
    pub fn occupancy(&self) -> f64 {
        if self.slots == 0 {
            0.0
        } else {
            self.live_entries as f64 / self.slots as f64
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_empty() {
        let stats = CacheStats::default();
        assert_eq!(stats.occupancy(), 0.0);
    }

    #[test]
    fn test_occupancy_partial() {
        let stats = CacheStats {
            slots: 4,
            live_entries: 1,
            ..Default::default()
        };
        assert_eq!(stats.occupancy(), 0.25);
    }

    #[test]
    fn test_stats_serialize() {
        let stats = CacheStats {
            slots: 65_536,
            live_entries: 3,
            epoch: 1_700_000_000,
            default_timeout: 30,
            clock_running: true,
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"live_entries\":3"));
        assert!(json.contains("\"clock_running\":true"));
    }
}

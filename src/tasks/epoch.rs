//! Epoch Clock
//!
//! Background task that keeps a coarse "current time" in an atomic, so cache
//! operations never have to read the system clock themselves.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use crate::error::{ArpCacheError, Result};

/// The clock ticks this many times per entry lifetime.
pub const TICK_DIVISOR: i64 = 10;

/// Returns the tick period for a given entry lifetime: a tenth of it, but
/// never less than one second.
pub fn period_for_timeout(timeout_secs: i64) -> i64 {
    (timeout_secs / TICK_DIVISOR).max(1)
}

/// Current wall-clock time in whole seconds since the Unix epoch.
pub fn unix_now() -> i64 {
    chrono::Utc::now().timestamp()
}

// == Epoch Clock ==
/// Owned background ticker publishing the current time in seconds.
///
/// Readers see a value that lags wall-clock time by at most one period.
/// After [`EpochClock::stop`] returns the value is frozen.
#[derive(Debug)]
pub struct EpochClock {
    epoch: Arc<AtomicI64>,
    period: Duration,
    shutdown: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl EpochClock {
    // == Start ==
    /// Seeds the epoch with the current time and spawns the ticker on the
    /// ambient tokio runtime.
    ///
    /// # Errors
    /// - `InvalidTimeout` if `period_secs` is zero or negative
    /// - `NoRuntime` if called outside a tokio runtime
    pub fn start(period_secs: i64) -> Result<Self> {
        if period_secs <= 0 {
            return Err(ArpCacheError::InvalidTimeout(period_secs));
        }
        let runtime = Handle::try_current().map_err(|_| ArpCacheError::NoRuntime)?;

        let period = Duration::from_secs(period_secs.unsigned_abs());
        let epoch = Arc::new(AtomicI64::new(unix_now()));
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let ticker_epoch = Arc::clone(&epoch);
        let handle = runtime.spawn(async move {
            info!("Starting epoch clock with period of {} seconds", period_secs);

            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick fires immediately and the epoch is already seeded.
            ticker.tick().await;

            loop {
                tokio::select! {
                    biased;
                    // Fires on stop() and when the clock is dropped.
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        let now = unix_now();
                        ticker_epoch.store(now, Ordering::Release);
                        trace!(epoch = now, "epoch clock tick");
                    }
                }
            }

            debug!("Epoch clock task exiting");
        });

        Ok(Self {
            epoch,
            period,
            shutdown,
            handle: Mutex::new(Some(handle)),
        })
    }

    // == Now ==
    /// Returns the last published epoch in seconds.
    #[inline]
    pub fn now(&self) -> i64 {
        self.epoch.load(Ordering::Acquire)
    }

    /// Returns the tick period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Returns true until the ticker task has been stopped.
    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Stop ==
    /// Signals the ticker and waits for it to exit.
    ///
    /// Once this returns the epoch is never written again. Further calls
    /// return immediately.
    pub async fn stop(&self) {
        let handle = self
            .handle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let Some(handle) = handle else {
            return;
        };

        // Ignoring the error: the receiver is gone only if the task already ended.
        let _ = self.shutdown.send(true);
        let _ = handle.await;
        info!("Epoch clock stopped at epoch {}", self.now());
    }

    #[cfg(test)]
    pub(crate) fn set_now(&self, epoch: i64) {
        self.epoch.store(epoch, Ordering::Release);
    }
}

impl Drop for EpochClock {
    fn drop(&mut self) {
        let handle = self
            .handle
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_for_timeout() {
        assert_eq!(period_for_timeout(300), 30);
        assert_eq!(period_for_timeout(30), 3);
        assert_eq!(period_for_timeout(9), 1);
        assert_eq!(period_for_timeout(1), 1);
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let result = EpochClock::start(1);
        assert!(matches!(result, Err(ArpCacheError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_start_rejects_non_positive_period() {
        assert!(matches!(
            EpochClock::start(0),
            Err(ArpCacheError::InvalidTimeout(0))
        ));
        assert!(matches!(
            EpochClock::start(-3),
            Err(ArpCacheError::InvalidTimeout(-3))
        ));
    }

    #[tokio::test]
    async fn test_epoch_seeded_on_start() {
        let before = unix_now();
        let clock = EpochClock::start(1).unwrap();
        let after = unix_now();

        assert!(clock.now() >= before && clock.now() <= after);
        assert_eq!(clock.period(), Duration::from_secs(1));
        clock.stop().await;
    }

    #[tokio::test]
    async fn test_clock_ticks() {
        let clock = EpochClock::start(1).unwrap();
        clock.set_now(0);

        // Wait past one period so the ticker republishes wall-clock time
        tokio::time::sleep(Duration::from_millis(1500)).await;

        assert!(clock.now() > 0, "Ticker should have refreshed the epoch");
        clock.stop().await;
    }

    #[tokio::test]
    async fn test_stop_freezes_epoch() {
        let clock = EpochClock::start(1).unwrap();
        assert!(clock.is_running());

        clock.stop().await;
        assert!(!clock.is_running());

        clock.set_now(5);
        tokio::time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(clock.now(), 5, "No tick may land after stop returns");
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let clock = EpochClock::start(1).unwrap();
        clock.stop().await;
        clock.stop().await;
        assert!(!clock.is_running());
    }

    #[tokio::test]
    async fn test_independent_clocks() {
        let a = EpochClock::start(1).unwrap();
        let b = EpochClock::start(1).unwrap();

        a.stop().await;
        a.set_now(1);
        assert!(b.is_running());
        assert_ne!(b.now(), 1);
        b.stop().await;
    }
}

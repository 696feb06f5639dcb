//! Background Tasks Module
//!
//! Contains background tasks owned by a cache instance.
//!
//! # Tasks
//! - Epoch Clock: republishes the coarse current time used for expiry checks

mod epoch;

pub use epoch::{period_for_timeout, unix_now, EpochClock, TICK_DIVISOR};

//! Injectable time source
//!
//! The rate limiter measures intervals on a monotonic clock and the request
//! signer stamps wall-clock milliseconds. Both go through [`Clock`] so tests
//! can drive time deterministically with [`ManualClock`].

use std::fmt;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;

/// Source of monotonic time, wall-clock time, and sleeping
#[async_trait]
pub trait Clock: Send + Sync + fmt::Debug {
    /// Monotonic time elapsed since the clock's origin
    fn now(&self) -> Duration;

    /// Wall-clock milliseconds since the Unix epoch
    fn unix_millis(&self) -> u64;

    /// Suspend the calling task for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Real time, backed by [`Instant`], `chrono`, and `tokio::time::sleep`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose monotonic origin is now
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn unix_millis(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Hand-driven clock for tests
///
/// Time only moves when [`ManualClock::advance`] or [`Clock::sleep`] is
/// called; sleeping advances the clock by the requested duration instead
/// of waiting.
pub struct ManualClock {
    elapsed: Mutex<Duration>,
    epoch_millis: u64,
}

impl ManualClock {
    /// Create a clock at monotonic zero whose wall clock reads `epoch_millis`
    pub fn new(epoch_millis: u64) -> Self {
        Self {
            elapsed: Mutex::new(Duration::ZERO),
            epoch_millis,
        }
    }

    /// Move the clock forward
    pub fn advance(&self, duration: Duration) {
        *self.elapsed.lock() += duration;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock")
            .field("elapsed", &*self.elapsed.lock())
            .field("epoch_millis", &self.epoch_millis)
            .finish()
    }
}

#[async_trait]
impl Clock for ManualClock {
    fn now(&self) -> Duration {
        *self.elapsed.lock()
    }

    fn unix_millis(&self) -> u64 {
        self.epoch_millis + self.now().as_millis() as u64
    }

    async fn sleep(&self, duration: Duration) {
        self.advance(duration);
        tokio::task::yield_now().await;
    }
}

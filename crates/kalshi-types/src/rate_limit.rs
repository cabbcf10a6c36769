//! Client-side rate limiting for the Kalshi API
//!
//! Enforces a minimum interval between consecutive outbound requests made
//! through one limiter. The limiter is applied to every request so that a
//! bug in calling code cannot burst past the exchange's request-rate policy.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, instrument};

use crate::clock::{Clock, SystemClock};

/// Default minimum spacing between two requests
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(100);

/// Minimum-interval rate limiter
///
/// The last dispatch stamp lives behind an async mutex that stays locked
/// while a caller sleeps, so concurrent tasks sharing one limiter are
/// admitted strictly one at a time and never observe a stale stamp.
#[derive(Debug)]
pub struct RateLimiter {
    clock: Arc<dyn Clock>,
    min_interval: Duration,
    /// Monotonic time of the last admitted call, `None` before the first
    last_call_at: Mutex<Option<Duration>>,
}

impl RateLimiter {
    /// Create a limiter on the given clock
    pub fn new(clock: Arc<dyn Clock>, min_interval: Duration) -> Self {
        Self {
            clock,
            min_interval,
            last_call_at: Mutex::new(None),
        }
    }

    /// Create a limiter on the system clock with the default interval
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(SystemClock::new()), DEFAULT_MIN_INTERVAL)
    }

    /// Configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until a request may be dispatched, then claim the slot
    ///
    /// The first call never waits. Later calls sleep for whatever remains
    /// of `min_interval` since the previous claim. Returns the time spent
    /// waiting.
    #[instrument(skip(self), level = "debug")]
    pub async fn acquire(&self) -> Duration {
        let mut last_call_at = self.last_call_at.lock().await;

        let mut waited = Duration::ZERO;
        if let Some(last) = *last_call_at {
            let elapsed = self.clock.now().saturating_sub(last);
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                debug!(wait_ms = waited.as_millis() as u64, "rate limited, waiting");
                self.clock.sleep(waited).await;
            }
        }

        *last_call_at = Some(self.clock.now());
        waited
    }

    /// How long a call made now would have to wait
    pub async fn time_until_ready(&self) -> Duration {
        let last_call_at = self.last_call_at.lock().await;
        match *last_call_at {
            Some(last) => self
                .min_interval
                .saturating_sub(self.clock.now().saturating_sub(last)),
            None => Duration::ZERO,
        }
    }

    /// Forget the last dispatch so the next call is admitted immediately
    pub async fn reset(&self) {
        *self.last_call_at.lock().await = None;
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Shared rate limiter that can be cloned and used across tasks
pub type SharedRateLimiter = Arc<RateLimiter>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manual_limiter(interval_ms: u64) -> (Arc<ManualClock>, RateLimiter) {
        let clock = Arc::new(ManualClock::default());
        let limiter = RateLimiter::new(clock.clone(), Duration::from_millis(interval_ms));
        (clock, limiter)
    }

    #[test]
    fn test_default_interval() {
        let limiter = RateLimiter::with_defaults();
        assert_eq!(limiter.min_interval(), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_first_acquire_does_not_wait() {
        let (clock, limiter) = manual_limiter(100);

        assert_eq!(limiter.acquire().await, Duration::ZERO);
        assert_eq!(clock.now(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_back_to_back_acquire_waits_full_interval() {
        let (clock, limiter) = manual_limiter(100);

        limiter.acquire().await;
        let waited = limiter.acquire().await;

        assert_eq!(waited, Duration::from_millis(100));
        assert_eq!(clock.now(), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_acquire_waits_only_remaining_interval() {
        let (clock, limiter) = manual_limiter(100);

        limiter.acquire().await;
        clock.advance(Duration::from_millis(30));
        let waited = limiter.acquire().await;

        assert_eq!(waited, Duration::from_millis(70));
        assert_eq!(clock.now(), Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_no_wait_after_interval_elapsed() {
        let (clock, limiter) = manual_limiter(100);

        limiter.acquire().await;
        clock.advance(Duration::from_millis(150));

        assert_eq!(limiter.acquire().await, Duration::ZERO);
    }

    #[tokio::test]
    async fn test_spacing_holds_for_any_interval() {
        for interval_ms in [1, 10, 100, 250, 1000] {
            let (clock, limiter) = manual_limiter(interval_ms);
            let interval = Duration::from_millis(interval_ms);

            let mut previous = None;
            for step in 0..5u64 {
                clock.advance(Duration::from_millis(step * interval_ms / 3));
                limiter.acquire().await;
                let dispatched = clock.now();
                if let Some(prev) = previous {
                    assert!(dispatched - prev >= interval);
                }
                previous = Some(dispatched);
            }
        }
    }

    #[tokio::test]
    async fn test_time_until_ready_and_reset() {
        let (clock, limiter) = manual_limiter(100);
        assert_eq!(limiter.time_until_ready().await, Duration::ZERO);

        limiter.acquire().await;
        clock.advance(Duration::from_millis(40));
        assert_eq!(limiter.time_until_ready().await, Duration::from_millis(60));

        limiter.reset().await;
        assert_eq!(limiter.acquire().await, Duration::ZERO);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_callers_are_serialized() {
        let clock = Arc::new(ManualClock::default());
        let limiter: SharedRateLimiter =
            Arc::new(RateLimiter::new(clock.clone(), Duration::from_millis(100)));

        let handles: Vec<_> = (0..5)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move { limiter.acquire().await })
            })
            .collect();

        let mut total_wait = Duration::ZERO;
        for handle in handles {
            total_wait += handle.await.unwrap();
        }

        // One free slot, four that each wait a full interval
        assert_eq!(total_wait, Duration::from_millis(400));
        assert_eq!(clock.now(), Duration::from_millis(400));
    }

    #[tokio::test]
    async fn test_system_clock_spacing() {
        let limiter = RateLimiter::new(Arc::new(SystemClock::new()), Duration::from_millis(20));

        limiter.acquire().await;
        let start = std::time::Instant::now();
        limiter.acquire().await;

        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}

//! Timed Value Module
//!
//! Defines the wrapper stored for each cache key: payload, TTL and the
//! instant the value was written.
//!
//! Timestamps use `tokio::time::Instant`, which follows the runtime clock
//! (including a paused test clock) and falls back to the system monotonic
//! clock outside a runtime.

use std::time::Duration;

use tokio::time::Instant;

// == Timed Value ==
/// A cached payload together with its TTL and write time.
///
/// A `TimedValue` is never mutated after creation. Every `set` on the cache
/// builds a fresh one, so `updated` only moves forward for a given key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedValue<V> {
    data: V,
    ttl: Duration,
    updated: Instant,
}

impl<V> TimedValue<V> {
    // == Constructor ==
    /// Wraps `data` with the given TTL, stamped with the current instant.
    ///
    /// A zero `ttl` means the value never expires.
    pub fn new(data: V, ttl: Duration) -> Self {
        Self {
            data,
            ttl,
            updated: Instant::now(),
        }
    }

    // == Alive ==
    /// Returns true while the value is fresh.
    ///
    /// Boundary condition: a value is still alive when exactly `ttl` has
    /// elapsed, and dead only once the elapsed time exceeds it.
    pub fn alive(&self) -> bool {
        self.alive_at(Instant::now())
    }

    /// Liveness evaluated at an explicit instant.
    pub fn alive_at(&self, now: Instant) -> bool {
        self.ttl.is_zero() || now.saturating_duration_since(self.updated) <= self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining freshness, or None for values that never expire.
    ///
    /// # Returns
    /// - `None` if the TTL is zero (immortal)
    /// - `Some(Duration::ZERO)` once the TTL has elapsed
    /// - `Some(remaining)` otherwise
    pub fn ttl_remaining(&self) -> Option<Duration> {
        if self.ttl.is_zero() {
            return None;
        }
        Some(self.ttl.saturating_sub(self.updated.elapsed()))
    }

    /// The cached payload.
    pub fn data(&self) -> &V {
        &self.data
    }

    /// Consumes the wrapper, returning the payload.
    pub fn into_data(self) -> V {
        self.data
    }

    /// The TTL the value was stored with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The instant the value was written.
    pub fn updated(&self) -> Instant {
        self.updated
    }
}

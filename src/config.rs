//! Configuration Module
//!
//! Loads background task intervals from environment variables.

use std::env;
use std::time::Duration;

/// Default interval between GC sweeps, in milliseconds
pub const DEFAULT_GC_INTERVAL_MS: u64 = 1000;

/// Default interval between refresh ticks, in milliseconds
pub const DEFAULT_REFRESH_INTERVAL_MS: u64 = 1000;

/// Background scheduler configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interval between auto-GC sweeps in milliseconds
    pub gc_interval_ms: u64,
    /// Interval between auto-refresh ticks in milliseconds
    pub refresh_interval_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_GC_INTERVAL_MS` - GC sweep interval (default: 1000)
    /// - `CACHE_REFRESH_INTERVAL_MS` - Refresh tick interval (default: 1000)
    ///
    /// Missing, unparseable or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            gc_interval_ms: read_interval("CACHE_GC_INTERVAL_MS", DEFAULT_GC_INTERVAL_MS),
            refresh_interval_ms: read_interval(
                "CACHE_REFRESH_INTERVAL_MS",
                DEFAULT_REFRESH_INTERVAL_MS,
            ),
        }
    }

    /// GC sweep interval as a `Duration`.
    pub fn gc_interval(&self) -> Duration {
        Duration::from_millis(self.gc_interval_ms)
    }

    /// Refresh tick interval as a `Duration`.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gc_interval_ms: DEFAULT_GC_INTERVAL_MS,
            refresh_interval_ms: DEFAULT_REFRESH_INTERVAL_MS,
        }
    }
}

// tokio::time::interval panics on a zero period
fn read_interval(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|ms: &u64| *ms > 0)
        .unwrap_or(default)
}

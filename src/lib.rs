//! TTL Cache - A generic in-memory cache with time-to-live entries
//!
//! Provides cache-aside loading on miss, lazy expiry, explicit GC sweeps and
//! background tasks for periodic GC and per-key refresh.

pub mod cache;
pub mod config;
pub mod error;
pub mod tasks;

pub use cache::{Cache, CacheStats, TimedValue};
pub use config::Config;
pub use error::{BoxError, CacheError, Result};
pub use tasks::StopHandle;

//! Cache Module
//!
//! Provides a generic in-memory cache with per-entry TTL, lazy expiry and
//! cache-aside loading.

mod stats;
mod store;
mod value;


// Re-export public types
pub use stats::CacheStats;
pub use store::Cache;
pub use value::TimedValue;

pub(crate) use store::erase_loader;

//! Auto GC Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::hash::Hash;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::Cache;
use crate::config::Config;
use crate::tasks::{spawn_periodic, StopHandle};

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Starts a task that calls [`Cache::gc`] every `period`.
    ///
    /// The task holds its own clone of the cache and runs until the
    /// returned handle is stopped or dropped.
    ///
    /// # Panics
    /// Panics if `period` is zero, or if called outside a tokio runtime.
    ///
    /// # Example
    /// ```ignore
    /// let cache: Cache<String, String> = Cache::new();
    /// let gc = cache.start_auto_gc(Duration::from_secs(1));
    /// // Later, during shutdown:
    /// gc.stop().await;
    /// ```
    pub fn start_auto_gc(&self, period: Duration) -> StopHandle {
        let cache = self.clone();

        spawn_periodic("auto-gc", period, move || {
            let cache = cache.clone();
            async move {
                let removed = cache.gc().await;
                if removed > 0 {
                    debug!(removed, "auto-gc: removed expired entries");
                } else {
                    trace!("auto-gc: no expired entries found");
                }
            }
        })
    }

    /// Starts the GC task with the interval from `config`.
    pub fn start_auto_gc_with(&self, config: &Config) -> StopHandle {
        self.start_auto_gc(config.gc_interval())
    }
}

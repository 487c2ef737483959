//! Auto Refresh Task
//!
//! Background task that periodically reloads a single key.

use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use crate::cache::{erase_loader, Cache};
use crate::config::Config;
use crate::error::BoxError;
use crate::tasks::{spawn_periodic, StopHandle};

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Starts a task that reloads `key` every `period` with `refresh`.
    ///
    /// On success the returned value and TTL replace the entry. On error the
    /// tick is skipped: the current entry is left as is and the error is
    /// dropped. There is no retry before the next tick.
    ///
    /// # Panics
    /// Panics if `period` is zero, or if called outside a tokio runtime.
    pub fn start_auto_refresh<F, Fut, E>(&self, key: K, refresh: F, period: Duration) -> StopHandle
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(V, Duration), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        let cache = self.clone();
        let refresh = erase_loader(refresh);

        spawn_periodic("auto-refresh", period, move || {
            let cache = cache.clone();
            let refresh = Arc::clone(&refresh);
            let key = key.clone();
            async move {
                match refresh(key.clone()).await {
                    Ok((value, ttl)) => {
                        cache.set(key, value, ttl).await;
                        trace!("auto-refresh: value replaced");
                    }
                    Err(err) => {
                        trace!(error = %err, "auto-refresh: refresh failed, skipping tick");
                    }
                }
            }
        })
    }

    /// Starts the refresh task with the interval from `config`.
    pub fn start_auto_refresh_with<F, Fut, E>(&self, key: K, refresh: F, config: &Config) -> StopHandle
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(V, Duration), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
    {
        self.start_auto_refresh(key, refresh, config.refresh_interval())
    }
}

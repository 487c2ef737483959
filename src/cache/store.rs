//! Cache Store Module
//!
//! Main cache engine: a HashMap of timed values behind a reader/writer lock,
//! with an optional miss loader for cache-aside reads.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, TryFutureExt};
use tokio::sync::RwLock;
use tracing::trace;

use crate::cache::stats::StatsRecorder;
use crate::cache::{CacheStats, TimedValue};
use crate::error::{BoxError, CacheError, Result};

/// Future produced by a type-erased loader.
pub(crate) type LoadFuture<V> = BoxFuture<'static, std::result::Result<(V, Duration), BoxError>>;

/// Type-erased `(key) -> (value, ttl)` function, shared by the miss loader
/// and the refresh task.
pub(crate) type LoadFn<K, V> = Arc<dyn Fn(K) -> LoadFuture<V> + Send + Sync>;

/// Erases a caller's async function into a [`LoadFn`].
pub(crate) fn erase_loader<K, V, F, Fut, E>(f: F) -> LoadFn<K, V>
where
    F: Fn(K) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = std::result::Result<(V, Duration), E>> + Send + 'static,
    E: Into<BoxError> + 'static,
    V: Send + 'static,
{
    Arc::new(move |key: K| -> LoadFuture<V> { f(key).map_err(Into::into).boxed() })
}

// == Cache ==
/// Thread-safe TTL cache with lazy expiry.
///
/// Cloning a `Cache` is cheap: clones share the same entries, loader and
/// statistics. Expired entries stay in the map until [`Cache::gc`] or an
/// explicit delete removes them; reads simply stop returning them.
pub struct Cache<K, V> {
    /// Key to timed value storage
    entries: Arc<RwLock<HashMap<K, TimedValue<V>>>>,
    /// Miss loader, bound once at construction
    loader: Option<LoadFn<K, V>>,
    /// Shared counters
    stats: Arc<StatsRecorder>,
}

impl<K, V> Cache<K, V> {
    // == Constructor ==
    /// Creates an empty cache without a miss loader.
    ///
    /// [`Cache::get_with_miss`] on such a cache fails with
    /// [`CacheError::NotFound`] for absent or expired keys.
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            loader: None,
            stats: Arc::new(StatsRecorder::default()),
        }
    }

    /// Creates an empty cache that fills misses by calling `loader`.
    ///
    /// The loader returns the value together with the TTL to store it with.
    /// It runs without any cache lock held, so it may be slow or use the
    /// cache itself.
    ///
    /// # Example
    /// ```
    /// use std::time::Duration;
    /// use ttl_cache::{Cache, BoxError};
    ///
    /// let cache: Cache<String, usize> = Cache::with_loader(|key: String| async move {
    ///     Ok::<_, BoxError>((key.len(), Duration::from_secs(30)))
    /// });
    /// ```
    pub fn with_loader<F, Fut, E>(loader: F) -> Self
    where
        F: Fn(K) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = std::result::Result<(V, Duration), E>> + Send + 'static,
        E: Into<BoxError> + 'static,
        V: Send + 'static,
    {
        Self {
            loader: Some(erase_loader(loader)),
            ..Self::new()
        }
    }

    /// Returns true if a miss loader was configured.
    pub fn has_loader(&self) -> bool {
        self.loader.is_some()
    }
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Get Value ==
    /// Returns the raw entry for `key`, alive or not.
    ///
    /// Has no side effects; useful to inspect expiry.
    pub async fn get_value(&self, key: &K) -> Option<TimedValue<V>> {
        let entries = self.entries.read().await;
        entries.get(key).cloned()
    }

    // == Get ==
    /// Returns the payload for `key` if present and alive.
    ///
    /// Dead entries are left in place.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(value) if value.alive() => {
                self.stats.record_hit();
                Some(value.data().clone())
            }
            _ => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Get With Miss ==
    /// Returns the live value for `key`, loading and storing it on a miss.
    ///
    /// Concurrent misses on the same key each call the loader; the last
    /// store wins.
    ///
    /// # Errors
    /// - [`CacheError::NotFound`] if the key is absent or dead and no loader
    ///   is configured
    /// - [`CacheError::Loader`] with the loader's own error; nothing is
    ///   stored in that case
    pub async fn get_with_miss(&self, key: &K) -> Result<V> {
        if let Some(value) = self.get(key).await {
            return Ok(value);
        }

        let loader = self.loader.as_ref().ok_or(CacheError::NotFound)?;

        trace!("cache miss, invoking loader");
        self.stats.record_load();
        let (value, ttl) = loader(key.clone()).await.map_err(|err| {
            self.stats.record_load_failure();
            CacheError::Loader(err)
        })?;

        self.set(key.clone(), value.clone(), ttl).await;
        Ok(value)
    }

    // == Set ==
    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// A zero `ttl` stores a value that never expires.
    pub async fn set(&self, key: K, value: V, ttl: Duration) {
        let timed = TimedValue::new(value, ttl);
        let mut entries = self.entries.write().await;
        entries.insert(key, timed);
    }

    // == Delete ==
    /// Removes the entry for `key`, returning it if it was present.
    pub async fn delete(&self, key: &K) -> Option<TimedValue<V>> {
        let mut entries = self.entries.write().await;
        entries.remove(key)
    }

    // == Delete All ==
    /// Drops every entry.
    pub async fn delete_all(&self) {
        let mut entries = self.entries.write().await;
        *entries = HashMap::new();
    }

    // == Size ==
    /// Returns the number of stored entries, including dead ones.
    pub async fn size(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    // == GC ==
    /// Removes every dead entry.
    ///
    /// Returns the number of entries removed.
    pub async fn gc(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, value| value.alive());
        let removed = before - entries.len();

        self.stats.record_gc_removed(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let total_entries = self.size().await;
        self.stats.snapshot(total_entries)
    }
}

impl<K, V> Clone for Cache<K, V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            loader: self.loader.clone(),
            stats: Arc::clone(&self.stats),
        }
    }
}

impl<K, V> Default for Cache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("has_loader", &self.loader.is_some())
            .finish_non_exhaustive()
    }
}

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use newsdesk_core::{CacheStore, Clock};
use tokio::sync::Mutex;

struct Entry<V> {
    value: V,
    created_at: DateTime<Utc>,
}

/// Unbounded process-local store whose entries expire `ttl` after they were written.
///
/// Expiry is lazy: a stale entry is dropped by the `get` that finds it. There
/// is no background sweep and no capacity bound. A zero TTL never yields a hit.
pub struct TtlStore<K, V> {
    inner: Mutex<HashMap<K, Entry<V>>>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlStore<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty store reading time from `clock`.
    #[must_use]
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Mutex::new(HashMap::new()),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }

    /// Number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    fn is_stale(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(created_at) >= self.ttl
    }
}

#[async_trait]
impl<K, V> CacheStore<K, V> for TtlStore<K, V>
where
    K: Clone + Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let mut guard = self.inner.lock().await;
        let created_at = guard.get(key)?.created_at;
        if self.is_stale(created_at, now) {
            guard.remove(key);
            return None;
        }
        guard.get(key).map(|e| e.value.clone())
    }

    async fn put(&self, key: K, value: V) {
        let created_at = self.clock.now();
        let mut guard = self.inner.lock().await;
        guard.insert(key, Entry { value, created_at });
    }
}

use async_trait::async_trait;

/// Keyed store with best-effort writes.
///
/// Implementations must tolerate concurrent `get`/`put` on the same key;
/// the last write wins.
#[async_trait]
pub trait CacheStore<K, V>: Send + Sync {
    /// Return the live value for `key`, if any.
    async fn get(&self, key: &K) -> Option<V>;
    /// Insert or replace the value for `key`. Never fails.
    async fn put(&self, key: K, value: V);
}

/// Cache from trimmed source text to its final translated text.
pub type TranslationCache = dyn CacheStore<String, String>;

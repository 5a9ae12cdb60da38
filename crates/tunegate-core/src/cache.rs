//! In-memory caching for gateway responses.
//!
//! One store is built at startup and shared by handle. Every entry lives
//! under the same TTL; expiry is discovered lazily by the read that finds a
//! stale entry, which also evicts it. There is no background sweep.
//!
//! Concurrent misses for the same key are not coalesced: each caller fetches
//! upstream and stores its own result, last write wins. Callers that need
//! single-flight semantics must add it on top.
//!
//! The store is process-local. Multi-instance deployments need a shared
//! network cache behind the same `get`/`set` contract.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;

/// Default entry lifetime: ten minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(600);

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

#[derive(Debug)]
struct CacheInner<V> {
    map: HashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> CacheInner<V> {
    fn new(ttl: Duration) -> Self {
        Self {
            map: HashMap::new(),
            ttl,
        }
    }

    fn get(&mut self, key: &str, now: Instant) -> Option<V> {
        let entry = self.map.get(key)?;
        if now.saturating_duration_since(entry.stored_at) > self.ttl {
            self.map.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    fn set(&mut self, key: String, value: V, now: Instant) {
        self.map.insert(
            key,
            CacheEntry {
                value,
                stored_at: now,
            },
        );
    }
}

/// Thread-safe, time-bounded key/value store with lazy expiry.
///
/// Cloning yields another handle to the same store.
#[derive(Debug, Clone)]
pub struct CacheStore<V = Value> {
    inner: Arc<Mutex<CacheInner<V>>>,
}

impl<V: Clone> Default for CacheStore<V> {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl<V: Clone> CacheStore<V> {
    /// Creates a store whose entries expire `ttl` after they were set.
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CacheInner::new(ttl))),
        }
    }

    /// Returns the value stored under `key` unless it has expired.
    ///
    /// An expired entry is removed by this call, so later reads cannot
    /// observe it again.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lock().get(key, Instant::now())
    }

    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its lifetime.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.lock().set(key.into(), value, Instant::now());
    }

    /// Number of stored entries, including expired ones not yet read.
    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave an entry half written:
    // both mutations are single `HashMap` calls.
    fn lock(&self) -> MutexGuard<'_, CacheInner<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cache key for a cacheable endpoint.
///
/// Keys join the endpoint name with the parameters that affect its result in
/// a fixed order:
///
/// | Endpoint | Key |
/// |----------|-----|
/// | home feed | `homefeed:{REGION}:{lang}:{limit}` |
/// | charts | `charts:{COUNTRY}` |
///
/// Region and country are upper-cased, the language lower-cased, so requests
/// with the same effective parameters always share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    HomeFeed {
        region: String,
        language: String,
        limit: usize,
    },
    Charts {
        country: String,
    },
}

impl CacheKey {
    pub fn home_feed(region: &str, language: &str, limit: usize) -> Self {
        Self::HomeFeed {
            region: region.trim().to_ascii_uppercase(),
            language: language.trim().to_ascii_lowercase(),
            limit,
        }
    }

    pub fn charts(country: &str) -> Self {
        Self::Charts {
            country: country.trim().to_ascii_uppercase(),
        }
    }

    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::HomeFeed { .. } => "homefeed",
            Self::Charts { .. } => "charts",
        }
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HomeFeed {
                region,
                language,
                limit,
            } => write!(f, "{}:{region}:{language}:{limit}", self.endpoint()),
            Self::Charts { country } => write!(f, "{}:{country}", self.endpoint()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_cache_store_basic_operations() {
        let cache = CacheStore::new(Duration::from_secs(1));

        // Cache miss
        assert!(cache.get("key1").is_none());

        // Set and get
        cache.set("key1", json!("value1"));
        assert_eq!(cache.get("key1"), Some(json!("value1")));

        // Overwrite
        cache.set("key1", json!({"v": 2}));
        assert_eq!(cache.get("key1"), Some(json!({"v": 2})));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cache_entry_survives_until_ttl_elapses() {
        let cache = CacheStore::new(Duration::from_secs(600));
        cache.set("key1", json!(1));

        tokio::time::advance(Duration::from_secs(600)).await;
        assert_eq!(cache.get("key1"), Some(json!(1)));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(cache.get("key1").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_read_evicts_entry() {
        let cache = CacheStore::new(Duration::from_secs(1));
        cache.set("key1", json!(1));
        cache.set("key2", json!(2));

        tokio::time::advance(Duration::from_secs(2)).await;
        assert_eq!(cache.len(), 2);

        assert!(cache.get("key1").is_none());
        assert_eq!(cache.len(), 1);
        assert!(cache.get("key1").is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_restarts_lifetime() {
        let cache = CacheStore::new(Duration::from_secs(10));
        cache.set("key1", json!("old"));

        tokio::time::advance(Duration::from_secs(8)).await;
        cache.set("key1", json!("new"));

        tokio::time::advance(Duration::from_secs(8)).await;
        assert_eq!(cache.get("key1"), Some(json!("new")));
    }

    #[test]
    fn test_clones_share_entries() {
        let cache: CacheStore = CacheStore::default();
        let handle = cache.clone();

        handle.set("key1", json!(true));
        assert_eq!(cache.get("key1"), Some(json!(true)));
    }

    #[test]
    fn home_feed_key_ignores_case_and_whitespace() {
        let a = CacheKey::home_feed(" in", "EN ", 10);
        let b = CacheKey::home_feed("IN", "en", 10);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "homefeed:IN:en:10");
    }

    #[test]
    fn charts_key_uses_country_only() {
        assert_eq!(CacheKey::charts("us").to_string(), "charts:US");
    }
}

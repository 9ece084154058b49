use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use tokio::sync::Mutex;

/// Storage for cached GET responses.
///
/// Values are raw response bodies keyed by the full request URL. Implement
/// this to back the client with a shared store (e.g. Redis) instead of the
/// per-process [`InMemoryCache`].
#[async_trait]
pub trait AuthentikCache: Send + Sync {
    async fn get(&self, key: &str) -> Option<String>;

    async fn set(&self, key: String, value: String, ttl: Duration);

    async fn remove(&self, key: &str);

    /// Drops every entry whose key starts with `prefix`.
    async fn remove_prefix(&self, prefix: &str);
}

struct CacheEntry {
    value: String,
    expiration_time: Instant,
}

#[derive(Clone, Default)]
pub struct InMemoryCache {
    cache: Arc<Mutex<HashMap<String, CacheEntry>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.cache.lock().await.values().filter(|e| e.expiration_time > now).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Discards expired entries.
    pub async fn purge_expired(&self) {
        let now = Instant::now();
        self.cache.lock().await.retain(|_, entry| entry.expiration_time > now);
    }
}

#[async_trait]
impl AuthentikCache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        let mut cache = self.cache.lock().await;
        match cache.get(key) {
            Some(entry) if entry.expiration_time > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                cache.remove(key);
                None
            }
            None => None,
        }
    }

    async fn set(&self, key: String, value: String, ttl: Duration) {
        let expiration_time = Instant::now() + ttl;
        let mut cache = self.cache.lock().await;
        let now = Instant::now();
        cache.retain(|_, entry| entry.expiration_time > now);
        cache.insert(key, CacheEntry { value, expiration_time });
    }

    async fn remove(&self, key: &str) {
        self.cache.lock().await.remove(key);
    }

    async fn remove_prefix(&self, prefix: &str) {
        self.cache.lock().await.retain(|key, _| !key.starts_with(prefix));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_returns_inserted_value() {
        let cache = InMemoryCache::new();
        cache.set("a".into(), "1".into(), Duration::from_secs(60)).await;

        assert_eq!(cache.get("a").await.as_deref(), Some("1"));
        assert_eq!(cache.get("b").await, None);
    }

    #[tokio::test]
    async fn test_expired_entries_are_not_returned() {
        let cache = InMemoryCache::new();
        cache.set("a".into(), "1".into(), Duration::from_millis(0)).await;

        assert_eq!(cache.get("a").await, None);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_remove_prefix_only_touches_matching_keys() {
        let cache = InMemoryCache::new();
        let ttl = Duration::from_secs(60);
        cache.set("GET core/users/".into(), "[]".into(), ttl).await;
        cache.set("GET core/users/1/".into(), "{}".into(), ttl).await;
        cache.set("GET core/groups/".into(), "[]".into(), ttl).await;

        cache.remove_prefix("GET core/users/").await;

        assert_eq!(cache.len().await, 1);
        assert!(cache.get("GET core/groups/").await.is_some());
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let cache = InMemoryCache::new();
        cache.set("old".into(), "1".into(), Duration::from_millis(0)).await;
        cache.set("new".into(), "2".into(), Duration::from_secs(60)).await;

        cache.purge_expired().await;
        cache.remove("new").await;

        assert!(cache.is_empty().await);
    }
}

use anyhow::{Context, Result};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};
use tokio::time::Instant;

use super::keys::{QueryKey, QueryKind};
use crate::config::settings::CacheSettings;

struct Entry {
    data: Value,
    fetched_at: Instant,
}

#[derive(Default)]
struct Entries {
    map: HashMap<QueryKey, Entry>,
    /// Bumped on every invalidation so in-flight fetches don't repopulate dropped keys
    generation: u64,
}

/// In-memory query cache with per-kind staleness windows
pub struct QueryCache {
    entries: Mutex<Entries>,
    settings: CacheSettings,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl QueryCache {
    pub fn new(settings: CacheSettings) -> Self {
        Self {
            entries: Mutex::new(Entries::default()),
            settings,
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Serve a fresh entry, otherwise fetch and store the result.
    ///
    /// A failed fetch is returned as is and leaves any existing entry alone.
    pub async fn get_or_fetch<T, F, Fut>(&self, key: QueryKey, fetch: F) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        if let Some(data) = self.load_fresh(&key)? {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Cache hit: {}", key);
            return Ok(data);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss: {}", key);

        let generation = self.lock().generation;
        let data = fetch().await?;
        self.save(key, &data, generation)?;
        Ok(data)
    }

    /// Whether `key` holds an entry still inside its staleness window
    pub fn is_fresh(&self, key: &QueryKey) -> bool {
        let stale_time = key.kind().stale_time(&self.settings);
        self.lock()
            .map
            .get(key)
            .is_some_and(|entry| entry.fetched_at.elapsed() < stale_time)
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.lock().map.contains_key(key)
    }

    pub fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.lock();
        entries.generation += 1;
        if entries.map.remove(key).is_some() {
            debug!("Invalidated {}", key);
        }
    }

    /// Drop every entry of one kind, whatever its parameters
    pub fn invalidate_kind(&self, kind: QueryKind) {
        let mut entries = self.lock();
        entries.generation += 1;
        let before = entries.map.len();
        entries.map.retain(|key, _| key.kind() != kind);
        debug!("Invalidated {} {:?} entries", before - entries.map.len(), kind);
    }

    pub fn invalidate_all(&self) {
        for kind in QueryKind::ALL {
            self.invalidate_kind(kind);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    // --- Helper Methods ---

    fn lock(&self) -> MutexGuard<'_, Entries> {
        // Entries stay consistent even if a holder panicked mid-operation
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load_fresh<T: DeserializeOwned>(&self, key: &QueryKey) -> Result<Option<T>> {
        let stale_time = key.kind().stale_time(&self.settings);
        let entries = self.lock();

        match entries.map.get(key) {
            Some(entry) if entry.fetched_at.elapsed() < stale_time => {
                let data = serde_json::from_value(entry.data.clone())
                    .with_context(|| format!("Failed to deserialize cache entry {}", key))?;
                Ok(Some(data))
            }
            _ => Ok(None),
        }
    }

    fn save<T: Serialize>(&self, key: QueryKey, data: &T, generation: u64) -> Result<()> {
        let value = serde_json::to_value(data)
            .with_context(|| format!("Failed to serialize cache entry {}", key))?;

        let mut entries = self.lock();
        if entries.generation != generation {
            debug!("Discarding result for {} fetched before an invalidation", key);
            return Ok(());
        }
        entries.map.insert(
            key,
            Entry {
                data: value,
                fetched_at: Instant::now(),
            },
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;
    use std::time::Duration;

    fn cache() -> QueryCache {
        QueryCache::new(CacheSettings::default())
    }

    fn ok<T>(value: T) -> Result<T> {
        Ok(value)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fresh_entry_is_served_without_fetch() {
        let cache = cache();
        let counter = Cell::new(0);
        let fetches = &counter;
        let fetch = || async move {
            fetches.set(fetches.get() + 1);
            ok(vec!["Spring Open".to_string()])
        };

        let first: Vec<String> = cache.get_or_fetch(QueryKey::Tournaments, fetch).await.unwrap();
        let second: Vec<String> = cache.get_or_fetch(QueryKey::Tournaments, fetch).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(counter.get(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_entry_is_refetched() {
        let cache = cache();
        let key = QueryKey::scores("t1", "p1");
        let counter = Cell::new(0);
        let fetches = &counter;
        let fetch = || async move {
            fetches.set(fetches.get() + 1);
            ok(fetches.get())
        };

        let _: i32 = cache.get_or_fetch(key.clone(), fetch).await.unwrap();
        tokio::time::advance(Duration::from_secs(9)).await;
        assert!(cache.is_fresh(&key));
        let _: i32 = cache.get_or_fetch(key.clone(), fetch).await.unwrap();
        assert_eq!(counter.get(), 1);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(!cache.is_fresh(&key));
        let latest: i32 = cache.get_or_fetch(key.clone(), fetch).await.unwrap();
        assert_eq!(latest, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_windows_differ_per_kind() {
        let cache = cache();
        let board = QueryKey::Leaderboard("t1".into());
        let _: i32 = cache.get_or_fetch(board.clone(), || async { ok(1) }).await.unwrap();
        let _: i32 = cache.get_or_fetch(QueryKey::Players, || async { ok(1) }).await.unwrap();

        tokio::time::advance(Duration::from_secs(20)).await;

        assert!(!cache.is_fresh(&board));
        assert!(cache.is_fresh(&QueryKey::Players));
    }

    #[tokio::test]
    async fn test_failed_fetch_is_returned_once_and_stores_nothing() {
        let cache = cache();
        let _: i32 = cache.get_or_fetch(QueryKey::Players, || async { ok(7) }).await.unwrap();

        let result: Result<i32> = cache
            .get_or_fetch(QueryKey::Tournaments, || async { Err(anyhow!("gateway down")) })
            .await;

        assert!(result.is_err());
        assert!(!cache.contains(&QueryKey::Tournaments));
        assert!(cache.contains(&QueryKey::Players));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_refetch_keeps_stale_entry() {
        let cache = cache();
        let _: i32 = cache.get_or_fetch(QueryKey::Players, || async { ok(7) }).await.unwrap();
        tokio::time::advance(Duration::from_secs(31)).await;

        let result: Result<i32> = cache
            .get_or_fetch(QueryKey::Players, || async { Err(anyhow!("gateway down")) })
            .await;

        assert!(result.is_err());
        assert!(cache.contains(&QueryKey::Players));
    }

    #[tokio::test]
    async fn test_invalidate_kind_drops_all_parameters() {
        let cache = cache();
        for pid in ["p1", "p2"] {
            let _: i32 = cache
                .get_or_fetch(QueryKey::scores("t1", pid), || async { ok(1) })
                .await
                .unwrap();
        }
        let _: i32 = cache
            .get_or_fetch(QueryKey::Leaderboard("t1".into()), || async { ok(1) })
            .await
            .unwrap();

        cache.invalidate_kind(QueryKind::Scores);

        assert_eq!(cache.len(), 1);
        assert!(cache.contains(&QueryKey::Leaderboard("t1".into())));
    }

    #[tokio::test]
    async fn test_invalidate_single_key() {
        let cache = cache();
        for pid in ["p1", "p2"] {
            let _: i32 = cache
                .get_or_fetch(QueryKey::scores("t1", pid), || async { ok(1) })
                .await
                .unwrap();
        }

        cache.invalidate(&QueryKey::scores("t1", "p1"));

        assert!(!cache.contains(&QueryKey::scores("t1", "p1")));
        assert!(cache.contains(&QueryKey::scores("t1", "p2")));

        cache.invalidate_all();
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_result_fetched_across_invalidation_is_not_stored() {
        let cache = cache();
        let shared = &cache;
        let value: i32 = cache
            .get_or_fetch(QueryKey::Players, || async move {
                shared.invalidate_all();
                ok(3)
            })
            .await
            .unwrap();

        assert_eq!(value, 3);
        assert!(!cache.contains(&QueryKey::Players));
    }
}

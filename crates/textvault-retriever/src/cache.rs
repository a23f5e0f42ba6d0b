// Copyright (C) 2026  TextVault Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//! A bounded LRU cache from `(video_path, frame_number)` to decoded chunk
//! text, in front of the extract+decode step.
//!
//! Same `HashMap` + `VecDeque` access-order structure behind a
//! `tokio::sync::RwLock` as other caches in this codebase, reduced to pure
//! count-based eviction (the retriever caches short decoded strings, not
//! arbitrary-sized blobs, so a byte-budget is unnecessary) and keyed by a
//! `(video_path, frame_number)` pair rather than a single string key.

use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cache key: a video path paired with the frame number decoded from it.
pub type FrameKey = (PathBuf, u64);

/// Snapshot of cache occupancy, exposed for observability per §4.5.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached entries
    pub size: usize,
    /// Configured maximum entries
    pub capacity: usize,
}

#[derive(Debug)]
struct Inner {
    entries: HashMap<FrameKey, String>,
    access_queue: VecDeque<FrameKey>,
    capacity: usize,
}

/// A bounded, async-safe LRU cache of decoded frame text.
#[derive(Debug, Clone)]
pub struct FrameCache {
    inner: Arc<RwLock<Inner>>,
}

impl FrameCache {
    /// Create a cache holding at most `capacity` decoded frames. `capacity`
    /// of zero disables caching (every `get` misses, every `put` is a no-op).
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                entries: HashMap::new(),
                access_queue: VecDeque::new(),
                capacity,
            })),
        }
    }

    /// Build the key for a given video path and frame number.
    pub fn key(video_path: &Path, frame_number: u64) -> FrameKey {
        (video_path.to_path_buf(), frame_number)
    }

    /// Look up a cached decode, promoting it to most-recently-used on hit.
    pub async fn get(&self, key: &FrameKey) -> Option<String> {
        let mut inner = self.inner.write().await;
        let value = inner.entries.get(key).cloned()?;

        if let Some(pos) = inner.access_queue.iter().position(|k| k == key) {
            inner.access_queue.remove(pos);
        }
        inner.access_queue.push_back(key.clone());

        Some(value)
    }

    /// Insert a decoded frame, evicting the least-recently-used entry if the
    /// cache is at capacity.
    pub async fn put(&self, key: FrameKey, text: String) {
        let mut inner = self.inner.write().await;
        if inner.capacity == 0 {
            return;
        }

        if inner.entries.remove(&key).is_some() {
            if let Some(pos) = inner.access_queue.iter().position(|k| k == &key) {
                inner.access_queue.remove(pos);
            }
        }

        while inner.entries.len() >= inner.capacity {
            match inner.access_queue.pop_front() {
                Some(evict_key) => {
                    inner.entries.remove(&evict_key);
                }
                None => break,
            }
        }

        inner.access_queue.push_back(key.clone());
        inner.entries.insert(key, text);
    }

    /// Remove every cached entry.
    pub async fn clear(&self) {
        let mut inner = self.inner.write().await;
        inner.entries.clear();
        inner.access_queue.clear();
    }

    /// Current `{size, capacity}` snapshot.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        CacheStats {
            size: inner.entries.len(),
            capacity: inner.capacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn basic_get_put() {
        let cache = FrameCache::new(2);
        let key = FrameCache::key(Path::new("a.mp4"), 0);
        cache.put(key.clone(), "hello".to_string()).await;
        assert_eq!(cache.get(&key).await, Some("hello".to_string()));
    }

    #[tokio::test]
    async fn evicts_least_recently_used() {
        let cache = FrameCache::new(2);
        let k0 = FrameCache::key(Path::new("a.mp4"), 0);
        let k1 = FrameCache::key(Path::new("a.mp4"), 1);
        let k2 = FrameCache::key(Path::new("a.mp4"), 2);

        cache.put(k0.clone(), "zero".into()).await;
        cache.put(k1.clone(), "one".into()).await;
        cache.put(k2.clone(), "two".into()).await;

        assert_eq!(cache.get(&k0).await, None);
        assert_eq!(cache.get(&k1).await, Some("one".to_string()));
        assert_eq!(cache.get(&k2).await, Some("two".to_string()));
    }

    #[tokio::test]
    async fn get_promotes_to_most_recently_used() {
        let cache = FrameCache::new(2);
        let k0 = FrameCache::key(Path::new("a.mp4"), 0);
        let k1 = FrameCache::key(Path::new("a.mp4"), 1);
        let k2 = FrameCache::key(Path::new("a.mp4"), 2);

        cache.put(k0.clone(), "zero".into()).await;
        cache.put(k1.clone(), "one".into()).await;
        let _ = cache.get(&k0).await;
        cache.put(k2.clone(), "two".into()).await;

        assert_eq!(cache.get(&k1).await, None);
        assert_eq!(cache.get(&k0).await, Some("zero".to_string()));
    }

    #[tokio::test]
    async fn zero_capacity_never_caches() {
        let cache = FrameCache::new(0);
        let key = FrameCache::key(Path::new("a.mp4"), 0);
        cache.put(key.clone(), "hello".into()).await;
        assert_eq!(cache.get(&key).await, None);
    }

    #[tokio::test]
    async fn clear_empties_cache() {
        let cache = FrameCache::new(4);
        let key = FrameCache::key(Path::new("a.mp4"), 0);
        cache.put(key.clone(), "hello".into()).await;
        cache.clear().await;
        assert_eq!(cache.get(&key).await, None);
        assert_eq!(cache.stats().await.size, 0);
    }

    #[tokio::test]
    async fn stats_reports_size_and_capacity() {
        let cache = FrameCache::new(10);
        cache.put(FrameCache::key(Path::new("a.mp4"), 0), "x".into()).await;
        let stats = cache.stats().await;
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 10);
    }
}

//! Bounded preview cache for full-resolution images.
//!
//! Stores the most recent full-resolution image committed per logical node
//! instance (a workflow id / node id pair, the "slot"). Two rules bound the
//! cache: resubmitting a slot prunes every key sharing that slot's prefix
//! before inserting, and a global capacity evicts the least-recently
//! committed entry when exceeded. Entries live until evicted or the process
//! ends; there is no TTL and no persistence.

use std::collections::HashMap;
use std::sync::Mutex;

use grade_core::ImageBatch;

/// Default maximum number of cached full-resolution images.
pub const DEFAULT_CACHE_CAPACITY: usize = 10;

/// Derive the cache key for a (workflow, node) slot.
///
/// `workflow_id` falls back to `"unknown"` and `node_id` to `"x"` when the
/// caller could not supply them. The key doubles as the slot prefix for
/// pruning.
pub fn slot_key(workflow_id: Option<&str>, node_id: Option<&str>) -> String {
    format!(
        "imageadjust_{}_{}",
        workflow_id.unwrap_or("unknown"),
        node_id.unwrap_or("x")
    )
}

struct Inner {
    entries: HashMap<String, ImageBatch>,
    /// Keys ordered by commit recency, oldest first.
    commit_order: Vec<String>,
}

/// Thread-safe bounded cache, keyed by slot key.
///
/// All mutation goes through [`PreviewCache::commit`], which holds the lock
/// across the whole prune + insert + evict sequence so concurrent commits
/// for the same slot cannot interleave.
pub struct PreviewCache {
    inner: Mutex<Inner>,
    capacity: usize,
}

impl PreviewCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                entries: HashMap::new(),
                commit_order: Vec::new(),
            }),
            capacity,
        }
    }

    /// Register a new full-resolution image for a slot.
    ///
    /// Removes every existing entry whose key starts with `slot_key`
    /// (normally at most one), inserts the image as most recently committed,
    /// then pops the single least-recently-committed entry if the cache grew
    /// past capacity. A single pop suffices because the cache grows by at
    /// most one entry per commit.
    pub fn commit(&self, slot_key: &str, image: ImageBatch) {
        let mut inner = self.inner.lock().unwrap();

        inner.entries.retain(|key, _| !key.starts_with(slot_key));
        inner.commit_order.retain(|key| !key.starts_with(slot_key));

        inner.entries.insert(slot_key.to_string(), image);
        inner.commit_order.push(slot_key.to_string());

        if inner.entries.len() > self.capacity {
            let oldest_key = inner.commit_order.remove(0);
            inner.entries.remove(&oldest_key);
            tracing::debug!(
                key = %oldest_key,
                cache_size = inner.entries.len(),
                "preview cache: evicted oldest entry"
            );
        }

        tracing::debug!(
            key = %slot_key,
            cache_size = inner.entries.len(),
            "preview cache: committed image"
        );
    }

    /// Exact-key read of the cached image for a slot.
    ///
    /// Deliberately does not refresh recency: only commits count as use, so
    /// a slot that keeps previewing but never re-runs still ages out.
    pub fn lookup(&self, key: &str) -> Option<ImageBatch> {
        let inner = self.inner.lock().unwrap();
        inner.entries.get(key).cloned()
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the live keys, oldest commit first.
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().unwrap().commit_order.clone()
    }
}

impl Default for PreviewCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(fill: f32) -> ImageBatch {
        ImageBatch::filled(2, 2, fill).unwrap()
    }

    #[test]
    fn test_slot_key_format() {
        assert_eq!(slot_key(Some("wf1"), Some("5")), "imageadjust_wf1_5");
    }

    #[test]
    fn test_slot_key_defaults() {
        assert_eq!(slot_key(None, None), "imageadjust_unknown_x");
        assert_eq!(slot_key(None, Some("7")), "imageadjust_unknown_7");
        assert_eq!(slot_key(Some("wf"), None), "imageadjust_wf_x");
    }

    #[test]
    fn test_commit_and_lookup() {
        let cache = PreviewCache::default();
        cache.commit("imageadjust_wf1_1", image(0.5));

        let found = cache.lookup("imageadjust_wf1_1").unwrap();
        assert_eq!(found, image(0.5));
    }

    #[test]
    fn test_lookup_unknown_key_is_none() {
        let cache = PreviewCache::default();
        assert!(cache.lookup("imageadjust_wf1_99").is_none());
    }

    #[test]
    fn test_recommit_same_slot_replaces() {
        let cache = PreviewCache::default();
        cache.commit("imageadjust_wf1_5", image(0.1));
        cache.commit("imageadjust_wf1_5", image(0.9));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup("imageadjust_wf1_5").unwrap(), image(0.9));
    }

    #[test]
    fn test_commit_prunes_prefixed_keys() {
        let cache = PreviewCache::default();
        cache.commit("imageadjust_wf1_5_stale", image(0.1));
        cache.commit("imageadjust_wf1_5", image(0.9));

        assert_eq!(cache.len(), 1);
        assert!(cache.lookup("imageadjust_wf1_5_stale").is_none());
    }

    #[test]
    fn test_capacity_evicts_oldest_commit() {
        let cache = PreviewCache::new(10);
        for i in 0..11 {
            cache.commit(&format!("imageadjust_wf1_{i}"), image(i as f32 / 11.0));
        }

        assert_eq!(cache.len(), 10);
        assert!(cache.lookup("imageadjust_wf1_0").is_none(), "oldest slot evicted");
        assert!(cache.lookup("imageadjust_wf1_1").is_some());
        assert!(cache.lookup("imageadjust_wf1_10").is_some());
    }

    #[test]
    fn test_recommit_refreshes_recency() {
        let cache = PreviewCache::new(3);
        cache.commit("imageadjust_wf1_a", image(0.1));
        cache.commit("imageadjust_wf1_b", image(0.2));
        cache.commit("imageadjust_wf1_c", image(0.3));

        // Re-running node a makes it the most recent commit
        cache.commit("imageadjust_wf1_a", image(0.4));
        cache.commit("imageadjust_wf1_d", image(0.5));

        assert!(cache.lookup("imageadjust_wf1_b").is_none(), "b was oldest");
        assert!(cache.lookup("imageadjust_wf1_a").is_some());
    }

    #[test]
    fn test_lookup_does_not_refresh_recency() {
        let cache = PreviewCache::new(2);
        cache.commit("imageadjust_wf1_a", image(0.1));
        cache.commit("imageadjust_wf1_b", image(0.2));

        // Previewing a does not protect it from eviction
        let _ = cache.lookup("imageadjust_wf1_a");
        cache.commit("imageadjust_wf1_c", image(0.3));

        assert!(cache.lookup("imageadjust_wf1_a").is_none());
        assert!(cache.lookup("imageadjust_wf1_b").is_some());
    }

    #[test]
    fn test_concurrent_commits_stay_bounded() {
        use std::sync::Arc;

        let cache = Arc::new(PreviewCache::new(10));
        let mut handles = Vec::new();
        for t in 0..4 {
            let cache = cache.clone();
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    cache.commit(&format!("imageadjust_wf{t}_{i}"), image(0.5));
                    let _ = cache.lookup(&format!("imageadjust_wf{t}_{i}"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert!(cache.len() <= 10);
        assert_eq!(cache.keys().len(), cache.len());
    }
}

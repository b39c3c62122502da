// SPDX-License-Identifier: MPL-2.0
//! Decoded-image cache for the gallery.
//!
//! Downloaded photo bytes are decoded into Iced image handles once and
//! kept here, keyed by the photo's document id, so the grid does not
//! re-download thumbnails on every filter or page change. The shell owns
//! two instances: one for grid thumbnails, one for the focused viewer's
//! larger variants.
//!
//! # Design
//!
//! - **LRU eviction**: least recently shown photos are evicted first
//! - **Entry-bounded**: capacity comes from `[gallery] cache_entries`
//! - **Fetch gating**: [`begin`](ImageCache::begin) answers whether a
//!   download should start, so the shell never issues duplicate fetches
//! - **Failure memory**: photos whose download failed render a placeholder
//!   and are skipped until [`clear_failures`](ImageCache::clear_failures)

use crate::config::defaults::{DEFAULT_CACHE_ENTRIES, MAX_CACHE_ENTRIES, MIN_CACHE_ENTRIES};
use iced::widget::image::Handle;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    /// Number of handles currently cached.
    pub entry_count: usize,

    /// Number of lookups that found a handle.
    pub hits: u64,

    /// Number of lookups that found nothing.
    pub misses: u64,

    /// Number of handles evicted by the capacity limit.
    pub evictions: u64,

    /// Number of handles inserted.
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of decoded image handles, keyed by photo id.
pub struct ImageCache {
    entries: LruCache<String, Handle>,
    /// Photos with a download currently in flight.
    pending: HashSet<String>,
    /// Photos whose download failed; shown as placeholders until a retry.
    failed: HashSet<String>,
    stats: CacheStats,
}

impl ImageCache {
    /// Creates a cache bounded to `capacity` entries (clamped to the
    /// configured minimum and maximum).
    ///
    /// # Panics
    ///
    /// Panics if `MIN_CACHE_ENTRIES` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let clamped = capacity.clamp(MIN_CACHE_ENTRIES, MAX_CACHE_ENTRIES);
        let capacity = NonZeroUsize::new(clamped).unwrap_or(
            NonZeroUsize::new(DEFAULT_CACHE_ENTRIES).expect("DEFAULT_CACHE_ENTRIES must be non-zero"),
        );

        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            failed: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES)
    }

    // -------------------------------------------------------------------------
    // Fetch lifecycle
    // -------------------------------------------------------------------------

    /// Reports that the shell wants this photo on screen. Returns `true`
    /// if a download should start now; `false` if the photo is already
    /// cached, downloading, or known to fail.
    pub fn begin(&mut self, id: &str) -> bool {
        if self.entries.contains(id) || self.pending.contains(id) || self.failed.contains(id) {
            return false;
        }
        self.pending.insert(id.to_string());
        true
    }

    /// Stores the decoded handle for a finished download.
    pub fn complete(&mut self, id: String, handle: Handle) {
        self.pending.remove(&id);
        self.failed.remove(&id);

        if self.entries.len() == self.entries.cap().get() && !self.entries.contains(&id) {
            self.stats.evictions += 1;
        }
        self.entries.put(id, handle);
        self.stats.insertions += 1;
        self.stats.entry_count = self.entries.len();
    }

    /// Records a failed download; the photo renders as a placeholder.
    pub fn fail(&mut self, id: String) {
        self.pending.remove(&id);
        self.failed.insert(id);
    }

    /// Forgets past failures so a manual retry downloads them again.
    pub fn clear_failures(&mut self) {
        self.failed.clear();
    }

    // -------------------------------------------------------------------------
    // Lookup
    // -------------------------------------------------------------------------

    /// Returns the cached handle without touching the LRU order, so the
    /// view can look up photos through a shared reference.
    #[must_use]
    pub fn handle(&self, id: &str) -> Option<&Handle> {
        self.entries.peek(id)
    }

    /// Marks a photo as recently shown, promoting it in the LRU order.
    /// The shell calls this for each photo of the visible page.
    pub fn touch(&mut self, id: &str) {
        if self.entries.get(id).is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
    }

    /// Returns `true` while a download for this photo is in flight.
    #[must_use]
    pub fn is_pending(&self, id: &str) -> bool {
        self.pending.contains(id)
    }

    /// Returns `true` if the last download for this photo failed.
    #[must_use]
    pub fn has_failed(&self, id: &str) -> bool {
        self.failed.contains(id)
    }

    // -------------------------------------------------------------------------
    // Introspection
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }

    /// Current performance statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entry_count: self.entries.len(),
            ..self.stats
        }
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("entries", &self.entries.len())
            .field("capacity", &self.entries.cap().get())
            .field("pending", &self.pending.len())
            .field("failed", &self.failed.len())
            .field("stats", &self.stats)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> Handle {
        Handle::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn begin_gates_duplicate_downloads() {
        let mut cache = ImageCache::with_defaults();

        assert!(cache.begin("p1"), "first request starts a download");
        assert!(!cache.begin("p1"), "in-flight download is not repeated");
        assert!(cache.is_pending("p1"));
    }

    #[test]
    fn complete_makes_the_handle_available() {
        let mut cache = ImageCache::with_defaults();
        cache.begin("p1");
        cache.complete("p1".to_string(), handle());

        assert!(cache.handle("p1").is_some());
        assert!(!cache.is_pending("p1"));
        assert!(!cache.begin("p1"), "cached photo is not re-downloaded");
    }

    #[test]
    fn failed_downloads_are_not_retried_until_cleared() {
        let mut cache = ImageCache::with_defaults();
        cache.begin("p1");
        cache.fail("p1".to_string());

        assert!(cache.has_failed("p1"));
        assert!(!cache.begin("p1"), "known failure is skipped");

        cache.clear_failures();
        assert!(cache.begin("p1"), "retry after clearing failures");
    }

    #[test]
    fn capacity_is_clamped() {
        let tiny = ImageCache::new(1);
        assert_eq!(tiny.capacity(), MIN_CACHE_ENTRIES);

        let huge = ImageCache::new(100_000);
        assert_eq!(huge.capacity(), MAX_CACHE_ENTRIES);
    }

    #[test]
    fn eviction_discards_least_recently_shown() {
        let mut cache = ImageCache::new(MIN_CACHE_ENTRIES);
        for i in 0..MIN_CACHE_ENTRIES {
            let id = format!("p{}", i);
            cache.begin(&id);
            cache.complete(id, handle());
        }
        assert_eq!(cache.len(), MIN_CACHE_ENTRIES);

        // p0 is the oldest entry; keep it warm, then overflow the cache.
        cache.touch("p0");
        cache.begin("extra");
        cache.complete("extra".to_string(), handle());

        assert!(cache.handle("p0").is_some(), "recently shown survives");
        assert!(cache.handle("p1").is_none(), "oldest untouched is evicted");
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn stats_track_hits_and_misses() {
        let mut cache = ImageCache::with_defaults();
        cache.begin("p1");
        cache.complete("p1".to_string(), handle());

        cache.touch("p1");
        cache.touch("p2");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.entry_count, 1);
        assert_eq!(stats.insertions, 1);
    }
}

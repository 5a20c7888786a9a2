//! Bounded LRU cache of polygons and the process-wide memoizing factory.
//!
//! Lifecycle
//! - The shared cache is created on first use with `CacheCfg::default()` and is never
//!   torn down. A single mutex serializes lookup-or-insert and eviction.
//! - Keys are `(sides, circumradius bits)`; the radius is validated before keying.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::error::SequenceError;
use crate::polygon::{check_circumradius, ConvexPolygon};

/// Capacity of the process-wide cache.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Cache configuration.
#[derive(Clone, Copy, Debug)]
pub struct CacheCfg {
    pub capacity: usize,
}

impl Default for CacheCfg {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

/// Hit/miss/eviction counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    /// Hit rate in `[0, 1]`, or 0 when nothing was looked up.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

type Key = (u32, u64);

#[derive(Debug)]
struct Entry {
    polygon: Arc<ConvexPolygon>,
    stamp: u64,
}

/// Polygon cache with least-recently-used eviction.
#[derive(Debug)]
pub struct PolygonCache {
    entries: HashMap<Key, Entry>,
    capacity: usize,
    clock: u64,
    stats: CacheStats,
}

impl PolygonCache {
    pub fn new(cfg: CacheCfg) -> Self {
        let capacity = cfg.capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity,
            clock: 0,
            stats: CacheStats::default(),
        }
    }

    /// Return the cached polygon for `(sides, circumradius)` or build, insert and return it.
    pub fn get_or_insert_with<F>(
        &mut self,
        sides: u32,
        circumradius: f64,
        build: F,
    ) -> Arc<ConvexPolygon>
    where
        F: FnOnce() -> ConvexPolygon,
    {
        self.clock += 1;
        let key = (sides, circumradius.to_bits());
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.stamp = self.clock;
            self.stats.hits += 1;
            return Arc::clone(&entry.polygon);
        }
        self.stats.misses += 1;
        while self.entries.len() >= self.capacity {
            self.evict_lru();
        }
        let polygon = Arc::new(build());
        self.entries.insert(
            key,
            Entry {
                polygon: Arc::clone(&polygon),
                stamp: self.clock,
            },
        );
        polygon
    }

    /// Lookup without inserting; refreshes recency on a hit.
    pub fn get(&mut self, sides: u32, circumradius: f64) -> Option<Arc<ConvexPolygon>> {
        self.clock += 1;
        match self.entries.get_mut(&(sides, circumradius.to_bits())) {
            Some(entry) => {
                entry.stamp = self.clock;
                self.stats.hits += 1;
                Some(Arc::clone(&entry.polygon))
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    fn evict_lru(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.stamp)
            .map(|(k, _)| *k);
        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.stats.evictions += 1;
            tracing::trace!(sides = key.0, circumradius = f64::from_bits(key.1), "evict");
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for PolygonCache {
    fn default() -> Self {
        Self::new(CacheCfg::default())
    }
}

fn shared() -> &'static Mutex<PolygonCache> {
    static CACHE: OnceLock<Mutex<PolygonCache>> = OnceLock::new();
    CACHE.get_or_init(|| Mutex::new(PolygonCache::default()))
}

/// Lookup-or-insert in the shared cache. Callers guarantee `sides >= 3` and a valid radius.
pub(crate) fn cached(sides: u32, circumradius: f64) -> Arc<ConvexPolygon> {
    // Entries are immutable, so a poisoned map is still consistent.
    let mut cache = shared().lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    cache.get_or_insert_with(sides, circumradius, || ConvexPolygon::unchecked(sides, circumradius))
}

/// Memoizing polygon factory shared by indexing and iteration.
///
/// Repeated calls with equal arguments return the same `Arc` while the entry is resident.
pub fn polygonator(sides: u32, circumradius: f64) -> Result<Arc<ConvexPolygon>, SequenceError> {
    if sides < 3 {
        return Err(SequenceError::invalid_value(format!(
            "minimum number of sides for a polygon is 3 (sides={sides})"
        )));
    }
    check_circumradius(circumradius)?;
    Ok(cached(sides, circumradius))
}

/// Snapshot of the shared cache counters.
pub fn global_cache_stats() -> CacheStats {
    shared()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn poly(n: u32, r: f64) -> ConvexPolygon {
        ConvexPolygon::new(n, r).unwrap()
    }

    #[test]
    fn hit_returns_same_arc() {
        let mut cache = PolygonCache::new(CacheCfg { capacity: 4 });
        let a = cache.get_or_insert_with(5, 1.0, || poly(5, 1.0));
        let b = cache.get_or_insert_with(5, 1.0, || panic!("should hit"));
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1, evictions: 0 });
        assert!((cache.stats().hit_rate() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = PolygonCache::new(CacheCfg { capacity: 2 });
        cache.get_or_insert_with(3, 1.0, || poly(3, 1.0));
        cache.get_or_insert_with(4, 1.0, || poly(4, 1.0));
        // touch 3 so 4 becomes the oldest
        assert!(cache.get(3, 1.0).is_some());
        cache.get_or_insert_with(5, 1.0, || poly(5, 1.0));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().evictions, 1);
        assert!(cache.get(4, 1.0).is_none());
        assert!(cache.get(3, 1.0).is_some());
        assert!(cache.get(5, 1.0).is_some());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache = PolygonCache::new(CacheCfg { capacity: 0 });
        assert_eq!(cache.capacity(), 1);
        cache.get_or_insert_with(3, 2.0, || poly(3, 2.0));
        cache.get_or_insert_with(4, 2.0, || poly(4, 2.0));
        assert_eq!(cache.len(), 1);
        assert!(!cache.is_empty());
    }

    #[test]
    fn polygonator_is_referentially_stable() {
        let a = polygonator(11, 3.25).unwrap();
        let b = polygonator(11, 3.25).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(*a, poly(11, 3.25));
        assert!(global_cache_stats().hits >= 1);
    }

    #[test]
    fn polygonator_rejects_too_few_sides() {
        assert_eq!(polygonator(2, 1.0).unwrap_err().kind(), ErrorKind::Value);
        assert_eq!(polygonator(3, -1.0).unwrap_err().kind(), ErrorKind::Value);
    }
}

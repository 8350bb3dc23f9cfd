//! Memoized rankings keyed by the full input selection.
//!
//! A cache belongs to one catalog snapshot; call [`RankingCache::clear`]
//! when the snapshot is replaced.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::trace;

use super::catalog::{Catalog, Selection};
use super::ranking::{RankOptions, RankedResult, Ranker};

/// Default number of selections kept before the cache is flushed.
pub const DEFAULT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    selection: Selection,
    options: RankOptions,
}

/// Thread-safe cache of ranked result lists.
#[derive(Debug)]
pub struct RankingCache {
    entries: Mutex<HashMap<CacheKey, Arc<Vec<RankedResult>>>>,
    capacity: usize,
}

impl Default for RankingCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RankingCache {
    /// Create a cache holding at most `capacity` selections (minimum one).
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity: capacity.max(1),
        }
    }

    /// Return the cached ranking for `selection`, computing it on a miss.
    pub fn get_or_rank(
        &self,
        catalog: &Catalog,
        selection: &Selection,
        ranker: &Ranker,
    ) -> Arc<Vec<RankedResult>> {
        let key = CacheKey {
            selection: selection.normalized(),
            options: *ranker.options(),
        };

        if let Some(hit) = self.entries.lock().get(&key) {
            trace!("ranking cache hit");
            return Arc::clone(hit);
        }

        let requirements = catalog.resolve(&key.selection);
        let results = Arc::new(ranker.rank(&catalog.providers, &requirements));

        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            trace!(capacity = self.capacity, "ranking cache full, flushing");
            entries.clear();
        }
        entries.insert(key, Arc::clone(&results));
        results
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

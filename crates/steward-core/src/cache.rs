//! Key → last-write-tick cache with a pluggable eviction extension point.

use indexmap::IndexMap;

use crate::id::{RequestKey, TickId};
use crate::traits::EvictionPolicy;

/// Records the tick at which each key was last written.
///
/// The cache itself only exposes raw reads and writes; freshness is
/// evaluated on the request via
/// [`Request::cache_hit`](crate::request::Request::cache_hit). Entries
/// are kept in insertion order so eviction policies iterate
/// deterministically.
pub struct Cache {
    entries: IndexMap<RequestKey, TickId>,
    evictor: Box<dyn EvictionPolicy>,
}

impl Cache {
    /// An empty cache with the default no-op eviction policy.
    pub fn new() -> Self {
        Self::with_eviction(Box::new(NoEviction))
    }

    /// An empty cache with a custom eviction policy.
    pub fn with_eviction(evictor: Box<dyn EvictionPolicy>) -> Self {
        Self {
            entries: IndexMap::new(),
            evictor,
        }
    }

    /// Record `now` as the key's last-write tick, then give the
    /// eviction policy a chance to run.
    pub fn write(&mut self, key: RequestKey, now: TickId) {
        self.entries.insert(key, now);
        self.evictor.evict(&mut self.entries);
    }

    /// Last-write tick for the key, or `None` if absent.
    pub fn read(&self, key: RequestKey) -> Option<TickId> {
        self.entries.get(&key).copied()
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True iff no key has ever been written (or all were evicted).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

/// The default eviction policy: keep everything.
///
/// The cache is unbounded unless an experiment installs a bounding
/// policy explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEviction;

impl EvictionPolicy for NoEviction {
    fn evict(&mut self, _entries: &mut IndexMap<RequestKey, TickId>) {}
}

//! Recursive edit distance with a caller-owned memoization cache.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "dashmap")]
use dashmap::DashMap;

#[cfg(not(feature = "dashmap"))]
use parking_lot::RwLock;
#[cfg(not(feature = "dashmap"))]
use rustc_hash::FxHashMap;

const DELETION_COST: usize = 1;
const INSERTION_COST: usize = 1;
const SUBSTITUTION_COST: usize = 2;

/// A symmetric pair of strings for use as cache keys.
///
/// Ensures that `(a, b)` and `(b, a)` are treated as identical keys. This is
/// sound because the recursive metric uses equal deletion and insertion
/// costs, so `d(a, b) == d(b, a)`.
///
/// Strings are ordered lexicographically and stored as `Arc<str>`.
#[derive(Clone, Debug)]
struct SymmetricPair {
    first: Arc<str>,
    second: Arc<str>,
}

impl SymmetricPair {
    #[inline(always)]
    fn new(a: &str, b: &str) -> Self {
        match a.cmp(b) {
            Ordering::Less | Ordering::Equal => Self {
                first: Arc::from(a),
                second: Arc::from(b),
            },
            Ordering::Greater => Self {
                first: Arc::from(b),
                second: Arc::from(a),
            },
        }
    }
}

impl PartialEq for SymmetricPair {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl Eq for SymmetricPair {}

impl Hash for SymmetricPair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.first.hash(state);
        self.second.hash(state);
    }
}

/// Thread-safe memoization cache for [`edit_distance_memoized`].
///
/// The cache belongs to the caller: its scope and lifetime are whatever the
/// caller gives it, and nothing is shared implicitly between unrelated
/// workloads. An unbounded cache grows with the number of distinct prefix
/// pairs ever queried; call [`clear`](Self::clear) between workloads or build
/// one with [`with_capacity_limit`](Self::with_capacity_limit), which flushes
/// itself at the start of a query once the limit has been reached.
///
/// Uses either `DashMap` (lock-free, feature "dashmap") or
/// `parking_lot::RwLock<FxHashMap>` for concurrent access. A lookup that
/// races with another thread's insert only duplicates work, since every
/// cached value is a pure function of its key.
pub struct MemoCache {
    #[cfg(feature = "dashmap")]
    entries: DashMap<SymmetricPair, usize>,

    #[cfg(not(feature = "dashmap"))]
    entries: RwLock<FxHashMap<SymmetricPair, usize>>,

    capacity_limit: Option<usize>,
}

impl MemoCache {
    /// Create an empty, unbounded cache.
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "dashmap")]
            entries: DashMap::new(),

            #[cfg(not(feature = "dashmap"))]
            entries: RwLock::new(FxHashMap::default()),

            capacity_limit: None,
        }
    }

    /// Create an empty cache bounded by `limit` entries between queries.
    ///
    /// The limit is checked when [`edit_distance_memoized`] is called: a
    /// cache already holding `limit` entries or more is flushed before the
    /// query starts. A single query keeps every entry it creates, so the
    /// cache may exceed the limit until the next call. A limit of zero is
    /// treated as one.
    pub fn with_capacity_limit(limit: usize) -> Self {
        Self {
            capacity_limit: Some(limit.max(1)),
            ..Self::new()
        }
    }

    /// The entry limit, if any.
    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity_limit
    }

    /// Number of cached distances.
    pub fn len(&self) -> usize {
        #[cfg(feature = "dashmap")]
        {
            self.entries.len()
        }

        #[cfg(not(feature = "dashmap"))]
        {
            self.entries.read().len()
        }
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached distance.
    pub fn clear(&self) {
        #[cfg(feature = "dashmap")]
        {
            self.entries.clear();
        }

        #[cfg(not(feature = "dashmap"))]
        {
            self.entries.write().clear();
        }
    }

    fn get(&self, key: &SymmetricPair) -> Option<usize> {
        #[cfg(feature = "dashmap")]
        {
            self.entries.get(key).map(|entry| *entry)
        }

        #[cfg(not(feature = "dashmap"))]
        {
            self.entries.read().get(key).copied()
        }
    }

    fn insert(&self, key: SymmetricPair, value: usize) {
        #[cfg(feature = "dashmap")]
        {
            self.entries.insert(key, value);
        }

        #[cfg(not(feature = "dashmap"))]
        {
            self.entries.write().insert(key, value);
        }
    }

    /// Flush the cache if it has reached its limit. Only called between
    /// queries, never while a recursion still needs the entries.
    fn enforce_limit(&self) {
        let Some(limit) = self.capacity_limit else {
            return;
        };

        #[cfg(feature = "dashmap")]
        {
            let len = self.entries.len();
            if len >= limit {
                tracing::debug!(entries = len, limit, "flushing memo cache");
                self.entries.clear();
            }
        }

        #[cfg(not(feature = "dashmap"))]
        {
            let mut entries = self.entries.write();
            if entries.len() >= limit {
                tracing::debug!(entries = entries.len(), limit, "flushing memo cache");
                entries.clear();
            }
        }
    }
}

impl Default for MemoCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoCache")
            .field("len", &self.len())
            .field("capacity_limit", &self.capacity_limit)
            .finish()
    }
}

/// Recursive edit distance with memoization.
///
/// Measures the same metric as [`edit_distance`](super::edit_distance) but
/// with fixed costs: 1 per deletion, 1 per insertion, 2 per substitution.
/// Costs are not configurable: cached results are only valid for the costs
/// they were computed with.
///
/// The recursion strips the last character of either or both strings, so
/// it reaches a depth of up to `|source| + |target|`. This is the reference
/// implementation; prefer the iterative function for speed and for long
/// inputs.
///
/// # Example
///
/// ```rust
/// use lexsim::distance::{edit_distance_memoized, MemoCache};
///
/// let cache = MemoCache::new();
/// assert_eq!(edit_distance_memoized("kitten", "sitting", &cache), 5);
/// assert_eq!(edit_distance_memoized("test", "test", &cache), 0);
/// ```
pub fn edit_distance_memoized(source: &str, target: &str, cache: &MemoCache) -> usize {
    cache.enforce_limit();
    memoized_distance(source, target, cache)
}

fn memoized_distance(source: &str, target: &str, cache: &MemoCache) -> usize {
    if source == target {
        return 0;
    }

    // Insert all chars of the target into the empty source
    let Some((source_last_idx, source_last)) = source.char_indices().next_back() else {
        return target.chars().count() * INSERTION_COST;
    };

    // Delete all chars of the source to match the empty target
    let Some((target_last_idx, target_last)) = target.char_indices().next_back() else {
        return source.chars().count() * DELETION_COST;
    };

    let cache_key = SymmetricPair::new(source, target);
    if let Some(distance) = cache.get(&cache_key) {
        tracing::trace!(source, target, distance, "memo cache hit");
        return distance;
    }

    let source_head = &source[..source_last_idx];
    let target_head = &target[..target_last_idx];

    let deletion = memoized_distance(source_head, target, cache) + DELETION_COST;
    let insertion = memoized_distance(source, target_head, cache) + INSERTION_COST;

    let mut substitution = memoized_distance(source_head, target_head, cache);
    if source_last != target_last {
        substitution += SUBSTITUTION_COST;
    }

    let distance = deletion.min(insertion).min(substitution);
    cache.insert(cache_key, distance);
    distance
}

//! Short-lived storage for computed recommendations.
//!
//! Front ends compute a [`Recommendation`] once and then read it back over
//! several interactions (paging, filtering, re-rendering). The store keeps
//! each result under a random key until it expires or is evicted to make
//! room, so memory use stays bounded however long the process runs.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Recommendation;

/// Default lifetime of a stored recommendation.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);
/// Default number of recommendations held at once.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Opaque handle returned by [`RecommendationStore::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct RecommendationKey(Uuid);

impl RecommendationKey {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecommendationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    recommendation: Recommendation,
    inserted_at: Instant,
}

/// Expiring key-value store of recommendations.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use palate_core::{Recommendation, RecommendationStore};
///
/// let mut store = RecommendationStore::new(Duration::from_secs(60), 8);
/// let key = store.insert(Recommendation::default());
/// assert!(store.get(key).is_some());
/// assert!(store.remove(key).is_some());
/// assert!(store.get(key).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationStore {
    ttl: Duration,
    capacity: usize,
    entries: HashMap<RecommendationKey, Entry>,
}

impl Default for RecommendationStore {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}

impl RecommendationStore {
    /// Create a store; a zero `capacity` is treated as one.
    #[must_use]
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            ttl,
            capacity: capacity.max(1),
            entries: HashMap::new(),
        }
    }

    /// Store a recommendation and return its key.
    pub fn insert(&mut self, recommendation: Recommendation) -> RecommendationKey {
        self.insert_at(recommendation, Instant::now())
    }

    /// Store a recommendation as of `now`.
    ///
    /// Expired entries are purged first; if the store is still full the
    /// oldest entry is evicted.
    pub fn insert_at(&mut self, recommendation: Recommendation, now: Instant) -> RecommendationKey {
        self.evict_expired_at(now);
        while self.entries.len() >= self.capacity {
            let Some(oldest) = self.oldest_key() else {
                break;
            };
            log::debug!("evicting recommendation {oldest} to stay within capacity");
            self.entries.remove(&oldest);
        }
        let mut key = RecommendationKey::generate();
        while self.entries.contains_key(&key) {
            key = RecommendationKey::generate();
        }
        self.entries.insert(
            key,
            Entry {
                recommendation,
                inserted_at: now,
            },
        );
        key
    }

    /// Fetch a live recommendation.
    #[must_use]
    pub fn get(&self, key: RecommendationKey) -> Option<&Recommendation> {
        self.get_at(key, Instant::now())
    }

    /// Fetch a recommendation that has not expired as of `now`.
    #[must_use]
    pub fn get_at(&self, key: RecommendationKey, now: Instant) -> Option<&Recommendation> {
        self.entries
            .get(&key)
            .filter(|entry| !self.is_expired(entry, now))
            .map(|entry| &entry.recommendation)
    }

    /// Remove and return a recommendation, expired or not.
    pub fn remove(&mut self, key: RecommendationKey) -> Option<Recommendation> {
        self.entries.remove(&key).map(|entry| entry.recommendation)
    }

    /// Drop every expired entry and return how many were removed.
    pub fn evict_expired(&mut self) -> usize {
        self.evict_expired_at(Instant::now())
    }

    /// Drop every entry expired as of `now`.
    pub fn evict_expired_at(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries
            .retain(|_, entry| now.saturating_duration_since(entry.inserted_at) < ttl);
        let evicted = before.saturating_sub(self.entries.len());
        if evicted > 0 {
            log::debug!("evicted {evicted} expired recommendations");
        }
        evicted
    }

    /// Number of stored entries, including any not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the store holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_expired(&self, entry: &Entry, now: Instant) -> bool {
        now.saturating_duration_since(entry.inserted_at) >= self.ttl
    }

    fn oldest_key(&self) -> Option<RecommendationKey> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.inserted_at)
            .map(|(key, _)| *key)
    }
}

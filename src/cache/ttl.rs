//! Single-slot TTL cache for upstream resources
//!
//! A `TtlCache` fronts one expensive producer (usually an upstream HTTP call).
//! Fresh values are served from memory; stale or missing values trigger exactly
//! one producer call. A failed refresh never falls back to the stale value.

use chrono::{DateTime, Duration, Utc};
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Source of the current time, injectable for tests
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// How long a cached value is considered fresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Fresh while younger than the given duration
    Expires(Duration),
    /// Fresh forever once stored
    Never,
}

impl Ttl {
    /// TTL expressed in whole hours
    pub fn hours(hours: i64) -> Self {
        Ttl::Expires(Duration::hours(hours))
    }

    /// TTL expressed in milliseconds
    pub fn millis(millis: i64) -> Self {
        Ttl::Expires(Duration::milliseconds(millis))
    }

    /// Whether a value cached at `cached_at` is still fresh at `now`
    pub fn is_fresh(&self, cached_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            Ttl::Expires(ttl) => now - cached_at < *ttl,
            Ttl::Never => true,
        }
    }
}

/// A stored value together with the time it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    /// The cached data
    pub data: T,
    /// When the data was stored
    pub cached_at: DateTime<Utc>,
}

/// One cache slot dedicated to a single upstream resource
///
/// The slot lock is held only while reading or writing the entry, never while
/// the producer runs. Two callers racing past an expired entry both invoke
/// their producer and both write; the last write wins.
pub struct TtlCache<T> {
    /// Resource name used in log output
    name: &'static str,
    ttl: Ttl,
    slot: Mutex<Option<CacheEntry<T>>>,
    clock: Clock,
}

impl<T> fmt::Debug for TtlCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlCache")
            .field("name", &self.name)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> TtlCache<T> {
    /// Creates an empty cache slot using the system clock
    pub fn new(name: &'static str, ttl: Ttl) -> Self {
        Self::with_clock(name, ttl, Arc::new(Utc::now))
    }

    /// Creates an empty cache slot with a custom clock
    pub fn with_clock(name: &'static str, ttl: Ttl, clock: Clock) -> Self {
        Self {
            name,
            ttl,
            slot: Mutex::new(None),
            clock,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Returns the current entry without checking freshness
    pub fn peek(&self) -> Option<CacheEntry<T>> {
        self.lock().clone()
    }

    /// Returns the cached value if fresh, otherwise runs `producer` once
    ///
    /// # Returns
    /// * `Some(T)` - a fresh cached value, or the value just produced
    /// * `None` - the slot was empty or expired and the producer yielded nothing
    ///
    /// A `None` from the producer leaves the slot untouched.
    pub async fn get_or_refresh<F, Fut>(&self, producer: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        if let Some(data) = self.fresh_value((self.clock)()) {
            tracing::debug!(cache = self.name, "cache hit");
            return Some(data);
        }

        tracing::info!(cache = self.name, "refreshing cached resource");
        match producer().await {
            Some(data) => {
                self.store(data.clone());
                Some(data)
            }
            None => {
                tracing::warn!(cache = self.name, "refresh produced no data");
                None
            }
        }
    }

    /// Returns the cached value if fresh, otherwise stores and returns `compute()`
    ///
    /// For locally built values that cannot fail.
    pub fn get_or_compute<F>(&self, compute: F) -> T
    where
        F: FnOnce() -> T,
    {
        if let Some(data) = self.fresh_value((self.clock)()) {
            tracing::debug!(cache = self.name, "cache hit");
            return data;
        }

        tracing::info!(cache = self.name, "rebuilding cached resource");
        let data = compute();
        self.store(data.clone());
        data
    }

    fn store(&self, data: T) {
        let entry = CacheEntry {
            data,
            cached_at: (self.clock)(),
        };
        *self.lock() = Some(entry);
    }

    fn fresh_value(&self, now: DateTime<Utc>) -> Option<T> {
        let slot = self.lock();
        let entry = slot.as_ref()?;
        self.ttl
            .is_fresh(entry.cached_at, now)
            .then(|| entry.data.clone())
    }

    fn lock(&self) -> MutexGuard<'_, Option<CacheEntry<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

//! Concurrent key-value cache with per-entry time-to-live.
//!
//! Backed by `moka` with a custom expiry policy so every `set` carries its
//! own TTL. Expired entries are never returned by `get`; they are physically
//! reclaimed by moka's maintenance, which a background sweeper drives until
//! the owning lifecycle token is cancelled.

use moka::future::Cache;
use moka::Expiry;
use std::borrow::Borrow;
use std::hash::Hash;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Stored value together with the TTL it was set with.
#[derive(Clone)]
struct Expiring<V> {
    value: V,
    ttl: Duration,
}

/// Expiry policy reading the TTL from the stored value.
///
/// Replacing an entry restarts its TTL, reading it does not.
struct PerEntryTtl;

impl<K, V> Expiry<K, Expiring<V>> for PerEntryTtl {
    fn expire_after_create(&self, _key: &K, value: &Expiring<V>, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &K,
        value: &Expiring<V>,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Process-wide TTL cache safe for concurrent `get`/`set`/`delete`.
///
/// Cloning is cheap and yields a handle to the same entries.
#[derive(Clone)]
pub struct TtlCache<K, V> {
    entries: Cache<K, Expiring<V>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache without a background sweeper.
    ///
    /// Expiry is still enforced on every read; reclamation of entries
    /// nobody reads again happens during moka's lazy maintenance.
    pub fn new() -> Self {
        Self {
            entries: Cache::builder().expire_after(PerEntryTtl).build(),
        }
    }

    /// Create a cache whose expired entries are reclaimed every
    /// `sweep_interval` until `lifecycle` is cancelled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_lifecycle(lifecycle: &CancellationToken, sweep_interval: Duration) -> Self {
        let cache = Self::new();
        let entries = cache.entries.clone();
        let lifecycle = lifecycle.clone();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(sweep_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    () = lifecycle.cancelled() => break,
                    _ = ticker.tick() => entries.run_pending_tasks().await,
                }
            }

            debug!("ttl cache sweeper stopped");
        });

        cache
    }

    /// Get a live value. Returns `None` when the key was never set, was
    /// deleted, or its TTL has elapsed.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key).await.map(|entry| entry.value)
    }

    /// Store `value`, replacing any existing entry, readable for `ttl`.
    pub async fn set(&self, key: K, value: V, ttl: Duration) {
        self.entries.insert(key, Expiring { value, ttl }).await;
    }

    /// Remove an entry immediately. Deleting an absent key is a no-op.
    pub async fn delete<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.invalidate(key).await;
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.invalidate_all();
    }

    /// Approximate number of stored entries, exact after `run_pending_tasks`.
    pub fn entry_count(&self) -> u64 {
        self.entries.entry_count()
    }

    /// Apply pending maintenance, reclaiming expired entries.
    pub async fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks().await;
    }
}

impl<K, V> Default for TtlCache<K, V>
where
    K: Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

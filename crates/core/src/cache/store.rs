//! Bounded FIFO store with single-flight population.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::sync::Arc;

use tokio::sync::{Mutex, OnceCell};

use crate::Error;
use crate::model::Submission;

/// A complete fetched dataset, shared between the cache and its readers.
pub type Dataset = Arc<Vec<Submission>>;

type Flight = Arc<OnceCell<Result<Dataset, Error>>>;

#[derive(Debug)]
struct CacheEntry {
    key: String,
    dataset: Dataset,
}

/// Process-lifetime cache of full datasets keyed by query identity hash.
///
/// Eviction is strict FIFO: once `capacity` entries are held, inserting
/// another drops the oldest-inserted one. Reads never change eviction order.
#[derive(Debug)]
pub struct ResultCache {
    capacity: usize,
    entries: Mutex<VecDeque<CacheEntry>>,
    in_flight: Mutex<HashMap<String, Flight>>,
}

impl ResultCache {
    /// Create an empty cache holding at most `capacity` datasets.
    pub fn new(capacity: usize) -> Self {
        Self { capacity, entries: Mutex::new(VecDeque::with_capacity(capacity)), in_flight: Mutex::new(HashMap::new()) }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    /// Look up a dataset. The newest entry wins if a key was inserted twice.
    pub async fn get(&self, key: &str) -> Option<Dataset> {
        let entries = self.entries.lock().await;
        entries
            .iter()
            .rev()
            .find(|entry| entry.key == key)
            .map(|entry| Arc::clone(&entry.dataset))
    }

    /// Insert a dataset unconditionally, evicting the oldest entry when full.
    pub async fn put(&self, key: &str, dataset: Dataset) {
        if self.capacity == 0 {
            return;
        }

        let mut entries = self.entries.lock().await;
        while entries.len() >= self.capacity {
            if let Some(evicted) = entries.pop_front() {
                tracing::debug!(key = %evicted.key, "evicting oldest cache entry");
            }
        }
        entries.push_back(CacheEntry { key: key.to_string(), dataset });
    }

    /// Return the cached dataset for `key`, or run `fetch` to produce it.
    ///
    /// Concurrent misses on the same key join a single in-flight fetch and all
    /// receive its outcome. Only successful fetches are stored; a failure is
    /// handed to the callers that joined it and the next request retries.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<Dataset, Error>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Submission>, Error>>,
    {
        if let Some(hit) = self.get(key).await {
            tracing::debug!(key, "cache hit");
            return Ok(hit);
        }

        let flight = {
            let mut in_flight = self.in_flight.lock().await;
            let flight = in_flight.entry(key.to_string()).or_default();
            if flight.initialized() {
                // Finished flight whose marker was never cleared; start over.
                *flight = Flight::default();
            } else if Arc::strong_count(flight) > 1 {
                tracing::debug!(key, "joining in-flight fetch");
            }
            Arc::clone(flight)
        };

        flight
            .get_or_init(|| async {
                // A flight for this key may have finished between the miss and joining.
                if let Some(hit) = self.get(key).await {
                    self.clear_flight(key, &flight).await;
                    return Ok(hit);
                }

                tracing::debug!(key, "cache miss");
                let fetched = fetch().await.map(Arc::new);
                if let Ok(dataset) = &fetched {
                    self.put(key, Arc::clone(dataset)).await;
                }
                self.clear_flight(key, &flight).await;
                fetched
            })
            .await
            .clone()
    }

    /// Drop the in-flight marker for `key` if it is still `flight`.
    async fn clear_flight(&self, key: &str, flight: &Flight) {
        let mut in_flight = self.in_flight.lock().await;
        if in_flight.get(key).is_some_and(|current| Arc::ptr_eq(current, flight)) {
            in_flight.remove(key);
        }
    }
}

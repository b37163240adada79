//! In-memory query embedding cache.
//!
//! moka::sync::Cache keyed by the blake3 hash of the query text.
//! Only successful embeddings are stored, so a provider outage is never
//! remembered past the query it affected.

use moka::sync::Cache;

/// Bounded LRU-ish cache of query embeddings.
pub struct QueryCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryCache {
    /// Create a new cache with the given max entry count.
    pub fn new(max_capacity: u64) -> Self {
        Self {
            cache: Cache::new(max_capacity),
        }
    }

    /// Content key for a query.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(text))
    }

    pub fn insert(&self, text: &str, embedding: Vec<f32>) {
        self.cache.insert(Self::key(text), embedding);
    }

    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains_key(&Self::key(text))
    }

    /// Approximate entry count; moka applies writes lazily.
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

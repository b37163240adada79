//! EmbeddingEngine, the entry point for transit-embeddings.
//!
//! Owns the provider, the zero-vector fallback, and the query cache.
//! Shared by reference across threads; nothing here needs `&mut self`.

use std::sync::Arc;

use tracing::{debug, info};
use transit_core::config::EmbeddingConfig;
use transit_core::errors::TransitResult;
use transit_core::traits::IEmbeddingProvider;
use transit_core::IntentBank;

use crate::cache::QueryCache;
use crate::degradation::{Embedded, EmbeddedBatch, ZeroFallback};
use crate::providers;

/// Component name on degradation events for query embeddings.
pub const QUERY_COMPONENT: &str = "embeddings.query";

/// The main embedding engine.
pub struct EmbeddingEngine {
    fallback: ZeroFallback,
    cache: Option<QueryCache>,
}

impl EmbeddingEngine {
    /// Wrap an existing provider. `query_cache_size` of 0 disables caching.
    pub fn new(provider: Arc<dyn IEmbeddingProvider>, query_cache_size: u64) -> Self {
        let cache = (query_cache_size > 0).then(|| QueryCache::new(query_cache_size));
        let fallback = ZeroFallback::new(provider);

        info!(
            provider = fallback.provider().name(),
            dims = fallback.dimensions(),
            query_cache = query_cache_size,
            "EmbeddingEngine initialized"
        );

        Self { fallback, cache }
    }

    /// Create the configured provider and wrap it. `bank` is only read by
    /// the offline `tfidf` provider, which fits its vocabulary on it.
    ///
    /// # Errors
    /// Propagates provider construction errors (unknown provider, missing or
    /// placeholder credential).
    pub fn from_config(config: &EmbeddingConfig, bank: &IntentBank) -> TransitResult<Self> {
        let provider = providers::create_provider(config, bank)?;
        Ok(Self::new(provider, config.query_cache_size))
    }

    /// Embed a user query, consulting the cache first.
    pub fn embed_query(&self, query: &str) -> Embedded {
        if let Some(vector) = self.cache.as_ref().and_then(|c| c.get(query)) {
            debug!("cache hit for query embedding");
            return Embedded {
                vector,
                degradation: None,
            };
        }

        let embedded = self.fallback.embed(QUERY_COMPONENT, query);
        if let (Some(cache), false) = (&self.cache, embedded.is_degraded()) {
            cache.insert(query, embedded.vector.clone());
        }
        embedded
    }

    /// Embed one label's examples in a single batch call. Never cached.
    pub fn embed_examples(&self, label: &str, examples: &[String]) -> EmbeddedBatch {
        let component = format!("embeddings.examples[{label}]");
        self.fallback.embed_batch(&component, examples)
    }

    pub fn provider_name(&self) -> &str {
        self.fallback.provider().name()
    }

    pub fn dimensions(&self) -> usize {
        self.fallback.dimensions()
    }

    pub fn query_cache(&self) -> Option<&QueryCache> {
        self.cache.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::VocabularyProvider;

    fn tfidf_engine(cache: u64) -> EmbeddingEngine {
        let provider = VocabularyProvider::from_bank(&IntentBank::default_bank(), 128);
        EmbeddingEngine::new(Arc::new(provider), cache)
    }

    #[test]
    fn from_config_tfidf() {
        let engine = EmbeddingEngine::from_config(
            &EmbeddingConfig {
                provider: "tfidf".to_string(),
                dimensions: 96,
                ..Default::default()
            },
            &IntentBank::default_bank(),
        )
        .unwrap();
        assert_eq!(engine.dimensions(), 96);
        assert_eq!(engine.provider_name(), "tfidf");
    }

    #[test]
    fn embed_query_caches() {
        let engine = tfidf_engine(10);
        let a = engine.embed_query("next bus to harvard");
        assert!(engine.query_cache().unwrap().contains("next bus to harvard"));
        let b = engine.embed_query("next bus to harvard");
        assert_eq!(a, b);
    }

    #[test]
    fn zero_capacity_disables_cache() {
        let engine = tfidf_engine(0);
        assert!(engine.query_cache().is_none());
        assert_eq!(engine.embed_query("hello").vector.len(), 128);
    }

    #[test]
    fn examples_keep_order() {
        let engine = tfidf_engine(10);
        let examples = vec!["red line delays".to_string(), "orange line status".to_string()];
        let batch = engine.embed_examples("alerts", &examples);
        assert_eq!(batch.vectors.len(), 2);
        assert_eq!(batch.vectors[0], engine.embed_query("red line delays").vector);
    }
}

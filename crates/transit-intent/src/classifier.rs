//! IntentClassifier: embed the query, score every label, select intents.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use tracing::debug;
use transit_core::config::{defaults, IntentConfig};
use transit_core::errors::TransitResult;
use transit_core::traits::IEmbeddingProvider;
use transit_core::{
    ClassificationReport, ClassificationResult, DegradationEvent, IntentBank, IntentScore,
    TransitConfig,
};
use transit_embeddings::engine::QUERY_COMPONENT;
use transit_embeddings::{cosine_similarity, Embedded, EmbeddingEngine};
use transit_observability::tracing_setup::events;
use transit_observability::{classification_span, embedding_span, DegradationTracker};

use crate::cache::IntentEmbeddingCache;
use crate::scoring::{self, BlendWeights, Thresholds};

/// Embedding-based multi-intent classifier.
///
/// The example cache is built during construction and read-only afterwards.
/// Share one instance behind an `Arc` across threads. A healthy query only
/// touches the degradation tracker when it ends a degraded period.
pub struct IntentClassifier {
    engine: EmbeddingEngine,
    cache: IntentEmbeddingCache,
    thresholds: Thresholds,
    weights: BlendWeights,
    tracker: Mutex<DegradationTracker>,
    query_degraded: AtomicBool,
}

impl IntentClassifier {
    /// Build from the full configuration.
    ///
    /// # Errors
    /// Fails fast on invalid configuration, an unknown provider, or a missing
    /// or placeholder API credential. Provider failures while embedding the
    /// example bank are not errors; those labels degrade to zero vectors.
    pub fn from_config(config: &TransitConfig) -> TransitResult<Self> {
        config.validate()?;
        let bank = config.intent_bank()?;
        let engine = EmbeddingEngine::from_config(&config.embedding, &bank)?;
        Ok(Self::with_engine(bank, engine, &config.intent)
            .with_degradation_history(config.observability.degradation_history))
    }

    /// Build around an existing provider, e.g. a mock or a custom backend.
    pub fn with_provider(
        bank: IntentBank,
        provider: Arc<dyn IEmbeddingProvider>,
        config: &IntentConfig,
    ) -> Self {
        let engine = EmbeddingEngine::new(provider, defaults::DEFAULT_QUERY_CACHE_SIZE);
        Self::with_engine(bank, engine, config)
    }

    /// Build around an existing engine. Embeds the whole bank before returning.
    pub fn with_engine(bank: IntentBank, engine: EmbeddingEngine, config: &IntentConfig) -> Self {
        let (cache, init_events) = IntentEmbeddingCache::build(&bank, &engine, config.parallel_init);

        let mut tracker = DegradationTracker::new();
        for event in init_events {
            tracker.record(event);
        }

        Self {
            engine,
            cache,
            thresholds: Thresholds::from(config),
            weights: BlendWeights::from(config),
            tracker: Mutex::new(tracker),
            query_degraded: AtomicBool::new(false),
        }
    }

    /// Cap the number of retained degradation entries.
    pub fn with_degradation_history(self, capacity: usize) -> Self {
        self.tracker().set_capacity(capacity);
        self
    }

    /// Classify a query into up to `max_intents` intents.
    ///
    /// Never fails: a provider failure yields the general sentinel result.
    pub fn classify_intent(&self, query: &str) -> ClassificationResult {
        self.classify_with_report(query).result
    }

    /// Classify and report whether the query embedding fell back to zeros.
    pub fn classify_with_report(&self, query: &str) -> ClassificationReport {
        self.classify_with_scores(query).0
    }

    /// Classify and also return every label's blended score, ranked.
    ///
    /// The query is embedded once; the scores are the ones selection ran on.
    pub fn classify_with_scores(&self, query: &str) -> (ClassificationReport, Vec<IntentScore>) {
        let span = classification_span!(query.len());
        let _enter = span.enter();
        let start = Instant::now();

        let embedded = self.embed_query(query);
        let ranked = self.rank_vector(&embedded.vector);
        let result = scoring::select_intents(&ranked, &self.thresholds);

        events::classification_completed(
            result.top().label.as_str(),
            result.len(),
            embedded.is_degraded(),
            start.elapsed().as_millis() as u64,
        );
        debug!(summary = %result.summary(), "classified query");

        let report = ClassificationReport {
            result,
            degradation: embedded.degradation,
        };
        (report, ranked)
    }

    /// Every label's blended score for `query`, ranked. For diagnostics:
    /// a failed embedding here is not recorded as a degradation.
    pub fn scores(&self, query: &str) -> Vec<IntentScore> {
        let embedded = self.engine.embed_query(query);
        self.rank_vector(&embedded.vector)
    }

    /// Remove and return the retained degradations, including those from
    /// building the example cache. Repeated query failures arrive as one
    /// event per degraded period.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.tracker().drain()
    }

    /// Whether the most recent query embedding failed.
    pub fn is_query_path_degraded(&self) -> bool {
        self.query_degraded.load(Ordering::Acquire)
    }

    pub fn cache(&self) -> &IntentEmbeddingCache {
        &self.cache
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn weights(&self) -> BlendWeights {
        self.weights
    }

    pub fn engine(&self) -> &EmbeddingEngine {
        &self.engine
    }

    fn embed_query(&self, query: &str) -> Embedded {
        let span = embedding_span!(self.engine.provider_name(), self.engine.dimensions());
        let _enter = span.enter();

        let embedded = self.engine.embed_query(query);
        match &embedded.degradation {
            Some(event) => {
                let mut tracker = self.tracker();
                tracker.record(event.clone());
                self.query_degraded.store(true, Ordering::Release);
            }
            None => {
                if self.query_degraded.swap(false, Ordering::AcqRel) {
                    self.tracker().mark_recovered(QUERY_COMPONENT);
                }
            }
        }
        embedded
    }

    fn rank_vector(&self, query: &[f32]) -> Vec<IntentScore> {
        let scores = self
            .cache
            .iter()
            .map(|entry| {
                let similarities: Vec<f64> = entry
                    .vectors()
                    .iter()
                    .map(|example| cosine_similarity(query, example))
                    .collect();
                IntentScore::new(
                    entry.label().clone(),
                    scoring::blend_score(&similarities, self.weights),
                )
            })
            .collect();
        scoring::rank(scores)
    }

    fn tracker(&self) -> MutexGuard<'_, DegradationTracker> {
        self.tracker.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

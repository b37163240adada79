//! IntentEmbeddingCache: every example vector, computed once at startup.
//!
//! Built by [`IntentEmbeddingCache::build`] and never mutated afterwards,
//! so any number of classification threads can read it without locking.

use std::time::Instant;

use rayon::prelude::*;
use transit_core::models::DegradationEvent;
use transit_core::{IntentBank, IntentExampleSet, IntentLabel};
use transit_embeddings::{EmbeddedBatch, EmbeddingEngine};
use transit_observability::cache_build_span;
use transit_observability::tracing_setup::events;

/// Cached example vectors for one label, in example order.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelEmbeddings {
    label: IntentLabel,
    vectors: Vec<Vec<f32>>,
    degraded: bool,
}

impl LabelEmbeddings {
    pub fn label(&self) -> &IntentLabel {
        &self.label
    }

    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// Whether this label's batch fell back to zero vectors.
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

/// Immutable label → example vectors map, in bank order.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentEmbeddingCache {
    entries: Vec<LabelEmbeddings>,
    dimensions: usize,
}

impl IntentEmbeddingCache {
    /// Embed every example set with one batch call per label.
    ///
    /// With `parallel` the labels are embedded concurrently on the rayon
    /// pool; entries still come back in bank order. A failed batch leaves
    /// that label with zero vectors and yields a degradation event.
    pub fn build(
        bank: &IntentBank,
        engine: &EmbeddingEngine,
        parallel: bool,
    ) -> (Self, Vec<DegradationEvent>) {
        let span = cache_build_span!(bank.len(), parallel);
        let _enter = span.enter();
        let start = Instant::now();

        let embed = |set: &IntentExampleSet| -> EmbeddedBatch {
            engine.embed_examples(set.label.as_str(), &set.examples)
        };
        let batches: Vec<EmbeddedBatch> = if parallel {
            bank.sets().par_iter().map(embed).collect()
        } else {
            bank.sets().iter().map(embed).collect()
        };

        let mut entries = Vec::with_capacity(batches.len());
        let mut degradations = Vec::new();
        for (set, batch) in bank.iter().zip(batches) {
            entries.push(LabelEmbeddings {
                label: set.label.clone(),
                vectors: batch.vectors,
                degraded: batch.degradation.is_some(),
            });
            degradations.extend(batch.degradation);
        }

        let cache = Self {
            entries,
            dimensions: engine.dimensions(),
        };
        events::cache_built(
            cache.len(),
            bank.example_count(),
            degradations.len(),
            start.elapsed().as_millis() as u64,
        );
        (cache, degradations)
    }

    /// Build directly from precomputed vectors, in the given order.
    pub fn from_vectors(dimensions: usize, entries: Vec<(IntentLabel, Vec<Vec<f32>>)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, vectors)| LabelEmbeddings {
                    label,
                    vectors,
                    degraded: false,
                })
                .collect(),
            dimensions,
        }
    }

    pub fn get(&self, label: &str) -> Option<&[Vec<f32>]> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.vectors.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &IntentLabel> {
        self.entries.iter().map(|e| &e.label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabelEmbeddings> {
        self.entries.iter()
    }

    /// Labels whose examples are all zero vectors after a failed batch.
    pub fn degraded_labels(&self) -> impl Iterator<Item = &IntentLabel> {
        self.entries.iter().filter(|e| e.degraded).map(|e| &e.label)
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use transit_embeddings::VocabularyProvider;

    fn bank() -> IntentBank {
        IntentBank::new(vec![
            IntentExampleSet::new("alerts", ["red line delays", "orange line suspended"]),
            IntentExampleSet::new("schedule", ["next train", "last bus tonight", "weekend hours"]),
        ])
        .unwrap()
    }

    #[test]
    fn one_entry_per_label_in_bank_order() {
        let engine = EmbeddingEngine::new(Arc::new(VocabularyProvider::from_bank(&bank(), 64)), 0);
        let (cache, events) = IntentEmbeddingCache::build(&bank(), &engine, false);
        assert!(events.is_empty());
        let labels: Vec<&str> = cache.labels().map(|l| l.as_str()).collect();
        assert_eq!(labels, vec!["alerts", "schedule"]);
        assert_eq!(cache.get("schedule").unwrap().len(), 3);
        assert_eq!(cache.dimensions(), 64);
        assert!(cache.get("general").is_none());
    }

    #[test]
    fn parallel_matches_sequential() {
        let engine = EmbeddingEngine::new(Arc::new(VocabularyProvider::from_bank(&bank(), 64)), 0);
        let (seq, _) = IntentEmbeddingCache::build(&bank(), &engine, false);
        let (par, _) = IntentEmbeddingCache::build(&bank(), &engine, true);
        assert_eq!(seq, par);
    }

    #[test]
    fn from_vectors_keeps_order() {
        let cache = IntentEmbeddingCache::from_vectors(
            2,
            vec![
                (IntentLabel::new("b"), vec![vec![1.0, 0.0]]),
                (IntentLabel::new("a"), vec![vec![0.0, 1.0]]),
            ],
        );
        let labels: Vec<&str> = cache.labels().map(|l| l.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(cache.degraded_labels().count(), 0);
    }
}

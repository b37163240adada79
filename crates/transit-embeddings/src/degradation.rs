//! Zero-vector fallback for embedding generation.
//!
//! A provider error, timeout, or malformed vector never reaches the caller.
//! The text is embedded as all zeros, which scores 0.0 against every example,
//! and a `DegradationEvent` records what happened.

use std::sync::Arc;

use tracing::warn;
use transit_core::errors::{EmbeddingError, TransitError, TransitResult};
use transit_core::models::DegradationEvent;
use transit_core::traits::IEmbeddingProvider;

use crate::similarity::zero_vector;

/// `fallback_used` value on every event produced here.
pub const ZERO_VECTOR_FALLBACK: &str = "zero-vector";

/// One embedding, possibly degraded.
#[derive(Debug, Clone, PartialEq)]
pub struct Embedded {
    pub vector: Vec<f32>,
    pub degradation: Option<DegradationEvent>,
}

impl Embedded {
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }
}

/// A batch of embeddings in input order. Degradation applies to all of them.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedBatch {
    pub vectors: Vec<Vec<f32>>,
    pub degradation: Option<DegradationEvent>,
}

impl EmbeddedBatch {
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }
}

/// Wraps a provider so every call yields vectors of the provider's dimension.
pub struct ZeroFallback {
    provider: Arc<dyn IEmbeddingProvider>,
    dimensions: usize,
}

impl ZeroFallback {
    pub fn new(provider: Arc<dyn IEmbeddingProvider>) -> Self {
        let dimensions = provider.dimensions();
        Self {
            provider,
            dimensions,
        }
    }

    pub fn provider(&self) -> &dyn IEmbeddingProvider {
        self.provider.as_ref()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Embed one text. `component` names the caller in any degradation event.
    pub fn embed(&self, component: &str, text: &str) -> Embedded {
        let result = self
            .provider
            .embed(text)
            .and_then(|v| self.check_vector(v));

        match result {
            Ok(vector) => Embedded {
                vector,
                degradation: None,
            },
            Err(e) => Embedded {
                vector: zero_vector(self.dimensions),
                degradation: Some(self.degrade(component, &e)),
            },
        }
    }

    /// Embed a batch. Any failure zeroes every vector in the batch.
    pub fn embed_batch(&self, component: &str, texts: &[String]) -> EmbeddedBatch {
        if texts.is_empty() {
            return EmbeddedBatch {
                vectors: Vec::new(),
                degradation: None,
            };
        }

        let result = self.provider.embed_batch(texts).and_then(|vectors| {
            if vectors.len() != texts.len() {
                return Err(EmbeddingError::CountMismatch {
                    expected: texts.len(),
                    actual: vectors.len(),
                }
                .into());
            }
            vectors
                .into_iter()
                .map(|v| self.check_vector(v))
                .collect::<TransitResult<Vec<_>>>()
        });

        match result {
            Ok(vectors) => EmbeddedBatch {
                vectors,
                degradation: None,
            },
            Err(e) => EmbeddedBatch {
                vectors: texts.iter().map(|_| zero_vector(self.dimensions)).collect(),
                degradation: Some(self.degrade(component, &e)),
            },
        }
    }

    fn check_vector(&self, v: Vec<f32>) -> TransitResult<Vec<f32>> {
        if v.len() != self.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: v.len(),
            }
            .into());
        }
        if v.iter().any(|x| !x.is_finite()) {
            return Err(EmbeddingError::MalformedResponse {
                reason: "embedding contains non-finite values".to_string(),
            }
            .into());
        }
        Ok(v)
    }

    fn degrade(&self, component: &str, error: &TransitError) -> DegradationEvent {
        warn!(
            component,
            provider = self.provider.name(),
            error = %error,
            fallback = ZERO_VECTOR_FALLBACK,
            "embedding failed, using zero vector"
        );
        DegradationEvent::now(component, error.to_string(), ZERO_VECTOR_FALLBACK)
    }
}

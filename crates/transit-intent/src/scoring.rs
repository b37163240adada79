//! Per-label score blending, ranking, and greedy intent selection.

use transit_core::config::{defaults, IntentConfig};
use transit_core::{ClassificationResult, IntentLabel, IntentScore};

/// How a label's similarity list collapses into one score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendWeights {
    /// Weight of the best similarity; the top-k mean gets `1 - max_weight`.
    pub max_weight: f64,
    pub top_k: usize,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            max_weight: defaults::DEFAULT_MAX_WEIGHT,
            top_k: defaults::DEFAULT_TOP_K,
        }
    }
}

impl From<&IntentConfig> for BlendWeights {
    fn from(config: &IntentConfig) -> Self {
        Self {
            max_weight: config.max_weight,
            top_k: config.top_k,
        }
    }
}

/// Selection gates for the ranked label list.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Minimum score for the first selected intent.
    pub primary: f64,
    /// Minimum score for every later intent.
    pub secondary: f64,
    pub max_intents: usize,
    /// Never selected after another label; also the sentinel label.
    pub general_label: IntentLabel,
    /// Confidence of the sentinel result.
    pub fallback_confidence: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::from(&IntentConfig::default())
    }
}

impl From<&IntentConfig> for Thresholds {
    fn from(config: &IntentConfig) -> Self {
        Self {
            primary: config.primary_threshold,
            secondary: config.secondary_threshold,
            max_intents: config.max_intents,
            general_label: IntentLabel::new(config.general_label.clone()),
            fallback_confidence: config.fallback_confidence,
        }
    }
}

impl Thresholds {
    /// The result returned when nothing clears the primary threshold.
    pub fn sentinel(&self) -> ClassificationResult {
        ClassificationResult::single(self.general_label.clone(), self.fallback_confidence)
    }
}

/// `max_weight * max + (1 - max_weight) * mean(top_k)`.
///
/// With fewer than `top_k` similarities the mean covers all of them.
/// An empty list scores 0.0. Non-finite similarities count as 0.0.
pub fn blend_score(similarities: &[f64], weights: BlendWeights) -> f64 {
    if similarities.is_empty() {
        return 0.0;
    }
    let mut sorted: Vec<f64> = similarities
        .iter()
        .map(|&s| if s.is_finite() { s } else { 0.0 })
        .collect();
    sorted.sort_by(|a, b| b.total_cmp(a));

    let max = sorted[0];
    let k = weights.top_k.clamp(1, sorted.len());
    let mean = sorted[..k].iter().sum::<f64>() / k as f64;
    weights.max_weight * max + (1.0 - weights.max_weight) * mean
}

/// Sort scores descending. The sort is stable, so equal scores keep bank order.
pub fn rank(mut scores: Vec<IntentScore>) -> Vec<IntentScore> {
    scores.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    scores
}

/// Walk the ranked list and pick intents greedily.
///
/// The first pick needs `primary`, later picks need `secondary`. The general
/// label is skipped once anything else has been picked. Stops at
/// `max_intents`. Falls back to the sentinel when nothing qualifies.
pub fn select_intents(ranked: &[IntentScore], thresholds: &Thresholds) -> ClassificationResult {
    let mut selected: Vec<IntentScore> = Vec::with_capacity(thresholds.max_intents);

    for score in ranked {
        let threshold = if selected.is_empty() {
            thresholds.primary
        } else {
            thresholds.secondary
        };
        if score.confidence < threshold {
            continue;
        }
        if score.label == thresholds.general_label && !selected.is_empty() {
            continue;
        }
        selected.push(score.clone());
        if selected.len() >= thresholds.max_intents {
            break;
        }
    }

    ClassificationResult::try_from(selected).unwrap_or_else(|_| thresholds.sentinel())
}

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::intent::IntentExampleSet;

/// Intent classification configuration.
///
/// The thresholds are empirically tuned against the default example bank;
/// a different bank will usually want different values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentConfig {
    /// Minimum score for the first selected intent.
    pub primary_threshold: f64,
    /// Minimum score for every further intent.
    pub secondary_threshold: f64,
    /// Cap on the number of intents returned.
    pub max_intents: usize,
    /// Weight of the max similarity in the blend; the top-k mean gets the rest.
    pub max_weight: f64,
    /// How many of the best similarities feed the mean term.
    pub top_k: usize,
    /// Chit-chat label: suppressed next to specific intents, used for the sentinel.
    pub general_label: String,
    /// Confidence reported with the sentinel result.
    pub fallback_confidence: f64,
    /// Embed example sets for different labels concurrently at startup.
    pub parallel_init: bool,
    /// Example bank. Empty means the built-in transit bank.
    pub examples: Vec<IntentExampleSet>,
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            primary_threshold: defaults::DEFAULT_PRIMARY_THRESHOLD,
            secondary_threshold: defaults::DEFAULT_SECONDARY_THRESHOLD,
            max_intents: defaults::DEFAULT_MAX_INTENTS,
            max_weight: defaults::DEFAULT_MAX_WEIGHT,
            top_k: defaults::DEFAULT_TOP_K,
            general_label: defaults::DEFAULT_GENERAL_LABEL.to_string(),
            fallback_confidence: defaults::DEFAULT_FALLBACK_CONFIDENCE,
            parallel_init: defaults::DEFAULT_PARALLEL_INIT,
            examples: Vec::new(),
        }
    }
}

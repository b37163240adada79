use serde::{Deserialize, Serialize};

use crate::intent::IntentLabel;

/// One detected intent with its confidence.
///
/// `confidence` is the raw blended similarity score, not a probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    pub label: IntentLabel,
    pub confidence: f64,
}

impl IntentScore {
    pub fn new(label: impl Into<IntentLabel>, confidence: f64) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::IntentScore;
use crate::errors::IntentError;
use crate::intent::IntentLabel;

/// Summary text when there is nothing to summarize.
pub const NO_INTENT_SUMMARY: &str = "No clear intent detected";

/// Ordered, non-empty list of detected intents for one query.
///
/// Serializes as a JSON array of `{label, confidence}` objects in
/// selection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<IntentScore>", into = "Vec<IntentScore>")]
pub struct ClassificationResult {
    intents: Vec<IntentScore>,
}

impl ClassificationResult {
    /// A single-intent result with a fixed confidence.
    pub fn single(label: impl Into<IntentLabel>, confidence: f64) -> Self {
        Self {
            intents: vec![IntentScore::new(label, confidence)],
        }
    }

    /// The highest-ranked intent.
    pub fn top(&self) -> &IntentScore {
        // Non-empty by construction.
        &self.intents[0]
    }

    pub fn labels(&self) -> Vec<&IntentLabel> {
        self.intents.iter().map(|s| &s.label).collect()
    }

    pub fn confidence(&self, label: &str) -> Option<f64> {
        self.intents
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.confidence)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.confidence(label).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntentScore> {
        self.intents.iter()
    }

    pub fn as_slice(&self) -> &[IntentScore] {
        &self.intents
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn into_vec(self) -> Vec<IntentScore> {
        self.intents
    }

    /// Human-readable form, e.g. `alerts (0.82) + schedule (0.61)`.
    pub fn summary(&self) -> String {
        summarize(&self.intents)
    }
}

impl TryFrom<Vec<IntentScore>> for ClassificationResult {
    type Error = IntentError;

    fn try_from(intents: Vec<IntentScore>) -> Result<Self, Self::Error> {
        if intents.is_empty() {
            return Err(IntentError::EmptyResult);
        }
        Ok(Self { intents })
    }
}

impl From<ClassificationResult> for Vec<IntentScore> {
    fn from(result: ClassificationResult) -> Self {
        result.intents
    }
}

impl<'a> IntoIterator for &'a ClassificationResult {
    type Item = &'a IntentScore;
    type IntoIter = std::slice::Iter<'a, IntentScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.intents.iter()
    }
}

/// Join `label (confidence)` pairs with ` + `, two decimals per confidence.
pub fn summarize(intents: &[IntentScore]) -> String {
    if intents.is_empty() {
        return NO_INTENT_SUMMARY.to_string();
    }
    intents
        .iter()
        .map(|s| format!("{} ({:.2})", s.label, s.confidence))
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_vec_is_rejected() {
        let err = ClassificationResult::try_from(Vec::new()).unwrap_err();
        assert!(matches!(err, IntentError::EmptyResult));
    }

    #[test]
    fn summary_joins_with_plus() {
        let result = ClassificationResult::try_from(vec![
            IntentScore::new("alerts", 0.8234),
            IntentScore::new("schedule", 0.6),
        ])
        .unwrap();
        assert_eq!(result.summary(), "alerts (0.82) + schedule (0.60)");
    }

    #[test]
    fn summarize_empty_slice() {
        assert_eq!(summarize(&[]), NO_INTENT_SUMMARY);
    }

    #[test]
    fn top_is_first() {
        let result = ClassificationResult::single("general", 0.5);
        assert_eq!(result.top().label, "general");
        assert_eq!(result.confidence("general"), Some(0.5));
        assert!(!result.contains("alerts"));
    }
}

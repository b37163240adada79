use serde::{Deserialize, Serialize};

use super::{ClassificationResult, DegradationEvent};

/// A classification plus whether the query embedding fell back to zeros.
///
/// Callers that only need the intents use `result`; a set `degradation`
/// means the low confidence came from a provider failure, not the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationReport {
    pub result: ClassificationResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degradation: Option<DegradationEvent>,
}

impl ClassificationReport {
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }
}

mod classification_report;
mod classification_result;
mod degradation_event;
mod intent_score;

pub use classification_report::ClassificationReport;
pub use classification_result::{summarize, ClassificationResult, NO_INTENT_SUMMARY};
pub use degradation_event::DegradationEvent;
pub use intent_score::IntentScore;

//! Human-readable renderings of classification output.

use transit_core::IntentScore;

pub use transit_core::models::{summarize, NO_INTENT_SUMMARY};

/// One `label  score` line per entry, four decimals, labels left-aligned.
pub fn score_table(scores: &[IntentScore]) -> String {
    let width = scores
        .iter()
        .map(|s| s.label.as_str().len())
        .max()
        .unwrap_or(0);
    scores
        .iter()
        .map(|s| format!("{:<width$}  {:.4}", s.label.as_str(), s.confidence))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_format() {
        let intents = vec![IntentScore::new("alerts", 0.871), IntentScore::new("schedule", 0.6149)];
        assert_eq!(summarize(&intents), "alerts (0.87) + schedule (0.61)");
        assert_eq!(summarize(&[]), "No clear intent detected");
    }

    #[test]
    fn table_aligns_labels() {
        let table = score_table(&[
            IntentScore::new("trip_planning", 0.7),
            IntentScore::new("general", 0.12346),
        ]);
        assert_eq!(table, "trip_planning  0.7000\ngeneral        0.1235");
    }

    #[test]
    fn empty_table() {
        assert_eq!(score_table(&[]), "");
    }
}

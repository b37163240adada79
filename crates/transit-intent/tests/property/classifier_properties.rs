use std::sync::{Arc, OnceLock};

use proptest::prelude::*;
use transit_core::config::IntentConfig;
use transit_core::{ClassificationResult, IntentBank, IntentScore};
use transit_embeddings::VocabularyProvider;
use transit_intent::scoring::{blend_score, rank, select_intents, BlendWeights, Thresholds};
use transit_intent::IntentClassifier;

const LABELS: &[&str] = &["alerts", "trip_planning", "stop_info", "schedule", "general"];

fn classifier() -> &'static IntentClassifier {
    static CLASSIFIER: OnceLock<IntentClassifier> = OnceLock::new();
    CLASSIFIER.get_or_init(|| {
        let bank = IntentBank::default_bank();
        let provider = VocabularyProvider::from_bank(&bank, 512);
        IntentClassifier::with_provider(bank, Arc::new(provider), &IntentConfig::default())
    })
}

fn default_examples() -> Vec<String> {
    IntentBank::default_bank()
        .iter()
        .flat_map(|set| set.examples.clone())
        .collect()
}

/// Queries that sometimes hit the bank hard and sometimes miss it entirely.
fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(default_examples()),
        (prop::sample::select(default_examples()), prop::sample::select(default_examples()))
            .prop_map(|(a, b)| format!("{a} and {b}")),
        "[a-z ]{0,40}",
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

fn arb_scores() -> impl Strategy<Value = Vec<IntentScore>> {
    prop::collection::vec(0.0f64..1.0, LABELS.len()).prop_map(|confidences| {
        LABELS
            .iter()
            .zip(confidences)
            .map(|(label, c)| IntentScore::new(*label, c))
            .collect()
    })
}

/// Every invariant a selection result must satisfy.
fn check_selection(result: &ClassificationResult, thresholds: &Thresholds) {
    assert!(!result.is_empty());
    assert!(result.len() <= thresholds.max_intents);

    let sentinel = thresholds.sentinel();
    if *result == sentinel {
        return;
    }
    let intents = result.as_slice();
    assert!(intents[0].confidence >= thresholds.primary);
    for later in &intents[1..] {
        assert!(later.confidence >= thresholds.secondary);
        assert_ne!(later.label, thresholds.general_label);
    }
    assert!(intents.windows(2).all(|w| w[0].confidence >= w[1].confidence));
}

proptest! {
    #[test]
    fn classification_is_never_empty(query in arb_query()) {
        let result = classifier().classify_intent(&query);
        prop_assert!(!result.is_empty());
        check_selection(&result, classifier().thresholds());
    }

    #[test]
    fn classification_is_deterministic(query in arb_query()) {
        let a = classifier().classify_intent(&query);
        let b = classifier().classify_intent(&query);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn bank_examples_clear_the_primary_threshold(query in prop::sample::select(default_examples())) {
        // An exact example matches itself with similarity 1.0.
        let result = classifier().classify_intent(&query);
        prop_assert!(result.top().confidence >= 0.8 - 1e-6);
    }

    #[test]
    fn selection_invariants_hold(scores in arb_scores()) {
        let thresholds = Thresholds::default();
        let result = select_intents(&rank(scores), &thresholds);
        check_selection(&result, &thresholds);
    }

    #[test]
    fn selection_picks_highest_eligible(scores in arb_scores()) {
        let thresholds = Thresholds::default();
        let ranked = rank(scores);
        let result = select_intents(&ranked, &thresholds);
        if ranked[0].confidence >= thresholds.primary {
            prop_assert_eq!(&result.top().label, &ranked[0].label);
        } else {
            prop_assert_eq!(result, thresholds.sentinel());
        }
    }

    #[test]
    fn blend_is_bounded_by_max(sims in prop::collection::vec(-1.0f64..=1.0, 1..30)) {
        let score = blend_score(&sims, BlendWeights::default());
        let max = sims.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let min = sims.iter().cloned().fold(f64::INFINITY, f64::min);
        prop_assert!(score <= max + 1e-12);
        prop_assert!(score >= min - 1e-12);
    }

    #[test]
    fn rank_is_a_stable_permutation(scores in arb_scores()) {
        let ranked = rank(scores.clone());
        prop_assert_eq!(ranked.len(), scores.len());
        for w in ranked.windows(2) {
            prop_assert!(w[0].confidence >= w[1].confidence);
            if w[0].confidence == w[1].confidence {
                let pos = |l: &IntentScore| scores.iter().position(|s| s.label == l.label);
                prop_assert!(pos(&w[0]) < pos(&w[1]));
            }
        }
    }
}

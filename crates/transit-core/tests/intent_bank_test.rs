use proptest::prelude::*;

use transit_core::errors::IntentError;
use transit_core::intent::{IntentBank, IntentExampleSet, IntentLabel};

#[test]
fn default_bank_has_the_five_transit_intents_in_order() {
    let bank = IntentBank::default_bank();
    let labels: Vec<&str> = bank.labels().map(|l| l.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            IntentLabel::ALERTS,
            IntentLabel::TRIP_PLANNING,
            IntentLabel::STOP_INFO,
            IntentLabel::SCHEDULE,
            IntentLabel::GENERAL,
        ]
    );
}

#[test]
fn default_bank_examples_are_non_blank() {
    let bank = IntentBank::default_bank();
    for set in bank.iter() {
        assert!(!set.examples.is_empty(), "{} has no examples", set.label);
        assert!(set.examples.iter().all(|e| !e.trim().is_empty()));
    }
}

#[test]
fn bank_rejects_label_without_examples() {
    let err = IntentBank::new(vec![IntentExampleSet::new("alerts", Vec::<String>::new())])
        .unwrap_err();
    assert!(matches!(err, IntentError::NoExamples { ref label } if label == "alerts"));
}

#[test]
fn bank_deserializes_through_validation() {
    let json = r#"[{"label": "alerts", "examples": []}]"#;
    assert!(serde_json::from_str::<IntentBank>(json).is_err());

    let json = r#"[{"label": "alerts", "examples": ["red line delay"]}]"#;
    let bank: IntentBank = serde_json::from_str(json).unwrap();
    assert_eq!(bank.len(), 1);
    assert_eq!(bank.get("alerts").unwrap().examples, vec!["red line delay"]);
}

proptest! {
    #[test]
    fn bank_preserves_configuration_order(n in 1usize..12) {
        let sets: Vec<IntentExampleSet> = (0..n)
            .map(|i| IntentExampleSet::new(format!("intent_{i}"), [format!("example {i}")]))
            .collect();
        let bank = IntentBank::new(sets).unwrap();
        for (i, label) in bank.labels().enumerate() {
            prop_assert_eq!(label.as_str(), format!("intent_{i}"));
        }
    }

    #[test]
    fn whitespace_only_examples_are_always_rejected(ws in "[ \t\n]{0,8}") {
        let result = IntentBank::new(vec![IntentExampleSet::new("alerts", [ws])]);
        let is_blank_example = matches!(result, Err(IntentError::BlankExample { .. }));
        prop_assert!(is_blank_example);
    }
}

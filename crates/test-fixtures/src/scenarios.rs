//! Typed scenario fixtures: a bank with a vector per example, and queries
//! with their expected classification.

use serde::Deserialize;
use transit_core::{IntentBank, IntentExampleSet, IntentScore};

use crate::providers::KeyedProvider;

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioFile {
    pub dimensions: usize,
    pub bank: Vec<ScenarioLabel>,
    pub queries: Vec<ScenarioQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioLabel {
    pub label: String,
    pub examples: Vec<ScenarioText>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioText {
    pub text: String,
    pub vector: Vec<f32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioQuery {
    pub text: String,
    pub vector: Vec<f32>,
    pub expected: Vec<IntentScore>,
}

impl ScenarioFile {
    /// The example bank, in file order.
    ///
    /// # Panics
    /// Panics if the fixture describes an invalid bank.
    pub fn intent_bank(&self) -> IntentBank {
        let sets = self
            .bank
            .iter()
            .map(|l| IntentExampleSet::new(l.label.as_str(), l.examples.iter().map(|e| e.text.clone())))
            .collect();
        IntentBank::new(sets).expect("scenario bank must be valid")
    }

    /// A provider that knows every example and query vector in the file.
    pub fn provider(&self) -> KeyedProvider {
        let examples = self.bank.iter().flat_map(|l| l.examples.iter());
        let mut provider = KeyedProvider::new(self.dimensions);
        for e in examples {
            provider = provider.with(&e.text, e.vector.clone());
        }
        for q in &self.queries {
            provider = provider.with(&q.text, q.vector.clone());
        }
        provider
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::default_bank;
use super::IntentLabel;
use crate::errors::IntentError;

/// Example phrases representative of one intent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentExampleSet {
    pub label: IntentLabel,
    pub examples: Vec<String>,
}

impl IntentExampleSet {
    pub fn new<L, I, S>(label: L, examples: I) -> Self
    where
        L: Into<IntentLabel>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }
}

/// Validated, ordered mapping from intent label to its example phrases.
///
/// Order is configuration order. The classifier uses it as the tie-break
/// when two labels score exactly the same.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IntentBank {
    sets: Vec<IntentExampleSet>,
}

impl IntentBank {
    /// Build a bank, enforcing:
    /// - at least one intent,
    /// - unique labels,
    /// - at least one example per intent,
    /// - no example that is empty after trimming.
    pub fn new(sets: Vec<IntentExampleSet>) -> Result<Self, IntentError> {
        if sets.is_empty() {
            return Err(IntentError::EmptyBank);
        }

        let mut seen = HashSet::with_capacity(sets.len());
        for set in &sets {
            if !seen.insert(set.label.as_str()) {
                return Err(IntentError::DuplicateLabel {
                    label: set.label.to_string(),
                });
            }
            if set.examples.is_empty() {
                return Err(IntentError::NoExamples {
                    label: set.label.to_string(),
                });
            }
            if let Some(index) = set.examples.iter().position(|e| e.trim().is_empty()) {
                return Err(IntentError::BlankExample {
                    label: set.label.to_string(),
                    index,
                });
            }
        }

        Ok(Self { sets })
    }

    /// The curated transit bank: alerts, trip planning, stop info, schedule, general.
    pub fn default_bank() -> Self {
        Self {
            sets: default_bank::default_sets(),
        }
    }

    /// Use `sets` when non-empty, otherwise the default bank.
    pub fn from_config(sets: &[IntentExampleSet]) -> Result<Self, IntentError> {
        if sets.is_empty() {
            Ok(Self::default_bank())
        } else {
            Self::new(sets.to_vec())
        }
    }

    pub fn sets(&self) -> &[IntentExampleSet] {
        &self.sets
    }

    pub fn iter(&self) -> impl Iterator<Item = &IntentExampleSet> {
        self.sets.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &IntentLabel> {
        self.sets.iter().map(|s| &s.label)
    }

    pub fn get(&self, label: &str) -> Option<&IntentExampleSet> {
        self.sets.iter().find(|s| s.label == label)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Total number of example phrases across all intents.
    pub fn example_count(&self) -> usize {
        self.sets.iter().map(|s| s.examples.len()).sum()
    }
}

impl<'de> Deserialize<'de> for IntentBank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let sets = Vec::<IntentExampleSet>::deserialize(deserializer)?;
        Self::new(sets).map_err(serde::de::Error::custom)
    }
}

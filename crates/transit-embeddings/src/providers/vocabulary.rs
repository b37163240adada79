//! Offline TF-IDF provider fitted on the intent example bank.
//!
//! The vocabulary and inverse document frequencies come from the bank's
//! examples (one document per example), so terms that separate intents
//! weigh more than terms every intent shares. Adjacent content words also
//! form bigram features, which keeps route names like "red line" together.
//! Terms the bank never uses carry no signal and are ignored.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use transit_core::errors::TransitResult;
use transit_core::traits::IEmbeddingProvider;
use transit_core::IntentBank;

use crate::similarity::{l2_normalize, zero_vector};

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "at", "be", "for", "from", "i", "in", "is", "it", "of", "on", "or",
    "the", "to",
];

#[derive(Debug, Clone, Copy)]
struct TermSlot {
    index: usize,
    idf: f32,
}

/// TF-IDF embedder whose vocabulary is the example bank.
#[derive(Debug, Clone)]
pub struct VocabularyProvider {
    dimensions: usize,
    documents: usize,
    terms: HashMap<String, TermSlot>,
}

impl VocabularyProvider {
    /// Fit on every example in `bank`.
    pub fn from_bank(bank: &IntentBank, dimensions: usize) -> Self {
        Self::fit(
            bank.iter().flat_map(|set| set.examples.iter().map(String::as_str)),
            dimensions,
        )
    }

    /// Fit on an arbitrary corpus, one document per item.
    ///
    /// Terms get indices in sorted order, folded modulo `dimensions` when
    /// the vocabulary is larger. IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`.
    pub fn fit<'a, I>(corpus: I, dimensions: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        let mut documents = 0;
        for document in corpus {
            documents += 1;
            let unique: BTreeSet<String> = features(document).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_default() += 1;
            }
        }

        let n = documents as f32;
        let terms = document_frequency
            .into_iter()
            .enumerate()
            .map(|(index, (term, df))| {
                let idf = ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0;
                let index = if dimensions == 0 { 0 } else { index % dimensions };
                (term, TermSlot { index, idf })
            })
            .collect();

        Self {
            dimensions,
            documents,
            terms,
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    pub fn documents(&self) -> usize {
        self.documents
    }

    /// Whether `term` (after normalization) is part of the fitted vocabulary.
    pub fn knows(&self, term: &str) -> bool {
        normalize(&term.to_lowercase()).is_some_and(|t| self.terms.contains_key(&t))
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = zero_vector(self.dimensions);
        if self.dimensions == 0 {
            return vec;
        }

        let features = features(text);
        let mut tf: HashMap<&str, (TermSlot, f32)> = HashMap::new();
        for term in &features {
            if let Some(&slot) = self.terms.get(term) {
                tf.entry(term.as_str()).or_insert((slot, 0.0)).1 += 1.0;
            }
        }
        for (slot, count) in tf.into_values() {
            vec[slot.index] += (1.0 + count.ln()) * slot.idf;
        }

        l2_normalize(&mut vec);
        vec
    }
}

impl IEmbeddingProvider for VocabularyProvider {
    fn embed(&self, text: &str) -> TransitResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Content words plus `first_second` bigrams of adjacent content words.
fn features(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let words: Vec<String> = lowered
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter_map(|raw| normalize(&raw.replace('\'', "")))
        .collect();

    let bigrams: Vec<String> = words.windows(2).map(|w| format!("{}_{}", w[0], w[1])).collect();
    words.into_iter().chain(bigrams).collect()
}

/// Drop stopwords and fold simple plurals ("delays" -> "delay",
/// "buses" -> "bus"). Route numbers survive.
fn normalize(word: &str) -> Option<String> {
    if word.is_empty() || STOPWORDS.contains(&word) {
        return None;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return Some(word.to_string());
    }
    if word.len() == 1 {
        return None;
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.len() > 2 && ["s", "x", "ch", "sh"].iter().any(|end| stem.ends_with(end)) {
            return Some(stem.to_string());
        }
    }
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
        return Some(word[..word.len() - 1].to_string());
    }
    Some(word.to_string())
}

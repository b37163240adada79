use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use transit_core::config::IntentConfig;
use transit_core::{IntentBank, IntentExampleSet};
use transit_embeddings::VocabularyProvider;
use transit_intent::scoring::{blend_score, BlendWeights};
use transit_intent::{IntentClassifier, IntentEmbeddingCache};

fn synthetic_bank(labels: usize, examples: usize) -> IntentBank {
    let sets = (0..labels)
        .map(|l| {
            IntentExampleSet::new(
                format!("label_{l}"),
                (0..examples).map(|e| format!("example phrase {e} for label {l} route stop")),
            )
        })
        .collect();
    IntentBank::new(sets).unwrap()
}

fn bench_classify_default_bank(c: &mut Criterion) {
    let bank = IntentBank::default_bank();
    let provider = VocabularyProvider::from_bank(&bank, 1536);
    let classifier = IntentClassifier::with_provider(bank, Arc::new(provider), &IntentConfig::default());

    c.bench_function("classify_default_bank_cached_query", |b| {
        b.iter(|| classifier.classify_intent("are there any delays on the red line"))
    });
}

fn bench_classify_large_bank(c: &mut Criterion) {
    let bank = synthetic_bank(20, 50);
    let provider = VocabularyProvider::from_bank(&bank, 1536);
    let classifier = IntentClassifier::with_provider(bank, Arc::new(provider), &IntentConfig::default());

    c.bench_function("classify_20x50_bank", |b| {
        b.iter(|| classifier.classify_intent("example phrase 7 for label 3"))
    });
}

fn bench_cache_build(c: &mut Criterion) {
    let bank = synthetic_bank(10, 20);
    let provider = VocabularyProvider::from_bank(&bank, 1536);
    let engine = transit_embeddings::EmbeddingEngine::new(Arc::new(provider), 0);

    c.bench_function("cache_build_10x20_parallel", |b| {
        b.iter(|| IntentEmbeddingCache::build(&bank, &engine, true))
    });
    c.bench_function("cache_build_10x20_sequential", |b| {
        b.iter(|| IntentEmbeddingCache::build(&bank, &engine, false))
    });
}

fn bench_blend(c: &mut Criterion) {
    let sims: Vec<f64> = (0..20).map(|i| (i as f64 * 0.37).sin().abs()).collect();
    c.bench_function("blend_score_20", |b| {
        b.iter(|| blend_score(&sims, BlendWeights::default()))
    });
}

criterion_group!(
    benches,
    bench_classify_default_bank,
    bench_classify_large_bank,
    bench_cache_build,
    bench_blend
);
criterion_main!(benches);

//! # transit-intent
//!
//! Multi-intent classification for transit assistant queries.
//!
//! Each label's example phrases are embedded once at startup into an
//! immutable [`IntentEmbeddingCache`]. A query is embedded, compared with
//! every cached example by cosine similarity, scored per label as
//! `0.7 * max + 0.3 * mean(top 3)`, and up to three labels are selected
//! against a primary and a secondary threshold.

pub mod cache;
pub mod classifier;
pub mod scoring;
pub mod summary;

pub use cache::{IntentEmbeddingCache, LabelEmbeddings};
pub use classifier::IntentClassifier;
pub use scoring::{BlendWeights, Thresholds};
pub use summary::summarize;

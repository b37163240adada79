//! # transit-embeddings
//!
//! Embedding generation for the intent classifier.
//! Supports OpenAI-compatible APIs, a local Ollama server, and an offline
//! TF-IDF embedder fitted on the intent bank. Every provider failure degrades to a zero vector.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── ZeroFallback (failure → zero vector + DegradationEvent)
//! │   └── dyn IEmbeddingProvider
//! │       ├── ApiProvider (OpenAI-compatible, bearer auth)
//! │       ├── OllamaProvider (local)
//! │       └── VocabularyProvider (offline, fitted on the example bank)
//! └── QueryCache (moka, successful query embeddings only)
//! ```

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;
pub mod similarity;

pub use cache::QueryCache;
pub use degradation::{Embedded, EmbeddedBatch, ZeroFallback, ZERO_VECTOR_FALLBACK};
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, ApiProvider, OllamaProvider, VocabularyProvider};
pub use similarity::cosine_similarity;

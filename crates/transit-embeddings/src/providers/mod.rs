//! Provider registry.
//!
//! - `openai`: OpenAI-compatible HTTP API, needs a credential.
//! - `ollama`: local Ollama server.
//! - `tfidf`: offline TF-IDF over the intent bank's vocabulary, always available.

pub mod api_provider;
pub mod ollama_provider;
pub mod vocabulary;

pub use api_provider::ApiProvider;
pub use ollama_provider::OllamaProvider;
pub use vocabulary::VocabularyProvider;

use std::sync::Arc;

use tracing::{info, warn};
use transit_core::config::EmbeddingConfig;
use transit_core::errors::{ConfigError, TransitResult};
use transit_core::traits::IEmbeddingProvider;
use transit_core::IntentBank;

/// Create the configured provider. `bank` is the corpus the offline
/// `tfidf` provider fits its vocabulary on; network providers ignore it.
///
/// Credential problems and unknown provider names are returned as errors.
/// An unreachable Ollama server is not: its requests degrade to zero vectors
/// until the server answers a health check.
pub fn create_provider(
    config: &EmbeddingConfig,
    bank: &IntentBank,
) -> TransitResult<Arc<dyn IEmbeddingProvider>> {
    match config.provider.as_str() {
        "openai" => {
            let provider = ApiProvider::from_config(config)?;
            info!(
                provider = "openai",
                model = %config.model,
                endpoint = provider.endpoint(),
                "embedding provider configured"
            );
            Ok(Arc::new(provider))
        }
        "ollama" => {
            let provider = OllamaProvider::from_config(config)?;
            if provider.health_check() {
                info!(provider = "ollama", model = %config.model, "embedding provider connected");
            } else {
                warn!(
                    provider = "ollama",
                    "Ollama unavailable at startup, embeddings will fall back to zero vectors"
                );
            }
            Ok(Arc::new(provider))
        }
        "tfidf" => {
            let provider = VocabularyProvider::from_bank(bank, config.dimensions);
            info!(
                provider = "tfidf",
                vocabulary = provider.vocabulary_len(),
                documents = provider.documents(),
                "using bank-fitted TF-IDF embedding provider"
            );
            Ok(Arc::new(provider))
        }
        other => Err(ConfigError::UnknownProvider {
            provider: other.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_core::errors::TransitErrorCode;

    #[test]
    fn tfidf_needs_no_credential() {
        let config = EmbeddingConfig {
            provider: "tfidf".to_string(),
            dimensions: 64,
            ..Default::default()
        };
        let provider = create_provider(&config, &IntentBank::default_bank()).unwrap();
        assert_eq!(provider.name(), "tfidf");
        assert_eq!(provider.dimensions(), 64);
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let config = EmbeddingConfig {
            provider: "onnx".to_string(),
            ..Default::default()
        };
        let err = create_provider(&config, &IntentBank::default_bank()).err().unwrap();
        assert_eq!(err.error_code(), "UNKNOWN_PROVIDER");
    }

    #[test]
    fn openai_without_key_is_rejected() {
        let config = EmbeddingConfig {
            api_key_env: "TRANSIT_TEST_KEY_THAT_IS_NEVER_SET".to_string(),
            ..Default::default()
        };
        let err = create_provider(&config, &IntentBank::default_bank()).err().unwrap();
        assert_eq!(err.error_code(), "MISSING_CREDENTIAL");
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::PLACEHOLDER_CREDENTIAL_PREFIX;
use crate::errors::ConfigError;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "openai", "ollama", "tfidf".
    pub provider: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Override for the provider's endpoint URL.
    pub endpoint: Option<String>,
    /// Embedding dimensions (D).
    pub dimensions: usize,
    /// Name of the environment variable holding the API key.
    pub api_key_env: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retries after the first failed attempt.
    pub max_retries: u32,
    /// Query embedding cache entries. 0 disables the cache.
    pub query_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            endpoint: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            api_key_env: defaults::DEFAULT_API_KEY_ENV.to_string(),
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            max_retries: defaults::DEFAULT_EMBEDDING_MAX_RETRIES,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}

impl EmbeddingConfig {
    /// Whether the configured provider needs an API credential.
    pub fn requires_credential(&self) -> bool {
        self.provider == "openai"
    }

    /// Read the API key from the environment.
    ///
    /// # Errors
    /// `MissingCredential` if the variable is unset or blank,
    /// `PlaceholderCredential` if it still holds a template value.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        let value = std::env::var(&self.api_key_env).unwrap_or_default();
        Self::check_api_key(&self.api_key_env, &value)?;
        Ok(value.trim().to_string())
    }

    /// Validate an API key value without touching the environment.
    pub fn check_api_key(var: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ConfigError::MissingCredential {
                var: var.to_string(),
            });
        }
        if value.starts_with(PLACEHOLDER_CREDENTIAL_PREFIX) {
            return Err(ConfigError::PlaceholderCredential {
                var: var.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_missing() {
        let err = EmbeddingConfig::check_api_key("OPENAI_API_KEY", "  ").unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { .. }));
    }

    #[test]
    fn template_key_is_rejected() {
        let err = EmbeddingConfig::check_api_key("OPENAI_API_KEY", "your_api_key_here").unwrap_err();
        assert!(matches!(err, ConfigError::PlaceholderCredential { .. }));
    }

    #[test]
    fn real_key_passes() {
        assert!(EmbeddingConfig::check_api_key("OPENAI_API_KEY", "sk-test-123").is_ok());
    }

    #[test]
    fn only_openai_needs_a_key() {
        let mut config = EmbeddingConfig::default();
        assert!(config.requires_credential());
        config.provider = "tfidf".to_string();
        assert!(!config.requires_credential());
    }
}

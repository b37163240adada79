//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, EmbeddingConfig, IntentConfig, LogFormat, ObservabilityConfig};
use crate::constants::CONFIG_FILENAME;
use crate::errors::ConfigError;
use crate::intent::IntentBank;

/// Providers `create_provider` knows how to build.
pub const KNOWN_PROVIDERS: &[&str] = &["openai", "ollama", "tfidf"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TRANSIT_*`)
/// 3. Config file (explicit path, or `transit.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TransitConfig {
    pub embedding: EmbeddingConfig,
    pub intent: IntentConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
    pub log_format: Option<LogFormat>,
}

impl TransitConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `path` must exist. Without one, `transit.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());

        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unspecified keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `TRANSIT_EMBEDDING_MODEL`, `TRANSIT_INTENT_MAX_INTENTS`, etc.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    /// Values that fail to parse are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("TRANSIT_EMBEDDING_PROVIDER") {
            self.embedding.provider = v;
        }
        if let Some(v) = lookup("TRANSIT_EMBEDDING_MODEL") {
            self.embedding.model = v;
        }
        if let Some(v) = lookup("TRANSIT_EMBEDDING_ENDPOINT") {
            self.embedding.endpoint = Some(v);
        }
        if let Some(v) = lookup("TRANSIT_EMBEDDING_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.embedding.timeout_ms = v;
        }
        if let Some(v) = lookup("TRANSIT_INTENT_PRIMARY_THRESHOLD").and_then(|v| v.parse().ok()) {
            self.intent.primary_threshold = v;
        }
        if let Some(v) = lookup("TRANSIT_INTENT_SECONDARY_THRESHOLD").and_then(|v| v.parse().ok())
        {
            self.intent.secondary_threshold = v;
        }
        if let Some(v) = lookup("TRANSIT_INTENT_MAX_INTENTS").and_then(|v| v.parse().ok()) {
            self.intent.max_intents = v;
        }
        if let Some(v) = lookup("TRANSIT_LOG_FORMAT").and_then(|v| v.parse().ok()) {
            self.observability.log_format = v;
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.provider {
            self.embedding.provider = v.clone();
        }
        if let Some(ref v) = cli.model {
            self.embedding.model = v.clone();
        }
        if let Some(ref v) = cli.endpoint {
            self.embedding.endpoint = Some(v.clone());
        }
        if let Some(v) = cli.timeout_ms {
            self.embedding.timeout_ms = v;
        }
        if let Some(v) = cli.log_format {
            self.observability.log_format = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.embedding;
        if !KNOWN_PROVIDERS.contains(&e.provider.as_str()) {
            return Err(ConfigError::UnknownProvider {
                provider: e.provider.clone(),
            });
        }
        if e.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        if e.timeout_ms == 0 {
            return Err(invalid("embedding.timeout_ms", "must be greater than 0"));
        }
        if e.max_retries > defaults::MAX_EMBEDDING_RETRIES {
            return Err(invalid(
                "embedding.max_retries",
                &format!("must be at most {}", defaults::MAX_EMBEDDING_RETRIES),
            ));
        }

        let i = &self.intent;
        for (field, value) in [
            ("intent.primary_threshold", i.primary_threshold),
            ("intent.secondary_threshold", i.secondary_threshold),
            ("intent.max_weight", i.max_weight),
            ("intent.fallback_confidence", i.fallback_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if i.secondary_threshold > i.primary_threshold {
            return Err(invalid(
                "intent.secondary_threshold",
                "must not exceed intent.primary_threshold",
            ));
        }
        if i.max_intents == 0 {
            return Err(invalid("intent.max_intents", "must be at least 1"));
        }
        if i.top_k == 0 {
            return Err(invalid("intent.top_k", "must be at least 1"));
        }
        if i.general_label.trim().is_empty() {
            return Err(invalid("intent.general_label", "must not be blank"));
        }
        IntentBank::from_config(&i.examples)
            .map_err(|err| invalid("intent.examples", &err.to_string()))?;

        if self.observability.degradation_history == 0 {
            return Err(invalid("observability.degradation_history", "must be at least 1"));
        }

        Ok(())
    }

    /// The example bank this config describes.
    pub fn intent_bank(&self) -> Result<IntentBank, ConfigError> {
        IntentBank::from_config(&self.intent.examples)
            .map_err(|err| invalid("intent.examples", &err.to_string()))
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

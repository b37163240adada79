//! Ollama local embedding provider.
//!
//! Connects to a local Ollama instance for embedding generation.
//! Health checked on startup and re-probed after a failed request.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use transit_core::config::defaults::DEFAULT_OLLAMA_BASE_URL;
use transit_core::config::EmbeddingConfig;
use transit_core::errors::{EmbeddingError, TransitError, TransitResult};
use transit_core::traits::IEmbeddingProvider;

const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Ollama local embedding provider.
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    dimensions: usize,
    timeout: Duration,
    available: AtomicBool,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    /// Create a new Ollama provider.
    ///
    /// `base_url` defaults to `http://localhost:11434` if `None`.
    pub fn new(
        model: impl Into<String>,
        dimensions: usize,
        base_url: Option<String>,
        timeout: Duration,
    ) -> TransitResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            model: model.into(),
            dimensions,
            timeout,
            available: AtomicBool::new(false),
        })
    }

    pub fn from_config(config: &EmbeddingConfig) -> TransitResult<Self> {
        Self::new(
            config.model.clone(),
            config.dimensions,
            config.endpoint.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    /// Check if the Ollama server is reachable.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let healthy = match self.client.get(&url).timeout(HEALTH_CHECK_TIMEOUT).send() {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        };
        self.available.store(healthy, Ordering::Relaxed);
        healthy
    }

    fn request_embeddings(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        if !self.available.load(Ordering::Relaxed) && !self.health_check() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: format!("ollama at {}", self.base_url),
            }
            .into());
        }

        let result = self.send_request(texts);
        if result.is_err() {
            self.available.store(false, Ordering::Relaxed);
        }
        result.map_err(TransitError::from)
    }

    fn send_request(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let url = format!("{}/api/embed", self.base_url);
        let request = OllamaEmbedRequest {
            model: &self.model,
            input: texts,
        };

        let response = self.client.post(&url).json(&request).send().map_err(|e| {
            if e.is_timeout() {
                EmbeddingError::Timeout {
                    after_ms: self.timeout.as_millis() as u64,
                }
            } else {
                EmbeddingError::InferenceFailed {
                    reason: format!("Ollama HTTP error: {e}"),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::HttpStatus {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let resp: OllamaEmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::MalformedResponse {
                    reason: format!("Ollama JSON parse error: {e}"),
                })?;

        if resp.embeddings.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: resp.embeddings.len(),
            });
        }
        Ok(resp.embeddings)
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> TransitResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            TransitError::from(EmbeddingError::MalformedResponse {
                reason: "empty Ollama response".to_string(),
            })
        })
    }

    fn embed_batch(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

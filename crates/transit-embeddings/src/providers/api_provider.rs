//! OpenAI-compatible embedding API provider.
//!
//! Blocking HTTP client with a per-request timeout, bearer auth, and retry
//! with exponential backoff on transient failures.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use transit_core::config::defaults::DEFAULT_OPENAI_ENDPOINT;
use transit_core::config::EmbeddingConfig;
use transit_core::errors::{EmbeddingError, TransitError, TransitResult};
use transit_core::traits::IEmbeddingProvider;

/// Longest error body kept from a failed response.
const MAX_ERROR_BODY: usize = 512;
const BASE_BACKOFF_MS: u64 = 100;
const MAX_BACKOFF_MS: u64 = 10_000;

/// Cloud embedding provider speaking the OpenAI `/v1/embeddings` protocol.
pub struct ApiProvider {
    client: Client,
    model: String,
    api_key: String,
    endpoint: String,
    dimensions: usize,
    timeout: Duration,
    max_retries: u32,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    #[serde(default)]
    index: usize,
    embedding: Vec<f32>,
}

impl ApiProvider {
    /// Create a new API provider.
    ///
    /// `endpoint` defaults to the public OpenAI embeddings URL.
    pub fn new(
        model: impl Into<String>,
        api_key: impl Into<String>,
        endpoint: Option<String>,
        dimensions: usize,
        timeout: Duration,
        max_retries: u32,
    ) -> TransitResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            model: model.into(),
            api_key: api_key.into(),
            endpoint: endpoint.unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.to_string()),
            dimensions,
            timeout,
            max_retries,
        })
    }

    /// Build from config, reading the API key from the configured variable.
    ///
    /// # Errors
    /// Fails with a config error when the credential is missing or a placeholder.
    pub fn from_config(config: &EmbeddingConfig) -> TransitResult<Self> {
        let api_key = config.resolve_api_key()?;
        Self::new(
            config.model.clone(),
            api_key,
            config.endpoint.clone(),
            config.dimensions,
            Duration::from_millis(config.timeout_ms),
            config.max_retries,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send an embedding request with retry and exponential backoff.
    fn request_embeddings(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        let body = EmbedRequest {
            model: &self.model,
            input: texts,
        };

        let mut attempt = 0;
        loop {
            if attempt > 0 {
                std::thread::sleep(backoff_delay(attempt));
                debug!(attempt, "retrying API embedding request");
            }

            match self.send_request(&body) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) if attempt < self.max_retries && is_retryable(&e) => {
                    warn!(attempt, error = %e, "API embedding request failed");
                    attempt += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn send_request(&self, body: &EmbedRequest<'_>) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let mut body = response.text().unwrap_or_default();
            truncate_on_char_boundary(&mut body, MAX_ERROR_BODY);
            return Err(EmbeddingError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let resp: EmbedResponse = response
            .json()
            .map_err(|e| EmbeddingError::MalformedResponse {
                reason: e.to_string(),
            })?;

        if resp.data.len() != body.input.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: body.input.len(),
                actual: resp.data.len(),
            });
        }

        let mut data = resp.data;
        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    fn transport_error(&self, e: reqwest::Error) -> EmbeddingError {
        if e.is_timeout() {
            EmbeddingError::Timeout {
                after_ms: self.timeout.as_millis() as u64,
            }
        } else {
            EmbeddingError::InferenceFailed {
                reason: format!("HTTP error: {e}"),
            }
        }
    }
}

/// Transport failures, timeouts, rate limits, and server errors are retried.
/// Other client errors (bad key, bad model) will not fix themselves.
/// 100ms, 200ms, 400ms, ... capped at ten seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let factor = 2u64.checked_pow(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
    Duration::from_millis(BASE_BACKOFF_MS.saturating_mul(factor).min(MAX_BACKOFF_MS))
}

fn is_retryable(e: &EmbeddingError) -> bool {
    match e {
        EmbeddingError::HttpStatus { status, .. } => *status == 429 || *status >= 500,
        EmbeddingError::Timeout { .. } | EmbeddingError::InferenceFailed { .. } => true,
        _ => false,
    }
}

fn truncate_on_char_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> TransitResult<Vec<f32>> {
        let results = self.request_embeddings(&[text.to_string()])?;
        results.into_iter().next().ok_or_else(|| {
            TransitError::from(EmbeddingError::MalformedResponse {
                reason: "empty response".to_string(),
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
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_policy() {
        assert!(is_retryable(&EmbeddingError::Timeout { after_ms: 10 }));
        assert!(is_retryable(&EmbeddingError::HttpStatus {
            status: 503,
            body: String::new()
        }));
        assert!(is_retryable(&EmbeddingError::HttpStatus {
            status: 429,
            body: String::new()
        }));
        assert!(!is_retryable(&EmbeddingError::HttpStatus {
            status: 401,
            body: String::new()
        }));
        assert!(!is_retryable(&EmbeddingError::CountMismatch {
            expected: 2,
            actual: 1
        }));
    }

    #[test]
    fn backoff_doubles_then_caps() {
        assert_eq!(backoff_delay(1), Duration::from_millis(100));
        assert_eq!(backoff_delay(2), Duration::from_millis(200));
        assert_eq!(backoff_delay(4), Duration::from_millis(800));
        assert_eq!(backoff_delay(60), Duration::from_millis(MAX_BACKOFF_MS));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_millis(MAX_BACKOFF_MS));
    }

    #[test]
    fn truncation_respects_utf8() {
        let mut s = "é".repeat(10);
        truncate_on_char_boundary(&mut s, 5);
        assert_eq!(s, "éé");
    }

    #[test]
    fn default_endpoint_is_openai() {
        let p = ApiProvider::new(
            "text-embedding-3-small",
            "sk-test",
            None,
            1536,
            Duration::from_secs(1),
            0,
        )
        .unwrap();
        assert_eq!(p.endpoint(), DEFAULT_OPENAI_ENDPOINT);
        assert_eq!(p.dimensions(), 1536);
        assert_eq!(p.name(), "text-embedding-3-small");
    }
}

use super::error_code::{self, TransitErrorCode};

/// Embedding provider errors.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("request timed out after {after_ms}ms")]
    Timeout { after_ms: u64 },

    #[error("provider returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed provider response: {reason}")]
    MalformedResponse { reason: String },

    #[error("provider returned {actual} vectors for {expected} inputs")]
    CountMismatch { expected: usize, actual: usize },
}

impl TransitErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InferenceFailed { .. } => error_code::EMBEDDING_FAILED,
            Self::Timeout { .. } => error_code::EMBEDDING_TIMEOUT,
            Self::HttpStatus { .. } => error_code::EMBEDDING_HTTP,
            Self::DimensionMismatch { .. }
            | Self::MalformedResponse { .. }
            | Self::CountMismatch { .. } => error_code::EMBEDDING_SHAPE,
            Self::ProviderUnavailable { .. } => error_code::PROVIDER_UNAVAILABLE,
        }
    }
}

//! Error handling for the transit intent layer.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod intent_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::TransitErrorCode;
pub use intent_error::IntentError;

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("intent error: {0}")]
    Intent(#[from] IntentError),
}

impl TransitError {
    /// Whether this error must stop the process from serving queries.
    ///
    /// Only configuration problems are fatal; embedding failures are absorbed
    /// by the zero-vector fallback before they reach a caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Intent(_))
    }
}

impl TransitErrorCode for TransitError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Intent(e) => e.error_code(),
        }
    }
}

pub type TransitResult<T> = Result<T, TransitError>;

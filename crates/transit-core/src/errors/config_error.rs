use super::error_code::{self, TransitErrorCode};

/// Configuration errors. All of them are fatal at construction time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("credential not configured: set the {var} environment variable")]
    MissingCredential { var: String },

    #[error("credential in {var} is a template placeholder, not a real key")]
    PlaceholderCredential { var: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("failed to parse config {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("unknown embedding provider: {provider}")]
    UnknownProvider { provider: String },
}

impl TransitErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCredential { .. } | Self::PlaceholderCredential { .. } => {
                error_code::MISSING_CREDENTIAL
            }
            Self::UnknownProvider { .. } => error_code::UNKNOWN_PROVIDER,
            Self::FileNotFound { .. } | Self::ParseError { .. } | Self::ValidationFailed { .. } => {
                error_code::CONFIG_ERROR
            }
        }
    }
}

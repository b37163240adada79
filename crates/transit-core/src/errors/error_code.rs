//! Stable, machine-readable error codes.

/// Every error type exposes a code that stays fixed across releases,
/// so callers can match on it without parsing messages.
pub trait TransitErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_CREDENTIAL: &str = "MISSING_CREDENTIAL";
pub const UNKNOWN_PROVIDER: &str = "UNKNOWN_PROVIDER";
pub const EMBEDDING_FAILED: &str = "EMBEDDING_FAILED";
pub const EMBEDDING_TIMEOUT: &str = "EMBEDDING_TIMEOUT";
pub const EMBEDDING_HTTP: &str = "EMBEDDING_HTTP";
pub const EMBEDDING_SHAPE: &str = "EMBEDDING_SHAPE";
pub const PROVIDER_UNAVAILABLE: &str = "PROVIDER_UNAVAILABLE";
pub const INVALID_INTENT_BANK: &str = "INVALID_INTENT_BANK";
pub const EMPTY_RESULT: &str = "EMPTY_RESULT";

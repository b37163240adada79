/// Crate version, shared by every workspace member.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the project-level config file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "transit.toml";

/// Prefix for environment overrides (`TRANSIT_EMBEDDING_MODEL`, ...).
pub const ENV_PREFIX: &str = "TRANSIT_";

/// Env var holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "TRANSIT_LOG";

/// Credentials starting with this prefix are template values, not keys.
pub const PLACEHOLDER_CREDENTIAL_PREFIX: &str = "your_api";

//! Configuration system for the transit intent layer.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod defaults;
pub mod embedding_config;
pub mod intent_config;
pub mod observability_config;
pub mod transit_config;

pub use embedding_config::EmbeddingConfig;
pub use intent_config::IntentConfig;
pub use observability_config::{LogFormat, ObservabilityConfig};
pub use transit_config::{CliOverrides, TransitConfig};

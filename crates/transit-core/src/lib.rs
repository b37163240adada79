//! # transit-core
//!
//! Foundation crate for the transit assistant's intent layer.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::TransitConfig;
pub use errors::{TransitError, TransitResult};
pub use intent::{IntentBank, IntentExampleSet, IntentLabel};
pub use models::{ClassificationReport, ClassificationResult, DegradationEvent, IntentScore};

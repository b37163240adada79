//! # transit-observability
//!
//! Structured tracing setup, span and event definitions, and tracking of
//! embedding degradations for the intent classifier.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::{DegradationTracker, RecoveryStatus, TrackedDegradation};
pub use tracing_setup::init_tracing;

//! Degradation tracking: every zero-vector fallback, with recovery status.

pub mod tracker;

pub use tracker::{DegradationTracker, RecoveryStatus, TrackedDegradation};

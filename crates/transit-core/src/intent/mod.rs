//! Intent labels and the example bank the classifier is built from.

pub mod bank;
pub mod default_bank;
pub mod label;

pub use bank::{IntentBank, IntentExampleSet};
pub use label::IntentLabel;

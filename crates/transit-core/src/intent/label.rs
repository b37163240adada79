use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier naming an intent category.
///
/// The set of valid labels is whatever the configured [`IntentBank`] defines;
/// nothing here restricts it to the well-known transit labels below.
///
/// [`IntentBank`]: super::IntentBank
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentLabel(String);

impl IntentLabel {
    pub const ALERTS: &'static str = "alerts";
    pub const TRIP_PLANNING: &'static str = "trip_planning";
    pub const STOP_INFO: &'static str = "stop_info";
    pub const SCHEDULE: &'static str = "schedule";
    pub const GENERAL: &'static str = "general";

    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The chit-chat label used for the sentinel fallback.
    pub fn general() -> Self {
        Self::new(Self::GENERAL)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for IntentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IntentLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IntentLabel {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for IntentLabel {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for IntentLabel {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IntentLabel {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

//! Record every degradation event: component, failure mode, fallback used, timestamp, recovery status.
//!
//! Repeats of a still-active degradation are folded into one entry with an
//! occurrence count, and the history is capped so a long outage stays bounded.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use transit_core::config::defaults::DEFAULT_DEGRADATION_HISTORY;
use transit_core::models::DegradationEvent;

use crate::tracing_setup::events;

/// Recovery status of a degradation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStatus {
    /// Still in degraded mode.
    Active,
    /// Recovered to normal operation.
    Recovered,
}

/// A tracked degradation event with recovery status.
///
/// `event` is the latest occurrence; `first_seen` is when this degraded
/// period began.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedDegradation {
    pub event: DegradationEvent,
    pub first_seen: DateTime<Utc>,
    pub occurrences: u64,
    pub recovery_status: RecoveryStatus,
    pub recovered_at: Option<DateTime<Utc>>,
}

/// Tracks degradation events for reporting.
#[derive(Debug, Clone)]
pub struct DegradationTracker {
    events: VecDeque<TrackedDegradation>,
    capacity: usize,
}

impl Default for DegradationTracker {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_DEGRADATION_HISTORY)
    }
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tracker keeping at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_DEGRADATION_HISTORY)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the cap, dropping the oldest entries if already over it.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict_overflow();
    }

    /// Record a degradation event.
    ///
    /// If `event.component` is already degraded, the active entry absorbs it.
    /// Otherwise a new entry starts, evicting the oldest when full.
    pub fn record(&mut self, event: DegradationEvent) {
        if let Some(active) = self.active_entry_mut(&event.component) {
            active.occurrences += 1;
            active.event = event;
            return;
        }

        events::degradation_triggered(&event.component, &event.failure, &event.fallback_used);
        self.events.push_back(TrackedDegradation {
            first_seen: event.timestamp,
            event,
            occurrences: 1,
            recovery_status: RecoveryStatus::Active,
            recovered_at: None,
        });
        self.evict_overflow();
    }

    /// Mark the active degradation of `component` as recovered.
    ///
    /// Returns how many occurrences it had absorbed, 0 if it was healthy.
    pub fn mark_recovered(&mut self, component: &str) -> u64 {
        let Some(active) = self.active_entry_mut(component) else {
            return 0;
        };
        active.recovery_status = RecoveryStatus::Recovered;
        active.recovered_at = Some(Utc::now());
        let occurrences = active.occurrences;
        events::degradation_recovered(component, occurrences);
        occurrences
    }

    pub fn events(&self) -> impl Iterator<Item = &TrackedDegradation> {
        self.events.iter()
    }

    /// Get active (unrecovered) degradations.
    pub fn active_degradations(&self) -> Vec<&TrackedDegradation> {
        self.events
            .iter()
            .filter(|t| t.recovery_status == RecoveryStatus::Active)
            .collect()
    }

    pub fn is_degraded(&self, component: &str) -> bool {
        self.events.iter().any(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }

    /// Occurrences for `component` whose latest event falls in the last N seconds.
    pub fn count_recent(&self, component: &str, window_secs: i64) -> u64 {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.component == component && t.event.timestamp > cutoff)
            .map(|t| t.occurrences)
            .sum()
    }

    /// Occurrences across all components in the last N seconds.
    pub fn count_all_recent(&self, window_secs: i64) -> u64 {
        let cutoff = Utc::now() - chrono::Duration::seconds(window_secs);
        self.events
            .iter()
            .filter(|t| t.event.timestamp > cutoff)
            .map(|t| t.occurrences)
            .sum()
    }

    /// Remove and return the latest event of every retained entry.
    pub fn drain(&mut self) -> Vec<DegradationEvent> {
        self.events.drain(..).map(|t| t.event).collect()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    // At most one active entry per component, so this stays O(capacity).
    fn active_entry_mut(&mut self, component: &str) -> Option<&mut TrackedDegradation> {
        self.events.iter_mut().rev().find(|t| {
            t.event.component == component && t.recovery_status == RecoveryStatus::Active
        })
    }

    fn evict_overflow(&mut self) {
        while self.events.len() > self.capacity {
            self.events.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(component: &str) -> DegradationEvent {
        DegradationEvent::now(component, "request timed out after 10000ms", "zero-vector")
    }

    #[test]
    fn record_and_recover() {
        let mut tracker = DegradationTracker::new();
        tracker.record(event("embeddings.query"));
        tracker.record(event("embeddings.query"));
        tracker.record(event("embeddings.examples[alerts]"));
        assert_eq!(tracker.active_degradations().len(), 2);
        assert!(tracker.is_degraded("embeddings.query"));

        assert_eq!(tracker.mark_recovered("embeddings.query"), 2);
        assert!(!tracker.is_degraded("embeddings.query"));
        assert_eq!(tracker.active_degradations().len(), 1);
        let first = tracker.events().next().unwrap();
        assert!(first.recovered_at.is_some());
        assert!(first.first_seen <= first.event.timestamp);
    }

    #[test]
    fn repeats_of_an_active_degradation_coalesce() {
        let mut tracker = DegradationTracker::new();
        for _ in 0..1_000 {
            tracker.record(event("embeddings.query"));
        }
        assert_eq!(tracker.len(), 1);
        assert_eq!(tracker.events().next().unwrap().occurrences, 1_000);
        assert_eq!(tracker.count_recent("embeddings.query", 60), 1_000);
    }

    #[test]
    fn degradation_after_recovery_starts_a_new_entry() {
        let mut tracker = DegradationTracker::new();
        tracker.record(event("embeddings.query"));
        tracker.mark_recovered("embeddings.query");
        tracker.record(event("embeddings.query"));
        assert_eq!(tracker.len(), 2);
        assert_eq!(tracker.active_degradations().len(), 1);
    }

    #[test]
    fn history_is_capped_oldest_first() {
        let mut tracker = DegradationTracker::with_capacity(3);
        for i in 0..10 {
            tracker.record(event(&format!("embeddings.examples[l{i}]")));
        }
        assert_eq!(tracker.len(), 3);
        let kept: Vec<&str> = tracker.events().map(|t| t.event.component.as_str()).collect();
        assert_eq!(
            kept,
            vec!["embeddings.examples[l7]", "embeddings.examples[l8]", "embeddings.examples[l9]"]
        );

        tracker.set_capacity(1);
        assert_eq!(tracker.len(), 1);
        assert_eq!(DegradationTracker::with_capacity(0).capacity(), 1);
    }

    #[test]
    fn recovering_healthy_component_is_a_no_op() {
        let mut tracker = DegradationTracker::new();
        assert_eq!(tracker.mark_recovered("embeddings.query"), 0);
    }

    #[test]
    fn count_recent_by_component() {
        let mut tracker = DegradationTracker::new();
        tracker.record(event("a"));
        tracker.record(event("a"));
        tracker.record(event("b"));
        assert_eq!(tracker.count_recent("a", 60), 2);
        assert_eq!(tracker.count_all_recent(60), 3);
    }

    #[test]
    fn drain_empties() {
        let mut tracker = DegradationTracker::new();
        tracker.record(event("a"));
        let drained = tracker.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].component, "a");
        assert!(tracker.is_empty());
    }
}

//! Structured log events for key classifier operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log recovery of a previously degraded component.
pub fn degradation_recovered(component: &str, occurrences: u64) {
    tracing::info!(
        event = "degradation_recovered",
        component = %component,
        occurrences = occurrences,
        "degradation recovered"
    );
}

/// Log a completed classification.
pub fn classification_completed(top_label: &str, intents: usize, degraded: bool, elapsed_ms: u64) {
    tracing::debug!(
        event = "classification_completed",
        top_label = %top_label,
        intents = intents,
        degraded = degraded,
        elapsed_ms = elapsed_ms,
        "classification completed"
    );
}

/// Log a finished intent embedding cache build.
pub fn cache_built(labels: usize, examples: usize, degraded_labels: usize, elapsed_ms: u64) {
    tracing::info!(
        event = "cache_built",
        labels = labels,
        examples = examples,
        degraded_labels = degraded_labels,
        elapsed_ms = elapsed_ms,
        "intent embedding cache built"
    );
}

use transit_core::config::{LogFormat, ObservabilityConfig};
use transit_core::models::DegradationEvent;
use transit_observability::tracing_setup::spans::names;
use transit_observability::{init_tracing, DegradationTracker, RecoveryStatus};

#[test]
fn init_tracing_twice_is_harmless() {
    let config = ObservabilityConfig {
        log_level: "debug".to_string(),
        log_format: LogFormat::Json,
        ..ObservabilityConfig::default()
    };
    init_tracing(&config);
    assert!(!init_tracing(&config), "a second subscriber must not be installed");
}

#[test]
fn span_macros_use_named_spans() {
    let span = transit_observability::classification_span!(24usize);
    let _enter = span.enter();
    let embed = transit_observability::embedding_span!("tfidf", 1536usize);
    let build = transit_observability::cache_build_span!(5usize, true);
    drop((embed, build));
    assert_eq!(names::CLASSIFY, "transit.classify");
}

#[test]
fn tracked_degradation_serializes_recovery_status() {
    let mut tracker = DegradationTracker::new();
    tracker.record(DegradationEvent::now(
        "embeddings.query",
        "provider returned HTTP 503",
        "zero-vector",
    ));
    tracker.mark_recovered("embeddings.query");

    let tracked = tracker.events().next().unwrap();
    let json = serde_json::to_value(tracked).unwrap();
    assert_eq!(json["recovery_status"], "recovered");
    assert_eq!(json["occurrences"], 1);
    assert_eq!(json["event"]["component"], "embeddings.query");
    assert_eq!(tracked.recovery_status, RecoveryStatus::Recovered);
}

//! Span definitions per operation: classification, embedding, cache build.

/// Create a classification span. Only the query length is recorded; query
/// text may contain personal details.
#[macro_export]
macro_rules! classification_span {
    ($query_len:expr) => {
        tracing::info_span!("transit.classify", query_len = $query_len)
    };
}

/// Create an embedding span.
#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $dimension:expr) => {
        tracing::info_span!("transit.embedding", provider = %$provider, dimension = $dimension)
    };
}

/// Create an intent cache build span.
#[macro_export]
macro_rules! cache_build_span {
    ($labels:expr, $parallel:expr) => {
        tracing::info_span!("transit.cache_build", labels = $labels, parallel = $parallel)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLASSIFY: &str = "transit.classify";
    pub const EMBEDDING: &str = "transit.embedding";
    pub const CACHE_BUILD: &str = "transit.cache_build";
}

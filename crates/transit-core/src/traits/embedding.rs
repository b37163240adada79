use crate::errors::TransitResult;

/// Embedding generation provider.
///
/// Implementations must be safe to call from many threads at once; the
/// classifier shares one provider across every in-flight query.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> TransitResult<Vec<f32>>;

    /// Embed a batch of texts. One vector per input, in input order.
    fn embed_batch(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}

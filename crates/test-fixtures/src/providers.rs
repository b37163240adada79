//! Deterministic mock embedding providers.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use transit_core::errors::{EmbeddingError, TransitResult};
use transit_core::traits::IEmbeddingProvider;

/// Returns a fixed vector per known text.
///
/// Unknown texts fail unless a default vector is set. Any text registered
/// with `fail_on` fails, and so does every batch containing it.
#[derive(Debug, Clone)]
pub struct KeyedProvider {
    dims: usize,
    vectors: HashMap<String, Vec<f32>>,
    default: Option<Vec<f32>>,
    failing: HashSet<String>,
}

impl KeyedProvider {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            vectors: HashMap::new(),
            default: None,
            failing: HashSet::new(),
        }
    }

    pub fn with(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }

    /// Vector for texts that were never registered.
    pub fn with_default(mut self, vector: Vec<f32>) -> Self {
        self.default = Some(vector);
        self
    }

    pub fn fail_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }

    fn lookup(&self, text: &str) -> TransitResult<Vec<f32>> {
        if self.failing.contains(text) {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("mock failure for '{text}'"),
            }
            .into());
        }
        self.vectors
            .get(text)
            .or(self.default.as_ref())
            .cloned()
            .ok_or_else(|| {
                EmbeddingError::InferenceFailed {
                    reason: format!("no mock vector for '{text}'"),
                }
                .into()
            })
    }
}

impl IEmbeddingProvider for KeyedProvider {
    fn embed(&self, text: &str) -> TransitResult<Vec<f32>> {
        self.lookup(text)
    }

    fn embed_batch(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.lookup(t)).collect()
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "keyed-mock"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Gives every distinct text its own axis, in order of first sight.
///
/// Texts beyond `dims` distinct inputs all share the last axis.
#[derive(Debug)]
pub struct OneHotProvider {
    dims: usize,
    axes: Mutex<HashMap<String, usize>>,
}

impl OneHotProvider {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            axes: Mutex::new(HashMap::new()),
        }
    }

    /// The axis assigned to `text`, if it has been embedded.
    pub fn axis_of(&self, text: &str) -> Option<usize> {
        self.axes.lock().unwrap().get(text).copied()
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let mut axes = self.axes.lock().unwrap();
        let next = axes.len().min(self.dims - 1);
        let axis = *axes.entry(text.to_string()).or_insert(next);
        crate::one_hot(self.dims, axis)
    }
}

impl IEmbeddingProvider for OneHotProvider {
    fn embed(&self, text: &str) -> TransitResult<Vec<f32>> {
        Ok(self.vector_for(text))
    }

    fn embed_batch(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vector_for(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "one-hot-mock"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Fails every call, like a provider that is down or timing out.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    dims: usize,
    timeout: bool,
}

impl FailingProvider {
    pub fn new(dims: usize) -> Self {
        Self {
            dims,
            timeout: false,
        }
    }

    /// Fail with `EmbeddingError::Timeout` instead of a generic error.
    pub fn timing_out(dims: usize) -> Self {
        Self {
            dims,
            timeout: true,
        }
    }

    fn error(&self) -> EmbeddingError {
        if self.timeout {
            EmbeddingError::Timeout { after_ms: 10_000 }
        } else {
            EmbeddingError::ProviderUnavailable {
                provider: "failing-mock".to_string(),
            }
        }
    }
}

impl IEmbeddingProvider for FailingProvider {
    fn embed(&self, _text: &str) -> TransitResult<Vec<f32>> {
        Err(self.error().into())
    }

    fn embed_batch(&self, _texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        Err(self.error().into())
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        "failing-mock"
    }

    fn is_available(&self) -> bool {
        false
    }
}

/// Counts calls on the way through to an inner provider.
pub struct CountingProvider {
    inner: Arc<dyn IEmbeddingProvider>,
    single_calls: AtomicUsize,
    batch_calls: AtomicUsize,
}

impl CountingProvider {
    pub fn new(inner: Arc<dyn IEmbeddingProvider>) -> Self {
        Self {
            inner,
            single_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
        }
    }

    pub fn single_calls(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for CountingProvider {
    fn embed(&self, text: &str) -> TransitResult<Vec<f32>> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.embed(text)
    }

    fn embed_batch(&self, texts: &[String]) -> TransitResult<Vec<Vec<f32>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.embed_batch(texts)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn is_available(&self) -> bool {
        self.inner.is_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyed_returns_registered_vectors() {
        let p = KeyedProvider::new(2).with("a", vec![1.0, 0.0]);
        assert_eq!(p.embed("a").unwrap(), vec![1.0, 0.0]);
        assert!(p.embed("b").is_err());
        let p = p.with_default(vec![0.0, 1.0]);
        assert_eq!(p.embed("b").unwrap(), vec![0.0, 1.0]);
    }

    #[test]
    fn keyed_fail_on_fails_whole_batch() {
        let p = KeyedProvider::new(2)
            .with_default(vec![1.0, 1.0])
            .fail_on("boom");
        let texts = vec!["ok".to_string(), "boom".to_string()];
        assert!(p.embed_batch(&texts).is_err());
    }

    #[test]
    fn one_hot_assigns_axes_in_order() {
        let p = OneHotProvider::new(4);
        let texts = vec!["t1".to_string(), "t2".to_string(), "t3".to_string()];
        let vs = p.embed_batch(&texts).unwrap();
        assert_eq!(vs[0], vec![1.0, 0.0, 0.0, 0.0]);
        assert_eq!(vs[2], vec![0.0, 0.0, 1.0, 0.0]);
        assert_eq!(p.axis_of("t2"), Some(1));
        assert_eq!(p.embed("t1").unwrap(), vs[0]);
    }

    #[test]
    fn counting_counts() {
        let p = CountingProvider::new(Arc::new(OneHotProvider::new(2)));
        p.embed("a").unwrap();
        p.embed_batch(&["b".to_string()]).unwrap();
        assert_eq!((p.single_calls(), p.batch_calls()), (1, 1));
    }
}

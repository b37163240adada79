//! Test fixtures for the transit intent workspace.
//!
//! Mock embedding providers with hand-picked vectors, and a loader for the
//! JSON scenario files under `data/`.

pub mod providers;
pub mod scenarios;

pub use providers::{CountingProvider, FailingProvider, KeyedProvider, OneHotProvider};
pub use scenarios::{ScenarioFile, ScenarioQuery};

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Unit vector along `axis`.
pub fn one_hot(dims: usize, axis: usize) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[axis] = 1.0;
    v
}

/// Sparse vector from `(axis, weight)` pairs.
pub fn mix(dims: usize, parts: &[(usize, f32)]) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    for &(axis, weight) in parts {
        v[axis] += weight;
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_file_loads() {
        let file: ScenarioFile = load_fixture("scenarios/transit_scenarios.json");
        assert_eq!(file.dimensions, 6);
        assert_eq!(file.bank.len(), 5);
        assert!(file.queries.iter().all(|q| !q.expected.is_empty()));
        assert!(fixture_path("scenarios/transit_scenarios.json").exists());
    }

    #[test]
    fn vector_helpers() {
        assert_eq!(one_hot(3, 1), vec![0.0, 1.0, 0.0]);
        assert_eq!(mix(3, &[(0, 0.5), (2, 1.0)]), vec![0.5, 0.0, 1.0]);
    }
}

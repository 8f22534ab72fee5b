//! Execution results returned by executors.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Measurement outcome counts, keyed by bitstring.
///
/// Keys are kept sorted so serialized results are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(BTreeMap<String, u64>);

impl Counts {
    /// Create an empty set of counts.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add `count` occurrences of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Number of times `bitstring` was observed.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bits, count) in iter {
            counts.insert(bits, count);
        }
        counts
    }
}

/// A rendered, opaque representation of a result (e.g. a histogram).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    /// MIME type of `data`.
    pub media_type: String,
    /// Rendered payload.
    pub data: String,
}

impl Artifact {
    pub fn new(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Plain-text artifact.
    pub fn text(data: impl Into<String>) -> Self {
        Self::new("text/plain", data)
    }
}

/// Outcome of a successful execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Rendered view of the counts.
    pub artifact: Artifact,
}

impl ExecutionResult {
    pub fn new(counts: Counts, shots: u32, artifact: Artifact) -> Self {
        Self {
            counts,
            shots,
            artifact,
        }
    }

    /// Whether the counts add up to the shots that were requested.
    pub fn is_consistent(&self) -> bool {
        self.counts.total() == u64::from(self.shots)
    }
}

//! Directed edges between named nodes.

use serde::{Deserialize, Serialize};

/// A directed edge `source -> target`, both given by node name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Name of the node the edge leaves.
    pub source: String,
    /// Name of the node the edge enters.
    pub target: String,
}

impl Edge {
    /// Creates an edge `source -> target`.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns the edge as a borrowed `(source, target)` tuple.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.source, &self.target)
    }

    /// Returns the unordered pair key: the lexicographically smaller name
    /// first. `A -> B` and `B -> A` share a key.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }
}

impl From<(&str, &str)> for Edge {
    fn from((source, target): (&str, &str)) -> Self {
        Edge::new(source, target)
    }
}

//! Storage-layer types for graph identity and stored content.
//!
//! [`GraphId`] lives here because identity is a storage concern: a graph only
//! gains an ID when it is persisted.

use std::fmt;

use dagstore_core::{Edge, Node};
use serde::{Deserialize, Serialize};

/// Unique identifier for a stored graph.
///
/// The inner `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphId(pub i64);

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A graph as read back from storage.
///
/// Nodes and edges are in storage order (insertion order, minus deletions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGraph {
    pub id: GraphId,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

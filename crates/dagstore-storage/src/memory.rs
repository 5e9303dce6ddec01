//! In-memory implementation of [`GraphStore`].
//!
//! [`InMemoryStore`] is a first-class backend for tests and for running the
//! service without a database file. It enforces the same name-length,
//! uniqueness and referential rules as the SQLite schema, and it checks all of them before
//! touching its maps, so a failed create leaves nothing behind.

use std::collections::{BTreeMap, HashSet};

use dagstore_core::{Edge, Node, MAX_NAME_LEN};

use crate::error::StorageError;
use crate::traits::GraphStore;
use crate::types::{GraphId, StoredGraph};

/// Data stored for a single graph.
#[derive(Debug, Clone, Default)]
struct StoredEntry {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

/// Ordered in-memory store. IDs start at 1 like SQLite rowids and are never
/// reused.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    graphs: BTreeMap<i64, StoredEntry>,
    next_id: i64,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    fn check_constraints(nodes: &[Node], edges: &[Edge]) -> Result<(), StorageError> {
        let mut names = HashSet::with_capacity(nodes.len());
        for node in nodes {
            if node.name.is_empty() || node.is_too_long() {
                return Err(StorageError::IntegrityError {
                    reason: format!(
                        "node name must be 1 to {MAX_NAME_LEN} characters, got {}",
                        node.name.chars().count()
                    ),
                });
            }
            if !names.insert(node.name.as_str()) {
                return Err(StorageError::DuplicateConstraint {
                    reason: format!("node name {} already exists", node.name),
                });
            }
        }

        let mut pairs = HashSet::with_capacity(edges.len());
        for edge in edges {
            for endpoint in [&edge.source, &edge.target] {
                if !names.contains(endpoint.as_str()) {
                    return Err(StorageError::IntegrityError {
                        reason: format!(
                            "edge {} -> {} references unknown node {}",
                            edge.source, edge.target, endpoint
                        ),
                    });
                }
            }
            if !pairs.insert(edge.pair_key()) {
                return Err(StorageError::DuplicateConstraint {
                    reason: format!("edge pair {} / {} already exists", edge.source, edge.target),
                });
            }
        }

        Ok(())
    }
}

impl GraphStore for InMemoryStore {
    fn create_graph(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<GraphId, StorageError> {
        Self::check_constraints(nodes, edges)?;

        self.next_id += 1;
        let id = self.next_id;
        self.graphs.insert(
            id,
            StoredEntry {
                nodes: nodes.to_vec(),
                edges: edges.to_vec(),
            },
        );
        Ok(GraphId(id))
    }

    fn get_graph(&self, id: GraphId) -> Result<StoredGraph, StorageError> {
        let entry = self
            .graphs
            .get(&id.0)
            .ok_or(StorageError::GraphNotFound(id.0))?;
        Ok(StoredGraph {
            id,
            nodes: entry.nodes.clone(),
            edges: entry.edges.clone(),
        })
    }

    fn delete_node(&mut self, id: GraphId, name: &str) -> Result<(), StorageError> {
        let entry = self
            .graphs
            .get_mut(&id.0)
            .ok_or(StorageError::GraphNotFound(id.0))?;

        let position = entry
            .nodes
            .iter()
            .position(|n| n.name == name)
            .ok_or_else(|| StorageError::NodeNotFound {
                graph: id.0,
                name: name.to_string(),
            })?;

        entry.edges.retain(|e| e.source != name && e.target != name);
        entry.nodes.remove(position);
        Ok(())
    }

    fn list_graphs(&self) -> Result<Vec<GraphId>, StorageError> {
        Ok(self.graphs.keys().copied().map(GraphId).collect())
    }
}

//! The [`GraphStore`] trait defining the storage contract for DAGs.
//!
//! All backends ([`InMemoryStore`](crate::InMemoryStore),
//! [`SqliteStore`](crate::SqliteStore)) implement this trait with identical
//! semantics, so the service can run on either.
//!
//! Every write is all-or-nothing: when a method returns an error, the store
//! is left exactly as it was before the call.

use dagstore_core::{Edge, Node};

use crate::error::StorageError;
use crate::types::{GraphId, StoredGraph};

/// The storage contract for graphs.
///
/// The trait is synchronous; callers serialize access (the server holds the
/// service behind an async mutex).
pub trait GraphStore {
    /// Stores a new graph with all its nodes and edges in one transaction.
    ///
    /// Edges name their endpoints; each must be one of `nodes`. Uniqueness of
    /// node names and of unordered edge pairs is enforced here regardless of
    /// any validation the caller did, failing with
    /// [`StorageError::DuplicateConstraint`].
    fn create_graph(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<GraphId, StorageError>;

    /// Loads a graph with its nodes and edges.
    fn get_graph(&self, id: GraphId) -> Result<StoredGraph, StorageError>;

    /// Removes a node and every edge touching it.
    ///
    /// Fails with [`StorageError::GraphNotFound`] or
    /// [`StorageError::NodeNotFound`] without changing anything.
    fn delete_node(&mut self, id: GraphId, name: &str) -> Result<(), StorageError>;

    /// Lists the IDs of all stored graphs in ascending order.
    fn list_graphs(&self) -> Result<Vec<GraphId>, StorageError>;

    /// Releases the backend's resources at shutdown.
    fn close(self: Box<Self>) -> Result<(), StorageError> {
        Ok(())
    }
}

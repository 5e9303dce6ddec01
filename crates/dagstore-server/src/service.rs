//! GraphService: the single coordinator between HTTP handlers and the
//! core/storage crates.
//!
//! Creates run the validator before touching the store. Reads always go to
//! the store and shape the result into one of the three views. Handlers are
//! thin wrappers over these methods.

use dagstore_core::{adjacency, validate, Direction, Edge, Node};
use dagstore_storage::{GraphId, GraphStore, InMemoryStore, SqliteStore};

use crate::error::ServiceError;
use crate::schema::graphs::{AdjacencyListResponse, GraphReadResponse};

/// Orchestrates validation, persistence and view shaping for stored graphs.
pub struct GraphService {
    store: Box<dyn GraphStore + Send>,
}

impl GraphService {
    /// Opens a SQLite-backed service at `db_path` (`:memory:` for a private
    /// in-memory database).
    pub fn new(db_path: &str) -> Result<Self, ServiceError> {
        let store = if db_path == ":memory:" {
            SqliteStore::in_memory()?
        } else {
            SqliteStore::new(db_path)?
        };
        tracing::info!(db_path, "opened sqlite store");
        Ok(GraphService::with_store(store))
    }

    /// Service over an [`InMemoryStore`] (no database at all).
    pub fn in_memory() -> Self {
        GraphService::with_store(InMemoryStore::new())
    }

    pub fn with_store(store: impl GraphStore + Send + 'static) -> Self {
        GraphService {
            store: Box::new(store),
        }
    }

    /// Validates and persists a graph, returning its new ID.
    ///
    /// All rule violations are reported together; nothing is stored unless
    /// every rule passes and the store commits.
    pub fn create_graph(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<GraphId, ServiceError> {
        if let Err(invalid) = validate(nodes, edges) {
            tracing::debug!(%invalid, "rejected graph");
            return Err(invalid.into());
        }

        let id = self.store.create_graph(nodes, edges).map_err(|e| {
            tracing::warn!(error = %e, "failed to persist graph");
            ServiceError::from(e)
        })?;

        tracing::info!(graph = %id, nodes = nodes.len(), edges = edges.len(), "graph created");
        Ok(id)
    }

    /// Returns the graph's nodes and edges in storage order.
    pub fn read_graph(&self, id: GraphId) -> Result<GraphReadResponse, ServiceError> {
        Ok(self.store.get_graph(id)?.into())
    }

    /// Successors of every node.
    pub fn adjacency_list(&self, id: GraphId) -> Result<AdjacencyListResponse, ServiceError> {
        self.shaped(id, Direction::Outgoing)
    }

    /// Predecessors of every node.
    pub fn reverse_adjacency_list(&self, id: GraphId) -> Result<AdjacencyListResponse, ServiceError> {
        self.shaped(id, Direction::Incoming)
    }

    fn shaped(&self, id: GraphId, direction: Direction) -> Result<AdjacencyListResponse, ServiceError> {
        let graph = self.store.get_graph(id)?;
        Ok(AdjacencyListResponse {
            adjacency_list: adjacency(&graph.nodes, &graph.edges, direction),
        })
    }

    /// Removes a node and every edge touching it.
    pub fn delete_node(&mut self, id: GraphId, name: &str) -> Result<(), ServiceError> {
        self.store.delete_node(id, name)?;
        tracing::info!(graph = %id, node = name, "node deleted");
        Ok(())
    }

    /// IDs of all stored graphs, ascending.
    pub fn list_graphs(&self) -> Result<Vec<GraphId>, ServiceError> {
        Ok(self.store.list_graphs()?)
    }

    /// Closes the underlying store. Called once at shutdown.
    pub fn close(self) -> Result<(), ServiceError> {
        self.store.close()?;
        tracing::info!("store closed");
        Ok(())
    }
}

//! Graph request/response types.

use dagstore_core::{Adjacency, Edge, Node};
use dagstore_storage::{GraphId, StoredGraph};
use serde::{Deserialize, Serialize};

/// Request to store a new graph.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGraphRequest {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// Response from creating a graph.
#[derive(Debug, Clone, Serialize)]
pub struct CreateGraphResponse {
    /// The assigned graph identifier.
    pub id: GraphId,
}

/// A graph as node and edge lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphReadResponse {
    pub id: GraphId,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl From<StoredGraph> for GraphReadResponse {
    fn from(graph: StoredGraph) -> Self {
        GraphReadResponse {
            id: graph.id,
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

/// Forward or reverse adjacency of a graph. Every node is a key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyListResponse {
    pub adjacency_list: Adjacency,
}

/// IDs of all stored graphs.
#[derive(Debug, Clone, Serialize)]
pub struct GraphListResponse {
    pub graphs: Vec<GraphId>,
}

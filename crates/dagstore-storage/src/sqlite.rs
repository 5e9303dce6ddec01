//! SQLite implementation of [`GraphStore`].
//!
//! [`SqliteStore`] persists graphs across three tables (`graphs`, `nodes`,
//! `edges`) with WAL mode, foreign keys, and automatic schema migrations.
//! Every write runs in a single transaction; an early return drops the
//! transaction, which rolls it back.

use std::collections::HashMap;

use rusqlite::{params, Connection, OptionalExtension, Transaction};

use dagstore_core::{Edge, Node};

use crate::error::StorageError;
use crate::traits::GraphStore;
use crate::types::{GraphId, StoredGraph};

/// SQLite-backed implementation of [`GraphStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database.
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    /// Closes the underlying connection, reporting any error SQLite raises
    /// while flushing.
    pub fn close(self) -> Result<(), StorageError> {
        self.conn.close().map_err(|(_, err)| StorageError::from(err))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn graph_exists(conn: &Connection, id: i64) -> Result<bool, StorageError> {
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM graphs WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    /// Inserts nodes and returns their row IDs keyed by name.
    fn insert_nodes<'n>(
        tx: &Transaction<'_>,
        graph_id: i64,
        nodes: &'n [Node],
    ) -> Result<HashMap<&'n str, i64>, StorageError> {
        let mut ids = HashMap::with_capacity(nodes.len());
        let mut stmt = tx.prepare_cached("INSERT INTO nodes (graph_id, name) VALUES (?1, ?2)")?;
        for node in nodes {
            stmt.execute(params![graph_id, node.name])?;
            ids.insert(node.name.as_str(), tx.last_insert_rowid());
        }
        Ok(ids)
    }

    fn insert_edges(
        tx: &Transaction<'_>,
        graph_id: i64,
        node_ids: &HashMap<&str, i64>,
        edges: &[Edge],
    ) -> Result<(), StorageError> {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO edges (graph_id, source_id, target_id) VALUES (?1, ?2, ?3)",
        )?;
        for edge in edges {
            let lookup = |name: &str| {
                node_ids
                    .get(name)
                    .copied()
                    .ok_or_else(|| StorageError::IntegrityError {
                        reason: format!(
                            "edge {} -> {} references unknown node {}",
                            edge.source, edge.target, name
                        ),
                    })
            };
            let source_id = lookup(edge.source.as_str())?;
            let target_id = lookup(edge.target.as_str())?;
            stmt.execute(params![graph_id, source_id, target_id])?;
        }
        Ok(())
    }

    fn load_nodes(conn: &Connection, graph_id: i64) -> Result<Vec<Node>, StorageError> {
        let mut stmt =
            conn.prepare_cached("SELECT name FROM nodes WHERE graph_id = ?1 ORDER BY id")?;
        let rows = stmt.query_map(params![graph_id], |row| {
            let name: String = row.get(0)?;
            Ok(Node { name })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn load_edges(conn: &Connection, graph_id: i64) -> Result<Vec<Edge>, StorageError> {
        let mut stmt = conn.prepare_cached(
            "SELECT s.name, t.name FROM edges e \
             JOIN nodes s ON s.id = e.source_id \
             JOIN nodes t ON t.id = e.target_id \
             WHERE e.graph_id = ?1 ORDER BY e.id",
        )?;
        let rows = stmt.query_map(params![graph_id], |row| {
            let source: String = row.get(0)?;
            let target: String = row.get(1)?;
            Ok(Edge { source, target })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}

impl GraphStore for SqliteStore {
    fn create_graph(&mut self, nodes: &[Node], edges: &[Edge]) -> Result<GraphId, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute("INSERT INTO graphs DEFAULT VALUES", [])?;
        let graph_id = tx.last_insert_rowid();

        let node_ids = Self::insert_nodes(&tx, graph_id, nodes)?;
        Self::insert_edges(&tx, graph_id, &node_ids, edges)?;

        tx.commit()?;
        Ok(GraphId(graph_id))
    }

    fn get_graph(&self, id: GraphId) -> Result<StoredGraph, StorageError> {
        // One read transaction so nodes and edges come from the same snapshot.
        let tx = self.conn.unchecked_transaction()?;
        if !Self::graph_exists(&tx, id.0)? {
            return Err(StorageError::GraphNotFound(id.0));
        }
        let nodes = Self::load_nodes(&tx, id.0)?;
        let edges = Self::load_edges(&tx, id.0)?;
        tx.commit()?;
        Ok(StoredGraph { id, nodes, edges })
    }

    fn delete_node(&mut self, id: GraphId, name: &str) -> Result<(), StorageError> {
        let tx = self.conn.transaction()?;
        if !Self::graph_exists(&tx, id.0)? {
            return Err(StorageError::GraphNotFound(id.0));
        }

        let node_id: Option<i64> = tx
            .query_row(
                "SELECT id FROM nodes WHERE graph_id = ?1 AND name = ?2",
                params![id.0, name],
                |row| row.get(0),
            )
            .optional()?;
        let Some(node_id) = node_id else {
            return Err(StorageError::NodeNotFound {
                graph: id.0,
                name: name.to_string(),
            });
        };

        // The foreign-key cascade would remove these too; deleting them
        // explicitly keeps the order visible.
        tx.execute(
            "DELETE FROM edges WHERE source_id = ?1 OR target_id = ?1",
            params![node_id],
        )?;
        tx.execute("DELETE FROM nodes WHERE id = ?1", params![node_id])?;
        tx.commit()?;
        Ok(())
    }

    fn list_graphs(&self) -> Result<Vec<GraphId>, StorageError> {
        let mut stmt = self.conn.prepare_cached("SELECT id FROM graphs ORDER BY id")?;
        let rows = stmt.query_map([], |row| row.get(0).map(GraphId))?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }

    fn close(self: Box<Self>) -> Result<(), StorageError> {
        SqliteStore::close(*self)
    }
}

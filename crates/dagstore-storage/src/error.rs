//! Storage error types for dagstore-storage.
//!
//! [`StorageError`] separates lookups that found nothing from writes the
//! store refused. Uniqueness violations raised by SQLite are classified as
//! [`StorageError::DuplicateConstraint`] so callers can tell them apart from
//! other database failures. CHECK failures on node names become
//! [`StorageError::IntegrityError`], matching the in-memory store.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A graph with the given ID was not found.
    #[error("graph not found: {0}")]
    GraphNotFound(i64),

    /// No node with this name exists in the graph.
    #[error("node not found: graph={graph}, name={name}")]
    NodeNotFound { graph: i64, name: String },

    /// A node name or an unordered edge pair already exists in the graph.
    #[error("duplicate constraint violated: {reason}")]
    DuplicateConstraint { reason: String },

    /// A write referenced data that does not exist in the graph, or a node
    /// name outside the 1..=255 character range.
    #[error("integrity error: {reason}")]
    IntegrityError { reason: String },

    /// Any other SQLite failure.
    #[error("sqlite error: {0}")]
    Sqlite(rusqlite::Error),

    /// Schema migration failed.
    #[error("migration error: {0}")]
    Migration(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, msg)
                if code.code == ErrorCode::ConstraintViolation
                    && matches!(
                        code.extended_code,
                        rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                            | rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    ) =>
            {
                StorageError::DuplicateConstraint {
                    reason: msg.clone().unwrap_or_else(|| code.to_string()),
                }
            }
            rusqlite::Error::SqliteFailure(code, msg)
                if code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_CHECK =>
            {
                StorageError::IntegrityError {
                    reason: msg.clone().unwrap_or_else(|| code.to_string()),
                }
            }
            _ => StorageError::Sqlite(err),
        }
    }
}

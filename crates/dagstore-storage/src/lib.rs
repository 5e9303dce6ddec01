//! Storage layer for dagstore graphs.
//!
//! Provides the [`GraphStore`] trait defining the storage contract that all
//! backends implement, plus the [`InMemoryStore`] and [`SqliteStore`] as
//! first-class backends.
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: GraphId, StoredGraph storage-layer types
//! - [`traits`]: GraphStore trait definition
//! - [`memory`]: InMemoryStore implementation
//! - [`schema`]: SQL schema migrations and connection setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod memory;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use error::StorageError;
pub use memory::InMemoryStore;
pub use sqlite::SqliteStore;
pub use traits::GraphStore;
pub use types::{GraphId, StoredGraph};

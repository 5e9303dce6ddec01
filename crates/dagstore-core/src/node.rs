//! Named graph vertices.
//!
//! A [`Node`] is identified by its name within one graph. Names are plain
//! ASCII letters, between 1 and [`MAX_NAME_LEN`] characters long.

use serde::{Deserialize, Serialize};

/// Longest node name accepted, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// A vertex of a stored graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique (per graph) node name.
    pub name: String,
}

impl Node {
    /// Creates a node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Node { name: name.into() }
    }

    /// Returns `true` if the name is non-empty and made only of `A-Z`/`a-z`.
    pub fn has_valid_charset(&self) -> bool {
        !self.name.is_empty() && self.name.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// Returns `true` if the name is longer than [`MAX_NAME_LEN`] characters.
    pub fn is_too_long(&self) -> bool {
        self.name.chars().count() > MAX_NAME_LEN
    }
}

impl From<&str> for Node {
    fn from(name: &str) -> Self {
        Node::new(name)
    }
}

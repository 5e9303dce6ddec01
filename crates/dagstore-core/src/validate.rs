//! Structural validation of a submitted graph.
//!
//! [`validate`] applies every rule to the same input and collects one
//! [`ValidationError`] per failed rule, in rule order. Nothing short-circuits:
//! a request with duplicate names and a cycle reports both.
//!
//! Rules, in order:
//! 1. at least one node (`nodes.empty`)
//! 2. names match `^[A-Za-z]+$` (`nodes.invalid_name`)
//! 3. names are at most 255 characters (`nodes.too_long`)
//! 4. names are unique (`nodes.duplicate`)
//! 5. edge endpoints name known nodes (`edges.unknown_reference`)
//! 6. no edge repeats an earlier edge in either direction (`edges.duplicate`)
//! 7. the graph is acyclic (`edges.cycle`)
//!
//! The cycle rule runs even when rule 5 failed; edges with unknown endpoints
//! simply take no part in it.

use std::collections::HashSet;

use serde::{Serialize, Serializer};

use crate::acyclic::is_acyclic;
use crate::edge::Edge;
use crate::node::Node;

/// Machine-readable kind of a validation failure. Serializes as its
/// [`code`](ValidationErrorKind::code).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    NodesEmpty,
    InvalidName,
    NameTooLong,
    DuplicateNode,
    UnknownReference,
    DuplicateEdge,
    Cycle,
}

impl ValidationErrorKind {
    /// The wire code, e.g. `"nodes.duplicate"`.
    pub fn code(self) -> &'static str {
        match self {
            ValidationErrorKind::NodesEmpty => "nodes.empty",
            ValidationErrorKind::InvalidName => "nodes.invalid_name",
            ValidationErrorKind::NameTooLong => "nodes.too_long",
            ValidationErrorKind::DuplicateNode => "nodes.duplicate",
            ValidationErrorKind::UnknownReference => "edges.unknown_reference",
            ValidationErrorKind::DuplicateEdge => "edges.duplicate",
            ValidationErrorKind::Cycle => "edges.cycle",
        }
    }

    /// Request field the failure is attributed to.
    pub fn field(self) -> &'static str {
        match self {
            ValidationErrorKind::NodesEmpty
            | ValidationErrorKind::InvalidName
            | ValidationErrorKind::NameTooLong
            | ValidationErrorKind::DuplicateNode => "nodes",
            ValidationErrorKind::UnknownReference
            | ValidationErrorKind::DuplicateEdge
            | ValidationErrorKind::Cycle => "edges",
        }
    }

    fn message(self) -> &'static str {
        match self {
            ValidationErrorKind::NodesEmpty => "There aren't any vertex!",
            ValidationErrorKind::InvalidName => "There are nodes with incorrect names!",
            ValidationErrorKind::NameTooLong => "There are nodes with too long names!",
            ValidationErrorKind::DuplicateNode => "There are vertex with the same name!",
            ValidationErrorKind::UnknownReference => "There are incorrect edges!",
            ValidationErrorKind::DuplicateEdge => "There are duplicate edges!",
            ValidationErrorKind::Cycle => "There is a cycle in graph!",
        }
    }
}

impl Serialize for ValidationErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// One failed rule, serialized as `{"loc": [...], "msg": ..., "type": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Location of the offending input, e.g. `["body", "nodes"]`.
    pub loc: [&'static str; 2],
    /// Human-readable description.
    pub msg: String,
    /// Machine-readable kind.
    #[serde(rename = "type")]
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(kind: ValidationErrorKind) -> Self {
        ValidationError {
            loc: ["body", kind.field()],
            msg: kind.message().to_string(),
            kind,
        }
    }
}

/// A graph that failed one or more rules. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid graph: {}", summarize(.0))]
pub struct InvalidGraph(pub Vec<ValidationError>);

impl InvalidGraph {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    pub fn kinds(&self) -> Vec<ValidationErrorKind> {
        self.0.iter().map(|e| e.kind).collect()
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.0
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.kind.code())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks every rule against `nodes` and `edges`.
///
/// Returns `Ok(())` if the graph may be stored, or every violated rule in
/// rule order.
pub fn validate(nodes: &[Node], edges: &[Edge]) -> Result<(), InvalidGraph> {
    let mut errors = Vec::new();
    let mut fail = |kind| errors.push(ValidationError::new(kind));

    if nodes.is_empty() {
        fail(ValidationErrorKind::NodesEmpty);
    }
    if nodes.iter().any(|n| !n.has_valid_charset()) {
        fail(ValidationErrorKind::InvalidName);
    }
    if nodes.iter().any(Node::is_too_long) {
        fail(ValidationErrorKind::NameTooLong);
    }

    let names: HashSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
    if names.len() != nodes.len() {
        fail(ValidationErrorKind::DuplicateNode);
    }

    if edges
        .iter()
        .any(|e| !names.contains(e.source.as_str()) || !names.contains(e.target.as_str()))
    {
        fail(ValidationErrorKind::UnknownReference);
    }

    if has_duplicate_pair(edges) {
        fail(ValidationErrorKind::DuplicateEdge);
    }

    if !is_acyclic(
        nodes.iter().map(|n| n.name.as_str()),
        edges.iter().map(Edge::as_pair),
    ) {
        fail(ValidationErrorKind::Cycle);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(InvalidGraph(errors))
    }
}

/// An edge duplicates an earlier one when its exact pair or its reverse was
/// already seen. A self-loop only duplicates an earlier identical self-loop.
fn has_duplicate_pair(edges: &[Edge]) -> bool {
    let mut seen: HashSet<(&str, &str)> = HashSet::with_capacity(edges.len());
    for edge in edges {
        let (source, target) = edge.as_pair();
        if seen.contains(&(source, target)) || seen.contains(&(target, source)) {
            return true;
        }
        seen.insert((source, target));
    }
    false
}

//! Graph model and structural checks for dagstore.
//!
//! - [`node`], [`edge`]: the name-keyed [`Node`] and [`Edge`] types
//! - [`acyclic`]: iterative DFS cycle detection
//! - [`validate`]: the aggregated rule checker run before every create
//! - [`view`]: forward and reverse adjacency shaping

pub mod acyclic;
pub mod edge;
pub mod node;
pub mod validate;
pub mod view;

pub use acyclic::is_acyclic;
pub use edge::Edge;
pub use node::{Node, MAX_NAME_LEN};
pub use petgraph::Direction;
pub use validate::{validate, InvalidGraph, ValidationError, ValidationErrorKind};
pub use view::{adjacency, Adjacency};

//! Adjacency-list views of a stored graph.
//!
//! Both views key every node, in storage order, even when it has no edges in
//! the requested direction. Neighbor lists follow edge storage order.

use indexmap::IndexMap;
use petgraph::Direction;

use crate::edge::Edge;
use crate::node::Node;

/// Node name to neighbor names.
pub type Adjacency = IndexMap<String, Vec<String>>;

/// Shapes `nodes`/`edges` into an adjacency map.
///
/// [`Direction::Outgoing`] lists successors (forward adjacency),
/// [`Direction::Incoming`] lists predecessors (reverse adjacency). Edges whose
/// keyed endpoint is not among `nodes` are skipped.
pub fn adjacency(nodes: &[Node], edges: &[Edge], direction: Direction) -> Adjacency {
    let mut map: Adjacency = nodes
        .iter()
        .map(|node| (node.name.clone(), Vec::new()))
        .collect();

    for edge in edges {
        let (key, neighbor) = match direction {
            Direction::Outgoing => (&edge.source, &edge.target),
            Direction::Incoming => (&edge.target, &edge.source),
        };
        if let Some(list) = map.get_mut(key) {
            list.push(neighbor.clone());
        }
    }

    map
}

//! Cycle detection over name-keyed directed graphs.
//!
//! [`is_acyclic`] builds a `petgraph` [`DiGraph`] from node names and runs an
//! iterative depth-first search. Each node carries one of three marks:
//! unvisited, on the current DFS path, or fully resolved. Reaching a node
//! that is still on the path closes a cycle.
//!
//! Edges that mention a name outside the node set are dropped while building
//! the graph. Reporting them is the validator's job, not ours.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, Neighbors, NodeIndex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnPath,
    Done,
}

/// Returns `true` if the edges over `nodes` contain no directed cycle.
///
/// Self-loops count as cycles. Repeated node names collapse into one vertex.
pub fn is_acyclic<'a, N, E>(nodes: N, edges: E) -> bool
where
    N: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = (&'a str, &'a str)>,
{
    let graph = name_graph(nodes, edges);
    !has_cycle(&graph)
}

/// Builds a directed graph whose node weights are the node names.
pub fn name_graph<'a, N, E>(nodes: N, edges: E) -> DiGraph<&'a str, ()>
where
    N: IntoIterator<Item = &'a str>,
    E: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut graph = DiGraph::new();
    let mut index: HashMap<&'a str, NodeIndex> = HashMap::new();

    for name in nodes {
        index.entry(name).or_insert_with(|| graph.add_node(name));
    }

    for (source, target) in edges {
        if let (Some(&from), Some(&to)) = (index.get(source), index.get(target)) {
            graph.add_edge(from, to, ());
        }
    }

    graph
}

/// Worklist DFS. The stack holds each open node with its remaining
/// successors, so deep chains never grow the call stack.
fn has_cycle<N>(graph: &DiGraph<N, ()>) -> bool {
    let mut marks = vec![Mark::Unvisited; graph.node_count()];
    let mut stack: Vec<(NodeIndex, Neighbors<'_, ()>)> = Vec::new();

    for root in graph.node_indices() {
        if marks[root.index()] != Mark::Unvisited {
            continue;
        }
        marks[root.index()] = Mark::OnPath;
        stack.push((root, graph.neighbors(root)));

        while let Some(top) = stack.last_mut() {
            let node = top.0;
            match top.1.next() {
                Some(next) => match marks[next.index()] {
                    Mark::OnPath => return true,
                    Mark::Done => {}
                    Mark::Unvisited => {
                        marks[next.index()] = Mark::OnPath;
                        stack.push((next, graph.neighbors(next)));
                    }
                },
                None => {
                    marks[node.index()] = Mark::Done;
                    stack.pop();
                }
            }
        }
    }

    false
}

//! Push flow along one shortest augmenting path.

use mcf_core::{Cost, EdgeId, Flow, McfError, NodeId, checked_mul};
use mcf_graph::ResidualGraph;

use crate::dijkstra::{ShortestPaths, path_cost};
use crate::error::SolverResult;
use crate::potential::Potentials;

/// Result of one augmentation round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Augmentation {
    /// Units pushed.
    pub delta: Flow,
    /// True cost of one unit along the path.
    pub unit_cost: Cost,
    /// `delta * unit_cost`.
    pub cost: Cost,
    /// Path edges from source to sink.
    pub edges: Vec<EdgeId>,
}

/// Walk parent edges back from `sink`; returns the path in source-to-sink order.
pub fn trace_path(
    graph: &ResidualGraph,
    paths: &ShortestPaths,
    source: NodeId,
    sink: NodeId,
) -> SolverResult<Vec<EdgeId>> {
    let mut edges = Vec::new();
    let mut node = sink;
    while node != source {
        let Some(e) = paths.parent(node) else {
            return Err(McfError::Invariant {
                what: format!("node {node} has no parent edge on the augmenting path"),
            }
            .into());
        };
        edges.push(e);
        node = graph.tail(e);
        if edges.len() > graph.node_count() {
            return Err(McfError::Invariant {
                what: "parent edges form a cycle".to_string(),
            }
            .into());
        }
    }
    edges.reverse();
    Ok(edges)
}

/// Commit one augmentation along the tree path to `sink`.
///
/// Pushes `min(bottleneck, limit)` units on every path edge, then advances the
/// potentials with this round's distances. The round cost is computed before
/// anything is pushed, so an overflow leaves the graph untouched.
pub fn augment(
    graph: &mut ResidualGraph,
    paths: &ShortestPaths,
    potentials: &mut Potentials,
    source: NodeId,
    sink: NodeId,
    limit: Flow,
) -> SolverResult<Augmentation> {
    let edges = trace_path(graph, paths, source, sink)?;
    let delta = paths.bottleneck(sink).min(limit);
    if delta <= 0 {
        return Err(McfError::Invariant {
            what: format!("augmentation of {delta} units requested"),
        }
        .into());
    }
    let unit_cost = path_cost(graph, &edges)?;
    let cost = checked_mul(delta, unit_cost, "augmentation cost")?;

    for &e in &edges {
        graph.push_flow(e, delta)?;
    }

    potentials.advance(paths)?;

    Ok(Augmentation {
        delta,
        unit_cost,
        cost,
        edges,
    })
}

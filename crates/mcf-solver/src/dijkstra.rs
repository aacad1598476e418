//! Reduced-cost shortest paths.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use mcf_core::{
    Cost, EdgeId, Flow, INF_COST, INF_FLOW, NodeId, checked_add, checked_distance, is_reached,
};
use mcf_graph::ResidualGraph;

use crate::error::SolverResult;
use crate::potential::Potentials;

/// Shortest-path tree from one Dijkstra pass.
///
/// Buffers are reused across augmentation rounds.
#[derive(Debug, Clone, Default)]
pub struct ShortestPaths {
    reduced: Vec<Cost>,
    parent: Vec<Option<EdgeId>>,
    bottleneck: Vec<Flow>,
}

impl ShortestPaths {
    pub fn new(node_count: usize) -> Self {
        Self {
            reduced: vec![INF_COST; node_count],
            parent: vec![None; node_count],
            bottleneck: vec![0; node_count],
        }
    }

    fn reset(&mut self, node_count: usize) {
        self.reduced.clear();
        self.reduced.resize(node_count, INF_COST);
        self.parent.clear();
        self.parent.resize(node_count, None);
        self.bottleneck.clear();
        self.bottleneck.resize(node_count, 0);
    }

    pub fn reached(&self, node: NodeId) -> bool {
        self.reduced.get(node.ix()).is_some_and(|&d| is_reached(d))
    }

    /// Distance under reduced costs (`INF_COST` if unreached).
    pub fn reduced_distances(&self) -> &[Cost] {
        &self.reduced
    }

    /// True (not reduced) shortest distance from the source.
    ///
    /// The source's potential is always 0, so the true distance is
    /// `reduced[v] + potential[v]`.
    pub fn distance(&self, node: NodeId, potentials: &Potentials) -> SolverResult<Option<Cost>> {
        if !self.reached(node) {
            return Ok(None);
        }
        let Some(phi) = potentials.get(node) else {
            return Ok(None);
        };
        Ok(Some(checked_distance(self.reduced[node.ix()], phi, "distance")?))
    }

    /// Edge through which `node` was reached.
    pub fn parent(&self, node: NodeId) -> Option<EdgeId> {
        self.parent.get(node.ix()).copied().flatten()
    }

    /// Largest amount that fits through the tree path to `node`.
    pub fn bottleneck(&self, node: NodeId) -> Flow {
        self.bottleneck.get(node.ix()).copied().unwrap_or(0)
    }
}

/// Dijkstra from `source` over residual edges, weighted by reduced cost.
///
/// Fills `paths` with distances, parent edges and bottlenecks for every
/// reachable node and returns whether `sink` was reached. The whole graph is
/// explored (no early exit at the sink) so every reached node gets an exact
/// distance for the potential update.
pub fn shortest_paths(
    graph: &ResidualGraph,
    potentials: &Potentials,
    source: NodeId,
    sink: NodeId,
    paths: &mut ShortestPaths,
) -> SolverResult<bool> {
    paths.reset(graph.node_count());

    let mut heap = BinaryHeap::new();
    paths.reduced[source.ix()] = 0;
    paths.bottleneck[source.ix()] = INF_FLOW;
    heap.push(Reverse((0, source)));

    while let Some(Reverse((du, u))) = heap.pop() {
        if du > paths.reduced[u.ix()] {
            continue;
        }

        for &e in graph.edges_from(u) {
            let residual = graph.residual(e);
            if residual <= 0 {
                continue;
            }
            let v = graph.head(e);
            if potentials.get(v).is_none() {
                continue;
            }
            let rc = potentials.reduced(u, v, graph.cost(e))?;
            debug_assert!(rc >= 0, "negative reduced cost {rc} on edge {e}");

            let dv = checked_distance(du, rc, "reduced distance")?;
            if dv < paths.reduced[v.ix()] {
                paths.reduced[v.ix()] = dv;
                paths.parent[v.ix()] = Some(e);
                paths.bottleneck[v.ix()] = paths.bottleneck[u.ix()].min(residual);
                heap.push(Reverse((dv, v)));
            }
        }
    }

    Ok(paths.reached(sink))
}

/// Sum of true (not reduced) costs along `edges`.
pub(crate) fn path_cost(graph: &ResidualGraph, edges: &[EdgeId]) -> SolverResult<Cost> {
    let mut total: Cost = 0;
    for &e in edges {
        total = checked_add(total, graph.cost(e), "path cost")?;
    }
    Ok(total)
}

//! Vertex potentials (Johnson reweighting).
//!
//! `seed_potentials` runs once per solver run, before the first augmentation,
//! and tolerates negative edge costs. Afterwards the potentials are only moved
//! forward by `Potentials::advance` with each round's Dijkstra distances.

use std::collections::VecDeque;

use mcf_core::{Cost, INF_COST, NodeId, checked_add, checked_distance, checked_sub, is_reached};
use mcf_graph::ResidualGraph;
use tracing::warn;

use crate::dijkstra::ShortestPaths;
use crate::error::{SolverError, SolverResult};

/// One potential per node; unreachable nodes hold no potential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Potentials {
    values: Vec<Cost>,
}

impl Potentials {
    /// Potential of `node`, or `None` if it was never reached from the source.
    pub fn get(&self, node: NodeId) -> Option<Cost> {
        self.values
            .get(node.ix())
            .copied()
            .filter(|&p| is_reached(p))
    }

    /// Raw values, `INF_COST` for unreachable nodes.
    pub fn as_slice(&self) -> &[Cost] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reduced cost of residual edge `u -> v` with true cost `cost`.
    ///
    /// Only meaningful when both endpoints hold a potential.
    #[inline]
    pub(crate) fn reduced(&self, u: NodeId, v: NodeId, cost: Cost) -> SolverResult<Cost> {
        let raised = checked_add(cost, self.values[u.ix()], "reduced cost")?;
        Ok(checked_sub(raised, self.values[v.ix()], "reduced cost")?)
    }

    /// Fold one round of reduced distances into the potentials.
    ///
    /// Reached nodes move to their true shortest distance from the source,
    /// which keeps every reduced cost of the next residual graph non-negative.
    /// Unreached nodes keep their old value.
    pub fn advance(&mut self, paths: &ShortestPaths) -> SolverResult<()> {
        for (phi, &d) in self.values.iter_mut().zip(paths.reduced_distances()) {
            if is_reached(d) && is_reached(*phi) {
                *phi = checked_distance(*phi, d, "potential")?;
            }
        }
        Ok(())
    }
}

/// Shortest distances from `source` over edges with residual capacity,
/// computed with a queue-based Bellman-Ford (SPFA).
///
/// A node whose shortest path would need `node_count` or more edges lies
/// behind a negative cycle; that is reported as `SolverError::NegativeCycle`.
pub fn seed_potentials(graph: &ResidualGraph, source: NodeId) -> SolverResult<Potentials> {
    let n = graph.node_count();
    let mut dist = vec![INF_COST; n];
    let mut hops = vec![0_usize; n];
    let mut on_queue = vec![false; n];
    let mut queue = VecDeque::new();

    dist[source.ix()] = 0;
    queue.push_back(source);
    on_queue[source.ix()] = true;

    while let Some(u) = queue.pop_front() {
        on_queue[u.ix()] = false;
        let du = dist[u.ix()];

        for &e in graph.edges_from(u) {
            if graph.residual(e) <= 0 {
                continue;
            }
            let v = graph.head(e);
            let dv = checked_distance(du, graph.cost(e), "initial potential")?;
            if dv < dist[v.ix()] {
                dist[v.ix()] = dv;
                hops[v.ix()] = hops[u.ix()] + 1;
                if hops[v.ix()] >= n {
                    warn!(node = v.index(), "negative-cost cycle reachable from source");
                    return Err(SolverError::NegativeCycle { node: v });
                }
                if !on_queue[v.ix()] {
                    queue.push_back(v);
                    on_queue[v.ix()] = true;
                }
            }
        }
    }

    Ok(Potentials { values: dist })
}

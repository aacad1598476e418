//! Residual graph invariant checks.
//!
//! These walk the whole graph and are meant for construction time,
//! tests, and the solver's `verify_invariants` mode.

use mcf_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::ResidualGraph;

/// Check that every half is linked to a consistent partner.
///
/// For each half `e` with partner `r`: `rev(r) == e`, endpoints are swapped,
/// costs are negated, residuals are non-negative, and the pair's total residual
/// equals its total capacity.
pub fn validate_pairing(graph: &ResidualGraph) -> GraphResult<()> {
    let edge_count = graph.edges.len();
    if edge_count % 2 != 0 {
        return Err(GraphError::BrokenPairing {
            edge: mcf_core::EdgeId::from_index((edge_count - 1) as u32),
        });
    }

    for (id, e) in graph.edges() {
        let Some(r) = graph.edge(e.rev) else {
            return Err(GraphError::BrokenPairing { edge: id });
        };
        let consistent = r.rev == id
            && r.from == e.to
            && r.to == e.from
            && r.cost.checked_neg() == Some(e.cost)
            && e.residual >= 0
            && e.residual + r.residual == e.capacity + r.capacity;
        if !consistent {
            return Err(GraphError::BrokenPairing { edge: id });
        }
    }

    for (i, list) in graph.adjacency.iter().enumerate() {
        for &e in list {
            match graph.edge(e) {
                Some(edge) if edge.from.ix() == i => {}
                Some(_) => return Err(GraphError::BrokenPairing { edge: e }),
                None => {
                    return Err(GraphError::EdgeOutOfRange {
                        edge: e,
                        edge_count,
                    });
                }
            }
        }
    }

    Ok(())
}

/// Check `0 <= flow <= capacity` on every caller-added edge.
pub fn validate_capacities(graph: &ResidualGraph) -> GraphResult<()> {
    for id in graph.forward_edges() {
        let flow = graph.flow(id);
        if flow < 0 || flow > graph.capacity(id) {
            return Err(GraphError::CapacityExceeded { edge: id, flow });
        }
    }
    Ok(())
}

/// Check that every node other than `source` and `sink` has zero net outflow.
pub fn validate_conservation(
    graph: &ResidualGraph,
    source: NodeId,
    sink: NodeId,
) -> GraphResult<()> {
    graph.check_node(source)?;
    graph.check_node(sink)?;

    for i in 0..graph.node_count() {
        let node = NodeId::from_index(i as u32);
        if node == source || node == sink {
            continue;
        }
        let excess = graph.net_outflow(node);
        if excess != 0 {
            return Err(GraphError::ConservationViolated { node, excess });
        }
    }

    Ok(())
}

/// Run every check; the flow must be a valid `source -> sink` flow.
pub fn validate_flow(graph: &ResidualGraph, source: NodeId, sink: NodeId) -> GraphResult<()> {
    validate_pairing(graph)?;
    validate_capacities(graph)?;
    validate_conservation(graph, source, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcf_core::Id;

    fn chain() -> ResidualGraph {
        let mut g = ResidualGraph::new(3);
        g.add_edge(Id::from_index(0), Id::from_index(1), 4, 1).unwrap();
        g.add_edge(Id::from_index(1), Id::from_index(2), 4, 1).unwrap();
        g
    }

    #[test]
    fn validate_empty_graph() {
        let g = ResidualGraph::new(0);
        assert!(validate_pairing(&g).is_ok());
        assert!(validate_capacities(&g).is_ok());
    }

    #[test]
    fn balanced_chain_flow_is_valid() {
        let mut g = chain();
        g.push_flow(Id::from_index(0), 3).unwrap();
        g.push_flow(Id::from_index(2), 3).unwrap();
        assert!(validate_flow(&g, Id::from_index(0), Id::from_index(2)).is_ok());
    }

    #[test]
    fn unbalanced_node_is_reported() {
        let mut g = chain();
        g.push_flow(Id::from_index(0), 3).unwrap();
        g.push_flow(Id::from_index(2), 1).unwrap();
        assert_eq!(
            validate_conservation(&g, Id::from_index(0), Id::from_index(2)),
            Err(GraphError::ConservationViolated {
                node: Id::from_index(1),
                excess: -2
            })
        );
    }

    #[test]
    fn tampered_pair_is_reported() {
        let mut g = chain();
        g.edges[1].cost = 5;
        assert!(matches!(
            validate_pairing(&g),
            Err(GraphError::BrokenPairing { .. })
        ));

        let mut g = chain();
        g.edges[0].residual = 7;
        assert!(validate_pairing(&g).is_err());
    }

    #[test]
    fn flow_above_capacity_is_reported() {
        let mut g = chain();
        // Corrupt the pair directly; push_flow can never produce this.
        g.edges[0].residual = 5;
        g.edges[1].residual = -1;
        assert!(matches!(
            validate_capacities(&g),
            Err(GraphError::CapacityExceeded { flow: -1, .. })
        ));
    }
}

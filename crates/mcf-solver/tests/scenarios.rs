//! End-to-end runs of the min-cost flow engine on hand-checked networks.

use mcf_core::{Id, NodeId};
use mcf_graph::{NetworkBuilder, ResidualGraph, validate};
use mcf_solver::{MinCostFlow, Phase, RunStatus, SolverConfig, SolverError};

fn n(i: u32) -> NodeId {
    Id::from_index(i)
}

#[test]
fn two_nodes_single_edge() {
    let mut g = ResidualGraph::new(2);
    g.add_edge(n(0), n(1), 5, 3).unwrap();

    let mut solver = MinCostFlow::new(g);
    let out = solver.run(n(0), n(1)).unwrap();

    assert_eq!(out.flow, 5);
    assert_eq!(out.cost, 15);
    assert_eq!(out.status, RunStatus::Converged);
}

#[test]
fn four_node_diamond() {
    // 0 -> 1 (2, 1), 0 -> 2 (3, 2), 1 -> 3 (3, 1), 2 -> 3 (2, 1)
    let mut g = ResidualGraph::new(4);
    g.add_edge(n(0), n(1), 2, 1).unwrap();
    g.add_edge(n(0), n(2), 3, 2).unwrap();
    g.add_edge(n(1), n(3), 3, 1).unwrap();
    g.add_edge(n(2), n(3), 2, 1).unwrap();

    let mut solver = MinCostFlow::new(g);
    let out = solver.run(n(0), n(3)).unwrap();

    // Two units at cost 2 through node 1, two units at cost 3 through node 2.
    assert_eq!(out.flow, 4);
    assert_eq!(out.cost, 10);
    assert!(validate::validate_flow(solver.graph(), n(0), n(3)).is_ok());
}

#[test]
fn reroutes_through_reverse_edge() {
    // Classic case where the first cheap path must be partly undone:
    // s -> a -> b -> t is cheapest, but max flow needs s -> b and a -> t.
    let mut b = NetworkBuilder::new();
    let s = b.add_node("s");
    let a = b.add_node("a");
    let m = b.add_node("b");
    let t = b.add_node("t");
    b.add_edge(s, a, 1, 1);
    b.add_edge(a, m, 1, 1);
    b.add_edge(m, t, 1, 1);
    b.add_edge(s, m, 1, 5);
    b.add_edge(a, t, 1, 5);
    let (graph, _) = b.build().unwrap();

    let mut solver = MinCostFlow::new(graph);
    let out = solver.run(s, t).unwrap();
    assert_eq!(out.flow, 2);
    // s-a-t (6) + s-b-t (6); the a->b edge ends up unused.
    assert_eq!(out.cost, 12);

    let flows = solver.graph().edge_flows();
    assert_eq!(flows[1].flow, 0, "a -> b is cancelled by the second augmentation");
    assert_eq!(out.augmentations, 2);
}

#[test]
fn negative_costs_without_cycles() {
    let mut g = ResidualGraph::new(3);
    g.add_edge(n(0), n(1), 2, -4).unwrap();
    g.add_edge(n(1), n(2), 2, 1).unwrap();
    g.add_edge(n(0), n(2), 3, 0).unwrap();

    let mut solver = MinCostFlow::new(g);
    let out = solver.run(n(0), n(2)).unwrap();
    assert_eq!(out.flow, 5);
    assert_eq!(out.cost, 2 * -3);
}

#[test]
fn reachable_negative_cycle_yields_error_not_numbers() {
    let mut g = ResidualGraph::new(4);
    g.add_edge(n(0), n(1), 3, 1).unwrap();
    g.add_edge(n(1), n(2), 3, -2).unwrap();
    g.add_edge(n(2), n(1), 3, -2).unwrap();
    g.add_edge(n(2), n(3), 3, 1).unwrap();

    let mut solver = MinCostFlow::new(g);
    let err = solver.run(n(0), n(3)).unwrap_err();
    assert!(matches!(err, SolverError::NegativeCycle { .. }));
    assert_eq!(solver.phase(), Phase::NegativeCycle);
    assert!(solver.path_trace().is_none());
}

#[test]
fn disconnected_sink_converges_with_zero_flow() {
    let mut g = ResidualGraph::new(3);
    g.add_edge(n(0), n(1), 4, 1).unwrap();

    let mut solver = MinCostFlow::new(g);
    let out = solver.run(n(0), n(2)).unwrap();
    assert_eq!((out.flow, out.cost), (0, 0));
    assert_eq!(out.status, RunStatus::Converged);
}

#[test]
fn super_source_reduction() {
    // Two sources (0, 1) feeding one sink (2) through a super-source.
    let mut g = ResidualGraph::new(3);
    g.add_edge(n(0), n(2), 2, 3).unwrap();
    g.add_edge(n(1), n(2), 2, 1).unwrap();
    let ss = g.add_node().unwrap();
    g.add_edge(ss, n(0), 1, 0).unwrap();
    g.add_edge(ss, n(1), 5, 0).unwrap();

    let mut solver = MinCostFlow::new(g);
    let out = solver.run(ss, n(2)).unwrap();
    assert_eq!(out.flow, 3);
    assert_eq!(out.cost, 3 + 2);
}

#[test]
fn flow_limit_zero_delivers_nothing() {
    let mut g = ResidualGraph::new(2);
    g.add_edge(n(0), n(1), 5, 3).unwrap();
    let mut solver = MinCostFlow::new(g);

    let cfg = SolverConfig::new().with_flow_limit(0);
    let out = solver.run_with(n(0), n(1), &cfg).unwrap();
    assert_eq!((out.flow, out.cost), (0, 0));
    assert_eq!(out.status, RunStatus::FlowLimitReached);
}

#[test]
fn invalid_config_is_rejected_before_running() {
    let mut g = ResidualGraph::new(2);
    g.add_edge(n(0), n(1), 5, 3).unwrap();
    let mut solver = MinCostFlow::new(g);

    let cfg = SolverConfig::new().with_flow_limit(-5);
    assert!(matches!(
        solver.run_with(n(0), n(1), &cfg),
        Err(SolverError::InvalidConfig { .. })
    ));
    assert_eq!(solver.phase(), Phase::Init);
}

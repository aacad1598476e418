//! Successive-shortest-path driver.
//!
//! One run walks the state machine
//! `Init -> PotentialSeeded -> Iterating -> {Converged | FlowLimitReached |
//! AugmentationLimitReached | NegativeCycle | Aborted}`.

use mcf_core::{Cost, EdgeId, Flow, INF_FLOW, NodeId, checked_add};
use mcf_graph::{ResidualGraph, validate};
use tracing::{debug, trace, warn};

use crate::augment::{Augmentation, augment};
use crate::config::SolverConfig;
use crate::dijkstra::{ShortestPaths, shortest_paths};
use crate::error::{SolverError, SolverResult};
use crate::potential::{Potentials, seed_potentials};

/// Where the driver currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Graph built, no run started (or the solver was reset).
    Init,
    /// Initial potentials computed, no augmentation yet.
    PotentialSeeded,
    /// Inside the augmentation loop.
    Iterating,
    /// No augmenting path remains: maximum flow at minimum cost.
    Converged,
    /// The requested flow limit was delivered.
    FlowLimitReached,
    /// The per-run augmentation cap was hit.
    AugmentationLimitReached,
    /// Seeding found a negative cycle; the totals are not meaningful.
    NegativeCycle,
    /// An error interrupted the augmentation loop. The graph may hold flow the
    /// totals do not account for; only `reset()` leaves this phase.
    Aborted,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunStatus {
    Converged,
    FlowLimitReached,
    AugmentationLimitReached,
}

impl From<RunStatus> for Phase {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Converged => Phase::Converged,
            RunStatus::FlowLimitReached => Phase::FlowLimitReached,
            RunStatus::AugmentationLimitReached => Phase::AugmentationLimitReached,
        }
    }
}

/// Totals after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowOutcome {
    /// Total flow delivered by this solver so far.
    pub flow: Flow,
    /// Total cost of that flow.
    pub cost: Cost,
    pub status: RunStatus,
    /// Augmentations performed during this run.
    pub augmentations: usize,
}

/// The last augmenting path, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathTrace {
    /// Nodes from source to sink.
    pub nodes: Vec<NodeId>,
    /// Residual edges used (forward or reverse halves).
    pub edges: Vec<EdgeId>,
    pub delta: Flow,
    pub unit_cost: Cost,
}

impl PathTrace {
    fn from_augmentation(graph: &ResidualGraph, source: NodeId, aug: &Augmentation) -> Self {
        let mut nodes = Vec::with_capacity(aug.edges.len() + 1);
        nodes.push(source);
        nodes.extend(aug.edges.iter().map(|&e| graph.head(e)));
        Self {
            nodes,
            edges: aug.edges.clone(),
            delta: aug.delta,
            unit_cost: aug.unit_cost,
        }
    }
}

/// Min-cost flow engine owning its residual graph.
#[derive(Debug, Clone)]
pub struct MinCostFlow {
    graph: ResidualGraph,
    potentials: Option<Potentials>,
    paths: ShortestPaths,
    total_flow: Flow,
    total_cost: Cost,
    phase: Phase,
    last_path: Option<PathTrace>,
}

impl MinCostFlow {
    pub fn new(graph: ResidualGraph) -> Self {
        let paths = ShortestPaths::new(graph.node_count());
        Self {
            graph,
            potentials: None,
            paths,
            total_flow: 0,
            total_cost: 0,
            phase: Phase::Init,
            last_path: None,
        }
    }

    pub fn graph(&self) -> &ResidualGraph {
        &self.graph
    }

    pub fn into_graph(self) -> ResidualGraph {
        self.graph
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn total_flow(&self) -> Flow {
        self.total_flow
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Potentials left by the latest run.
    pub fn potentials(&self) -> Option<&Potentials> {
        self.potentials.as_ref()
    }

    /// The most recent augmenting path, if any augmentation happened.
    pub fn path_trace(&self) -> Option<&PathTrace> {
        self.last_path.as_ref()
    }

    /// Drop all flow and totals; the topology is kept.
    pub fn reset(&mut self) {
        self.graph.reset_flow();
        self.potentials = None;
        self.total_flow = 0;
        self.total_cost = 0;
        self.phase = Phase::Init;
        self.last_path = None;
    }

    /// Run to maximum flow with default configuration.
    pub fn run(&mut self, source: NodeId, sink: NodeId) -> SolverResult<FlowOutcome> {
        self.run_with(source, sink, &SolverConfig::default())
    }

    /// Push flow from `source` to `sink` until no augmenting path remains or a limit is hit.
    ///
    /// Totals accumulate across runs, and `flow_limit` caps the cumulative flow,
    /// so a second run with a larger limit continues along the same min-cost curve.
    pub fn run_with(
        &mut self,
        source: NodeId,
        sink: NodeId,
        config: &SolverConfig,
    ) -> SolverResult<FlowOutcome> {
        if self.phase == Phase::Aborted {
            return Err(SolverError::Aborted);
        }
        config.validate()?;
        self.check_terminals(source, sink)?;
        let limit = config.flow_limit.unwrap_or(INF_FLOW);

        self.phase = Phase::Init;
        debug!(
            source = source.index(),
            sink = sink.index(),
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count() / 2,
            "starting min-cost flow run"
        );

        let mut potentials = match seed_potentials(&self.graph, source) {
            Ok(p) => p,
            Err(err) => {
                if matches!(err, SolverError::NegativeCycle { .. }) {
                    self.phase = Phase::NegativeCycle;
                }
                self.potentials = None;
                return Err(err);
            }
        };
        self.phase = Phase::PotentialSeeded;

        let mut augmentations = 0_usize;
        let status = match self.augment_until_done(
            source,
            sink,
            config,
            limit,
            &mut potentials,
            &mut augmentations,
        ) {
            Ok(status) => status,
            Err(err) => {
                warn!(augmentations, error = %err, "min-cost flow run aborted");
                self.phase = Phase::Aborted;
                self.potentials = None;
                return Err(err);
            }
        };

        self.potentials = Some(potentials);
        self.phase = status.into();
        debug!(
            ?status,
            flow = self.total_flow,
            cost = self.total_cost,
            augmentations,
            "min-cost flow run finished"
        );

        Ok(FlowOutcome {
            flow: self.total_flow,
            cost: self.total_cost,
            status,
            augmentations,
        })
    }

    fn augment_until_done(
        &mut self,
        source: NodeId,
        sink: NodeId,
        config: &SolverConfig,
        limit: Flow,
        potentials: &mut Potentials,
        augmentations: &mut usize,
    ) -> SolverResult<RunStatus> {
        loop {
            self.phase = Phase::Iterating;

            if self.total_flow >= limit {
                return Ok(RunStatus::FlowLimitReached);
            }
            if config.max_augmentations.is_some_and(|max| *augmentations >= max) {
                return Ok(RunStatus::AugmentationLimitReached);
            }
            if !shortest_paths(&self.graph, potentials, source, sink, &mut self.paths)? {
                return Ok(RunStatus::Converged);
            }

            let aug = augment(
                &mut self.graph,
                &self.paths,
                potentials,
                source,
                sink,
                limit - self.total_flow,
            )?;
            self.total_flow = checked_add(self.total_flow, aug.delta, "total flow")?;
            self.total_cost = checked_add(self.total_cost, aug.cost, "total cost")?;
            *augmentations += 1;

            trace!(
                round = *augmentations,
                delta = aug.delta,
                unit_cost = aug.unit_cost,
                path_len = aug.edges.len(),
                "augmented"
            );

            if config.verify_invariants {
                validate::validate_flow(&self.graph, source, sink)?;
            }

            self.last_path = Some(PathTrace::from_augmentation(&self.graph, source, &aug));
        }
    }

    fn check_terminals(&self, source: NodeId, sink: NodeId) -> SolverResult<()> {
        let node_count = self.graph.node_count();
        if source == sink || !self.graph.contains_node(source) || !self.graph.contains_node(sink) {
            return Err(SolverError::InvalidTerminals {
                source_node: source,
                sink_node: sink,
                node_count,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcf_core::Id;

    fn n(i: u32) -> NodeId {
        Id::from_index(i)
    }

    fn diamond() -> ResidualGraph {
        let mut g = ResidualGraph::new(4);
        g.add_edge(n(0), n(1), 2, 1).unwrap();
        g.add_edge(n(0), n(2), 3, 2).unwrap();
        g.add_edge(n(1), n(3), 3, 1).unwrap();
        g.add_edge(n(2), n(3), 2, 1).unwrap();
        g
    }

    #[test]
    fn single_edge() {
        let mut g = ResidualGraph::new(2);
        g.add_edge(n(0), n(1), 5, 3).unwrap();
        let mut solver = MinCostFlow::new(g);

        assert_eq!(solver.phase(), Phase::Init);
        let out = solver.run(n(0), n(1)).unwrap();
        assert_eq!(out.flow, 5);
        assert_eq!(out.cost, 15);
        assert_eq!(out.status, RunStatus::Converged);
        assert_eq!(out.augmentations, 1);
        assert_eq!(solver.phase(), Phase::Converged);
    }

    #[test]
    fn diamond_uses_both_routes() {
        let mut solver = MinCostFlow::new(diamond());
        let out = solver.run(n(0), n(3)).unwrap();
        // 2 units via 0-1-3 at 2 each, 2 units via 0-2-3 at 3 each.
        assert_eq!(out.flow, 4);
        assert_eq!(out.cost, 10);
        assert_eq!(out.augmentations, 2);
    }

    #[test]
    fn flow_limit_stops_early() {
        let mut solver = MinCostFlow::new(diamond());
        let cfg = SolverConfig::new().with_flow_limit(3);
        let out = solver.run_with(n(0), n(3), &cfg).unwrap();
        assert_eq!(out.flow, 3);
        assert_eq!(out.cost, 2 * 2 + 3);
        assert_eq!(out.status, RunStatus::FlowLimitReached);
        assert_eq!(solver.phase(), Phase::FlowLimitReached);

        // Raising the limit continues from where the first run stopped.
        let out = solver.run(n(0), n(3)).unwrap();
        assert_eq!((out.flow, out.cost), (4, 10));
        assert_eq!(out.status, RunStatus::Converged);
    }

    #[test]
    fn augmentation_cap_stops_early() {
        let mut solver = MinCostFlow::new(diamond());
        let cfg = SolverConfig::new().with_max_augmentations(1);
        let out = solver.run_with(n(0), n(3), &cfg).unwrap();
        assert_eq!(out.status, RunStatus::AugmentationLimitReached);
        assert_eq!((out.flow, out.cost), (2, 4));
    }

    #[test]
    fn second_run_after_convergence_is_a_no_op() {
        let mut solver = MinCostFlow::new(diamond());
        let first = solver.run(n(0), n(3)).unwrap();
        let residuals: Vec<Flow> = solver.graph().edges().map(|(_, e)| e.residual).collect();

        let second = solver.run(n(0), n(3)).unwrap();
        assert_eq!((second.flow, second.cost), (first.flow, first.cost));
        assert_eq!(second.status, RunStatus::Converged);
        assert_eq!(second.augmentations, 0);
        let after: Vec<Flow> = solver.graph().edges().map(|(_, e)| e.residual).collect();
        assert_eq!(residuals, after);
    }

    #[test]
    fn negative_cycle_is_an_error() {
        let mut g = ResidualGraph::new(4);
        g.add_edge(n(0), n(1), 1, 0).unwrap();
        g.add_edge(n(1), n(2), 1, -3).unwrap();
        g.add_edge(n(2), n(1), 1, 1).unwrap();
        g.add_edge(n(2), n(3), 1, 0).unwrap();
        let mut solver = MinCostFlow::new(g);

        let err = solver.run(n(0), n(3)).unwrap_err();
        assert!(matches!(err, SolverError::NegativeCycle { .. }));
        assert_eq!(solver.phase(), Phase::NegativeCycle);
        assert_eq!(solver.total_flow(), 0);
    }

    #[test]
    fn invalid_terminals_are_rejected() {
        let mut solver = MinCostFlow::new(diamond());
        assert!(matches!(
            solver.run(n(0), n(0)),
            Err(SolverError::InvalidTerminals { .. })
        ));
        assert!(matches!(
            solver.run(n(0), n(9)),
            Err(SolverError::InvalidTerminals { .. })
        ));
    }

    #[test]
    fn path_trace_reports_last_path() {
        let mut solver = MinCostFlow::new(diamond());
        assert!(solver.path_trace().is_none());
        solver.run(n(0), n(3)).unwrap();

        let trace = solver.path_trace().unwrap();
        assert_eq!(trace.nodes, vec![n(0), n(2), n(3)]);
        assert_eq!(trace.delta, 2);
        assert_eq!(trace.unit_cost, 3);
    }

    #[test]
    fn reset_clears_flow() {
        let mut solver = MinCostFlow::new(diamond());
        solver.run(n(0), n(3)).unwrap();
        solver.reset();
        assert_eq!(solver.phase(), Phase::Init);
        assert_eq!(solver.total_flow(), 0);
        assert!(solver.graph().edge_flows().iter().all(|f| f.flow == 0));

        let out = solver.run(n(0), n(3)).unwrap();
        assert_eq!((out.flow, out.cost), (4, 10));
    }

    #[test]
    fn cost_overflow_leaves_graph_untouched_and_aborts() {
        let mut g = ResidualGraph::new(2);
        let e = g.add_edge(n(0), n(1), 3, Cost::MAX / 2).unwrap();
        let mut solver = MinCostFlow::new(g);

        let err = solver.run(n(0), n(1)).unwrap_err();
        assert!(matches!(
            err,
            SolverError::Core(mcf_core::McfError::Overflow { .. })
        ));
        assert_eq!(solver.phase(), Phase::Aborted);
        assert_eq!((solver.total_flow(), solver.total_cost()), (0, 0));
        assert_eq!(solver.graph().flow(e), 0);

        assert_eq!(solver.run(n(0), n(1)), Err(SolverError::Aborted));

        solver.reset();
        assert_eq!(solver.phase(), Phase::Init);
        let cfg = SolverConfig::new().with_flow_limit(1);
        let out = solver.run_with(n(0), n(1), &cfg).unwrap();
        assert_eq!((out.flow, out.cost), (1, Cost::MAX / 2));
    }

    #[test]
    fn total_cost_overflow_refuses_further_runs() {
        // Each unit fits on its own; the second one overflows the running total.
        let unit = Cost::MAX / 2 + 1;
        let mut g = ResidualGraph::new(2);
        g.add_edge(n(0), n(1), 1, unit).unwrap();
        g.add_edge(n(0), n(1), 1, unit).unwrap();
        let mut solver = MinCostFlow::new(g);

        let err = solver.run(n(0), n(1)).unwrap_err();
        assert_eq!(
            err,
            SolverError::Core(mcf_core::McfError::Overflow { what: "total cost" })
        );
        assert_eq!(solver.phase(), Phase::Aborted);
        assert!(solver.potentials().is_none());
        assert_eq!(solver.run(n(0), n(1)), Err(SolverError::Aborted));

        solver.reset();
        let cfg = SolverConfig::new().with_max_augmentations(1);
        let out = solver.run_with(n(0), n(1), &cfg).unwrap();
        assert_eq!((out.flow, out.cost), (1, unit));
    }

    #[test]
    fn verification_mode_runs_clean() {
        let mut solver = MinCostFlow::new(diamond());
        let cfg = SolverConfig::new().with_verification(true);
        assert!(solver.run_with(n(0), n(3), &cfg).is_ok());
    }
}

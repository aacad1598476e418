//! Lowering a validated problem into the solver's graph.

use mcf_core::{Flow, NodeId};
use mcf_graph::{NetworkBuilder, NodeLabels, ResidualGraph};
use mcf_solver::SolverConfig;

use crate::ProblemResult;
use crate::schema::ProblemDef;

/// A problem ready to hand to the solver.
#[derive(Debug, Clone)]
pub struct Network {
    pub graph: ResidualGraph,
    pub labels: NodeLabels,
    pub source: NodeId,
    pub sink: NodeId,
    pub flow_limit: Option<Flow>,
}

impl Network {
    /// Solver configuration carrying the problem's own settings.
    pub fn config(&self) -> SolverConfig {
        SolverConfig {
            flow_limit: self.flow_limit,
            ..SolverConfig::default()
        }
    }
}

impl ProblemDef {
    /// Build the residual graph; nodes are numbered in file order.
    pub fn to_network(&self) -> ProblemResult<Network> {
        let mut builder = NetworkBuilder::new();
        for label in &self.nodes {
            builder.add_node(label.as_str());
        }
        for edge in &self.edges {
            builder.add_edge_between(&edge.from, &edge.to, edge.capacity, edge.cost)?;
        }
        let (graph, labels) = builder.build()?;
        let source = labels.id(&self.source)?;
        let sink = labels.id(&self.sink)?;

        Ok(Network {
            graph,
            labels,
            source,
            sink,
            flow_limit: self.flow_limit,
        })
    }
}

//! Error types for solver operations.

use mcf_core::{McfError, NodeId};
use mcf_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while running the flow engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Negative-cost cycle reachable from the source (through node {node})")]
    NegativeCycle { node: NodeId },

    #[error("Invalid terminals: source {source_node}, sink {sink_node} (graph has {node_count} nodes)")]
    InvalidTerminals {
        source_node: NodeId,
        sink_node: NodeId,
        node_count: usize,
    },

    #[error("A previous run was aborted mid-augmentation; reset the solver before running again")]
    Aborted,

    #[error("Invalid solver configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] McfError),
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for McfError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::NegativeCycle { node } => McfError::NegativeCycle { node: node.ix() },
            SolverError::InvalidTerminals { .. } | SolverError::InvalidConfig { .. } => {
                McfError::InvalidArg {
                    what: e.to_string(),
                }
            }
            SolverError::Aborted => McfError::Invariant {
                what: e.to_string(),
            },
            SolverError::Graph(g) => g.into(),
            SolverError::Core(c) => c,
        }
    }
}

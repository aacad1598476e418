//! Graph-specific error types.

use mcf_core::{Cost, EdgeId, Flow, McfError, NodeId};

pub type GraphResult<T> = Result<T, GraphError>;

/// Residual graph construction, mutation and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A node id does not belong to the graph.
    NodeOutOfRange { node: NodeId, node_count: usize },

    /// An edge id does not belong to the graph.
    EdgeOutOfRange { edge: EdgeId, edge_count: usize },

    /// Edges must be added with a non-negative capacity.
    NegativeCapacity {
        from: NodeId,
        to: NodeId,
        capacity: Flow,
    },

    /// The reverse half would need `-cost`, which does not fit in an `i64`.
    UnrepresentableCost { from: NodeId, to: NodeId, cost: Cost },

    /// `push_flow` asked for more than the edge's residual capacity (or a negative amount).
    CapacityViolation {
        edge: EdgeId,
        requested: Flow,
        available: Flow,
    },

    /// An edge and its reverse do not point at each other, or disagree on endpoints/cost.
    BrokenPairing { edge: EdgeId },

    /// Flow on an edge is outside `[0, capacity]`.
    CapacityExceeded { edge: EdgeId, flow: Flow },

    /// An intermediate node does not conserve flow.
    ConservationViolated { node: NodeId, excess: Flow },

    /// A node label was not found.
    UnknownLabel { label: String },

    /// The same node label was registered twice.
    DuplicateLabel { label: String },

    /// The graph would exceed the id space.
    TooLarge { what: &'static str },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::NodeOutOfRange { node, node_count } => {
                write!(f, "Node {} out of range (graph has {} nodes)", node, node_count)
            }
            GraphError::EdgeOutOfRange { edge, edge_count } => {
                write!(f, "Edge {} out of range (graph has {} edges)", edge, edge_count)
            }
            GraphError::NegativeCapacity { from, to, capacity } => {
                write!(
                    f,
                    "Edge {} -> {} has negative capacity {}",
                    from, to, capacity
                )
            }
            GraphError::UnrepresentableCost { from, to, cost } => {
                write!(
                    f,
                    "Edge {} -> {} has cost {} with no negated counterpart",
                    from, to, cost
                )
            }
            GraphError::CapacityViolation {
                edge,
                requested,
                available,
            } => {
                write!(
                    f,
                    "Cannot push {} units on edge {} (residual capacity {})",
                    requested, edge, available
                )
            }
            GraphError::BrokenPairing { edge } => {
                write!(f, "Edge {} is not consistently paired with its reverse", edge)
            }
            GraphError::CapacityExceeded { edge, flow } => {
                write!(f, "Edge {} carries flow {} outside its capacity", edge, flow)
            }
            GraphError::ConservationViolated { node, excess } => {
                write!(f, "Node {} has net outflow {} (expected 0)", node, excess)
            }
            GraphError::UnknownLabel { label } => {
                write!(f, "Unknown node label '{}'", label)
            }
            GraphError::DuplicateLabel { label } => {
                write!(f, "Duplicate node label '{}'", label)
            }
            GraphError::TooLarge { what } => {
                write!(f, "Too many {} for 32-bit ids", what)
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl From<GraphError> for McfError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::NodeOutOfRange { node, node_count } => McfError::IndexOob {
                what: "node",
                index: node.ix(),
                len: node_count,
            },
            GraphError::EdgeOutOfRange { edge, edge_count } => McfError::IndexOob {
                what: "edge",
                index: edge.ix(),
                len: edge_count,
            },
            GraphError::NegativeCapacity { .. }
            | GraphError::UnrepresentableCost { .. }
            | GraphError::UnknownLabel { .. }
            | GraphError::DuplicateLabel { .. }
            | GraphError::TooLarge { .. } => McfError::InvalidArg {
                what: err.to_string(),
            },
            _ => McfError::Invariant {
                what: err.to_string(),
            },
        }
    }
}


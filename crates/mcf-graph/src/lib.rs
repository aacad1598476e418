//! mcf-graph: residual graph layer for the min-cost flow engine.
//!
//! Provides:
//! - The residual graph store (paired forward/reverse edges in an index arena)
//! - A labelled network builder
//! - Name <-> node indexing for problem files and reports
//! - Residual invariant checks (pairing, capacities, conservation)
//!
//! # Example
//!
//! ```
//! use mcf_graph::ResidualGraph;
//! use mcf_core::NodeId;
//!
//! let mut graph = ResidualGraph::new(2);
//! let (s, t) = (NodeId::from_index(0), NodeId::from_index(1));
//! let e = graph.add_edge(s, t, 5, 3).unwrap();
//!
//! assert_eq!(graph.residual(e), 5);
//! assert_eq!(graph.residual(graph.reverse(e)), 0);
//! assert_eq!(graph.cost(graph.reverse(e)), -3);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod indexing;
pub mod validate;

pub use builder::NetworkBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{EdgeFlow, ResidualEdge, ResidualGraph};
pub use indexing::NodeLabels;

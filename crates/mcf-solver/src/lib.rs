//! Minimum-cost maximum-flow solver.
//!
//! Successive shortest augmenting paths with Johnson potentials: one
//! Bellman-Ford style pass seeds the potentials (tolerating negative costs),
//! then every augmentation runs Dijkstra over reduced costs, pushes the
//! bottleneck along the path and folds the distances back into the potentials.
//!
//! ```
//! use mcf_core::NodeId;
//! use mcf_graph::ResidualGraph;
//! use mcf_solver::{MinCostFlow, RunStatus};
//!
//! let mut graph = ResidualGraph::new(2);
//! let (s, t) = (NodeId::from_index(0), NodeId::from_index(1));
//! graph.add_edge(s, t, 5, 3).unwrap();
//!
//! let mut solver = MinCostFlow::new(graph);
//! let outcome = solver.run(s, t).unwrap();
//! assert_eq!((outcome.flow, outcome.cost), (5, 15));
//! assert_eq!(outcome.status, RunStatus::Converged);
//! ```

pub mod assignment;
pub mod augment;
pub mod config;
pub mod dijkstra;
pub mod driver;
pub mod error;
pub mod potential;

pub use assignment::{Assignment, Objective, solve_assignment, solve_assignment_sparse};
pub use augment::Augmentation;
pub use config::SolverConfig;
pub use dijkstra::ShortestPaths;
pub use driver::{FlowOutcome, MinCostFlow, PathTrace, Phase, RunStatus};
pub use error::{SolverError, SolverResult};
pub use potential::{Potentials, seed_potentials};

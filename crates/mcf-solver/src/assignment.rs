//! Bipartite assignment on top of the flow engine.
//!
//! Rows and columns become the two sides of a unit-capacity network between a
//! super-source and a super-sink. The engine maximises the number of matched
//! pairs first and optimises the total weight among those matchings.

use mcf_core::{Cost, Flow, NodeId};
use mcf_graph::ResidualGraph;
use tracing::debug;

use crate::driver::MinCostFlow;
use crate::error::{SolverError, SolverResult};

/// Whether pair weights are costs or profits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    #[default]
    Minimize,
    Maximize,
}

/// Chosen `(row, column)` pairs, sorted by row, and their total weight.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub pairs: Vec<(usize, usize)>,
    pub total: Cost,
}

/// Assign rows to columns of a dense weight matrix.
///
/// Matrices may be rectangular; every row must have the same length.
pub fn solve_assignment(weights: &[Vec<Cost>], objective: Objective) -> SolverResult<Assignment> {
    let rows = weights.len();
    let cols = weights.first().map_or(0, Vec::len);
    if let Some(bad) = weights.iter().position(|row| row.len() != cols) {
        return Err(SolverError::InvalidConfig {
            what: format!(
                "row {bad} has {} entries, expected {cols}",
                weights[bad].len()
            ),
        });
    }

    let entries: Vec<(usize, usize, Cost)> = weights
        .iter()
        .enumerate()
        .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, &w)| (r, c, w)))
        .collect();
    solve_assignment_sparse(rows, cols, &entries, objective)
}

/// Assign rows to columns using only the listed `(row, column, weight)` pairs.
pub fn solve_assignment_sparse(
    rows: usize,
    cols: usize,
    entries: &[(usize, usize, Cost)],
    objective: Objective,
) -> SolverResult<Assignment> {
    let node = |i: usize| {
        NodeId::try_from_usize(i).ok_or_else(|| SolverError::InvalidConfig {
            what: format!("assignment of size {rows}x{cols} is too large"),
        })
    };
    let source = node(rows + cols)?;
    let sink = node(rows + cols + 1)?;

    let mut graph = ResidualGraph::with_capacity(rows + cols + 2, rows + cols + entries.len());
    for r in 0..rows {
        graph.add_edge(source, node(r)?, 1, 0)?;
    }
    for c in 0..cols {
        graph.add_edge(node(rows + c)?, sink, 1, 0)?;
    }

    let mut pair_edges = Vec::with_capacity(entries.len());
    for &(r, c, w) in entries {
        if r >= rows || c >= cols {
            return Err(SolverError::InvalidConfig {
                what: format!("entry ({r}, {c}) outside {rows}x{cols}"),
            });
        }
        let cost = match objective {
            Objective::Minimize => w,
            Objective::Maximize => w.checked_neg().ok_or_else(|| SolverError::InvalidConfig {
                what: format!("weight {w} cannot be negated"),
            })?,
        };
        let e = graph.add_edge(node(r)?, node(rows + c)?, 1, cost)?;
        pair_edges.push((e, r, c));
    }

    let mut solver = MinCostFlow::new(graph);
    let outcome = solver.run(source, sink)?;

    let graph = solver.graph();
    let mut pairs: Vec<(usize, usize)> = pair_edges
        .iter()
        .filter(|&&(e, _, _)| graph.flow(e) > 0)
        .map(|&(_, r, c)| (r, c))
        .collect();
    pairs.sort_unstable();

    let total = match objective {
        Objective::Minimize => outcome.cost,
        Objective::Maximize => -outcome.cost,
    };
    debug!(
        rows,
        cols,
        matched = pairs.len(),
        total,
        "assignment solved"
    );
    debug_assert_eq!(pairs.len() as Flow, outcome.flow);

    Ok(Assignment { pairs, total })
}

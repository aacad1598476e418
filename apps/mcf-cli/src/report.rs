//! CLI errors and result reports.

use mcf_core::{Cost, Flow, NodeId};
use mcf_graph::{EdgeFlow, NodeLabels};
use mcf_solver::{Assignment, FlowOutcome, Objective, RunStatus};
use serde::Serialize;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Problem(#[from] mcf_problem::ProblemError),

    #[error("Solver error: {0}")]
    Solver(#[from] mcf_solver::SolverError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct EdgeReport {
    pub from: String,
    pub to: String,
    pub capacity: Flow,
    pub flow: Flow,
    pub cost: Cost,
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub source: String,
    pub sink: String,
    pub flow: Flow,
    pub cost: Cost,
    pub status: RunStatus,
    pub augmentations: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<EdgeReport>>,
}

impl SolveReport {
    pub fn new(
        name: Option<String>,
        labels: &NodeLabels,
        source: NodeId,
        sink: NodeId,
        outcome: &FlowOutcome,
        flows: Option<Vec<EdgeFlow>>,
    ) -> Self {
        let edges = flows.map(|flows| {
            flows
                .into_iter()
                .map(|f| EdgeReport {
                    from: labels.display(f.from),
                    to: labels.display(f.to),
                    capacity: f.capacity,
                    flow: f.flow,
                    cost: f.cost,
                })
                .collect()
        });

        Self {
            name,
            source: labels.display(source),
            sink: labels.display(sink),
            flow: outcome.flow,
            cost: outcome.cost,
            status: outcome.status,
            augmentations: outcome.augmentations,
            edges,
        }
    }

    pub fn print_text(&self) {
        if let Some(name) = &self.name {
            println!("Problem: {}", name);
        }
        println!("{} -> {}", self.source, self.sink);
        println!("  Flow:          {}", self.flow);
        println!("  Cost:          {}", self.cost);
        println!("  Status:        {:?}", self.status);
        println!("  Augmentations: {}", self.augmentations);

        if let Some(edges) = &self.edges {
            println!("\n{:<12} {:<12} {:>8} {:>8} {:>8}", "from", "to", "flow", "cap", "cost");
            for e in edges {
                println!(
                    "{:<12} {:<12} {:>8} {:>8} {:>8}",
                    e.from, e.to, e.flow, e.capacity, e.cost
                );
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssignmentReport {
    pub objective: Objective,
    pub pairs: Vec<(usize, usize)>,
    pub total: Cost,
}

impl AssignmentReport {
    pub fn new(objective: Objective, assignment: &Assignment) -> Self {
        Self {
            objective,
            pairs: assignment.pairs.clone(),
            total: assignment.total,
        }
    }

    pub fn print_text(&self) {
        println!("Objective: {:?}", self.objective);
        println!("Matched:   {}", self.pairs.len());
        println!("Total:     {}", self.total);
        for (row, col) in &self.pairs {
            println!("  row {} -> col {}", row, col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_report_uses_labels() {
        let labels = NodeLabels::from_labels(["s", "t"]).unwrap();
        let outcome = FlowOutcome {
            flow: 5,
            cost: 15,
            status: RunStatus::Converged,
            augmentations: 1,
        };
        let flows = vec![EdgeFlow {
            edge: mcf_core::EdgeId::from_index(0),
            from: NodeId::from_index(0),
            to: NodeId::from_index(1),
            capacity: 5,
            flow: 5,
            cost: 3,
        }];
        let report = SolveReport::new(
            None,
            &labels,
            NodeId::from_index(0),
            NodeId::from_index(1),
            &outcome,
            Some(flows),
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["source"], "s");
        assert_eq!(json["status"], "Converged");
        assert_eq!(json["edges"][0]["to"], "t");
        assert!(json.get("name").is_none());
    }
}

//! Problem validation logic.

use std::collections::HashSet;

use crate::schema::{AssignmentDef, ProblemDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Duplicate node: {id}")]
    DuplicateNode { id: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub fn validate_problem(problem: &ProblemDef) -> Result<(), ValidationError> {
    let mut nodes = HashSet::new();
    for id in &problem.nodes {
        if !nodes.insert(id.as_str()) {
            return Err(ValidationError::DuplicateNode { id: id.clone() });
        }
    }

    for (context, id) in [("source", &problem.source), ("sink", &problem.sink)] {
        if !nodes.contains(id.as_str()) {
            return Err(ValidationError::MissingReference {
                id: id.clone(),
                context: context.to_string(),
            });
        }
    }
    if problem.source == problem.sink {
        return Err(ValidationError::InvalidValue {
            field: "sink".to_string(),
            value: problem.sink.clone(),
            reason: "must differ from source".to_string(),
        });
    }

    for (i, edge) in problem.edges.iter().enumerate() {
        for id in [&edge.from, &edge.to] {
            if !nodes.contains(id.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: id.clone(),
                    context: format!("edges[{i}]"),
                });
            }
        }
        if edge.capacity < 0 {
            return Err(ValidationError::InvalidValue {
                field: format!("edges[{i}].capacity"),
                value: edge.capacity.to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
    }

    if let Some(limit) = problem.flow_limit {
        if limit < 0 {
            return Err(ValidationError::InvalidValue {
                field: "flow_limit".to_string(),
                value: limit.to_string(),
                reason: "must be non-negative".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_assignment(assignment: &AssignmentDef) -> Result<(), ValidationError> {
    let cols = assignment.costs.first().map_or(0, Vec::len);
    for (i, row) in assignment.costs.iter().enumerate() {
        if row.len() != cols {
            return Err(ValidationError::InvalidValue {
                field: format!("costs[{i}]"),
                value: format!("{} entries", row.len()),
                reason: format!("expected {cols} entries like the first row"),
            });
        }
    }
    Ok(())
}

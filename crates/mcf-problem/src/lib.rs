//! mcf-problem: problem file format, validation and lowering to a residual graph.

pub mod lower;
pub mod schema;
pub mod validate;

pub use lower::Network;
pub use schema::*;
pub use validate::{ValidationError, validate_assignment, validate_problem};

use std::path::Path;

pub type ProblemResult<T> = Result<T, ProblemError>;

#[derive(thiserror::Error, Debug)]
pub enum ProblemError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] mcf_graph::GraphError),

    #[error("Unsupported file format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> ProblemResult<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(ProblemError::UnsupportedFormat {
            path: path.display().to_string(),
        }),
    }
}

fn parse<T: serde::de::DeserializeOwned>(path: &Path) -> ProblemResult<T> {
    let format = format_of(path)?;
    let content = std::fs::read_to_string(path)?;
    Ok(match format {
        Format::Yaml => serde_yaml::from_str(&content)?,
        Format::Json => serde_json::from_str(&content)?,
    })
}

/// Load and validate a flow problem; the format follows the file extension.
pub fn load_problem(path: &Path) -> ProblemResult<ProblemDef> {
    let problem: ProblemDef = parse(path)?;
    validate_problem(&problem)?;
    Ok(problem)
}

/// Load and validate an assignment problem.
pub fn load_assignment(path: &Path) -> ProblemResult<AssignmentDef> {
    let assignment: AssignmentDef = parse(path)?;
    validate_assignment(&assignment)?;
    Ok(assignment)
}

pub fn save_problem(path: &Path, problem: &ProblemDef) -> ProblemResult<()> {
    validate_problem(problem)?;
    let content = match format_of(path)? {
        Format::Yaml => serde_yaml::to_string(problem)?,
        Format::Json => serde_json::to_string_pretty(problem)?,
    };
    std::fs::write(path, content)?;
    Ok(())
}

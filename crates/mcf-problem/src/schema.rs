//! Problem file schema.

use serde::{Deserialize, Serialize};

/// A single-source, single-sink flow problem over labelled nodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub nodes: Vec<String>,
    pub source: String,
    pub sink: String,
    #[serde(default)]
    pub edges: Vec<EdgeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EdgeDef {
    pub from: String,
    pub to: String,
    pub capacity: i64,
    #[serde(default)]
    pub cost: i64,
}

/// A dense bipartite assignment problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignmentDef {
    /// `costs[row][col]`; rows must all have the same length.
    pub costs: Vec<Vec<i64>>,
    /// Treat the entries as profits.
    #[serde(default)]
    pub maximize: bool,
}

//! Stable naming for problem files and reports.
//!
//! Provides a bidirectional mapping between human-readable node labels
//! and the contiguous node ids (0..N) the solver works with.

use std::collections::HashMap;

use mcf_core::NodeId;

use crate::error::{GraphError, GraphResult};

/// Label map providing O(1) lookup in both directions.
#[derive(Debug, Clone, Default)]
pub struct NodeLabels {
    /// Contiguous list of labels (index -> label).
    labels: Vec<String>,

    /// Reverse lookup: label -> NodeId.
    by_label: HashMap<String, NodeId>,
}

impl NodeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a label map; the i-th label names node `i`.
    pub fn from_labels<I, S>(labels: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = Self::new();
        for label in labels {
            map.insert(label.into())?;
        }
        Ok(map)
    }

    /// Register the next node under `label`.
    pub fn insert(&mut self, label: String) -> GraphResult<NodeId> {
        if self.by_label.contains_key(&label) {
            return Err(GraphError::DuplicateLabel { label });
        }
        let id = NodeId::try_from_usize(self.labels.len())
            .ok_or(GraphError::TooLarge { what: "nodes" })?;
        self.by_label.insert(label.clone(), id);
        self.labels.push(label);
        Ok(id)
    }

    /// Number of labelled nodes.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Look up a node by label.
    pub fn get(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    /// Look up a node by label, failing with `UnknownLabel`.
    pub fn id(&self, label: &str) -> GraphResult<NodeId> {
        self.get(label).ok_or_else(|| GraphError::UnknownLabel {
            label: label.to_string(),
        })
    }

    /// Label of a node (None if the node was never labelled).
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node.ix()).map(String::as_str)
    }

    /// Label of a node, falling back to its numeric id.
    pub fn display(&self, node: NodeId) -> String {
        self.label(node)
            .map_or_else(|| node.to_string(), str::to_string)
    }

    /// Iterate over `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(i, l)| (NodeId::from_index(i as u32), l.as_str()))
    }
}

//! Incremental, label-aware network builder.

use mcf_core::{Cost, EdgeId, Flow, NodeId};

use crate::error::{GraphError, GraphResult};
use crate::graph::ResidualGraph;
use crate::indexing::NodeLabels;
use crate::validate;

#[derive(Debug, Clone)]
struct PendingEdge {
    from: NodeId,
    to: NodeId,
    capacity: Flow,
    cost: Cost,
}

/// Builder for constructing a flow network by node label.
///
/// Use `add_node` and `add_edge` to build up the network, then call `build()`
/// to validate it and lay it out as a `ResidualGraph`.
/// Problems are reported at `build()`, so construction code stays linear.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    labels: NodeLabels,
    edges: Vec<PendingEdge>,
    first_error: Option<GraphError>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a labelled node and return its id.
    ///
    /// A repeated label returns the existing id and makes `build()` fail.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let label = label.into();
        if let Some(existing) = self.labels.get(&label) {
            self.record(GraphError::DuplicateLabel { label });
            return existing;
        }
        match self.labels.insert(label) {
            Ok(id) => id,
            Err(err) => {
                self.record(err);
                NodeId::from_index(0)
            }
        }
    }

    /// Look up a node added earlier.
    pub fn node(&self, label: &str) -> Option<NodeId> {
        self.labels.get(label)
    }

    /// Add an edge between two node ids.
    ///
    /// Returns the id the forward half will have in the built graph.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, capacity: Flow, cost: Cost) -> EdgeId {
        let id = EdgeId::from_index((self.edges.len() * 2) as u32);
        self.edges.push(PendingEdge {
            from,
            to,
            capacity,
            cost,
        });
        id
    }

    /// Add an edge between two labelled nodes.
    pub fn add_edge_between(
        &mut self,
        from: &str,
        to: &str,
        capacity: Flow,
        cost: Cost,
    ) -> GraphResult<EdgeId> {
        let from = self.labels.id(from)?;
        let to = self.labels.id(to)?;
        Ok(self.add_edge(from, to, capacity, cost))
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn record(&mut self, err: GraphError) {
        if self.first_error.is_none() {
            self.first_error = Some(err);
        }
    }

    /// Validate and lay out the network.
    pub fn build(self) -> GraphResult<(ResidualGraph, NodeLabels)> {
        if let Some(err) = self.first_error {
            return Err(err);
        }

        let mut graph = ResidualGraph::with_capacity(self.labels.len(), self.edges.len());
        for edge in &self.edges {
            graph.add_edge(edge.from, edge.to, edge.capacity, edge.cost)?;
        }

        validate::validate_pairing(&graph)?;

        Ok((graph, self.labels))
    }
}

//! Residual graph store.

use mcf_core::{Cost, EdgeId, Flow, NodeId};

use crate::error::{GraphError, GraphResult};

/// One half of an edge pair in the residual graph.
///
/// Every caller-added edge `u -> v` is stored as a forward half
/// `(u -> v, residual = cap, cost)` and a reverse half `(v -> u, residual = 0, -cost)`.
/// `rev` links the two halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Capacity this half was created with (0 for reverse halves).
    pub capacity: Flow,
    /// Remaining capacity; always `>= 0`.
    pub residual: Flow,
    pub cost: Cost,
    pub rev: EdgeId,
}

impl ResidualEdge {
    /// Flow currently carried by this half (`capacity - residual`).
    ///
    /// Negative on reverse halves: `flow(e) + flow(rev(e)) == 0`.
    pub fn flow(&self) -> Flow {
        self.capacity - self.residual
    }
}

/// Snapshot of a caller-added edge and the flow it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeFlow {
    pub edge: EdgeId,
    pub from: NodeId,
    pub to: NodeId,
    pub capacity: Flow,
    pub flow: Flow,
    pub cost: Cost,
}

/// Residual graph: an arena of paired edges plus per-node adjacency lists.
///
/// Edge `2k` is the forward half of the k-th `add_edge` call and `2k + 1` its reverse.
/// Adjacency lists keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct ResidualGraph {
    pub(crate) edges: Vec<ResidualEdge>,
    pub(crate) adjacency: Vec<Vec<EdgeId>>,
}

impl ResidualGraph {
    /// Create a graph with `node_count` isolated nodes `0..node_count`.
    pub fn new(node_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Create a graph and reserve room for `edge_count` caller edges.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            edges: Vec::with_capacity(edge_count * 2),
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Append one node (e.g. a super-source) and return its id.
    pub fn add_node(&mut self) -> GraphResult<NodeId> {
        let id = NodeId::try_from_usize(self.adjacency.len())
            .ok_or(GraphError::TooLarge { what: "nodes" })?;
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of stored halves (twice the number of `add_edge` calls).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `node` belongs to this graph.
    pub fn contains_node(&self, node: NodeId) -> bool {
        node.ix() < self.adjacency.len()
    }

    pub(crate) fn check_node(&self, node: NodeId) -> GraphResult<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(GraphError::NodeOutOfRange {
                node,
                node_count: self.node_count(),
            })
        }
    }

    /// Add a directed edge `from -> to` and its zero-capacity reverse.
    ///
    /// Returns the id of the forward half.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        capacity: Flow,
        cost: Cost,
    ) -> GraphResult<EdgeId> {
        self.check_node(from)?;
        self.check_node(to)?;
        if capacity < 0 {
            return Err(GraphError::NegativeCapacity { from, to, capacity });
        }
        let reverse_cost = cost
            .checked_neg()
            .ok_or(GraphError::UnrepresentableCost { from, to, cost })?;

        let forward = EdgeId::try_from_usize(self.edges.len())
            .ok_or(GraphError::TooLarge { what: "edges" })?;
        let reverse = EdgeId::try_from_usize(self.edges.len() + 1)
            .ok_or(GraphError::TooLarge { what: "edges" })?;

        self.edges.push(ResidualEdge {
            from,
            to,
            capacity,
            residual: capacity,
            cost,
            rev: reverse,
        });
        self.edges.push(ResidualEdge {
            from: to,
            to: from,
            capacity: 0,
            residual: 0,
            cost: reverse_cost,
            rev: forward,
        });
        self.adjacency[from.ix()].push(forward);
        self.adjacency[to.ix()].push(reverse);

        Ok(forward)
    }

    /// All halves leaving `node`, in insertion order (empty for unknown nodes).
    pub fn edges_from(&self, node: NodeId) -> &[EdgeId] {
        self.adjacency
            .get(node.ix())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Get an edge half by id.
    pub fn edge(&self, edge: EdgeId) -> Option<&ResidualEdge> {
        self.edges.get(edge.ix())
    }

    /// Iterate over every stored half in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &ResidualEdge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId::from_index(i as u32), e))
    }

    // Scalar accessors below index directly and panic on foreign edge ids.

    #[inline]
    pub fn residual(&self, edge: EdgeId) -> Flow {
        self.edges[edge.ix()].residual
    }

    #[inline]
    pub fn cost(&self, edge: EdgeId) -> Cost {
        self.edges[edge.ix()].cost
    }

    #[inline]
    pub fn head(&self, edge: EdgeId) -> NodeId {
        self.edges[edge.ix()].to
    }

    #[inline]
    pub fn tail(&self, edge: EdgeId) -> NodeId {
        self.edges[edge.ix()].from
    }

    #[inline]
    pub fn reverse(&self, edge: EdgeId) -> EdgeId {
        self.edges[edge.ix()].rev
    }

    #[inline]
    pub fn capacity(&self, edge: EdgeId) -> Flow {
        self.edges[edge.ix()].capacity
    }

    #[inline]
    pub fn flow(&self, edge: EdgeId) -> Flow {
        self.edges[edge.ix()].flow()
    }

    /// Whether `edge` is the forward half of a caller-added edge.
    #[inline]
    pub fn is_forward(&self, edge: EdgeId) -> bool {
        edge.index() % 2 == 0
    }

    /// Forward halves only, in `add_edge` order.
    pub fn forward_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len())
            .step_by(2)
            .map(|i| EdgeId::from_index(i as u32))
    }

    /// Move `amount` units along `edge`: its residual shrinks, its reverse's grows.
    ///
    /// Never clamps: asking for more than the residual capacity is an error.
    pub fn push_flow(&mut self, edge: EdgeId, amount: Flow) -> GraphResult<()> {
        let Some(e) = self.edges.get(edge.ix()) else {
            return Err(GraphError::EdgeOutOfRange {
                edge,
                edge_count: self.edges.len(),
            });
        };
        if amount < 0 || amount > e.residual {
            return Err(GraphError::CapacityViolation {
                edge,
                requested: amount,
                available: e.residual,
            });
        }
        let rev = e.rev;
        self.edges[edge.ix()].residual -= amount;
        self.edges[rev.ix()].residual += amount;
        Ok(())
    }

    /// Net flow leaving `node` over all its halves.
    ///
    /// Reverse halves carry negative flow, so incoming flow is subtracted automatically.
    pub fn net_outflow(&self, node: NodeId) -> Flow {
        self.edges_from(node).iter().map(|&e| self.flow(e)).sum()
    }

    /// Flow on every caller-added edge.
    pub fn edge_flows(&self) -> Vec<EdgeFlow> {
        self.forward_edges()
            .map(|id| {
                let e = &self.edges[id.ix()];
                EdgeFlow {
                    edge: id,
                    from: e.from,
                    to: e.to,
                    capacity: e.capacity,
                    flow: e.flow(),
                    cost: e.cost,
                }
            })
            .collect()
    }

    /// Drop all flow, restoring every residual to its original capacity.
    pub fn reset_flow(&mut self) {
        for e in &mut self.edges {
            e.residual = e.capacity;
        }
    }
}

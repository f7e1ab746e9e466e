use std::collections::BTreeSet;

use fxhash::{FxHashMap, FxHashSet};

use crate::{
    error::GraphError,
    graph_edge::GraphEdge,
    types::{EdgeId, NodeId, Weight},
};

/// Immutable directed delivery network.
///
/// Node identifiers are interned into dense [`NodeId`]s at construction. Ids
/// follow the lexicographic order of the identifiers, which the routing
/// algorithms rely on to break ties between nodes at equal distance.
pub struct Graph {
    edges: Vec<GraphEdge>,
    nodes: Vec<String>,
    node_index: FxHashMap<String, NodeId>,

    // (start, end) of each edge, indexed by EdgeId
    edge_nodes: Vec<(NodeId, NodeId)>,

    // Outgoing edges only
    adjacency_list: Vec<Vec<EdgeId>>,
}

impl Graph {
    pub fn new(edges: Vec<GraphEdge>) -> Graph {
        let nodes: Vec<String> = edges
            .iter()
            .flat_map(|edge| [edge.start(), edge.end()])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect();

        let node_index: FxHashMap<String, NodeId> = nodes
            .iter()
            .enumerate()
            .map(|(node_id, name)| (name.clone(), node_id))
            .collect();

        let mut adjacency_list = vec![vec![]; nodes.len()];
        let mut edge_nodes = Vec::with_capacity(edges.len());

        for (edge_id, edge) in edges.iter().enumerate() {
            let start_node = node_index[edge.start()];
            let end_node = node_index[edge.end()];

            edge_nodes.push((start_node, end_node));
            adjacency_list[start_node].push(edge_id);
        }

        Graph {
            edges,
            nodes,
            node_index,
            edge_nodes,
            adjacency_list,
        }
    }

    /// Builds a graph from `(start, end, cost)` triples, failing on the first
    /// negative cost.
    pub fn from_triples<I, S>(triples: I) -> Result<Graph, GraphError>
    where
        I: IntoIterator<Item = (S, S, i64)>,
        S: Into<String>,
    {
        let edges = triples
            .into_iter()
            .map(|(start, end, cost)| GraphEdge::new(start, end, cost))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Graph::new(edges))
    }

    /// All distinct node identifiers, sorted.
    pub fn vertices(&self) -> &[String] {
        &self.nodes
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.node_index.contains_key(vertex)
    }

    /// Nodes reachable through one outgoing edge of `vertex`, with the cost of
    /// that edge. Unknown vertices have no neighbours.
    pub fn neighbours(&self, vertex: &str) -> FxHashSet<(&str, Weight)> {
        let Some(node) = self.node_id(vertex) else {
            return FxHashSet::default();
        };

        self.node_edges_iter(node)
            .map(|edge_id| {
                let edge = self.edge(edge_id);
                (edge.end(), edge.cost())
            })
            .collect()
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn edge(&self, edge_id: EdgeId) -> &GraphEdge {
        &self.edges[edge_id]
    }

    pub fn edge_end_node(&self, edge_id: EdgeId) -> NodeId {
        self.edge_nodes[edge_id].1
    }

    pub fn edge_start_node(&self, edge_id: EdgeId) -> NodeId {
        self.edge_nodes[edge_id].0
    }

    pub fn node_id(&self, vertex: &str) -> Option<NodeId> {
        self.node_index.get(vertex).copied()
    }

    pub fn node_name(&self, node: NodeId) -> &str {
        &self.nodes[node]
    }

    pub fn node_edges_iter(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency_list[node].iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

use crate::{
    constants::{INVALID_EDGE, INVALID_NODE, MAX_WEIGHT},
    graph::Graph,
    types::{EdgeId, NodeId, Weight},
};

use super::{routing_path_builder::build_search_result, search_result::SearchResult};

#[derive(Clone)]
struct NodeData {
    weight: Weight,
    settled: bool,
    parent: NodeId,
    edge_id: EdgeId, // Edge ID from parent to current node
}

impl NodeData {
    fn new() -> Self {
        NodeData {
            weight: MAX_WEIGHT,
            settled: false,
            parent: INVALID_NODE,
            edge_id: INVALID_EDGE,
        }
    }
}

/// Distances and predecessors of a single search.
pub(crate) struct SearchState {
    data: Vec<NodeData>,
}

impl SearchState {
    pub fn new(node_count: usize, start: NodeId) -> Self {
        let mut data = vec![NodeData::new(); node_count];
        data[start].weight = 0;
        SearchState { data }
    }

    #[inline(always)]
    pub fn weight(&self, node: NodeId) -> Weight {
        self.data[node].weight
    }

    #[inline(always)]
    pub fn is_settled(&self, node: NodeId) -> bool {
        self.data[node].settled
    }

    #[inline(always)]
    pub fn set_settled(&mut self, node: NodeId) {
        self.data[node].settled = true
    }

    /// Records a cheaper way to reach `node`, keeping the edge that was used
    /// so the path cost is not re-derived from parallel edges later on.
    pub fn update(&mut self, node: NodeId, weight: Weight, parent: NodeId, edge_id: EdgeId) {
        let data = &mut self.data[node];
        data.weight = weight;
        data.parent = parent;
        data.edge_id = edge_id;
    }

    /// Walks the predecessors back from `end`.
    pub fn build_result(&self, graph: &Graph, start: NodeId, end: NodeId) -> SearchResult {
        if start != end && self.data[end].parent == INVALID_NODE {
            return SearchResult::not_found();
        }

        let mut edges: Vec<EdgeId> = Vec::with_capacity(32);
        let mut node = end;

        while self.data[node].parent != INVALID_NODE {
            edges.push(self.data[node].edge_id);
            node = self.data[node].parent;
        }

        edges.reverse();

        build_search_result(graph, start, &edges)
    }
}

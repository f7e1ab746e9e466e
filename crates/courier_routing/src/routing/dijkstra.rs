use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::{
    graph::Graph,
    types::{NodeId, Weight},
};

use super::{
    search_result::SearchResult, search_state::SearchState,
    shortest_path_algorithm::ShortestPathAlgorithm,
};

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
struct HeapItem {
    node_id: NodeId,
    weight: Weight,
}

impl PartialOrd for HeapItem {
    fn partial_cmp(&self, other: &HeapItem) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapItem {
    fn cmp(&self, other: &Self) -> Ordering {
        // Flip weight and node to make this a min-heap, the lowest node id
        // (the lexicographically smallest name) wins ties
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}

/// Dijkstra with a binary heap frontier and lazy deletion.
///
/// Settles nodes in the same order as [`super::frontier_scan::FrontierScanDijkstra`],
/// so both produce the same routes, ties included.
#[derive(Default, Clone, Copy, Debug)]
pub struct Dijkstra;

impl ShortestPathAlgorithm for Dijkstra {
    fn calc_path(&self, graph: &Graph, source: &str, destination: &str) -> SearchResult {
        let (Some(start), Some(end)) = (graph.node_id(source), graph.node_id(destination)) else {
            debug!(source, destination, "Dijkstra: unknown node");
            return SearchResult::not_found();
        };

        let mut state = SearchState::new(graph.node_count(), start);
        let mut heap: BinaryHeap<HeapItem> = BinaryHeap::with_capacity(graph.node_count());
        heap.push(HeapItem {
            node_id: start,
            weight: 0,
        });

        let mut iterations = 0;
        let mut nodes_visited = 0;

        while let Some(HeapItem { node_id, weight }) = heap.pop() {
            // Node is already settled, skip
            if state.is_settled(node_id) {
                continue;
            }

            // A cheaper entry for this node was pushed after this one
            if weight > state.weight(node_id) {
                continue;
            }

            // The distance to the destination is final once it is the closest node
            if node_id == end {
                break;
            }

            for edge_id in graph.node_edges_iter(node_id) {
                let adj_node = graph.edge_end_node(edge_id);

                if state.is_settled(adj_node) {
                    continue;
                }

                nodes_visited += 1;

                let next_weight = weight.saturating_add(graph.edge(edge_id).cost());

                if next_weight < state.weight(adj_node) {
                    state.update(adj_node, next_weight, node_id, edge_id);
                    heap.push(HeapItem {
                        node_id: adj_node,
                        weight: next_weight,
                    });
                }
            }

            state.set_settled(node_id);
            iterations += 1;
        }

        debug!(iterations, nodes_visited, "Dijkstra finished");

        state.build_result(graph, start, end)
    }
}

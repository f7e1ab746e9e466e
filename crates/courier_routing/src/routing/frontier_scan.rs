use tracing::debug;

use crate::{constants::MAX_WEIGHT, graph::Graph, types::NodeId};

use super::{
    search_result::SearchResult, search_state::SearchState,
    shortest_path_algorithm::ShortestPathAlgorithm,
};

/// Dijkstra selecting the next node with a linear scan over the unsettled
/// nodes, O(V²). Equal distances are resolved in favour of the
/// lexicographically smallest node name.
#[derive(Default, Clone, Copy, Debug)]
pub struct FrontierScanDijkstra;

impl ShortestPathAlgorithm for FrontierScanDijkstra {
    fn calc_path(&self, graph: &Graph, source: &str, destination: &str) -> SearchResult {
        let (Some(start), Some(end)) = (graph.node_id(source), graph.node_id(destination)) else {
            debug!(source, destination, "FrontierScanDijkstra: unknown node");
            return SearchResult::not_found();
        };

        let mut state = SearchState::new(graph.node_count(), start);
        let mut frontier: Vec<NodeId> = (0..graph.node_count()).collect();
        let mut iterations = 0;

        loop {
            let Some((position, node_id)) = frontier
                .iter()
                .copied()
                .enumerate()
                .min_by_key(|&(_, node_id)| (state.weight(node_id), node_id))
            else {
                break;
            };

            let weight = state.weight(node_id);

            // Every remaining node is unreachable
            if weight == MAX_WEIGHT {
                break;
            }

            if node_id == end {
                break;
            }

            for edge_id in graph.node_edges_iter(node_id) {
                let adj_node = graph.edge_end_node(edge_id);
                let next_weight = weight.saturating_add(graph.edge(edge_id).cost());

                if next_weight < state.weight(adj_node) {
                    state.update(adj_node, next_weight, node_id, edge_id);
                }
            }

            frontier.swap_remove(position);
            iterations += 1;
        }

        debug!(iterations, "FrontierScanDijkstra finished");

        state.build_result(graph, start, end)
    }
}

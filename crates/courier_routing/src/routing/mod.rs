pub mod dijkstra;
pub mod frontier_scan;
pub(crate) mod routing_path_builder;
pub mod routing_request;
pub(crate) mod search_state;
pub mod search_result;
pub mod shortest_path_algorithm;

use crate::graph::Graph;

use dijkstra::Dijkstra;
use search_result::SearchResult;
use shortest_path_algorithm::ShortestPathAlgorithm;

/// Least-cost route from `source` to `destination` with the default algorithm.
pub fn find_path(graph: &Graph, source: &str, destination: &str) -> SearchResult {
    Dijkstra.calc_path(graph, source, destination)
}

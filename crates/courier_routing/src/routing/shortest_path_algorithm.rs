use crate::graph::Graph;

use super::search_result::SearchResult;

/// Single-source shortest path search stopping at `destination`.
///
/// Implementations keep their working state per call, so a graph can be
/// queried from several threads at once. An unknown or unreachable endpoint
/// yields [`SearchResult::not_found`].
pub trait ShortestPathAlgorithm {
    fn calc_path(&self, graph: &Graph, source: &str, destination: &str) -> SearchResult;
}

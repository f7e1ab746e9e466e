pub mod constants;
pub mod error;
pub mod graph;
pub mod graph_edge;
pub mod routing;
pub mod types;

#[cfg(test)]
pub(crate) mod test_graph_utils;

pub use error::GraphError;
pub use graph::Graph;
pub use graph_edge::GraphEdge;
pub use routing::{
    find_path,
    routing_request::{RoutingAlgorithm, RoutingRequest},
    search_result::{PathLeg, SearchResult},
    shortest_path_algorithm::ShortestPathAlgorithm,
};

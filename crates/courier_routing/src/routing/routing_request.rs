use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

use super::{
    dijkstra::Dijkstra, frontier_scan::FrontierScanDijkstra, search_result::SearchResult,
    shortest_path_algorithm::ShortestPathAlgorithm,
};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoutingAlgorithm {
    #[default]
    Dijkstra,
    FrontierScan,
}

impl RoutingAlgorithm {
    pub fn calc_path(&self, graph: &Graph, source: &str, destination: &str) -> SearchResult {
        match self {
            RoutingAlgorithm::Dijkstra => Dijkstra.calc_path(graph, source, destination),
            RoutingAlgorithm::FrontierScan => {
                FrontierScanDijkstra.calc_path(graph, source, destination)
            }
        }
    }
}

impl FromStr for RoutingAlgorithm {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RoutingAlgorithm::Dijkstra),
            "frontier-scan" | "frontier_scan" | "scan" => Ok(RoutingAlgorithm::FrontierScan),
            _ => Err(format!("Unknown routing algorithm: {input}")),
        }
    }
}

impl Display for RoutingAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoutingAlgorithm::Dijkstra => write!(f, "dijkstra"),
            RoutingAlgorithm::FrontierScan => write!(f, "frontier-scan"),
        }
    }
}

/// A route query between a distribution centre and a warehouse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutingRequest {
    pub source: String,
    pub destination: String,
    pub algorithm: Option<RoutingAlgorithm>,
}

impl RoutingRequest {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        RoutingRequest {
            source: source.into(),
            destination: destination.into(),
            algorithm: None,
        }
    }

    pub fn route(&self, graph: &Graph) -> SearchResult {
        self.algorithm
            .unwrap_or_default()
            .calc_path(graph, &self.source, &self.destination)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_graph_utils::test_graph::create_graph;

    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert_eq!("dijkstra".parse::<RoutingAlgorithm>(), Ok(RoutingAlgorithm::Dijkstra));
        assert_eq!("Frontier-Scan".parse::<RoutingAlgorithm>(), Ok(RoutingAlgorithm::FrontierScan));
        assert!("bfs".parse::<RoutingAlgorithm>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for algorithm in [RoutingAlgorithm::Dijkstra, RoutingAlgorithm::FrontierScan] {
            assert_eq!(algorithm.to_string().parse::<RoutingAlgorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_route_request() {
        let graph = create_graph(&[("A", "B", 5), ("B", "C", 10), ("A", "C", 20)]);

        let mut request = RoutingRequest::new("A", "C");
        assert_eq!(request.route(&graph).total_cost(), 15);

        request.algorithm = Some(RoutingAlgorithm::FrontierScan);
        assert_eq!(request.route(&graph).path(), &["A", "B", "C"]);
    }
}

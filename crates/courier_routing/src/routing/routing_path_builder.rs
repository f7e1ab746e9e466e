use crate::{
    graph::Graph,
    types::{EdgeId, NodeId},
};

use super::search_result::{PathLeg, SearchResult};

pub(crate) fn build_search_result(
    graph: &Graph,
    start: NodeId,
    edges: &[EdgeId],
) -> SearchResult {
    let legs: Vec<PathLeg> = edges
        .iter()
        .map(|&edge_id| {
            let edge = graph.edge(edge_id);
            PathLeg::new(edge.start(), edge.end(), edge.cost())
        })
        .collect();

    SearchResult::new(graph.node_name(start), legs)
}

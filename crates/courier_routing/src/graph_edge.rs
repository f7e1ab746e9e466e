use serde::Serialize;

use crate::{constants::DEFAULT_EDGE_COST, error::GraphError, types::Weight};

/// A directed connection between two delivery locations.
///
/// The edge can only be traversed from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge {
    start: String,
    end: String,
    cost: Weight,
}

impl GraphEdge {
    /// Dijkstra requires non-negative weights, a negative `cost` is rejected.
    pub fn new(
        start: impl Into<String>,
        end: impl Into<String>,
        cost: i64,
    ) -> Result<Self, GraphError> {
        let start = start.into();
        let end = end.into();

        if cost < 0 {
            return Err(GraphError::InvalidEdge { start, end, cost });
        }

        Ok(GraphEdge {
            start,
            end,
            cost: cost as Weight,
        })
    }

    pub fn with_default_cost(start: impl Into<String>, end: impl Into<String>) -> Self {
        GraphEdge {
            start: start.into(),
            end: end.into(),
            cost: DEFAULT_EDGE_COST,
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }
}

use serde::Serialize;

use crate::{constants::NOT_FOUND_COST, types::Weight};

/// One edge of a route, as used by the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLeg {
    from: String,
    to: String,
    cost: Weight,
}

impl PathLeg {
    pub fn new(from: impl Into<String>, to: impl Into<String>, cost: Weight) -> PathLeg {
        PathLeg {
            from: from.into(),
            to: to.into(),
            cost,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn cost(&self) -> Weight {
        self.cost
    }
}

/// Outcome of a route search.
///
/// A route that was not found has an empty path and a total cost of
/// [`NOT_FOUND_COST`]. Unknown and unreachable nodes are not distinguished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    path: Vec<String>,
    legs: Vec<PathLeg>,
    distance: Option<Weight>,
}

impl SearchResult {
    pub fn not_found() -> SearchResult {
        SearchResult {
            path: vec![],
            legs: vec![],
            distance: None,
        }
    }

    /// Route made of `legs`, starting at `source`. With no legs the route
    /// is the single node `source`.
    pub fn new(source: impl Into<String>, legs: Vec<PathLeg>) -> SearchResult {
        let mut path = Vec::with_capacity(legs.len() + 1);
        path.push(source.into());
        path.extend(legs.iter().map(|leg| leg.to.clone()));

        let distance = legs
            .iter()
            .fold(0, |distance: Weight, leg| distance.saturating_add(leg.cost));

        SearchResult {
            path,
            legs,
            distance: Some(distance),
        }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn legs(&self) -> &[PathLeg] {
        &self.legs
    }

    /// Sum of the leg costs, or [`NOT_FOUND_COST`]. Sums beyond `i64::MAX`
    /// are clamped to `i64::MAX`.
    pub fn total_cost(&self) -> i64 {
        match self.distance {
            Some(distance) => i64::try_from(distance).unwrap_or(i64::MAX),
            None => NOT_FOUND_COST,
        }
    }

    /// Sum of the leg costs, `None` when no route was found.
    pub fn distance(&self) -> Option<Weight> {
        self.distance
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }
}

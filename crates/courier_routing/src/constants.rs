use crate::types::{EdgeId, NodeId, Weight};

pub(crate) const INVALID_NODE: NodeId = usize::MAX;
pub(crate) const INVALID_EDGE: EdgeId = usize::MAX;
pub(crate) const MAX_WEIGHT: Weight = u64::MAX;

/// Cost given to an edge declared without one.
pub const DEFAULT_EDGE_COST: Weight = 1;

/// Total cost reported when no route exists between the requested nodes.
pub const NOT_FOUND_COST: i64 = -1;

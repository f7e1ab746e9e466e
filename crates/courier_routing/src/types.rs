pub type NodeId = usize;
pub type EdgeId = usize;

/// Cost of traversing an edge, in the network's unit (kilometers or minutes).
pub type Weight = u64;

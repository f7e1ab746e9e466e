use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Invalid edge {start} -> {end}: cost {cost} is negative")]
    InvalidEdge {
        start: String,
        end: String,
        cost: i64,
    },
}

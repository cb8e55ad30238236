use thiserror::Error;

use crate::graph::{VertexId, Weight};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid starting vertex: {0} is not in the graph")]
    InvalidStartVertex(VertexId),

    /// Shortest paths requires non-negative weights; the offending
    /// edge is reported rather than producing wrong distances.
    #[error("negative weight {weight} on edge ({v1}, {v2})")]
    NegativeWeight {
        v1: VertexId,
        v2: VertexId,
        weight: Weight,
    },

    #[error("length of the path from {from} to {to} overflows the weight type")]
    WeightOverflow { from: VertexId, to: VertexId },

    #[error("segment id {0} does not fit in a vertex id")]
    VertexIdOutOfRange(usize),

    #[error("GFA parse error: {0}")]
    Gfa(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

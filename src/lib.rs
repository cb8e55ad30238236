pub mod algorithm;
pub mod error;
pub mod graph;
pub mod state;

pub use algorithm::{
    connected_components, minimum_spanning_tree, shortest_paths, Components,
    ShortestPaths,
};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, VertexId, Weight};

mod graph;
mod grid;

pub use graph::Graph;
pub use grid::Adjacency;

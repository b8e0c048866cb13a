mod flip;
mod graph;

pub use flip::flip_vertex;
pub use graph::{FlipEdge, ReconfigurationGraph, Strategy};

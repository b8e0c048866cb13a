#![doc = "Enumeration of connected k-partitions of a graph and the flip reconfiguration graph over them"]
//!
//! A districting plan on a small grid is a partition of its vertices into
//! `k` connected parts. [`enumerate_partitions`] lists every such plan, and
//! [`ReconfigurationGraph`] relates two plans whenever moving a single vertex
//! between two parts turns one into the other.
//!
//! ```
//! use flipspace::{Adjacency, Graph, ReconfigurationGraph, enumerate_partitions};
//!
//! let graph = Graph::grid(2, 2, Adjacency::Rook)?;
//! let partitions = enumerate_partitions(&graph, 2)?;
//! let reconfig = ReconfigurationGraph::build(&graph, &partitions);
//! assert_eq!(partitions.len(), 6);
//! assert_eq!(reconfig.edge_count(), 8);
//! # Ok::<(), flipspace::Error>(())
//! ```
mod config;
mod error;
mod graph;
mod partition;
mod reconfig;

#[doc(inline)]
pub use config::Limits;

#[doc(inline)]
pub use error::{Error, InvalidInput, Resource, Result};

#[doc(inline)]
pub use graph::{Adjacency, Graph};

#[doc(inline)]
pub use partition::{
    Enumerator, Partition, PartitionCollection, SetFamily,
    enumerate_partitions, single_difference, symmetric_difference,
};

#[doc(inline)]
pub use reconfig::{FlipEdge, ReconfigurationGraph, Strategy, flip_vertex};

use std::fmt;

/// Errors surfaced by graph construction, enumeration and reconfiguration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The caller supplied a graph or part count the enumerator cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    /// A configured ceiling on the search was crossed.
    #[error("resource exhausted: more than {limit} {resource}")]
    ResourceExhausted { resource: Resource, limit: usize },
}

/// Reasons an input graph or part count is rejected before any work begins.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("graph has no vertices")]
    EmptyGraph,

    #[error("graph is disconnected ({components} components)")]
    Disconnected { components: usize },

    #[error("part count {k} is outside [1, {nodes}]")]
    PartCount { k: usize, nodes: usize },

    #[error("edge ({u}, {v}) references a vertex outside [0, {nodes})")]
    EdgeOutOfRange { u: usize, v: usize, nodes: usize },

    #[error("self loop on vertex {node}")]
    SelfLoop { node: usize },

    #[error("{rows}x{cols} grid is too large to build")]
    GridTooLarge { rows: usize, cols: usize },
}

/// Search resources that can be capped through [`crate::Limits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Retained candidate edge subsets on the enumeration frontier.
    Candidates,
    /// Partitions recorded in the collection.
    Partitions,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Candidates => f.write_str("candidate subsets"),
            Resource::Partitions => f.write_str("partitions"),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

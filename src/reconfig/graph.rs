use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, trace};

use crate::{
    graph::Graph,
    partition::{PartitionCollection, SetFamily},
    reconfig::flip_vertex,
};

/// How flip-adjacent pairs are discovered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Compare every unordered pair of partitions by set algebra over their parts.
    #[default]
    Pairwise,
    /// Apply every legal single-vertex move and look the result up by key.
    Moves,
}

/// An edge of the reconfiguration graph: partitions `source < target`
/// differ by moving `vertex` between two parts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FlipEdge {
    pub source: usize,
    pub target: usize,
    pub vertex: usize,
}

/// The graph whose vertices are partition ids and whose edges are flips.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ReconfigurationGraph {
    node_count: usize,
    edges: Vec<FlipEdge>,
    #[serde(skip)]
    adjacency: Graph,
}

impl ReconfigurationGraph {
    /// Build the reconfiguration graph by pairwise comparison.
    pub fn build(graph: &Graph, partitions: &PartitionCollection) -> Self {
        Self::build_with(graph, partitions, Strategy::Pairwise)
    }

    /// Build the reconfiguration graph with a chosen discovery strategy.
    /// Both strategies emit the same edges in `(source, target)` order.
    pub fn build_with(graph: &Graph, partitions: &PartitionCollection, strategy: Strategy) -> Self {
        assert!(
            partitions.iter().all(|p| p.num_nodes() == graph.node_count()),
            "partitions must cover the vertices of the base graph"
        );

        let edges = match strategy {
            Strategy::Pairwise => pairwise_edges(graph, partitions),
            Strategy::Moves => move_edges(graph, partitions),
        };

        let result = Self::from_edges(partitions.len(), edges);
        info!(
            ?strategy,
            partitions = result.node_count(),
            flips = result.edge_count(),
            "reconfiguration graph built"
        );
        result
    }

    /// Assemble from an edge list sorted by `(source, target)`.
    fn from_edges(node_count: usize, edges: Vec<FlipEdge>) -> Self {
        let mut adjacency = vec![Vec::new(); node_count];
        for edge in &edges {
            adjacency[edge.source].push(edge.target as u32);
            adjacency[edge.target].push(edge.source as u32);
        }

        Self { node_count, edges, adjacency: Graph::new(node_count, &adjacency) }
    }

    /// Number of partitions (vertices).
    #[inline] pub fn node_count(&self) -> usize { self.node_count }

    /// Number of flips (edges).
    #[inline] pub fn edge_count(&self) -> usize { self.edges.len() }

    /// All edges, ordered by source then target.
    #[inline] pub fn edges(&self) -> &[FlipEdge] { &self.edges }

    /// Iterator over edges as `(source, target)` pairs.
    pub fn edge_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().map(|e| (e.source, e.target))
    }

    /// The vertex moved between partitions `i` and `j`, if they are adjacent.
    pub fn flip(&self, i: usize, j: usize) -> Option<usize> {
        let (source, target) = (i.min(j), i.max(j));
        self.edges.binary_search_by(|e| (e.source, e.target).cmp(&(source, target))).ok()
            .map(|at| self.edges[at].vertex)
    }

    /// Number of flips available from partition `i`.
    #[inline] pub fn degree(&self, i: usize) -> usize { self.adjacency.degree(i) }

    /// Partitions one flip away from partition `i`, in ascending order.
    #[inline]
    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency.edges(i)
    }

    /// Largest degree over all partitions (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        (0..self.node_count).map(|i| self.degree(i)).max().unwrap_or(0)
    }

    /// Number of connected components of the plan space.
    #[inline] pub fn component_count(&self) -> usize { self.adjacency.component_count() }

    /// Whether every partition is reachable from every other by flips.
    #[inline] pub fn is_connected(&self) -> bool { self.adjacency.is_connected() }
}

/// Compare every pair `i < j` by the symmetric difference of their parts.
fn pairwise_edges(graph: &Graph, partitions: &PartitionCollection) -> Vec<FlipEdge> {
    let families = partitions.iter().map(|p| p.family()).collect::<Vec<SetFamily>>();

    let row = |i: usize| -> Vec<FlipEdge> {
        (i + 1..families.len())
            .filter_map(|j| {
                let vertex = flip_vertex(graph, &families[i], &families[j])?;
                trace!(source = i, target = j, vertex, "flip");
                Some(FlipEdge { source: i, target: j, vertex })
            })
            .collect()
    };

    collect_rows(families.len(), row)
}

/// Apply every legal move to each partition and look up the result.
fn move_edges(graph: &Graph, partitions: &PartitionCollection) -> Vec<FlipEdge> {
    let row = |i: usize| -> Vec<FlipEdge> {
        let partition = &partitions[i];
        let mut edges = Vec::new();
        for vertex in 0..graph.node_count() {
            let own = partition.part_of(vertex);
            let mut targets = graph.edges(vertex)
                .map(|u| partition.part_of(u))
                .filter(|&part| part != own)
                .collect::<SmallVec<[usize; 8]>>();
            targets.sort_unstable();
            targets.dedup();

            for part in targets {
                let Some(next) = partition.flip(graph, vertex, part) else { continue };
                match partitions.position(&next) {
                    Some(j) if j > i => {
                        trace!(source = i, target = j, vertex, "flip");
                        edges.push(FlipEdge { source: i, target: j, vertex });
                    }
                    _ => {}
                }
            }
        }
        edges.sort_unstable();
        edges
    };

    collect_rows(partitions.len(), row)
}

/// Evaluate `row` for every source id and concatenate in id order.
fn collect_rows<F>(count: usize, row: F) -> Vec<FlipEdge>
where
    F: Fn(usize) -> Vec<FlipEdge> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    let rows = {
        use rayon::prelude::*;
        (0..count).into_par_iter().map(row).collect::<Vec<_>>()
    };

    #[cfg(not(feature = "parallel"))]
    let rows = (0..count).map(row).collect::<Vec<_>>();

    rows.into_iter().flatten().collect()
}

use ahash::AHashSet;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::{
    config::Limits,
    error::{InvalidInput, Resource, Result},
    graph::Graph,
    partition::{Partition, PartitionCollection},
};

/// Enumerates every partition of a connected graph into `num_parts` parts
/// that each induce a connected subgraph.
///
/// Vertices are activated in index order. Each activation grows the frontier
/// of candidate edge subsets by every edge joining the new vertex to an
/// already-activated one; a candidate survives while its edges leave at
/// least `num_parts` components, and is recorded when exactly `num_parts`
/// remain.
#[derive(Clone, Debug)]
pub struct Enumerator<'a> {
    graph: &'a Graph,
    num_parts: usize,
    limits: Limits,
}

/// An edge subset, tracked by the components it induces over all vertices.
#[derive(Clone, Debug)]
struct Candidate {
    components: UnionFind<u32>,
    count: usize,
}

impl Candidate {
    /// The empty edge subset: every vertex is its own component.
    fn empty(num_nodes: usize) -> Self {
        Self { components: UnionFind::new(num_nodes), count: num_nodes }
    }

    /// The subset extended by edge `(u, v)`, or `None` if the edge joins a
    /// single component (the components, and so all futures, are unchanged).
    fn with_edge(&self, u: usize, v: usize) -> Option<Self> {
        let (u, v) = (u as u32, v as u32);
        if self.components.equiv(u, v) { return None }

        let mut next = self.clone();
        next.components.union(u, v);
        next.count -= 1;
        Some(next)
    }

    /// Component label of every vertex, numbered in order of first appearance.
    fn labels(&self, num_nodes: usize) -> Box<[u32]> {
        let mut relabel = vec![u32::MAX; num_nodes];
        let mut next = 0;
        (0..num_nodes as u32)
            .map(|node| {
                let root = self.components.find(node) as usize;
                if relabel[root] == u32::MAX { relabel[root] = next; next += 1 }
                relabel[root]
            })
            .collect()
    }
}

/// The retained candidates, deduplicated by component labeling.
#[derive(Debug, Default)]
struct Frontier {
    candidates: Vec<Candidate>,
    seen: AHashSet<Box<[u32]>>,
}

impl Frontier {
    /// Start from the single empty edge subset.
    fn seeded(num_nodes: usize) -> (Self, Box<[u32]>) {
        let seed = Candidate::empty(num_nodes);
        let labels = seed.labels(num_nodes);
        let mut frontier = Self::default();
        frontier.insert(seed, labels.clone());
        (frontier, labels)
    }

    #[inline] fn len(&self) -> usize { self.candidates.len() }

    /// Retain `candidate` unless one with the same labeling is present.
    fn insert(&mut self, candidate: Candidate, labels: Box<[u32]>) -> bool {
        if !self.seen.insert(labels) { return false }
        self.candidates.push(candidate);
        true
    }
}

impl<'a> Enumerator<'a> {
    /// Configure an enumeration of `graph` into `num_parts` parts, with no limits.
    pub fn new(graph: &'a Graph, num_parts: usize) -> Self {
        Self { graph, num_parts, limits: Limits::default() }
    }

    /// Replace the resource limits.
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Validate the inputs before any search work.
    fn validate(&self) -> Result<()> {
        let nodes = self.graph.node_count();
        if nodes == 0 { return Err(InvalidInput::EmptyGraph.into()) }
        if self.num_parts == 0 || self.num_parts > nodes {
            return Err(InvalidInput::PartCount { k: self.num_parts, nodes }.into());
        }
        let components = self.graph.component_count();
        if components != 1 {
            return Err(InvalidInput::Disconnected { components }.into());
        }
        Ok(())
    }

    /// Run the enumeration to completion.
    pub fn run(&self) -> Result<PartitionCollection> {
        self.validate()?;

        let graph = self.graph;
        let num_parts = self.num_parts;
        let mut collection = PartitionCollection::new(num_parts);

        let (mut frontier, seed) = Frontier::seeded(graph.node_count());
        if graph.node_count() == num_parts {
            self.record(&mut collection, &seed)?;
        }

        let mut activated = vec![false; graph.node_count()];
        for node in 0..graph.node_count() {
            let incident = graph.edges(node)
                .filter(|&u| activated[u])
                .collect::<SmallVec<[usize; 8]>>();

            for &u in &incident {
                for (candidate, labels) in expand(&frontier.candidates, u, node, num_parts, graph.node_count()) {
                    let count = candidate.count;
                    if !frontier.insert(candidate, labels.clone()) { continue }
                    self.limits.check(Resource::Candidates, frontier.len())?;
                    if count == num_parts { self.record(&mut collection, &labels)? }
                }
            }

            activated[node] = true;
            debug!(
                node,
                incident = incident.len(),
                candidates = frontier.len(),
                partitions = collection.len(),
                "activated vertex"
            );
        }

        info!(
            nodes = graph.node_count(),
            parts = num_parts,
            candidates = frontier.len(),
            partitions = collection.len(),
            "enumeration complete"
        );
        Ok(collection)
    }

    /// Materialize the partition for a component labeling and add it to the collection.
    fn record(&self, collection: &mut PartitionCollection, labels: &[u32]) -> Result<()> {
        let partition = Partition::from_labels(self.graph, labels.iter().map(|&l| l as usize));
        if collection.insert(partition).1 {
            self.limits.check(Resource::Partitions, collection.len())?;
        }
        Ok(())
    }
}

/// Extend every candidate by edge `(u, v)`, keeping those with at least
/// `num_parts` components. Output order follows `candidates`.
fn expand(
    candidates: &[Candidate],
    u: usize,
    v: usize,
    num_parts: usize,
    num_nodes: usize,
) -> Vec<(Candidate, Box<[u32]>)> {
    // Candidates already at `num_parts` components can only fall below it.
    let step = |candidate: &Candidate| {
        if candidate.count <= num_parts { return None }
        candidate.with_edge(u, v)
            .filter(|next| next.count >= num_parts)
            .map(|next| { let labels = next.labels(num_nodes); (next, labels) })
    };

    #[cfg(feature = "parallel")]
    let expanded = {
        use rayon::prelude::*;
        candidates.par_iter().filter_map(step).collect()
    };

    #[cfg(not(feature = "parallel"))]
    let expanded = candidates.iter().filter_map(step).collect();

    expanded
}

/// Enumerate every partition of `graph` into `num_parts` connected parts.
pub fn enumerate_partitions(graph: &Graph, num_parts: usize) -> Result<PartitionCollection> {
    Enumerator::new(graph, num_parts).run()
}

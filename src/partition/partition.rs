use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

use crate::{graph::Graph, partition::{PartitionSet, SetFamily}};

/// A partition of a graph's vertices into disjoint parts.
///
/// Parts are kept in canonical order: each part sorted ascending, parts
/// ordered by their smallest vertex. The partition also carries its key, the
/// sorted ids of every edge whose endpoints share a part. For partitions into
/// connected parts the key identifies the partition uniquely.
#[derive(Clone, Debug)]
pub struct Partition {
    parts: PartitionSet,
    key: Box<[u32]>,
}

impl Partition {
    /// Build a partition from per-vertex part labels. Labels are arbitrary
    /// integers; they are renumbered in order of first appearance.
    pub fn from_assignments(graph: &Graph, assignments: &[usize]) -> Self {
        Self::from_labels(graph, assignments.iter().copied())
    }

    /// Build a partition from an iterator of per-vertex labels.
    pub(crate) fn from_labels(graph: &Graph, labels: impl IntoIterator<Item = usize>) -> Self {
        let mut relabel = ahash::AHashMap::new();
        let assignments = labels.into_iter()
            .map(|label| {
                let next = relabel.len();
                *relabel.entry(label).or_insert(next)
            })
            .collect::<Vec<_>>();
        assert!(assignments.len() == graph.node_count(), "assignments.len() must equal number of nodes");

        let key = graph.edge_list().enumerate()
            .filter(|&(_, (u, v))| assignments[u] == assignments[v])
            .map(|(id, _)| id as u32)
            .collect();

        Self {
            parts: PartitionSet::from_assignments(relabel.len(), &assignments),
            key,
        }
    }

    /// Get the number of parts.
    #[inline] pub fn num_parts(&self) -> usize { self.parts.num_sets() }

    /// Get the number of vertices covered by the partition.
    #[inline] pub fn num_nodes(&self) -> usize { self.parts.num_elems() }

    /// Get the part containing a given vertex.
    #[inline] pub fn part_of(&self, node: usize) -> usize { self.parts.find(node) }

    /// Get the vertices of a given part, in ascending order.
    #[inline] pub fn part(&self, part: usize) -> &[usize] { self.parts.get(part) }

    /// Iterator over all parts in canonical order.
    #[inline]
    pub fn parts(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.parts.iter_sets()
    }

    /// Get the part label of every vertex.
    #[inline] pub fn assignments(&self) -> &[usize] { self.parts.assignments() }

    /// Iterator over the ids of edges whose endpoints share a part.
    #[inline]
    pub fn intra_edges(&self) -> impl Iterator<Item = usize> + '_ {
        self.key.iter().map(|&id| id as usize)
    }

    /// The canonical key (sorted intra-part edge ids).
    #[inline] pub(crate) fn key(&self) -> &[u32] { &self.key }

    /// Get the parts as a set family, singleton parts included.
    pub fn family(&self) -> SetFamily {
        // Disjoint parts ordered by smallest vertex are already in lexicographic order.
        SetFamily::from_sorted(self.parts().map(<[usize]>::to_vec).collect())
    }

    /// Check that this is a partition of `graph` into exactly `num_parts`
    /// non-empty parts, each inducing a connected subgraph.
    pub fn is_valid(&self, graph: &Graph, num_parts: usize) -> bool {
        self.num_nodes() == graph.node_count()
            && self.num_parts() == num_parts
            && self.parts().all(|part| graph.is_connected_subset(part))
    }
}

impl PartialEq for Partition {
    fn eq(&self, other: &Self) -> bool {
        self.assignments() == other.assignments()
    }
}

impl Eq for Partition {}

impl Hash for Partition {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.assignments().hash(state);
    }
}

impl Serialize for Partition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.parts())
    }
}

use std::ops::Index;

use ahash::AHashMap;
use serde::{Serialize, Serializer};

use crate::partition::Partition;

/// The deduplicated, insertion-ordered set of partitions found by enumeration.
/// Each partition's id is its index.
#[derive(Clone, Debug, Default)]
pub struct PartitionCollection {
    num_parts: usize,
    partitions: Vec<Partition>,
    index: AHashMap<Box<[u32]>, usize>, // key -> position in `partitions`
}

impl PartitionCollection {
    /// Create an empty collection of partitions into `num_parts` parts.
    pub(crate) fn new(num_parts: usize) -> Self {
        Self { num_parts, ..Default::default() }
    }

    /// Number of parts in every partition of the collection.
    #[inline] pub fn num_parts(&self) -> usize { self.num_parts }

    /// Number of partitions.
    #[inline] pub fn len(&self) -> usize { self.partitions.len() }

    /// Whether the collection holds no partitions.
    #[inline] pub fn is_empty(&self) -> bool { self.partitions.is_empty() }

    /// Get a partition by id.
    #[inline] pub fn get(&self, id: usize) -> Option<&Partition> { self.partitions.get(id) }

    /// Iterator over partitions in id order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Partition> { self.partitions.iter() }

    /// Find the id of a partition equal to `partition`.
    pub fn position(&self, partition: &Partition) -> Option<usize> {
        self.position_of_key(partition.key())
    }

    /// Find the id of the partition with the given key.
    #[inline]
    pub(crate) fn position_of_key(&self, key: &[u32]) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Append `partition` unless an equal one is present.
    /// Returns its id and whether it was newly inserted.
    pub(crate) fn insert(&mut self, partition: Partition) -> (usize, bool) {
        debug_assert!(partition.num_parts() == self.num_parts, "partition has the wrong number of parts");
        if let Some(id) = self.position(&partition) { return (id, false) }

        let id = self.partitions.len();
        self.index.insert(partition.key().into(), id);
        self.partitions.push(partition);
        (id, true)
    }
}

impl Index<usize> for PartitionCollection {
    type Output = Partition;

    #[inline]
    fn index(&self, id: usize) -> &Partition { &self.partitions[id] }
}

impl<'a> IntoIterator for &'a PartitionCollection {
    type Item = &'a Partition;
    type IntoIter = std::slice::Iter<'a, Partition>;

    fn into_iter(self) -> Self::IntoIter { self.partitions.iter() }
}

impl PartialEq for PartitionCollection {
    fn eq(&self, other: &Self) -> bool {
        self.num_parts == other.num_parts && self.partitions == other.partitions
    }
}

impl Eq for PartitionCollection {}

impl Serialize for PartitionCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.partitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn insert_deduplicates_by_key() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let mut collection = PartitionCollection::new(2);

        assert_eq!(collection.insert(Partition::from_assignments(&graph, &[0, 0, 1])), (0, true));
        assert_eq!(collection.insert(Partition::from_assignments(&graph, &[0, 1, 1])), (1, true));
        assert_eq!(collection.insert(Partition::from_assignments(&graph, &[5, 5, 2])), (0, false));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection[1].part(1), &[1, 2]);
        assert_eq!(collection.position(&Partition::from_assignments(&graph, &[1, 0, 0])), Some(1));
        assert!(collection.get(2).is_none());
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let mut collection = PartitionCollection::new(2);
        collection.insert(Partition::from_assignments(&graph, &[0, 1, 1]));
        collection.insert(Partition::from_assignments(&graph, &[0, 0, 1]));

        let firsts = collection.iter().map(|p| p.part(0).to_vec()).collect::<Vec<_>>();
        assert_eq!(firsts, vec![vec![0], vec![0, 1]]);
        assert_eq!(serde_json::to_string(&collection).unwrap(), "[[[0],[1,2]],[[0,1],[2]]]");
    }
}

/// A total assignment of elements to sets, stored both ways: the set of every
/// element, and the members of every set packed contiguously.
#[derive(Debug, Clone, Default)]
pub(crate) struct PartitionSet {
    labels: Vec<usize>,  // labels[e] = set containing e
    offsets: Vec<usize>, // members of set s are members[offsets[s]..offsets[s + 1]]
    members: Vec<usize>,
}

impl PartitionSet {
    /// Group elements by label. Labels must lie in `0..num_sets`, and every
    /// set comes out sorted ascending.
    pub(crate) fn from_assignments(num_sets: usize, assignments: &[usize]) -> Self {
        let mut offsets = vec![0; num_sets + 1];
        for &set in assignments {
            assert!(set < num_sets, "set {} out of range [0, {})", set, num_sets);
            offsets[set + 1] += 1;
        }
        for s in 0..num_sets { offsets[s + 1] += offsets[s] }

        let mut cursor = offsets[..num_sets].to_vec();
        let mut members = vec![0; assignments.len()];
        for (elem, &set) in assignments.iter().enumerate() {
            members[cursor[set]] = elem;
            cursor[set] += 1;
        }

        Self { labels: assignments.to_vec(), offsets, members }
    }

    /// Number of sets.
    #[inline] pub(crate) fn num_sets(&self) -> usize { self.offsets.len().saturating_sub(1) }

    /// Number of elements.
    #[inline] pub(crate) fn num_elems(&self) -> usize { self.labels.len() }

    /// The set containing `elem`.
    #[inline] pub(crate) fn find(&self, elem: usize) -> usize { self.labels[elem] }

    /// Members of `set`, ascending.
    #[inline]
    pub(crate) fn get(&self, set: usize) -> &[usize] {
        &self.members[self.offsets[set]..self.offsets[set + 1]]
    }

    /// The set of every element.
    #[inline] pub(crate) fn assignments(&self) -> &[usize] { &self.labels }

    /// Iterator over each set as a slice.
    pub(crate) fn iter_sets(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.num_sets()).map(|set| self.get(set))
    }
}

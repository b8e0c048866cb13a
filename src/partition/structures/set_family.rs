//! Set algebra over collections of disjoint vertex sets.
//!
//! A [`SetFamily`] treats each member set as an opaque element: two members
//! are equal only if they contain exactly the same vertices. Members are kept
//! sorted (and each member's vertices sorted), so every operation is a linear
//! merge.

use std::cmp::Ordering;

use itertools::{EitherOrBoth, Itertools};
use smallvec::SmallVec;

/// A canonical collection of vertex sets.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SetFamily {
    sets: Vec<Vec<usize>>,
}

impl SetFamily {
    /// Build a family from arbitrary iterables of vertices.
    /// Vertices within a set are sorted and deduplicated, and the sets are put in canonical order.
    pub fn new<I, S>(sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = usize>,
    {
        let mut sets = sets.into_iter()
            .map(|set| {
                let mut set = set.into_iter().collect::<Vec<_>>();
                set.sort_unstable();
                set.dedup();
                set
            })
            .collect::<Vec<_>>();
        sets.sort_unstable();
        sets.dedup();
        Self { sets }
    }

    /// Wrap sets that are already sorted, both internally and as a family.
    pub(crate) fn from_sorted(sets: Vec<Vec<usize>>) -> Self {
        debug_assert!(sets.iter().all(|s| s.is_sorted()), "member sets must be sorted");
        debug_assert!(sets.is_sorted(), "family must be sorted");
        Self { sets }
    }

    /// Number of member sets.
    #[inline] pub fn len(&self) -> usize { self.sets.len() }

    /// Whether the family has no members.
    #[inline] pub fn is_empty(&self) -> bool { self.sets.is_empty() }

    /// Get the ith member in canonical order.
    #[inline] pub fn get(&self, i: usize) -> &[usize] { &self.sets[i] }

    /// Iterator over members in canonical order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &[usize]> + '_ {
        self.sets.iter().map(|v| v.as_slice())
    }

    /// Whether `set` (sorted) is a member of this family.
    pub fn contains(&self, set: &[usize]) -> bool {
        self.sets.binary_search_by(|probe| probe.as_slice().cmp(set)).is_ok()
    }

    /// Members present in both families.
    pub fn intersection(&self, other: &Self) -> Self {
        self.merge(other, |entry| match entry {
            EitherOrBoth::Both(set, _) => Some(set),
            _ => None,
        })
    }

    /// Members present in exactly one of the two families.
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        self.merge(other, |entry| match entry {
            EitherOrBoth::Left(set) | EitherOrBoth::Right(set) => Some(set),
            EitherOrBoth::Both(..) => None,
        })
    }

    /// Members of `self` that are not members of `other`.
    pub fn difference(&self, other: &Self) -> Self {
        self.merge(other, |entry| match entry {
            EitherOrBoth::Left(set) => Some(set),
            _ => None,
        })
    }

    fn merge<'a, F>(&'a self, other: &'a Self, keep: F) -> Self
    where
        F: Fn(EitherOrBoth<&'a Vec<usize>, &'a Vec<usize>>) -> Option<&'a Vec<usize>>,
    {
        let sets = self.sets.iter()
            .merge_join_by(other.sets.iter(), |a, b| a.cmp(b))
            .filter_map(keep)
            .cloned()
            .collect();
        Self { sets }
    }
}

/// Symmetric difference of two sorted vertex sets.
pub fn symmetric_difference(a: &[usize], b: &[usize]) -> Vec<usize> {
    a.iter()
        .merge_join_by(b.iter(), |x, y| x.cmp(y))
        .filter_map(|entry| match entry {
            EitherOrBoth::Left(&x) | EitherOrBoth::Right(&x) => Some(x),
            EitherOrBoth::Both(..) => None,
        })
        .collect()
}

/// If two sorted vertex sets differ in exactly one vertex, return it.
pub fn single_difference(a: &[usize], b: &[usize]) -> Option<usize> {
    // Sizes of sets differing by one vertex differ by exactly one.
    if a.len().abs_diff(b.len()) != 1 { return None }

    let mut diff = SmallVec::<[usize; 2]>::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let order = match (a.get(i), b.get(j)) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            _ => Ordering::Greater,
        };
        match order {
            Ordering::Equal => { i += 1; j += 1; continue }
            Ordering::Less => { diff.push(a[i]); i += 1 }
            Ordering::Greater => { diff.push(b[j]); j += 1 }
        }
        if diff.len() > 1 { return None }
    }

    diff.first().copied()
}

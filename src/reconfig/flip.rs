use crate::{
    graph::Graph,
    partition::{SetFamily, single_difference},
};

/// Decide whether two partitions are flip-adjacent, returning the moved vertex.
///
/// `a` and `b` are the parts of the two partitions, singleton parts included.
/// They are flip-adjacent when exactly two parts differ on each side, the
/// differing parts pair up so that each pair differs in the same single
/// vertex `v`, and `v` has a neighbor in both of `a`'s differing parts.
pub fn flip_vertex(graph: &Graph, a: &SetFamily, b: &SetFamily) -> Option<usize> {
    let changed = a.symmetric_difference(b);
    if changed.len() != 4 { return None }

    let (from, to) = (a.intersection(&changed), b.intersection(&changed));
    if from.len() != 2 || to.len() != 2 { return None }

    let (a1, a2) = (from.get(0), from.get(1));
    let pairings = [(to.get(0), to.get(1)), (to.get(1), to.get(0))];
    let (v1, v2) = pairings.iter().find_map(|&(b1, b2)| {
        Some((single_difference(a1, b1)?, single_difference(a2, b2)?))
    })?;
    if v1 != v2 { return None }

    let borders = |part: &[usize]| graph.edges(v1).any(|u| part.binary_search(&u).is_ok());
    (borders(a1) && borders(a2)).then_some(v1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Adjacency;

    fn family(sets: &[&[usize]]) -> SetFamily {
        SetFamily::new(sets.iter().map(|s| s.iter().copied()))
    }

    #[test]
    fn single_vertex_move_is_a_flip() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let a = family(&[&[0, 1], &[2, 3]]);
        let b = family(&[&[0], &[1, 2, 3]]);
        assert_eq!(flip_vertex(&graph, &a, &b), Some(1));
        assert_eq!(flip_vertex(&graph, &b, &a), Some(1));
    }

    #[test]
    fn two_vertex_move_is_not_a_flip() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let a = family(&[&[0], &[1, 2, 3]]);
        let b = family(&[&[0, 1, 2], &[3]]);
        assert_eq!(flip_vertex(&graph, &a, &b), None);
    }

    #[test]
    fn identical_partitions_are_not_adjacent() {
        let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
        let a = family(&[&[0], &[1]]);
        assert_eq!(flip_vertex(&graph, &a, &a.clone()), None);
    }

    #[test]
    fn more_than_two_changed_parts_is_not_a_flip() {
        let graph = Graph::from_edges(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]).unwrap();
        let a = family(&[&[0, 1], &[2, 3], &[4, 5]]);
        let b = family(&[&[0], &[1, 2, 3, 4], &[5]]);
        assert_eq!(flip_vertex(&graph, &a, &b), None);
    }

    #[test]
    fn unchanged_parts_are_ignored() {
        let graph = Graph::grid(2, 3, Adjacency::Rook).unwrap();
        // 0 1 2
        // 3 4 5
        let a = family(&[&[0, 3], &[1, 4], &[2, 5]]);
        let b = family(&[&[0, 3], &[1], &[2, 4, 5]]);
        assert_eq!(flip_vertex(&graph, &a, &b), Some(4));
    }

    #[test]
    fn differing_vertices_must_agree() {
        let graph = Graph::from_edges(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]).unwrap();
        let a = family(&[&[0, 1], &[2, 3]]);
        let b = family(&[&[0], &[1, 2, 3]]);
        assert_eq!(flip_vertex(&graph, &a, &b), Some(1));

        // Both pairs differ by one vertex, but not the same one.
        let c = family(&[&[0, 1, 2], &[3]]);
        let d = family(&[&[0, 1], &[3, 4]]);
        assert_eq!(flip_vertex(&graph, &c, &d), None);
    }

    #[test]
    fn moved_vertex_must_border_both_parts() {
        // 2 is isolated from {0} in this graph, so relabelling it is not a flip.
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let a = family(&[&[0], &[1, 2]]);
        let b = family(&[&[0, 2], &[1]]);
        assert_eq!(flip_vertex(&graph, &a, &b), None);
    }
}

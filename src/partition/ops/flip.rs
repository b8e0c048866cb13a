use std::collections::VecDeque;

use crate::{graph::Graph, partition::Partition};

impl Partition {
    /// Check if a node borders a given part.
    pub fn node_borders_part(&self, graph: &Graph, node: usize, part: usize) -> bool {
        assert!(node < self.num_nodes(), "node {} out of range", node);
        graph.edges(node).any(|v| self.part_of(v) == part)
    }

    /// Check if moving `node` into `part` keeps every part non-empty and connected.
    pub fn can_flip(&self, graph: &Graph, node: usize, part: usize) -> bool {
        assert!(node < self.num_nodes(), "node {} out of range", node);
        assert!(part < self.num_parts(), "part {} out of range [0, {})", part, self.num_parts());

        let prev = self.part_of(node);
        if prev == part { return false }

        // Ensure that `node` is adjacent to the new part.
        if !self.node_borders_part(graph, node, part) { return false }

        // Moving the last node out would leave an empty part.
        if self.part(prev).len() == 1 { return false }

        // Collect neighbors that are in the same part.
        let neighbors = graph.edges(node)
            .filter(|&v| self.part_of(v) == prev)
            .collect::<Vec<_>>();

        // If fewer than 2 same-part neighbors, removing `node` cannot disconnect the part.
        if neighbors.len() <= 1 { return true }

        // Track which same-part neighbors have been reached.
        let mut targets = vec![false; self.num_nodes()];
        neighbors.iter().for_each(|&v| targets[v] = true);

        // BFS from one neighbor within `prev`, forbidding `node`.
        let mut visited = vec![false; self.num_nodes()];
        visited[node] = true;
        visited[neighbors[0]] = true;

        let mut remaining = neighbors.len() - 1;
        let mut queue = VecDeque::from([neighbors[0]]);
        while let Some(u) = queue.pop_front() {
            for v in graph.edges(u) {
                if !visited[v] && self.part_of(v) == prev {
                    visited[v] = true;
                    queue.push_back(v);

                    // Early exit once every same-part neighbor has been reached.
                    if targets[v] { remaining -= 1; if remaining == 0 { return true } }
                }
            }
        }

        false
    }

    /// The partition obtained by moving `node` into `part`, or `None` if the
    /// move would empty or disconnect a part.
    pub fn flip(&self, graph: &Graph, node: usize, part: usize) -> Option<Partition> {
        if !self.can_flip(graph, node, part) { return None }

        let mut labels = self.assignments().to_vec();
        labels[node] = part;
        Some(Partition::from_assignments(graph, &labels))
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{Adjacency, Graph};
    use crate::partition::Partition;

    #[test]
    fn flip_moves_a_boundary_vertex() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let partition = Partition::from_assignments(&graph, &[0, 0, 1, 1]);

        let flipped = partition.flip(&graph, 1, 1).unwrap();
        assert_eq!(flipped, Partition::from_assignments(&graph, &[0, 1, 1, 1]));
        assert_eq!(flipped.part(1), &[1, 2, 3]);
    }

    #[test]
    fn flip_rejects_moves_that_empty_a_part() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let partition = Partition::from_assignments(&graph, &[0, 1, 1, 1]);
        assert!(!partition.can_flip(&graph, 0, 1));
        assert!(partition.flip(&graph, 0, 1).is_none());
    }

    #[test]
    fn flip_rejects_non_adjacent_target() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let partition = Partition::from_assignments(&graph, &[0, 0, 1, 1]);
        assert!(!partition.node_borders_part(&graph, 0, 1));
        assert!(!partition.can_flip(&graph, 0, 1));
        assert!(!partition.can_flip(&graph, 1, 0)); // already there
    }

    #[test]
    fn flip_rejects_moves_that_disconnect_the_source() {
        // 0 - 1 - 2 in part 0, 3 below 1 in part 1.
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (1, 3)]).unwrap();
        let partition = Partition::from_assignments(&graph, &[0, 0, 0, 1]);
        assert!(!partition.can_flip(&graph, 1, 1));
        assert!(!partition.can_flip(&graph, 3, 0)); // would empty part 1
    }

    #[test]
    fn flip_allows_moves_around_a_cycle() {
        let graph = Graph::grid(2, 2, Adjacency::Rook).unwrap();
        // {0, 1, 3} is the path 0 - 1 - 3, with 2 alone.
        let partition = Partition::from_assignments(&graph, &[0, 0, 1, 0]);
        assert!(!partition.can_flip(&graph, 1, 1)); // 1 does not border {2}
        assert!(partition.can_flip(&graph, 0, 1));
        assert!(partition.can_flip(&graph, 3, 1));

        let flipped = partition.flip(&graph, 3, 1).unwrap();
        assert_eq!(flipped.part(0), &[0, 1]);
        assert_eq!(flipped.part(1), &[2, 3]);
    }

    #[test]
    #[should_panic(expected = "part 2 out of range")]
    fn can_flip_panics_for_out_of_range_part() {
        let graph = Graph::from_edges(2, &[(0, 1)]).unwrap();
        Partition::from_assignments(&graph, &[0, 1]).can_flip(&graph, 0, 2);
    }
}

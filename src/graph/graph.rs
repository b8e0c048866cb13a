use std::collections::VecDeque;

use crate::error::{InvalidInput, Result};

/// An undirected, simple graph in compressed sparse row format.
///
/// Every undirected edge carries a stable id: edges are ordered by their
/// `(min, max)` endpoint pair and numbered `0..edge_count()`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    size: usize,
    offsets: Vec<u32>,
    edges: Vec<u32>,            // neighbor for each adjacency entry
    edge_ids: Vec<u32>,         // undirected edge id for each adjacency entry
    endpoints: Vec<(u32, u32)>, // endpoints[id] = (u, v) with u < v
}

impl Graph {
    /// Construct a graph from symmetric adjacency lists.
    pub fn new(num_nodes: usize, adjacency: &[Vec<u32>]) -> Self {
        assert!(adjacency.len() == num_nodes, "adjacency.len() must equal num_nodes");

        let mut pairs = Vec::new();
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &v in neighbors {
                let v = v as usize;
                assert!(v < num_nodes, "neighbor {v} of node {u} out of range");
                assert!(v != u, "self loop on node {u}");
                assert!(adjacency[v].contains(&(u as u32)), "adjacency must be symmetric ({u} -> {v})");
                if u < v { pairs.push((u as u32, v as u32)) }
            }
        }

        Self::from_pairs(num_nodes, pairs)
    }

    /// Construct a graph from an undirected edge list, validating every endpoint.
    /// Duplicate edges (in either orientation) are collapsed.
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut pairs = Vec::with_capacity(edges.len());
        for &(u, v) in edges {
            if u >= num_nodes || v >= num_nodes {
                return Err(InvalidInput::EdgeOutOfRange { u, v, nodes: num_nodes }.into());
            }
            if u == v { return Err(InvalidInput::SelfLoop { node: u }.into()) }
            pairs.push((u.min(v) as u32, u.max(v) as u32));
        }

        Ok(Self::from_pairs(num_nodes, pairs))
    }

    /// Build the CSR arrays from normalized `(min, max)` pairs.
    fn from_pairs(num_nodes: usize, mut pairs: Vec<(u32, u32)>) -> Self {
        pairs.sort_unstable();
        pairs.dedup();

        let mut adjacency = vec![Vec::<(u32, u32)>::new(); num_nodes];
        for (id, &(u, v)) in pairs.iter().enumerate() {
            adjacency[u as usize].push((v, id as u32));
            adjacency[v as usize].push((u, id as u32));
        }
        adjacency.iter_mut().for_each(|list| list.sort_unstable());

        Self {
            size: num_nodes,
            offsets: std::iter::once(0u32).chain(
                adjacency.iter()
                    .map(|v| v.len() as u32)
                    .scan(0u32, |acc, len| {*acc += len; Some(*acc)})
            ).collect::<Vec<u32>>(),
            edges: adjacency.iter().flatten().map(|&(v, _)| v).collect(),
            edge_ids: adjacency.iter().flatten().map(|&(_, id)| id).collect(),
            endpoints: pairs,
        }
    }

    /// Get the number of nodes in the graph.
    #[inline] pub fn node_count(&self) -> usize { self.size }

    /// Get the number of undirected edges in the graph.
    #[inline] pub fn edge_count(&self) -> usize { self.endpoints.len() }

    /// Get the range of adjacency entries for a given node.
    #[inline]
    fn range(&self, node: usize) -> std::ops::Range<usize> {
        self.offsets[node] as usize .. self.offsets[node + 1] as usize
    }

    /// Get the degree (number of neighbors) of a given node.
    #[inline] pub fn degree(&self, node: usize) -> usize { self.range(node).len() }

    /// Get the ith neighbor of a given node.
    #[inline]
    pub fn edge(&self, node: usize, i: usize) -> Option<usize> {
        self.range(node).nth(i).map(|v| self.edges[v] as usize)
    }

    /// Get an iterator over the neighbors of a given node, in ascending order.
    #[inline]
    pub fn edges(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.range(node).map(move |v| self.edges[v] as usize)
    }

    /// Get an iterator over the neighbors and edge ids of a given node.
    #[inline]
    pub fn edges_with_ids(&self, node: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.range(node).map(move |v| (self.edges[v] as usize, self.edge_ids[v] as usize))
    }

    /// Get the endpoints `(u, v)`, `u < v`, of an edge id.
    #[inline]
    pub fn endpoints(&self, edge: usize) -> (usize, usize) {
        let (u, v) = self.endpoints[edge];
        (u as usize, v as usize)
    }

    /// Iterator over all edges as `(u, v)` pairs in edge id order.
    pub fn edge_list(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.endpoints.iter().map(|&(u, v)| (u as usize, v as usize))
    }

    /// Get the id of the edge between `u` and `v`, if any.
    pub fn edge_id(&self, u: usize, v: usize) -> Option<usize> {
        let range = self.range(u);
        self.edges[range.clone()].binary_search(&(v as u32)).ok()
            .map(|i| self.edge_ids[range.start + i] as usize)
    }

    /// Check whether `u` and `v` are adjacent.
    #[inline] pub fn has_edge(&self, u: usize, v: usize) -> bool { self.edge_id(u, v).is_some() }

    /// Count the connected components of the whole graph.
    pub fn component_count(&self) -> usize {
        let mut visited = vec![false; self.size];
        let mut components = 0;
        for u in 0..self.size {
            if visited[u] { continue }
            components += 1;
            visited[u] = true;
            let mut queue = VecDeque::from([u]);
            while let Some(v) = queue.pop_front() {
                for w in self.edges(v) {
                    if !visited[w] { visited[w] = true; queue.push_back(w) }
                }
            }
        }
        components
    }

    /// Check whether the graph is connected. The empty graph is not.
    #[inline] pub fn is_connected(&self) -> bool { self.component_count() == 1 }

    /// Check whether `nodes` induce a connected subgraph. Empty sets are not connected.
    pub fn is_connected_subset(&self, nodes: &[usize]) -> bool {
        let Some(&start) = nodes.first() else { return false };

        let mut inside = vec![false; self.size];
        for &u in nodes {
            assert!(u < self.size, "node {u} out of range");
            inside[u] = true;
        }

        let mut visited = vec![false; self.size];
        visited[start] = true;
        let mut seen = 1;
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for v in self.edges(u) {
                if inside[v] && !visited[v] {
                    visited[v] = true;
                    seen += 1;
                    queue.push_back(v);
                }
            }
        }

        seen == inside.iter().filter(|&&b| b).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn make_test_graph() -> Graph {
        Graph::new(
            4,
            &[
                vec![1, 2],       // 0
                vec![0, 2],       // 1
                vec![0, 1, 3],    // 2
                vec![2],          // 3
            ],
        )
    }

    #[test]
    fn csr_graph_construction() {
        let graph = make_test_graph();

        // Basic counts
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);

        // Offsets are cumulative neighbor counts, len = nodes + 1
        assert_eq!(graph.offsets, vec![0, 2, 4, 7, 8]);
        assert_eq!(graph.edges, vec![1, 2, 0, 2, 0, 1, 3, 2]);

        // Edge ids follow the sorted (min, max) endpoint order
        assert_eq!(graph.edge_list().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
        assert_eq!(graph.edge_ids, vec![0, 1, 0, 2, 1, 2, 3, 3]);

        // Offsets must be non-decreasing
        for window in graph.offsets.windows(2) { assert!(window[0] <= window[1]) }
    }

    #[test]
    fn degree_and_edge_access() {
        let graph = make_test_graph();

        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(2), 3);
        assert_eq!(graph.degree(3), 1);

        assert_eq!(graph.edge(2, 0), Some(0));
        assert_eq!(graph.edge(2, 2), Some(3));
        assert_eq!(graph.edge(2, 3), None); // out-of-range within node
    }

    #[test]
    fn edge_iterators_and_ids() {
        let graph = make_test_graph();

        assert_eq!(graph.edges(2).collect::<Vec<_>>(), vec![0, 1, 3]);
        assert_eq!(graph.edges_with_ids(2).collect::<Vec<_>>(), vec![(0, 1), (1, 2), (3, 3)]);

        assert_eq!(graph.edge_id(2, 3), Some(3));
        assert_eq!(graph.edge_id(3, 2), Some(3));
        assert_eq!(graph.endpoints(3), (2, 3));
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(0, 3));
    }

    #[test]
    fn from_edges_collapses_duplicates() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 0), (2, 1), (0, 1)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph, Graph::new(3, &[vec![1], vec![0, 2], vec![1]]));
    }

    #[test]
    fn from_edges_rejects_bad_endpoints() {
        assert_eq!(
            Graph::from_edges(3, &[(0, 3)]),
            Err(Error::InvalidInput(InvalidInput::EdgeOutOfRange { u: 0, v: 3, nodes: 3 }))
        );
        assert_eq!(
            Graph::from_edges(3, &[(1, 1)]),
            Err(Error::InvalidInput(InvalidInput::SelfLoop { node: 1 }))
        );
    }

    #[test]
    fn connectivity() {
        let graph = make_test_graph();
        assert!(graph.is_connected());
        assert_eq!(graph.component_count(), 1);

        let split = Graph::from_edges(4, &[(0, 1), (2, 3)]).unwrap();
        assert_eq!(split.component_count(), 2);
        assert!(!split.is_connected());

        assert!(!Graph::default().is_connected());
    }

    #[test]
    fn connected_subsets() {
        let graph = make_test_graph();
        assert!(graph.is_connected_subset(&[0, 1]));
        assert!(graph.is_connected_subset(&[3]));
        assert!(graph.is_connected_subset(&[0, 3, 2]));
        assert!(!graph.is_connected_subset(&[0, 3]));
        assert!(!graph.is_connected_subset(&[]));
    }

    #[test]
    fn isolated_nodes_have_zero_degree_and_no_edges() {
        let graph = Graph::new(3, &[vec![], vec![], vec![]]);

        assert_eq!(graph.offsets, vec![0, 0, 0, 0]);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.component_count(), 3);

        for n in 0..3 {
            assert_eq!(graph.degree(n), 0);
            assert_eq!(graph.edge(n, 0), None);
            assert!(graph.edges(n).next().is_none());
        }
    }

    #[test]
    #[should_panic(expected = "adjacency.len() must equal num_nodes")]
    fn new_panics_when_adjacency_len_mismatch() {
        Graph::new(0, &[vec![]]);
    }

    #[test]
    #[should_panic(expected = "adjacency must be symmetric")]
    fn new_panics_on_asymmetric_adjacency() {
        Graph::new(2, &[vec![1], vec![]]);
    }

    #[test]
    #[should_panic]
    fn degree_panics_for_out_of_bounds_node() {
        let graph = make_test_graph();
        graph.degree(graph.node_count());
    }
}

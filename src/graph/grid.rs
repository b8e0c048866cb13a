use serde::{Deserialize, Serialize};

use crate::{error::{InvalidInput, Result}, graph::Graph};

/// Which neighboring cells of a grid share an edge.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Adjacency {
    /// North, south, east and west neighbors.
    #[default]
    Rook,
    /// Rook neighbors plus the four diagonals.
    Queen,
}

impl Graph {
    /// Build a `rows` x `cols` grid graph. Cells are numbered row-major,
    /// so cell `(r, c)` is vertex `r * cols + c`.
    pub fn grid(rows: usize, cols: usize, adjacency: Adjacency) -> Result<Self> {
        if rows == 0 || cols == 0 { return Err(InvalidInput::EmptyGraph.into()) }

        let offsets: &[(isize, isize)] = match adjacency {
            Adjacency::Rook => &[(0, 1), (1, 0)],
            Adjacency::Queen => &[(0, 1), (1, -1), (1, 0), (1, 1)],
        };

        let too_large = || InvalidInput::GridTooLarge { rows, cols };
        let nodes = rows.checked_mul(cols).ok_or_else(too_large)?;
        let capacity = nodes.checked_mul(offsets.len()).ok_or_else(too_large)?;
        if u32::try_from(nodes).is_err() { return Err(too_large().into()) }

        let mut edges = Vec::with_capacity(capacity);
        for r in 0..rows {
            for c in 0..cols {
                for &(dr, dc) in offsets {
                    let (nr, nc) = (r as isize + dr, c as isize + dc);
                    if nr < 0 || nc < 0 || nr >= rows as isize || nc >= cols as isize { continue }
                    edges.push((r * cols + c, nr as usize * cols + nc as usize));
                }
            }
        }

        Self::from_edges(nodes, &edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn rook_grid_2x2_is_a_four_cycle() {
        let graph = Graph::grid(2, 2, Adjacency::Rook).unwrap();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_list().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn rook_grid_edge_count() {
        // rows * (cols - 1) horizontal + (rows - 1) * cols vertical
        let graph = Graph::grid(3, 4, Adjacency::Rook).unwrap();
        assert_eq!(graph.node_count(), 12);
        assert_eq!(graph.edge_count(), 3 * 3 + 2 * 4);
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(5), 4);
    }

    #[test]
    fn queen_grid_adds_diagonals() {
        let graph = Graph::grid(3, 3, Adjacency::Queen).unwrap();
        assert_eq!(graph.edge_count(), 12 + 8);
        assert_eq!(graph.degree(4), 8);
        assert_eq!(graph.edges(0).collect::<Vec<_>>(), vec![1, 3, 4]);
        assert!(graph.has_edge(2, 4));
    }

    #[test]
    fn single_row_is_a_path() {
        let graph = Graph::grid(1, 4, Adjacency::Queen).unwrap();
        assert_eq!(graph.edge_list().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn oversized_grid_is_rejected() {
        assert_eq!(
            Graph::grid(usize::MAX, 2, Adjacency::Rook),
            Err(Error::InvalidInput(InvalidInput::GridTooLarge { rows: usize::MAX, cols: 2 }))
        );
        assert_eq!(
            Graph::grid(usize::MAX / 2, 1, Adjacency::Queen),
            Err(Error::InvalidInput(InvalidInput::GridTooLarge { rows: usize::MAX / 2, cols: 1 }))
        );
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(Graph::grid(0, 3, Adjacency::Rook), Err(Error::InvalidInput(InvalidInput::EmptyGraph)));
    }
}

//! Conversion of a graph into a dense adjacency matrix.

use std::{collections::HashMap, fmt};

use crate::graph::{Successors, VertexId};

/// A dense 0/1 adjacency matrix over the vertex order of a graph.
///
/// Cell `(i, j)` is `1` if vertex `i` has at least one edge to vertex `j`. Weights are
/// ignored and parallel edges collapse into a single `1`.
///
/// # Examples
///
/// ```rust
/// use isagraph::{Graph, graph::algorithms::AdjacencyMatrix};
///
/// let mut graph = Graph::new();
/// let a = graph.create_vertex();
/// let b = graph.create_vertex();
/// graph.connect(a, b)?;
/// graph.connect(b, b)?;
///
/// let matrix = AdjacencyMatrix::from_graph(&graph);
/// assert_eq!(matrix.as_rows(), vec![vec![0, 1], vec![0, 1]]);
/// assert_eq!(matrix.to_string(), "0 1 \n0 1 \n");
/// # Ok::<(), isagraph::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    dimension: usize,
    cells: Vec<u8>,
}

impl AdjacencyMatrix {
    /// Builds the adjacency matrix of `graph`.
    ///
    /// # Complexity
    ///
    /// O(V² + E)
    pub fn from_graph<G: Successors>(graph: &G) -> Self {
        let position: HashMap<VertexId, usize> = graph
            .vertex_ids()
            .enumerate()
            .map(|(i, v)| (v, i))
            .collect();
        let dimension = position.len();
        let mut cells = vec![0u8; dimension * dimension];

        for (i, vertex) in graph.vertex_ids().enumerate() {
            for neighbour in graph.successors(vertex) {
                if let Some(&j) = position.get(&neighbour) {
                    cells[i * dimension + j] = 1;
                }
            }
        }

        AdjacencyMatrix { dimension, cells }
    }

    /// Returns the number of rows, equal to the number of columns.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns cell `(row, column)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        if row >= self.dimension || column >= self.dimension {
            return None;
        }
        Some(self.cells[row * self.dimension + column])
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks_exact(0) would panic for the empty matrix
        self.cells.chunks_exact(self.dimension.max(1))
    }

    /// Returns the matrix as nested vectors.
    #[must_use]
    pub fn as_rows(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

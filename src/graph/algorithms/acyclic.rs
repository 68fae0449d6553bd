//! Cycle detection for directed graphs.
//!
//! The traversal keeps an explicit stack of frames, so path length is not bounded by the call
//! stack. Every vertex is used as a depth-first root in vertex order until all vertices have been
//! entered. The traversal tracks two sets: `visited` holds every vertex that was entered, and
//! `left` holds every vertex whose neighbours have all been explored. A neighbour that is
//! visited but not yet left lies on the current path, so the edge leading to it closes a
//! cycle. Detection stops at the first such edge.
//!
//! Self-loops are cycles. Parallel edges are harmless: once a neighbour has been entered,
//! further edges to it are only checked against the two sets.

use std::collections::HashSet;

use crate::graph::{Successors, VertexId};

/// Cycle detector bound to a graph.
///
/// The result is only meaningful after [`execute`](Self::execute); before that,
/// [`is_acyclic`](Self::is_acyclic) answers `false`.
///
/// # Examples
///
/// ```rust
/// use isagraph::{Graph, graph::algorithms::IsAcyclic};
///
/// let mut graph = Graph::new();
/// let a = graph.create_vertex();
/// let b = graph.create_vertex();
/// graph.connect(a, b)?;
///
/// let mut check = IsAcyclic::new(&graph);
/// check.execute();
/// assert!(check.is_acyclic());
/// # Ok::<(), isagraph::Error>(())
/// ```
#[derive(Debug)]
pub struct IsAcyclic<'g, G> {
    graph: &'g G,
    acyclic: bool,
}

impl<'g, G: Successors> IsAcyclic<'g, G> {
    /// Binds a detector to `graph`.
    pub fn new(graph: &'g G) -> Self {
        IsAcyclic {
            graph,
            acyclic: false,
        }
    }

    /// Runs the detection over the whole graph.
    ///
    /// May be called repeatedly; each run starts from scratch and sees the graph as it is now.
    pub fn execute(&mut self) {
        self.acyclic = find_cycle(self.graph).is_none();
    }

    /// Returns `true` if the last [`execute`](Self::execute) found no cycle.
    #[must_use]
    pub fn is_acyclic(&self) -> bool {
        self.acyclic
    }
}

/// Returns `true` if `graph` contains no directed cycle.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
pub fn is_acyclic<G: Successors>(graph: &G) -> bool {
    find_cycle(graph).is_none()
}

/// Finds a directed cycle if one exists.
///
/// Returns the vertices of the first cycle detected, starting and ending with the same
/// vertex. A self-loop yields `[v, v]`.
///
/// # Examples
///
/// ```rust
/// use isagraph::{Graph, graph::algorithms::find_cycle};
///
/// let mut graph = Graph::new();
/// let a = graph.create_vertex();
/// let b = graph.create_vertex();
/// let c = graph.create_vertex();
/// graph.connect(a, b)?;
/// graph.connect(b, c)?;
/// graph.connect(c, b)?;
///
/// assert_eq!(find_cycle(&graph), Some(vec![b, c, b]));
/// # Ok::<(), isagraph::Error>(())
/// ```
pub fn find_cycle<G: Successors>(graph: &G) -> Option<Vec<VertexId>> {
    let mut visited = HashSet::with_capacity(graph.order());
    let mut left = HashSet::with_capacity(graph.order());

    for root in graph.vertex_ids() {
        if !visited.insert(root) {
            continue;
        }

        // Each frame is a vertex on the current path and its unexplored successors.
        let mut path = vec![(root, graph.successors(root))];
        while let Some((vertex, successors)) = path.last_mut() {
            let vertex = *vertex;
            let Some(neighbour) = successors.next() else {
                path.pop();
                left.insert(vertex);
                continue;
            };

            if visited.insert(neighbour) {
                path.push((neighbour, graph.successors(neighbour)));
            } else if !left.contains(&neighbour) {
                // Back edge into the current path
                let start = path.iter().position(|(v, _)| *v == neighbour)?;
                let mut cycle: Vec<_> = path[start..].iter().map(|(v, _)| *v).collect();
                cycle.push(neighbour);
                return Some(cycle);
            }
        }
    }
    None
}

//! Depth-first search for the first vertex carrying a label.
//!
//! [`DepthSearch`] walks the graph depth-first, starting a new traversal from every vertex in
//! vertex order that has not been reached as a neighbour yet. Neighbours are visited in
//! adjacency order. A vertex is compared against the wanted label only after all of its
//! unvisited neighbours have been explored, and the search stops at the first match across
//! the whole graph.
//!
//! The recorded path runs from the root of the traversal that produced the match down to the
//! match itself. It is reset for every root, so a match found at a root yields a
//! single-vertex path.
//!
//! While walking, the search also notes every vertex with an odd out-degree. Those vertices
//! are reported through `tracing` and through
//! [`odd_degree_vertices`](DepthSearch::odd_degree_vertices); they have no effect on the result.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::graph::{Successors, VertexId, VertexLabels};

/// Labeled depth-first search bound to a graph.
///
/// # Examples
///
/// ```rust
/// use isagraph::{Graph, graph::algorithms::DepthSearch};
///
/// let mut graph = Graph::new();
/// let a = graph.create_labeled_vertex("A");
/// let b = graph.create_labeled_vertex("B");
/// let c = graph.create_labeled_vertex("C");
/// graph.connect(a, b)?;
/// graph.connect(b, c)?;
///
/// let mut search = DepthSearch::new(&graph);
/// search.set_label("C");
/// assert_eq!(search.execute(), Some(c));
/// assert_eq!(search.path(), &[a, b, c]);
/// # Ok::<(), isagraph::Error>(())
/// ```
#[derive(Debug)]
pub struct DepthSearch<'g, G> {
    graph: &'g G,
    label: String,
    path: Vec<VertexId>,
    found: Option<VertexId>,
    odd_degree: Vec<VertexId>,
}

impl<'g, G: Successors + VertexLabels> DepthSearch<'g, G> {
    /// Binds a search to `graph`. The wanted label starts out empty.
    pub fn new(graph: &'g G) -> Self {
        DepthSearch {
            graph,
            label: String::new(),
            path: Vec::new(),
            found: None,
            odd_degree: Vec::new(),
        }
    }

    /// Sets the label to search for.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Returns the label to search for.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Runs the search and returns the first matching vertex.
    ///
    /// Results of a previous run are discarded.
    pub fn execute(&mut self) -> Option<VertexId> {
        self.found = None;
        self.odd_degree.clear();
        let graph = self.graph;
        let mut visited = HashSet::with_capacity(graph.order());

        for root in graph.vertex_ids() {
            self.path.clear();
            if visited.contains(&root) {
                continue;
            }

            if let Some(found) = self.visit(&mut visited, root) {
                debug!(
                    vertex = %found,
                    root = %root,
                    path = ?self.path,
                    label = %self.label,
                    "vertex found"
                );
                self.found = Some(found);
                return self.found;
            }
            trace!(root = %root, label = %self.label, "label not reachable from root");
        }
        None
    }

    fn visit(&mut self, visited: &mut HashSet<VertexId>, vertex: VertexId) -> Option<VertexId> {
        let graph = self.graph;
        trace!(vertex = %vertex, "passing");
        self.path.push(vertex);

        let degree = graph.successors(vertex).count();
        if degree % 2 != 0 {
            trace!(vertex = %vertex, degree, "odd out-degree");
            self.odd_degree.push(vertex);
        }

        for neighbour in graph.successors(vertex) {
            if visited.insert(neighbour) {
                if let Some(found) = self.visit(visited, neighbour) {
                    return Some(found);
                }
            }
        }

        if graph.vertex_label(vertex) == Some(self.label.as_str()) {
            Some(vertex)
        } else {
            self.path.pop();
            None
        }
    }

    /// Returns the vertex found by the last run.
    #[must_use]
    pub fn found(&self) -> Option<VertexId> {
        self.found
    }

    /// Returns the path from the traversal root to the found vertex, both inclusive.
    ///
    /// Empty if the last run found nothing.
    #[must_use]
    pub fn path(&self) -> &[VertexId] {
        &self.path
    }

    /// Returns the vertices with an odd out-degree seen by the last run, in visiting order.
    #[must_use]
    pub fn odd_degree_vertices(&self) -> &[VertexId] {
        &self.odd_degree
    }
}

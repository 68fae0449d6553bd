//! Single-source shortest paths by label-correcting relaxation.
//!
//! [`ShortestPath`] implements Bellman's label-correcting method. Every vertex starts with an
//! upper bound on its distance from the start vertex: `0` for the start, infinity for all
//! others. A vertex is *usable* while one of its neighbours can be improved through it, using
//! the cheapest of any parallel edges. Each pass collects the usable vertices in vertex order
//! and relaxes all of their neighbours; the run ends when a pass finds no usable vertex.
//!
//! Unlike label-setting methods such as Dijkstra's, a vertex may be improved any number of
//! times, so negative edge weights are fine as long as no negative cycle is reachable from the
//! start. With a negative cycle the relaxation never reaches a fixpoint and, without a pass
//! limit, [`ShortestPath::execute`] does not return.
//!
//! # Pass Limit
//!
//! [`ShortestPath::with_pass_limit`] bounds the number of relaxation passes. When the limit
//! is reached while usable vertices remain, execution stops with
//! [`Error::PassLimitExceeded`]. A graph without negative cycles needs at most `V` passes.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    graph::{Graph, VertexId},
    Error, Result,
};

/// Shortest-path computation bound to a graph.
///
/// # Examples
///
/// ```rust
/// use isagraph::{Graph, graph::algorithms::ShortestPath};
///
/// let mut graph = Graph::new();
/// let a = graph.create_labeled_vertex("A");
/// let b = graph.create_labeled_vertex("B");
/// let c = graph.create_labeled_vertex("C");
/// graph.connect_weighted(a, b, "a->b", 1.0)?;
/// graph.connect_weighted(b, c, "b->c", 1.0)?;
/// graph.connect_weighted(a, c, "a->c", 5.0)?;
///
/// let mut sp = ShortestPath::new(&graph);
/// sp.set_start(a);
/// sp.execute()?;
///
/// assert_eq!(sp.distance(c), Some(2.0));
/// assert_eq!(sp.predecessor(c), Some(b));
/// assert_eq!(sp.path_to(c), Some(vec![a, b, c]));
/// # Ok::<(), isagraph::Error>(())
/// ```
#[derive(Debug)]
pub struct ShortestPath<'g> {
    graph: &'g Graph,
    start: Option<VertexId>,
    pass_limit: Option<usize>,
    distances: HashMap<VertexId, f64>,
    predecessors: HashMap<VertexId, VertexId>,
    passes: usize,
}

impl<'g> ShortestPath<'g> {
    /// Binds a computation to `graph`. No start vertex is set.
    pub fn new(graph: &'g Graph) -> Self {
        ShortestPath {
            graph,
            start: None,
            pass_limit: None,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            passes: 0,
        }
    }

    /// Bounds the number of relaxation passes.
    ///
    /// The default is unbounded.
    #[must_use]
    pub fn with_pass_limit(mut self, limit: usize) -> Self {
        self.pass_limit = Some(limit);
        self
    }

    /// Sets the vertex all distances are measured from.
    pub fn set_start(&mut self, start: VertexId) {
        self.start = Some(start);
    }

    /// Returns the start vertex, if set.
    #[must_use]
    pub fn start(&self) -> Option<VertexId> {
        self.start
    }

    /// Runs the relaxation to its fixpoint.
    ///
    /// Does nothing if no start vertex is set. Results of a previous run are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if the start vertex is not a member of the graph, or
    /// [`Error::PassLimitExceeded`] if a pass limit is set and the relaxation has not
    /// converged within it.
    pub fn execute(&mut self) -> Result<()> {
        let Some(start) = self.start else {
            return Ok(());
        };
        if !self.graph.contains_vertex(start) {
            return Err(Error::VertexNotFound(start));
        }

        self.init(start);

        let mut usable = self.usable_vertices();
        while !usable.is_empty() {
            if self.pass_limit.is_some_and(|limit| self.passes >= limit) {
                debug!(passes = self.passes, "shortest path did not converge");
                return Err(Error::PassLimitExceeded(self.passes));
            }
            self.passes += 1;
            trace!(pass = self.passes, usable = usable.len(), "relaxation pass");

            for &vertex in &usable {
                for neighbour in self.graph.neighbours(vertex) {
                    self.shorten(vertex, neighbour);
                }
            }
            usable = self.usable_vertices();
        }

        debug!(start = %start, passes = self.passes, "shortest paths converged");
        Ok(())
    }

    fn init(&mut self, start: VertexId) {
        self.distances.clear();
        self.predecessors.clear();
        self.passes = 0;

        for &vertex in self.graph.vertices() {
            let initial = if vertex == start { 0.0 } else { f64::INFINITY };
            self.distances.insert(vertex, initial);
        }
    }

    fn cheapest_weight(&self, from: VertexId, to: VertexId) -> Option<f64> {
        let edge = self.graph.cheapest_edge(from, to)?;
        self.graph.edge(edge).map(|e| e.weight())
    }

    fn current(&self, vertex: VertexId) -> f64 {
        self.distances
            .get(&vertex)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn improves(&self, from: VertexId, to: VertexId) -> Option<f64> {
        let candidate = self.current(from) + self.cheapest_weight(from, to)?;
        (candidate < self.current(to)).then_some(candidate)
    }

    fn is_usable(&self, vertex: VertexId) -> bool {
        self.graph
            .neighbours(vertex)
            .any(|neighbour| self.improves(vertex, neighbour).is_some())
    }

    fn usable_vertices(&self) -> Vec<VertexId> {
        self.graph
            .vertices()
            .iter()
            .copied()
            .filter(|&v| self.is_usable(v))
            .collect()
    }

    fn shorten(&mut self, from: VertexId, to: VertexId) {
        if let Some(distance) = self.improves(from, to) {
            self.distances.insert(to, distance);
            self.predecessors.insert(to, from);
        }
    }

    /// Returns the number of relaxation passes of the last run.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Returns the distance from the start to `vertex`.
    ///
    /// Unreachable vertices report [`f64::INFINITY`]. Returns `None` for vertices that were
    /// not part of the last run.
    #[must_use]
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.distances.get(&vertex).copied()
    }

    /// Returns the predecessor of `vertex` in the shortest-paths tree.
    ///
    /// The start vertex and unreachable vertices have no predecessor.
    #[must_use]
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(&vertex).copied()
    }

    /// Reconstructs the shortest path from the start to `vertex`, both inclusive.
    ///
    /// Returns `None` if `vertex` is unreachable or no run has completed.
    #[must_use]
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        let start = self.start?;
        if !self.distance(vertex)?.is_finite() {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while current != start {
            current = self.predecessor(current)?;
            path.push(current);
            // A chain longer than the graph can only come from an unfinished run.
            if path.len() > self.graph.order() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    fn reached(&self) -> Vec<VertexId> {
        self.graph
            .vertices()
            .iter()
            .copied()
            .filter(|&v| self.distance(v).is_some_and(f64::is_finite))
            .collect()
    }

    // Creates one fresh vertex per reached vertex, keeping labels and order.
    fn mirror_reached(&self) -> (Graph, HashMap<VertexId, VertexId>) {
        let reached = self.reached();
        let mut result = Graph::with_capacity(reached.len(), reached.len());
        let mut mapping = HashMap::with_capacity(reached.len());
        for vertex in reached {
            let label = self.graph.vertex_label(vertex).unwrap_or_default();
            mapping.insert(vertex, result.create_labeled_vertex(label));
        }
        (result, mapping)
    }

    /// Builds the distance graph of the last run.
    ///
    /// The result holds a fresh vertex for every reachable vertex, labelled like the original
    /// and in the original vertex order. The start vertex is joined to every one of them,
    /// itself included, by an edge whose weight is the distance.
    ///
    /// Returns an empty graph if no run has completed.
    #[must_use]
    pub fn distances(&self) -> Graph {
        let (mut result, mapping) = self.mirror_reached();
        let Some(&start) = self.start.and_then(|s| mapping.get(&s)) else {
            return result;
        };

        for &vertex in self.graph.vertices() {
            let (Some(&target), Some(distance)) = (mapping.get(&vertex), self.distance(vertex))
            else {
                continue;
            };
            if let Err(err) = result.connect_weighted(start, target, "", distance) {
                debug!(%err, "skipping distance edge");
            }
        }
        result
    }

    /// Builds the shortest-paths tree of the last run.
    ///
    /// The result holds a fresh vertex for every reachable vertex, labelled like the original
    /// and in the original vertex order. Every vertex with a predecessor is reached by an edge
    /// from that predecessor, weighted like the cheapest original edge between them.
    ///
    /// Returns an empty graph if no run has completed.
    #[must_use]
    pub fn shortest_paths_tree(&self) -> Graph {
        let (mut result, mapping) = self.mirror_reached();

        for &vertex in self.graph.vertices() {
            let Some(pred) = self.predecessor(vertex) else {
                continue;
            };
            let (Some(&tail), Some(&head)) = (mapping.get(&pred), mapping.get(&vertex)) else {
                continue;
            };
            let weight = self
                .cheapest_weight(pred, vertex)
                .unwrap_or(crate::graph::DEFAULT_WEIGHT);
            if let Err(err) = result.connect_weighted(tail, head, "", weight) {
                debug!(%err, "skipping tree edge");
            }
        }
        result
    }
}

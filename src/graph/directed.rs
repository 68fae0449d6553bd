//! Core directed graph implementation.
//!
//! This module provides [`Graph`], the aggregate owner of all vertices and edges. The graph is
//! the only place that creates, mutates or destroys them, and it announces every mutation on
//! the channels described in [`crate::graph::events`].
//!
//! # Storage
//!
//! Vertices and edges live in slot vectors indexed by their handle. Removing an element clears
//! its slot; slots are never reused. Insertion order is kept in two separate lists that back
//! [`Graph::vertices`] and [`Graph::edges`].

use std::{
    collections::HashMap,
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::{debug, trace, warn};

use crate::{
    graph::{
        edge::{Edge, EdgeId},
        events::{
            EdgeChange, EdgeChangeKind, EdgeSetChange, Listeners, SetChangeKind, VertexChange,
            VertexChangeKind, VertexSetChange,
        },
        traits::{GraphBase, Successors, VertexLabels},
        vertex::{Vertex, VertexId},
    },
    Error, Result,
};

/// Identifies the graph instance that issued a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct GraphTag(u64);

impl GraphTag {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        GraphTag(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GraphTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}

/// A directed multigraph with labeled vertices and labeled, weighted edges.
///
/// `Graph` owns an ordered set of vertices and an ordered set of edges. Edges are shared
/// between the global edge list and the adjacency list of their tail vertex; both are updated
/// together by the factory methods.
///
/// - Any number of edges may connect the same ordered pair of vertices
/// - Self-loops are allowed
/// - Undirected graphs are modeled with two opposing edges
///
/// # Handles
///
/// [`VertexId`] and [`EdgeId`] handles are bound to the graph that created them. Read
/// operations answer unknown handles with `None`, empty results or `false`, and removal of an
/// unknown handle is a no-op. Operations that would make the graph reference an unknown vertex
/// fail with [`Error::VertexNotFound`].
///
/// # Notifications
///
/// Every mutation is reported synchronously, after it has been applied, on the vertex-set,
/// edge-set, vertex and edge channels (see [`crate::graph::events`]).
///
/// # Examples
///
/// ```rust
/// use isagraph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.create_labeled_vertex("A");
/// let b = graph.create_labeled_vertex("B");
/// let c = graph.create_labeled_vertex("C");
///
/// graph.connect_weighted(a, b, "a->b", 3.0)?;
/// graph.connect_weighted(b, c, "b->c", 4.0)?;
///
/// assert_eq!(graph.order(), 3);
/// assert_eq!(graph.size(), 2);
/// assert!(graph.is_connected(a, b));
/// assert!(!graph.is_connected(b, a));
/// assert_eq!(graph.predecessors(c), vec![b]);
/// # Ok::<(), isagraph::Error>(())
/// ```
#[derive(Debug)]
pub struct Graph {
    tag: GraphTag,
    vertex_slots: Vec<Option<Vertex>>,
    edge_slots: Vec<Option<Edge>>,
    vertices: Vec<VertexId>,
    edges: Vec<EdgeId>,
    vertex_set_listeners: Listeners<VertexSetChange>,
    edge_set_listeners: Listeners<EdgeSetChange>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates a new empty graph with pre-allocated storage.
    ///
    /// # Arguments
    ///
    /// * `vertex_capacity` - Expected number of vertices
    /// * `edge_capacity` - Expected number of edges
    #[must_use]
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Graph {
            tag: GraphTag::next(),
            vertex_slots: Vec::with_capacity(vertex_capacity),
            edge_slots: Vec::with_capacity(edge_capacity),
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::with_capacity(edge_capacity),
            vertex_set_listeners: Listeners::new(),
            edge_set_listeners: Listeners::new(),
        }
    }

    // ============================================================================================
    // Vertex factory and queries
    // ============================================================================================

    /// Creates a new unlabeled vertex and appends it to the vertex list.
    ///
    /// Fires vertex-set-changed with [`SetChangeKind::Added`].
    pub fn create_vertex(&mut self) -> VertexId {
        let id = VertexId::new(self.tag, self.vertex_slots.len());
        self.vertex_slots.push(Some(Vertex::new()));
        self.vertices.push(id);
        trace!(vertex = %id, "created vertex");

        self.vertex_set_listeners.notify(&VertexSetChange {
            vertex: id,
            kind: SetChangeKind::Added,
        });
        id
    }

    /// Creates a new vertex carrying `label`.
    ///
    /// Fires vertex-set-changed with [`SetChangeKind::Added`], then vertex-changed with
    /// [`VertexChangeKind::LabelChanged`].
    pub fn create_labeled_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = self.create_vertex();
        self.assign_vertex_label(id, label.into());
        id
    }

    /// Returns `true` if `vertex` is a member of this graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertex(vertex).is_some()
    }

    /// Returns the state of `vertex`, or `None` if it is not a member.
    #[must_use]
    pub fn vertex(&self, vertex: VertexId) -> Option<&Vertex> {
        if vertex.graph != self.tag {
            return None;
        }
        self.vertex_slots.get(vertex.index)?.as_ref()
    }

    fn vertex_mut(&mut self, vertex: VertexId) -> Option<&mut Vertex> {
        if vertex.graph != self.tag {
            return None;
        }
        self.vertex_slots.get_mut(vertex.index)?.as_mut()
    }

    /// Returns all vertices in insertion order.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Returns the order of the graph, its number of vertices.
    #[must_use]
    pub fn order(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the label of `vertex`.
    #[must_use]
    pub fn vertex_label(&self, vertex: VertexId) -> Option<&str> {
        self.vertex(vertex).map(Vertex::label)
    }

    /// Returns the first vertex, in vertex order, whose label equals `label`.
    #[must_use]
    pub fn find_vertex(&self, label: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .copied()
            .find(|&v| self.vertex_label(v) == Some(label))
    }

    /// Assigns a new label to `vertex`.
    ///
    /// Fires vertex-changed with [`VertexChangeKind::LabelChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `vertex` is not a member.
    pub fn set_vertex_label(&mut self, vertex: VertexId, label: impl Into<String>) -> Result<()> {
        if !self.contains_vertex(vertex) {
            return Err(Error::VertexNotFound(vertex));
        }
        self.assign_vertex_label(vertex, label.into());
        Ok(())
    }

    fn assign_vertex_label(&mut self, vertex: VertexId, label: String) {
        if let Some(state) = self.vertex_mut(vertex) {
            state.label = label;
            self.fire_vertex(vertex, VertexChangeKind::LabelChanged);
        }
    }

    /// Returns the adjacency list of `vertex`, empty for unknown vertices.
    #[must_use]
    pub fn outgoing_edges(&self, vertex: VertexId) -> &[EdgeId] {
        match self.vertex(vertex) {
            Some(state) => state.outgoing_edges(),
            None => &[],
        }
    }

    /// Returns the neighbours of `vertex`: the head of every edge in its adjacency list.
    ///
    /// Parallel edges yield their head once per edge and a self-loop yields the vertex itself.
    /// Edges whose head was cleared are skipped.
    pub fn neighbours(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.outgoing_edges(vertex)
            .iter()
            .filter_map(move |&edge| self.edge(edge).and_then(Edge::head))
    }

    /// Returns every vertex with at least one neighbour equal to `target`, in vertex order.
    ///
    /// # Complexity
    ///
    /// O(V + E): every adjacency list is scanned.
    #[must_use]
    pub fn predecessors(&self, target: VertexId) -> Vec<VertexId> {
        self.vertices
            .iter()
            .copied()
            .filter(|&v| self.neighbours(v).any(|nb| nb == target))
            .collect()
    }

    /// Appends `edge` to the adjacency list of `vertex`.
    ///
    /// An edge only ever lives in its tail's list, so `vertex` must be the tail of `edge`;
    /// re-attaching after [`detach_edge`](Self::detach_edge) is the intended use. Adjacency
    /// lists hold each edge at most once: attaching an edge that is already present does
    /// nothing and fires nothing. Fires vertex-changed with [`VertexChangeKind::EdgeAttached`]
    /// otherwise.
    ///
    /// Returns `true` if the list changed. Unknown vertices or edges, and edges whose tail is
    /// another vertex, are ignored.
    pub fn attach_edge(&mut self, vertex: VertexId, edge: EdgeId) -> bool {
        if !self.edge(edge).is_some_and(|e| e.tail == Some(vertex)) {
            return false;
        }
        let Some(state) = self.vertex_mut(vertex) else {
            return false;
        };
        if state.outgoing.contains(&edge) {
            return false;
        }
        state.outgoing.push(edge);
        self.fire_vertex(vertex, VertexChangeKind::EdgeAttached(edge));
        true
    }

    /// Strips `edge` from the adjacency list of `vertex`.
    ///
    /// Fires vertex-changed with [`VertexChangeKind::EdgeDetached`] if the edge was present.
    /// Returns `true` if the list changed.
    pub fn detach_edge(&mut self, vertex: VertexId, edge: EdgeId) -> bool {
        let Some(state) = self.vertex_mut(vertex) else {
            return false;
        };
        let before = state.outgoing.len();
        state.outgoing.retain(|&e| e != edge);
        if state.outgoing.len() == before {
            return false;
        }
        self.fire_vertex(vertex, VertexChangeKind::EdgeDetached(edge));
        true
    }

    /// Removes `vertex` together with every edge that has it as head or tail.
    ///
    /// Incident edges are removed first, each through [`remove_edge`](Self::remove_edge) with
    /// its own notifications, in edge-list order. Afterwards the vertex leaves the vertex list
    /// and vertex-set-changed fires with [`SetChangeKind::Removed`].
    ///
    /// Returns `false`, firing nothing, if `vertex` is not a member.
    pub fn remove_vertex(&mut self, vertex: VertexId) -> bool {
        if !self.contains_vertex(vertex) {
            return false;
        }

        let incident: Vec<EdgeId> = self
            .edges
            .iter()
            .copied()
            .filter(|&e| {
                self.edge(e)
                    .is_some_and(|edge| edge.head == Some(vertex) || edge.tail == Some(vertex))
            })
            .collect();
        for edge in incident {
            self.remove_edge(edge);
        }

        self.vertices.retain(|&v| v != vertex);
        self.vertex_slots[vertex.index] = None;
        debug!(vertex = %vertex, "removed vertex");

        self.vertex_set_listeners.notify(&VertexSetChange {
            vertex,
            kind: SetChangeKind::Removed,
        });
        true
    }

    // ============================================================================================
    // Edge factory and queries
    // ============================================================================================

    /// Creates an unlabeled edge from `tail` to `head` with the default weight.
    ///
    /// The edge is appended to the global edge list and to the adjacency list of `tail`
    /// (vertex-changed fires on `tail`), then edge-set-changed fires with
    /// [`SetChangeKind::Added`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `tail` or `head` is not a member.
    pub fn connect(&mut self, tail: VertexId, head: VertexId) -> Result<EdgeId> {
        if !self.contains_vertex(tail) {
            return Err(Error::VertexNotFound(tail));
        }
        if !self.contains_vertex(head) {
            return Err(Error::VertexNotFound(head));
        }
        Ok(self.insert_edge(tail, head))
    }

    /// Creates a labeled edge from `tail` to `head` with the default weight.
    ///
    /// Fires the notifications of [`connect`](Self::connect), then edge-changed with
    /// [`EdgeChangeKind::LabelChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `tail` or `head` is not a member.
    pub fn connect_labeled(
        &mut self,
        tail: VertexId,
        head: VertexId,
        label: impl Into<String>,
    ) -> Result<EdgeId> {
        let edge = self.connect(tail, head)?;
        self.assign_edge_label(edge, label.into());
        Ok(edge)
    }

    /// Creates a labeled, weighted edge from `tail` to `head`.
    ///
    /// Fires the notifications of [`connect_labeled`](Self::connect_labeled), then edge-changed
    /// with [`EdgeChangeKind::WeightChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `tail` or `head` is not a member.
    pub fn connect_weighted(
        &mut self,
        tail: VertexId,
        head: VertexId,
        label: impl Into<String>,
        weight: f64,
    ) -> Result<EdgeId> {
        let edge = self.connect_labeled(tail, head, label)?;
        self.assign_edge_weight(edge, weight);
        Ok(edge)
    }

    // Callers guarantee that both endpoints are members.
    fn insert_edge(&mut self, tail: VertexId, head: VertexId) -> EdgeId {
        let id = EdgeId::new(self.tag, self.edge_slots.len());
        self.edge_slots.push(Some(Edge::new(tail, head)));
        self.edges.push(id);
        self.attach_edge(tail, id);
        trace!(edge = %id, tail = %tail, head = %head, "connected");

        self.edge_set_listeners.notify(&EdgeSetChange {
            edge: id,
            kind: SetChangeKind::Added,
        });
        id
    }

    /// Returns `true` if `edge` is a member of this graph.
    #[must_use]
    pub fn contains_edge(&self, edge: EdgeId) -> bool {
        self.edge(edge).is_some()
    }

    /// Returns the state of `edge`, or `None` if it is not a member.
    #[must_use]
    pub fn edge(&self, edge: EdgeId) -> Option<&Edge> {
        if edge.graph != self.tag {
            return None;
        }
        self.edge_slots.get(edge.index)?.as_ref()
    }

    fn edge_mut(&mut self, edge: EdgeId) -> Option<&mut Edge> {
        if edge.graph != self.tag {
            return None;
        }
        self.edge_slots.get_mut(edge.index)?.as_mut()
    }

    /// Returns all edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Returns every edge from `from` to `to`, in insertion order.
    #[must_use]
    pub fn edges_between(&self, from: VertexId, to: VertexId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .copied()
            .filter(|&e| {
                self.edge(e)
                    .is_some_and(|edge| edge.tail == Some(from) && edge.head == Some(to))
            })
            .collect()
    }

    /// Returns `true` if at least one edge leads from `from` to `to`.
    #[must_use]
    pub fn is_connected(&self, from: VertexId, to: VertexId) -> bool {
        self.edges.iter().any(|&e| {
            self.edge(e)
                .is_some_and(|edge| edge.tail == Some(from) && edge.head == Some(to))
        })
    }

    /// Returns the cheapest edge from `from` to `to`.
    ///
    /// Among parallel edges the first one with the minimal weight wins.
    #[must_use]
    pub fn cheapest_edge(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        let mut best: Option<(EdgeId, f64)> = None;
        for edge in self.edges_between(from, to) {
            let Some(weight) = self.edge(edge).map(Edge::weight) else {
                continue;
            };
            match best {
                Some((_, min)) if weight >= min => {}
                _ => best = Some((edge, weight)),
            }
        }
        best.map(|(edge, _)| edge)
    }

    /// Assigns a new label to `edge`.
    ///
    /// Fires edge-changed with [`EdgeChangeKind::LabelChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if `edge` is not a member.
    pub fn set_edge_label(&mut self, edge: EdgeId, label: impl Into<String>) -> Result<()> {
        if !self.contains_edge(edge) {
            return Err(Error::EdgeNotFound(edge));
        }
        self.assign_edge_label(edge, label.into());
        Ok(())
    }

    fn assign_edge_label(&mut self, edge: EdgeId, label: String) {
        if let Some(state) = self.edge_mut(edge) {
            state.label = label;
            self.fire_edge(edge, EdgeChangeKind::LabelChanged);
        }
    }

    /// Assigns a new weight to `edge`.
    ///
    /// Fires edge-changed with [`EdgeChangeKind::WeightChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if `edge` is not a member.
    pub fn set_edge_weight(&mut self, edge: EdgeId, weight: f64) -> Result<()> {
        if !self.contains_edge(edge) {
            return Err(Error::EdgeNotFound(edge));
        }
        self.assign_edge_weight(edge, weight);
        Ok(())
    }

    fn assign_edge_weight(&mut self, edge: EdgeId, weight: f64) {
        if let Some(state) = self.edge_mut(edge) {
            state.weight = weight;
            self.fire_edge(edge, EdgeChangeKind::WeightChanged);
        }
    }

    /// Reassigns or clears the head (target) of `edge`.
    ///
    /// Fires edge-changed with [`EdgeChangeKind::HeadChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if `edge` is not a member, or
    /// [`Error::VertexNotFound`] if `head` is given but is not a member.
    pub fn set_edge_head(&mut self, edge: EdgeId, head: Option<VertexId>) -> Result<()> {
        if let Some(vertex) = head {
            if !self.contains_vertex(vertex) {
                return Err(Error::VertexNotFound(vertex));
            }
        }
        let state = self.edge_mut(edge).ok_or(Error::EdgeNotFound(edge))?;
        state.head = head;
        self.fire_edge(edge, EdgeChangeKind::HeadChanged);
        Ok(())
    }

    /// Reassigns or clears the tail (source) of `edge`.
    ///
    /// The edge moves from the adjacency list of the old tail to the adjacency list of the new
    /// one, firing vertex-changed on both, then edge-changed fires with
    /// [`EdgeChangeKind::TailChanged`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if `edge` is not a member, or
    /// [`Error::VertexNotFound`] if `tail` is given but is not a member.
    pub fn set_edge_tail(&mut self, edge: EdgeId, tail: Option<VertexId>) -> Result<()> {
        if let Some(vertex) = tail {
            if !self.contains_vertex(vertex) {
                return Err(Error::VertexNotFound(vertex));
            }
        }
        let state = self.edge_mut(edge).ok_or(Error::EdgeNotFound(edge))?;
        let previous = std::mem::replace(&mut state.tail, tail);

        if let Some(old) = previous {
            self.detach_edge(old, edge);
        }
        if let Some(new) = tail {
            self.attach_edge(new, edge);
        }
        self.fire_edge(edge, EdgeChangeKind::TailChanged);
        Ok(())
    }

    /// Removes `edge` from every adjacency list and from the global edge list.
    ///
    /// Each adjacency list that held the edge fires vertex-changed with
    /// [`VertexChangeKind::EdgeDetached`]; afterwards edge-set-changed fires with
    /// [`SetChangeKind::Removed`]. Vertices whose list did not hold the edge, including its
    /// head, receive no vertex-changed event.
    ///
    /// Returns `false`, firing nothing, if `edge` is not a member.
    pub fn remove_edge(&mut self, edge: EdgeId) -> bool {
        if !self.contains_edge(edge) {
            return false;
        }

        let holders: Vec<VertexId> = self
            .vertices
            .iter()
            .copied()
            .filter(|&v| self.outgoing_edges(v).contains(&edge))
            .collect();
        for vertex in holders {
            self.detach_edge(vertex, edge);
        }

        self.edges.retain(|&e| e != edge);
        self.edge_slots[edge.index] = None;
        trace!(edge = %edge, "removed edge");

        self.edge_set_listeners.notify(&EdgeSetChange {
            edge,
            kind: SetChangeKind::Removed,
        });
        true
    }

    // ============================================================================================
    // Reproduction
    // ============================================================================================

    /// Produces a deep copy of this graph.
    ///
    /// The copy receives a fresh vertex for every vertex, in the same order and with the same
    /// label. Every connected edge is then re-created between the corresponding new vertices,
    /// in edge-list order, carrying the original label and the default weight: weights are
    /// **not** copied. Edges with a cleared head or tail are skipped and reported through
    /// `tracing`. Listeners are not copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use isagraph::{Graph, graph::DEFAULT_WEIGHT};
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.create_labeled_vertex("A");
    /// let b = graph.create_labeled_vertex("B");
    /// graph.connect_weighted(a, b, "a->b", 7.5)?;
    ///
    /// let copy = graph.copy();
    /// let edge = copy.edge(copy.edges()[0]).unwrap();
    /// assert_eq!(edge.label(), "a->b");
    /// assert_eq!(edge.weight(), DEFAULT_WEIGHT);
    /// # Ok::<(), isagraph::Error>(())
    /// ```
    #[must_use]
    pub fn copy(&self) -> Graph {
        let mut copy = Graph::with_capacity(self.order(), self.size());
        let mut mapping: HashMap<VertexId, VertexId> = HashMap::with_capacity(self.order());

        for &vertex in &self.vertices {
            let label = self.vertex_label(vertex).unwrap_or_default().to_string();
            mapping.insert(vertex, copy.create_labeled_vertex(label));
        }

        for &edge_id in &self.edges {
            let Some(edge) = self.edge(edge_id) else {
                continue;
            };
            let (Some(tail), Some(head)) = (edge.tail, edge.head) else {
                warn!(edge = %edge_id, label = edge.label(), "skipping unconnected edge during copy");
                continue;
            };
            let (Some(&new_tail), Some(&new_head)) = (mapping.get(&tail), mapping.get(&head))
            else {
                warn!(edge = %edge_id, label = edge.label(), "edge endpoints not in graph, not copied");
                continue;
            };

            let new_edge = copy.insert_edge(new_tail, new_head);
            copy.assign_edge_label(new_edge, edge.label.clone());
        }

        debug!(
            vertices = copy.order(),
            edges = copy.size(),
            skipped = self.size() - copy.size(),
            "copied graph"
        );
        copy
    }

    // ============================================================================================
    // Event management
    // ============================================================================================

    /// Returns the vertex-set-changed channel.
    pub fn on_vertex_set_change(&self) -> &Listeners<VertexSetChange> {
        &self.vertex_set_listeners
    }

    /// Returns the edge-set-changed channel.
    pub fn on_edge_set_change(&self) -> &Listeners<EdgeSetChange> {
        &self.edge_set_listeners
    }

    fn fire_vertex(&self, vertex: VertexId, kind: VertexChangeKind) {
        if let Some(state) = self.vertex(vertex) {
            state.listeners.notify(&VertexChange { vertex, kind });
        }
    }

    fn fire_edge(&self, edge: EdgeId, kind: EdgeChangeKind) {
        if let Some(state) = self.edge(edge) {
            state.listeners.notify(&EdgeChange { edge, kind });
        }
    }
}

impl GraphBase for Graph {
    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.vertices.iter().copied()
    }
}

impl Successors for Graph {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.neighbours(vertex)
    }
}

impl VertexLabels for Graph {
    fn vertex_label(&self, vertex: VertexId) -> Option<&str> {
        self.vertex(vertex).map(Vertex::label)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::{
        graph::{
            events::{EdgeChangeKind, SetChangeKind, VertexChangeKind},
            DEFAULT_WEIGHT,
        },
        Error, Graph,
    };

    /// Creates the four-vertex graph 1->2, 1->3, 1->4, 2->4, 3->4.
    fn create_sample_graph() -> (Graph, Vec<crate::graph::VertexId>) {
        let mut graph = Graph::new();
        let v: Vec<_> = (1..=4)
            .map(|i| graph.create_labeled_vertex(format!("Node {i}")))
            .collect();
        graph.connect_labeled(v[0], v[1], "N1->N2").unwrap();
        graph.connect_labeled(v[0], v[2], "N1->N3").unwrap();
        graph.connect_labeled(v[0], v[3], "N1->N4").unwrap();
        graph.connect_labeled(v[1], v[3], "N2->N4").unwrap();
        graph.connect_labeled(v[2], v[3], "N3->N4").unwrap();
        (graph, v)
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.order(), 0);
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_create_and_remove() {
        let (mut graph, v) = create_sample_graph();
        let e: Vec<_> = graph.edges().to_vec();

        assert_eq!(graph.vertices(), v.as_slice());
        assert_eq!(e.len(), 5);

        assert!(graph.remove_edge(e[0]));
        assert_eq!(graph.edges(), &e[1..]);
        assert!(!graph.outgoing_edges(v[0]).contains(&e[0]));

        assert!(graph.remove_vertex(v[3]));
        assert_eq!(graph.vertices(), &v[..3]);
        assert_eq!(graph.edges(), &[e[1]]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let (mut graph, v) = create_sample_graph();
        let e = graph.edges()[0];
        assert!(graph.remove_edge(e));
        assert!(!graph.remove_edge(e));

        assert!(graph.remove_vertex(v[0]));
        assert!(!graph.remove_vertex(v[0]));
        assert_eq!(graph.order(), 3);
    }

    #[test]
    fn test_connect_rejects_foreign_vertices() {
        let mut graph = Graph::new();
        let a = graph.create_vertex();
        let mut other = Graph::new();
        let foreign = other.create_vertex();

        assert_eq!(graph.connect(a, foreign), Err(Error::VertexNotFound(foreign)));
        assert_eq!(graph.connect(foreign, a), Err(Error::VertexNotFound(foreign)));
        assert_eq!(graph.size(), 0);
    }

    #[test]
    fn test_multigraph_edges_between() {
        let mut graph = Graph::new();
        let a = graph.create_vertex();
        let b = graph.create_vertex();
        let e1 = graph.connect_weighted(a, b, "slow", 5.0).unwrap();
        let e2 = graph.connect_weighted(a, b, "fast", 2.0).unwrap();
        let e3 = graph.connect_weighted(a, b, "also fast", 2.0).unwrap();

        assert_eq!(graph.edges_between(a, b), vec![e1, e2, e3]);
        assert!(graph.edges_between(b, a).is_empty());
        assert_eq!(graph.cheapest_edge(a, b), Some(e2));
        assert_eq!(graph.cheapest_edge(b, a), None);
        assert_eq!(graph.neighbours(a).collect::<Vec<_>>(), vec![b, b, b]);
    }

    #[test]
    fn test_self_loop_neighbours_and_predecessors() {
        let mut graph = Graph::new();
        let a = graph.create_vertex();
        let b = graph.create_vertex();
        graph.connect(a, a).unwrap();
        graph.connect(b, a).unwrap();

        assert_eq!(graph.neighbours(a).collect::<Vec<_>>(), vec![a]);
        assert_eq!(graph.predecessors(a), vec![a, b]);
        assert!(graph.predecessors(b).is_empty());
    }

    #[test]
    fn test_attach_edge_deduplicates() {
        let mut graph = Graph::new();
        let a = graph.create_vertex();
        let b = graph.create_vertex();
        let e = graph.connect(a, b).unwrap();

        let events = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&events);
        graph.vertex(a).unwrap().listeners().subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });

        assert!(!graph.attach_edge(a, e));
        assert_eq!(graph.outgoing_edges(a), &[e]);
        assert_eq!(*events.lock().unwrap(), 0);

        assert!(graph.detach_edge(a, e));
        assert!(!graph.detach_edge(a, e));
        assert!(graph.attach_edge(a, e));
        assert_eq!(*events.lock().unwrap(), 2);
    }

    #[test]
    fn test_attach_edge_requires_tail() {
        let mut graph = Graph::new();
        let a = graph.create_vertex();
        let b = graph.create_vertex();
        let e = graph.connect(a, b).unwrap();

        let events = Arc::new(Mutex::new(0usize));
        let sink = Arc::clone(&events);
        graph.vertex(b).unwrap().listeners().subscribe(move |_| {
            *sink.lock().unwrap() += 1;
        });

        assert!(!graph.attach_edge(b, e));
        assert!(graph.outgoing_edges(b).is_empty());
        assert_eq!(*events.lock().unwrap(), 0);

        // Moving the tail leaves no stale entry behind.
        let c = graph.create_vertex();
        graph.set_edge_tail(e, Some(c)).unwrap();
        assert!(graph.outgoing_edges(a).is_empty());
        assert!(graph.outgoing_edges(b).is_empty());
        assert_eq!(graph.outgoing_edges(c), &[e]);
    }

    #[test]
    fn test_remove_edge_only_notifies_holders() {
        let mut graph = Graph::new();
        let a = graph.create_vertex();
        let b = graph.create_vertex();
        let bystander = graph.create_vertex();
        let e = graph.connect(a, b).unwrap();

        let log = Arc::new(Mutex::new(Vec::new()));
        for (name, vertex) in [("a", a), ("b", b), ("bystander", bystander)] {
            let sink = Arc::clone(&log);
            graph.vertex(vertex).unwrap().listeners().subscribe(move |event| {
                sink.lock().unwrap().push(format!("{name} {}", event.kind));
            });
        }

        assert!(graph.remove_edge(e));
        assert_eq!(*log.lock().unwrap(), vec!["a EdgeDetached"]);
    }

    #[test]
    fn test_notification_sequence_for_connect_and_remove() {
        let mut graph = Graph::new();
        let a = graph.create_labeled_vertex("A");
        let b = graph.create_labeled_vertex("B");

        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        graph.on_edge_set_change().subscribe(move |event| {
            sink.lock().unwrap().push(format!("edge-set {}", event.kind));
        });
        let sink = Arc::clone(&log);
        graph.vertex(a).unwrap().listeners().subscribe(move |event| {
            sink.lock().unwrap().push(format!("vertex {}", event.kind));
        });
        let sink = Arc::clone(&log);
        graph.on_vertex_set_change().subscribe(move |event| {
            sink.lock().unwrap().push(format!("vertex-set {}", event.kind));
        });

        graph.connect(a, b).unwrap();
        graph.remove_vertex(b);

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "vertex EdgeAttached",
                "edge-set Added",
                "vertex EdgeDetached",
                "edge-set Removed",
                "vertex-set Removed",
            ]
        );
    }

    #[test]
    fn test_edge_setters_fire_edge_changes() {
        let mut graph = Graph::new();
        let a = graph.create_vertex();
        let b = graph.create_vertex();
        let e = graph.connect(a, b).unwrap();

        let kinds = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&kinds);
        graph.edge(e).unwrap().listeners().subscribe(move |change| {
            sink.lock().unwrap().push(change.kind);
        });

        graph.set_edge_label(e, "x").unwrap();
        graph.set_edge_weight(e, 2.5).unwrap();
        graph.set_edge_head(e, Some(a)).unwrap();
        graph.set_edge_tail(e, Some(b)).unwrap();

        assert_eq!(
            *kinds.lock().unwrap(),
            vec![
                EdgeChangeKind::LabelChanged,
                EdgeChangeKind::WeightChanged,
                EdgeChangeKind::HeadChanged,
                EdgeChangeKind::TailChanged,
            ]
        );
        assert!(graph.outgoing_edges(a).is_empty());
        assert_eq!(graph.outgoing_edges(b), &[e]);
        assert_eq!(graph.neighbours(b).collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn test_labeled_vertex_fires_set_then_label() {
        let mut graph = Graph::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        graph.on_vertex_set_change().subscribe(move |event| {
            assert_eq!(event.kind, SetChangeKind::Added);
            sink.lock().unwrap().push(event.vertex);
        });

        let v = graph.create_labeled_vertex("X");
        assert_eq!(*log.lock().unwrap(), vec![v]);
        assert_eq!(graph.vertex_label(v), Some("X"));
        assert_eq!(graph.find_vertex("X"), Some(v));

        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&changes);
        graph.vertex(v).unwrap().listeners().subscribe(move |event| {
            sink.lock().unwrap().push(event.kind);
        });
        graph.set_vertex_label(v, "Y").unwrap();
        assert_eq!(*changes.lock().unwrap(), vec![VertexChangeKind::LabelChanged]);
    }

    #[test]
    fn test_setters_reject_unknown_handles() {
        let (mut graph, v) = create_sample_graph();
        let e = graph.edges()[0];
        graph.remove_edge(e);
        graph.remove_vertex(v[1]);

        assert_eq!(graph.set_edge_label(e, "x"), Err(Error::EdgeNotFound(e)));
        assert_eq!(graph.set_edge_weight(e, 1.0), Err(Error::EdgeNotFound(e)));
        assert_eq!(graph.set_vertex_label(v[1], "x"), Err(Error::VertexNotFound(v[1])));

        let live = graph.edges()[0];
        assert_eq!(
            graph.set_edge_head(live, Some(v[1])),
            Err(Error::VertexNotFound(v[1]))
        );
    }

    #[test]
    fn test_copy_preserves_labels_not_weights() {
        let mut graph = Graph::new();
        let a = graph.create_labeled_vertex("A");
        let b = graph.create_labeled_vertex("B");
        let c = graph.create_labeled_vertex("C");
        graph.connect_weighted(a, b, "a->b", 3.0).unwrap();
        graph.connect_weighted(b, c, "b->c", 0.3).unwrap();
        let dangling = graph.connect_labeled(c, a, "dangling").unwrap();
        graph.set_edge_head(dangling, None).unwrap();

        let copy = graph.copy();
        assert_eq!(copy.order(), 3);
        assert_eq!(copy.size(), 2);

        let labels: Vec<_> = copy
            .vertices()
            .iter()
            .map(|&v| copy.vertex_label(v).unwrap())
            .collect();
        assert_eq!(labels, vec!["A", "B", "C"]);

        for (&edge, expected) in copy.edges().iter().zip(["a->b", "b->c"]) {
            let state = copy.edge(edge).unwrap();
            assert_eq!(state.label(), expected);
            assert!((state.weight() - DEFAULT_WEIGHT).abs() < f64::EPSILON);
        }

        let (ca, cb) = (copy.vertices()[0], copy.vertices()[1]);
        assert!(copy.is_connected(ca, cb));
        assert!(!copy.contains_vertex(a));
        assert!(!graph.contains_vertex(ca));
    }
}

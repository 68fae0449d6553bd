//! Vertex handles and vertex state.
//!
//! This module provides the [`VertexId`] type, a strongly-typed handle for vertices owned by a
//! [`Graph`](crate::Graph), and [`Vertex`], the state stored behind it.

use std::fmt;

use crate::graph::{
    directed::GraphTag,
    edge::EdgeId,
    events::{Listeners, VertexChange},
};

/// A strongly-typed handle for a vertex within a [`Graph`](crate::Graph).
///
/// `VertexId` identifies a vertex by reference, never by label: two vertices with the same label
/// are distinct. A handle remembers the graph instance that issued it, so handles from a
/// different graph (including a [`copy`](crate::Graph::copy)) are never mistaken for members.
/// Slots are not reused, which keeps a handle from ever aliasing a vertex created after the
/// original was removed.
///
/// # Examples
///
/// ```rust
/// use isagraph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.create_labeled_vertex("same");
/// let b = graph.create_labeled_vertex("same");
///
/// assert_ne!(a, b);
/// assert_eq!(a.index(), 0);
/// assert_eq!(b.index(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    pub(crate) graph: GraphTag,
    pub(crate) index: usize,
}

impl VertexId {
    #[inline]
    pub(crate) const fn new(graph: GraphTag, index: usize) -> Self {
        VertexId { graph, index }
    }

    /// Returns the slot index of this vertex inside its graph.
    ///
    /// Indices are assigned sequentially starting from 0 and are never reused within one graph.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({}:{})", self.graph, self.index)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index)
    }
}

/// State of a single vertex.
///
/// A vertex carries a label and its adjacency list: the ordered, identity-deduplicated list of
/// edges leaving it. The neighbours of a vertex are the heads of those edges, in list order,
/// including duplicates for parallel edges and the vertex itself for self-loops.
///
/// Vertices are created exclusively by [`Graph::create_vertex`](crate::Graph::create_vertex) and
/// can only be mutated through the graph, which announces every change on
/// [`listeners`](Self::listeners).
#[derive(Debug)]
pub struct Vertex {
    pub(crate) label: String,
    pub(crate) outgoing: Vec<EdgeId>,
    pub(crate) listeners: Listeners<VertexChange>,
}

impl Vertex {
    pub(crate) fn new() -> Self {
        Vertex {
            label: String::new(),
            outgoing: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    /// Returns the label, empty unless one was assigned.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the adjacency list in insertion order.
    #[must_use]
    pub fn outgoing_edges(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Returns the number of edges in the adjacency list.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    /// Returns the vertex-changed channel of this vertex.
    pub fn listeners(&self) -> &Listeners<VertexChange> {
        &self.listeners
    }
}

//! Edge handles and edge state.
//!
//! This module provides the [`EdgeId`] type, a strongly-typed handle for edges owned by a
//! [`Graph`](crate::Graph), and [`Edge`], the directed, labeled, weighted connection stored
//! behind it.

use std::fmt;

use crate::graph::{
    directed::GraphTag,
    events::{EdgeChange, Listeners},
    vertex::VertexId,
};

/// Weight assigned to edges created without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A strongly-typed handle for an edge within a [`Graph`](crate::Graph).
///
/// Every call to [`Graph::connect`](crate::Graph::connect) produces a distinct `EdgeId`, even
/// when an edge between the same endpoints already exists, which is what makes the graph a
/// multigraph.
///
/// # Examples
///
/// ```rust
/// use isagraph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.create_vertex();
/// let b = graph.create_vertex();
///
/// let first = graph.connect(a, b)?;
/// let second = graph.connect(a, b)?;
///
/// assert_ne!(first, second);
/// assert_eq!(graph.edges_between(a, b), vec![first, second]);
/// # Ok::<(), isagraph::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId {
    pub(crate) graph: GraphTag,
    pub(crate) index: usize,
}

impl EdgeId {
    #[inline]
    pub(crate) const fn new(graph: GraphTag, index: usize) -> Self {
        EdgeId { graph, index }
    }

    /// Returns the slot index of this edge inside its graph.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.index
    }
}

impl fmt::Debug for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({}:{})", self.graph, self.index)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.index)
    }
}

/// State of a single directed edge.
///
/// An edge runs from its `tail` (source) to its `head` (target). Either endpoint may be
/// cleared after construction through [`Graph::set_edge_head`](crate::Graph::set_edge_head) or
/// [`Graph::set_edge_tail`](crate::Graph::set_edge_tail); such an edge is no longer
/// [`connected`](Self::is_connected) and is skipped by [`Graph::copy`](crate::Graph::copy).
#[derive(Debug)]
pub struct Edge {
    pub(crate) tail: Option<VertexId>,
    pub(crate) head: Option<VertexId>,
    pub(crate) label: String,
    pub(crate) weight: f64,
    pub(crate) listeners: Listeners<EdgeChange>,
}

impl Edge {
    pub(crate) fn new(tail: VertexId, head: VertexId) -> Self {
        Edge {
            tail: Some(tail),
            head: Some(head),
            label: String::new(),
            weight: DEFAULT_WEIGHT,
            listeners: Listeners::new(),
        }
    }

    /// Returns the source vertex, if set.
    #[must_use]
    pub fn tail(&self) -> Option<VertexId> {
        self.tail
    }

    /// Returns the target vertex, if set.
    #[must_use]
    pub fn head(&self) -> Option<VertexId> {
        self.head
    }

    /// Returns the label, empty unless one was assigned.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the weight, [`DEFAULT_WEIGHT`] unless one was assigned.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns `true` if both endpoints are set.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.head.is_some() && self.tail.is_some()
    }

    /// Returns the edge-changed channel of this edge.
    pub fn listeners(&self) -> &Listeners<EdgeChange> {
        &self.listeners
    }
}

//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`crate::graph::algorithms`] are written against these traits instead of a
//! concrete graph type. [`Graph`](crate::Graph) implements all of them, and
//! [`TypeHierarchy`](crate::TypeHierarchy) forwards them to the graph it wraps, so every
//! read-only algorithm runs unchanged on both.
//!
//! # Architecture
//!
//! - [`GraphBase`] - Core properties: order and vertex iteration
//! - [`Successors`] - Forward traversal along adjacency lists
//! - [`VertexLabels`] - Access to vertex labels
//!
//! All adjacency queries return iterators rather than collections, enabling lazy evaluation and
//! avoiding allocations for simple traversals.

use crate::graph::VertexId;

/// Base trait providing core graph properties.
///
/// # Examples
///
/// ```rust
/// use isagraph::{Graph, graph::GraphBase};
///
/// let mut graph = Graph::new();
/// graph.create_labeled_vertex("A");
/// graph.create_labeled_vertex("B");
///
/// assert_eq!(GraphBase::order(&graph), 2);
/// assert_eq!(graph.vertex_ids().count(), 2);
/// ```
pub trait GraphBase {
    /// Returns the number of vertices in the graph.
    fn order(&self) -> usize;

    /// Returns an iterator over all vertices in insertion order.
    fn vertex_ids(&self) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns the neighbours of `vertex`: the head of every edge in its adjacency list.
    ///
    /// The iteration follows adjacency-list order and yields a vertex once per parallel edge.
    /// Unknown vertices yield nothing.
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId>;
}

/// Trait for graphs whose vertices carry labels.
pub trait VertexLabels: GraphBase {
    /// Returns the label of `vertex`, or `None` if the vertex is unknown.
    fn vertex_label(&self, vertex: VertexId) -> Option<&str>;
}

use thiserror::Error;

use crate::graph::{EdgeId, VertexId};

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most read operations on a [`crate::Graph`] are tolerant and answer foreign or removed handles
/// with `None`, empty sequences or `false`. Errors are reserved for operations that would leave
/// the graph referencing something it does not own, for the invariants of a
/// [`crate::TypeHierarchy`], and for the optional pass limit of the shortest-path relaxation.
///
/// # Error Categories
///
/// ## Handle Errors
/// - [`Error::VertexNotFound`] - A vertex handle is not a member of the graph
/// - [`Error::EdgeNotFound`] - An edge handle is not a member of the graph
///
/// ## Hierarchy Errors
/// - [`Error::Hierarchy`] - A type hierarchy operation was rejected, see [`HierarchyError`]
///
/// ## Algorithm Errors
/// - [`Error::PassLimitExceeded`] - Shortest-path relaxation did not converge within its limit
///
/// # Examples
///
/// ```rust
/// use isagraph::{Error, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.create_labeled_vertex("a");
/// let mut other = Graph::new();
/// let foreign = other.create_vertex();
///
/// match graph.connect(a, foreign) {
///     Err(Error::VertexNotFound(vertex)) => assert_eq!(vertex, foreign),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The vertex is not a member of the graph.
    ///
    /// Returned by factory operations such as [`crate::Graph::connect`] that would otherwise
    /// create an edge pointing at a vertex the graph does not own.
    #[error("Vertex {0} is not part of this graph")]
    VertexNotFound(VertexId),

    /// The edge is not a member of the graph.
    #[error("Edge {0} is not part of this graph")]
    EdgeNotFound(EdgeId),

    /// A type hierarchy operation was rejected.
    ///
    /// The wrapped [`HierarchyError`] describes which argument or invariant was violated.
    #[error("{0}")]
    Hierarchy(#[from] HierarchyError),

    /// Shortest-path relaxation hit its configured pass limit.
    ///
    /// Only produced when a limit was set through
    /// [`crate::graph::algorithms::ShortestPath::with_pass_limit`]. Without a limit the
    /// relaxation runs until it reaches a fixpoint, which never happens in the presence of a
    /// negative-weight cycle.
    #[error("Shortest path relaxation did not converge within {0} passes")]
    PassLimitExceeded(usize),
}

/// Errors raised by [`crate::TypeHierarchy`] operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The subtype argument is not part of the hierarchy.
    #[error("Type {0} is not part of the type hierarchy")]
    UnknownType(VertexId),

    /// The supertype argument is not part of the hierarchy.
    #[error("Supertype {0} is not part of the type hierarchy")]
    UnknownSupertype(VertexId),

    /// Adding the subtype relation introduced a cycle.
    #[error("Declaring {sub} a subtype of {sup} makes the hierarchy cyclic")]
    Cycle {
        /// The subtype of the rejected relation
        sub: VertexId,
        /// The supertype of the rejected relation
        sup: VertexId,
    },
}

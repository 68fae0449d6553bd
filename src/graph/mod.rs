//! Directed multigraphs with change notification.
//!
//! This module provides the graph data model and the algorithms that run over it. A
//! [`Graph`] owns its vertices and edges and is the only place that mutates them; every
//! mutation is announced on the channels in [`events`].
//!
//! # Architecture
//!
//! - **Core Types**: [`VertexId`], [`EdgeId`] and [`Graph`] form the data model, with
//!   [`Vertex`] and [`Edge`] holding the per-element state
//! - **Events**: [`Listeners`] registries for vertex, edge, vertex-set and edge-set changes
//! - **Traits**: [`GraphBase`], [`Successors`] and [`VertexLabels`] let the algorithms run on
//!   any graph-shaped type, including [`TypeHierarchy`](crate::TypeHierarchy)
//! - **Algorithms**: cycle detection, label-correcting shortest paths, labeled depth-first
//!   search and adjacency-matrix conversion in [`algorithms`]
//!
//! # Design Principles
//!
//! ## Strongly-Typed Identifiers
//!
//! Vertex and edge handles are newtypes bound to the graph that created them. Identity is
//! never derived from labels, so equally labeled vertices stay distinct.
//!
//! ## Multigraph Semantics
//!
//! Any number of edges may join the same ordered pair of vertices. Queries that need a single
//! edge, such as shortest-path relaxation, pick the cheapest one.
//!
//! ## Notify After Mutate
//!
//! Notifications are delivered synchronously on the mutating thread once the graph is back in
//! a consistent state. Callbacks receive shared event payloads and cannot mutate the graph.
//!
//! # Usage Examples
//!
//! ```rust
//! use isagraph::graph::{algorithms, Graph};
//!
//! // Diamond: A -> B, A -> C, B -> D, C -> D
//! let mut graph = Graph::new();
//! let a = graph.create_labeled_vertex("A");
//! let b = graph.create_labeled_vertex("B");
//! let c = graph.create_labeled_vertex("C");
//! let d = graph.create_labeled_vertex("D");
//!
//! graph.connect(a, b)?;
//! graph.connect(a, c)?;
//! graph.connect(b, d)?;
//! graph.connect(c, d)?;
//!
//! assert!(algorithms::is_acyclic(&graph));
//!
//! graph.connect(d, a)?;
//! assert!(!algorithms::is_acyclic(&graph));
//! # Ok::<(), isagraph::Error>(())
//! ```

mod directed;
mod dump;
mod edge;
mod traits;
mod vertex;

pub mod algorithms;
pub mod events;

pub use directed::Graph;
pub use dump::{EdgeDump, VertexDump};
pub use edge::{Edge, EdgeId, DEFAULT_WEIGHT};
pub use events::{
    EdgeChange, EdgeChangeKind, EdgeSetChange, Listeners, SetChangeKind, SubscriptionId,
    VertexChange, VertexChangeKind, VertexSetChange,
};
pub use traits::{GraphBase, Successors, VertexLabels};
pub use vertex::{Vertex, VertexId};

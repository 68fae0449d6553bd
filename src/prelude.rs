//! # isagraph Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the isagraph library.
//!
//! ```rust
//! use isagraph::prelude::*;
//!
//! let mut types = TypeHierarchy::new();
//! let pet = types.create_type("pet");
//! types.set_is_subtype_of(pet, None)?;
//! assert!(is_acyclic(&types));
//! # Ok::<(), Error>(())
//! ```

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all isagraph operations
pub use crate::Error;

/// Errors of type hierarchy operations
pub use crate::HierarchyError;

/// The result type used throughout isagraph
pub use crate::Result;

// ================================================================================================
// Graph Model
// ================================================================================================

/// The graph and its element handles
pub use crate::graph::{Edge, EdgeId, Graph, Vertex, VertexId, DEFAULT_WEIGHT};

/// Change notification
pub use crate::graph::{
    EdgeChange, EdgeChangeKind, EdgeSetChange, Listeners, SetChangeKind, SubscriptionId,
    VertexChange, VertexChangeKind, VertexSetChange,
};

/// Traits the algorithms are written against
pub use crate::graph::{GraphBase, Successors, VertexLabels};

// ================================================================================================
// Algorithms and Hierarchies
// ================================================================================================

/// Graph algorithms
pub use crate::graph::algorithms::{
    find_cycle, is_acyclic, AdjacencyMatrix, DepthSearch, IsAcyclic, ShortestPath,
};

/// Rooted acyclic subtype graphs
pub use crate::hierarchy::TypeHierarchy;

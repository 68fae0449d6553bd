//! Type hierarchies: rooted, acyclic subtype graphs.
//!
//! A [`TypeHierarchy`] wraps a [`Graph`] whose vertices are types and whose `"is a"` edges
//! point from a subtype to one of its direct supertypes. Every hierarchy starts with a root
//! type labelled `"Thing"`, and a type declared without an explicit supertype becomes a direct
//! subtype of the root. Multiple inheritance is allowed, cycles are not.
//!
//! # Cycle Rejection
//!
//! [`TypeHierarchy::set_is_subtype_of`] inserts the new `"is a"` edge first and then checks the
//! whole graph for cycles. If the check fails the call returns [`HierarchyError::Cycle`].
//! By default the offending edge is left in place, so the hierarchy stays cyclic until the
//! caller repairs it. [`TypeHierarchy::with_rollback`] switches to removing the edge before
//! the error is returned, which keeps the hierarchy acyclic at all times.
//!
//! # Examples
//!
//! ```rust
//! use isagraph::TypeHierarchy;
//!
//! let mut types = TypeHierarchy::new();
//! let animal = types.create_type("animal");
//! let cat = types.create_type("cat");
//! types.set_is_subtype_of(animal, None)?;
//! types.set_is_subtype_of(cat, Some(animal))?;
//!
//! assert!(types.is_subtype_of(cat, animal)?);
//! assert!(types.is_subtype_of(cat, types.root())?);
//! assert!(types.set_is_subtype_of(animal, Some(cat)).is_err());
//! # Ok::<(), isagraph::Error>(())
//! ```

use std::{collections::HashSet, fmt};

use tracing::{debug, warn};

use crate::{
    graph::{algorithms::IsAcyclic, GraphBase, Successors, VertexId, VertexLabels},
    Error, Graph, HierarchyError, Result,
};

/// Label of the root type created with every hierarchy.
pub const ROOT_LABEL: &str = "Thing";

/// Label carried by every subtype edge.
pub const IS_A: &str = "is a";

/// A rooted subtype graph that rejects cycles.
///
/// The hierarchy owns its [`Graph`] and only exposes it read-only through
/// [`graph`](Self::graph), so the acyclicity check cannot be bypassed. All read-only
/// algorithms accept a `TypeHierarchy` directly through the graph traits.
#[derive(Debug)]
pub struct TypeHierarchy {
    graph: Graph,
    root: VertexId,
    rollback: bool,
}

impl Default for TypeHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeHierarchy {
    /// Creates a hierarchy holding only the root type `"Thing"`.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = Graph::new();
        let root = graph.create_labeled_vertex(ROOT_LABEL);
        TypeHierarchy {
            graph,
            root,
            rollback: false,
        }
    }

    /// Sets whether a relation rejected for creating a cycle is removed again.
    ///
    /// Off by default.
    #[must_use]
    pub fn with_rollback(mut self, rollback: bool) -> Self {
        self.rollback = rollback;
        self
    }

    /// Returns the root type.
    #[must_use]
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Makes `root` the root type used for relations without an explicit supertype.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VertexNotFound`] if `root` is not part of the hierarchy.
    pub fn set_root(&mut self, root: VertexId) -> Result<()> {
        if !self.graph.contains_vertex(root) {
            return Err(Error::VertexNotFound(root));
        }
        self.root = root;
        Ok(())
    }

    /// Adds a new type without any supertype relation.
    pub fn create_type(&mut self, label: impl Into<String>) -> VertexId {
        self.graph.create_labeled_vertex(label)
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the label of `vertex`.
    #[must_use]
    pub fn label(&self, vertex: VertexId) -> Option<&str> {
        self.graph.vertex_label(vertex)
    }

    /// Returns the first type, in creation order, labelled `label`.
    #[must_use]
    pub fn find_type(&self, label: &str) -> Option<VertexId> {
        self.graph.find_vertex(label)
    }

    /// Declares `sub` a direct subtype of `sup`, or of the root if `sup` is `None`.
    ///
    /// Declaring a relation that already holds, directly or transitively, succeeds without
    /// changing anything.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::UnknownType`] if `sub` is not part of the hierarchy
    /// - [`HierarchyError::UnknownSupertype`] if `sup` is given but not part of the hierarchy
    /// - [`HierarchyError::Cycle`] if the new relation makes the hierarchy cyclic; see the
    ///   [module documentation](self) for what happens to the offending edge
    pub fn set_is_subtype_of(&mut self, sub: VertexId, sup: Option<VertexId>) -> Result<()> {
        if !self.graph.contains_vertex(sub) {
            return Err(HierarchyError::UnknownType(sub).into());
        }
        if let Some(sup) = sup {
            if !self.graph.contains_vertex(sup) {
                return Err(HierarchyError::UnknownSupertype(sup).into());
            }
        }

        let sup = sup.unwrap_or(self.root);
        if self.supertypes_of(sub)?.contains(&sup) {
            return Ok(());
        }

        let edge = self.graph.connect_labeled(sub, sup, IS_A)?;

        let mut check = IsAcyclic::new(&self.graph);
        check.execute();
        if !check.is_acyclic() {
            warn!(
                sub = self.label(sub).unwrap_or_default(),
                sup = self.label(sup).unwrap_or_default(),
                rollback = self.rollback,
                "subtype relation makes hierarchy cyclic"
            );
            if self.rollback {
                self.graph.remove_edge(edge);
            }
            return Err(HierarchyError::Cycle { sub, sup }.into());
        }

        debug!(
            sub = self.label(sub).unwrap_or_default(),
            sup = self.label(sup).unwrap_or_default(),
            "declared subtype"
        );
        Ok(())
    }

    /// Returns `vertex` together with all of its direct and transitive supertypes.
    ///
    /// The result starts with `vertex` and contains no duplicates; its order is otherwise
    /// unspecified. The root is included only if `vertex` is connected to it.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::UnknownType`] if `vertex` is not part of the hierarchy.
    pub fn supertypes_of(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.ensure_type(vertex)?;
        Ok(collect(vertex, |v| self.graph.neighbours(v).collect()))
    }

    /// Returns `vertex` together with all of its direct and transitive subtypes.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::UnknownType`] if `vertex` is not part of the hierarchy.
    pub fn denotation_of(&self, vertex: VertexId) -> Result<Vec<VertexId>> {
        self.ensure_type(vertex)?;
        Ok(collect(vertex, |v| self.graph.predecessors(v)))
    }

    /// Returns `true` if `sub` is `sup`, a transitive subtype of `sup`, or `sup` is the root.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::UnknownType`] if `sub` is not part of the hierarchy.
    pub fn is_subtype_of(&self, sub: VertexId, sup: VertexId) -> Result<bool> {
        let supertypes = self.supertypes_of(sub)?;
        Ok(sup == self.root || supertypes.contains(&sup))
    }

    /// Returns `true` if `sub` is a subtype of `sup`; see [`is_subtype_of`](Self::is_subtype_of).
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::UnknownType`] if `sub` is not part of the hierarchy.
    pub fn is_supertype_of(&self, sup: VertexId, sub: VertexId) -> Result<bool> {
        self.is_subtype_of(sub, sup)
    }

    /// Returns `true` if `sub` is a subtype of `sup` and the two differ.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::UnknownType`] if `sub` is not part of the hierarchy.
    pub fn is_proper_subtype_of(&self, sub: VertexId, sup: VertexId) -> Result<bool> {
        Ok(sub != sup && self.is_subtype_of(sub, sup)?)
    }

    /// Returns `true` if `sup` is a supertype of `sub` and the two differ.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::UnknownType`] if `sub` is not part of the hierarchy.
    pub fn is_proper_supertype_of(&self, sup: VertexId, sub: VertexId) -> Result<bool> {
        Ok(sub != sup && self.is_supertype_of(sup, sub)?)
    }

    fn ensure_type(&self, vertex: VertexId) -> Result<()> {
        if self.graph.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(HierarchyError::UnknownType(vertex).into())
        }
    }
}

// Depth-first preorder closure over an explicit worklist; the seen set keeps it finite on a
// cyclic hierarchy.
fn collect(vertex: VertexId, next: impl Fn(VertexId) -> Vec<VertexId>) -> Vec<VertexId> {
    let mut seen = HashSet::new();
    let mut closure = Vec::new();
    let mut pending = vec![vertex];

    while let Some(current) = pending.pop() {
        if !seen.insert(current) {
            continue;
        }
        closure.push(current);
        pending.extend(next(current).into_iter().rev());
    }
    closure
}

impl GraphBase for TypeHierarchy {
    fn order(&self) -> usize {
        self.graph.order()
    }

    fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        self.graph.vertices().iter().copied()
    }
}

impl Successors for TypeHierarchy {
    fn successors(&self, vertex: VertexId) -> impl Iterator<Item = VertexId> {
        self.graph.neighbours(vertex)
    }
}

impl VertexLabels for TypeHierarchy {
    fn vertex_label(&self, vertex: VertexId) -> Option<&str> {
        self.graph.vertex_label(vertex)
    }
}

impl fmt::Display for TypeHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.graph, f)
    }
}

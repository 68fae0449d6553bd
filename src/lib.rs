// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # isagraph
//!
//! Directed multigraphs with change notification, a handful of classical graph algorithms and
//! acyclic type hierarchies built on top of them.
//!
//! ## Features
//!
//! - **Multigraphs** - Labeled vertices, labeled and weighted edges, parallel edges and
//!   self-loops
//! - **Change notification** - Every mutation is announced on per-graph, per-vertex and
//!   per-edge listener channels
//! - **Algorithms** - Cycle detection, label-correcting shortest paths, labeled depth-first
//!   search and adjacency matrices
//! - **Type hierarchies** - Rooted subtype graphs that reject cycles, with supertype and
//!   denotation closures
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use isagraph::prelude::*;
//!
//! let mut graph = Graph::new();
//! let a = graph.create_labeled_vertex("A");
//! let b = graph.create_labeled_vertex("B");
//! let c = graph.create_labeled_vertex("C");
//! graph.connect_weighted(a, b, "a->b", 3.0)?;
//! graph.connect_weighted(b, c, "b->c", 1.0)?;
//! graph.connect_weighted(a, c, "a->c", 5.0)?;
//!
//! let mut sp = ShortestPath::new(&graph);
//! sp.set_start(a);
//! sp.execute()?;
//! assert_eq!(sp.distance(c), Some(4.0));
//! # Ok::<(), isagraph::Error>(())
//! ```
//!
//! ### Type Hierarchies
//!
//! ```rust
//! use isagraph::TypeHierarchy;
//!
//! let mut types = TypeHierarchy::new();
//! let human = types.create_type("human");
//! let student = types.create_type("student");
//! types.set_is_subtype_of(human, None)?;
//! types.set_is_subtype_of(student, Some(human))?;
//!
//! assert_eq!(types.denotation_of(human)?, vec![human, student]);
//! # Ok::<(), isagraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`graph`] - The graph data model, its change channels and [`graph::algorithms`]
//! - [`hierarchy`] - [`TypeHierarchy`], a rooted acyclic subtype graph
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The crate reports through the [`tracing`](https://docs.rs/tracing) facade and never
//! installs a subscriber. Graph mutations log at `trace`, algorithm summaries at `debug`, and
//! skipped edges or rejected hierarchy relations at `warn`.
//!
//! ## Error Handling
//!
//! Operations that can fail return [`Result<T>`]. Read operations tolerate foreign or removed
//! handles and answer them with `None`, empty results or `false`.

pub mod graph;
pub mod hierarchy;
pub mod prelude;

mod error;

pub use error::{Error, HierarchyError};
pub use graph::Graph;
pub use hierarchy::TypeHierarchy;

/// The result type used throughout isagraph.
pub type Result<T> = std::result::Result<T, Error>;

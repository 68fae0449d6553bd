//! Graph algorithms.
//!
//! Every algorithm is bound to a graph by reference at construction and never mutates it.
//! Algorithms that produce graphs, such as [`ShortestPath::shortest_paths_tree`], build new
//! ones.
//!
//! # Available Algorithms
//!
//! ## Cycle Detection
//!
//! - [`IsAcyclic`] - Reusable detector with an explicit `execute` step
//! - [`is_acyclic`] - Check if a graph contains no cycles
//! - [`find_cycle`] - Find a cycle if one exists
//!
//! ## Shortest Paths
//!
//! - [`ShortestPath`] - Bellman label-correcting relaxation with distance and tree graphs
//!
//! ## Search
//!
//! - [`DepthSearch`] - First vertex with a given label, with the path leading to it
//!
//! ## Conversion
//!
//! - [`AdjacencyMatrix`] - Dense 0/1 adjacency matrix over the vertex order
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Works On |
//! |-----------|-----------------|----------|
//! | Cycle detection | O(V + E) | any [`Successors`](crate::graph::Successors) |
//! | Depth search | O(V + E) | any [`Successors`](crate::graph::Successors) with labels |
//! | Adjacency matrix | O(V² + E) | any [`Successors`](crate::graph::Successors) |
//! | Shortest path | O(V · E) per pass | [`Graph`](crate::Graph) |

mod acyclic;
mod adjacency;
mod depth_search;
mod shortest_path;

pub use acyclic::{find_cycle, is_acyclic, IsAcyclic};
pub use adjacency::AdjacencyMatrix;
pub use depth_search::DepthSearch;
pub use shortest_path::ShortestPath;

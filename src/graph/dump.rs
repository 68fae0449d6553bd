//! Human-readable text dump of graphs, vertices and edges.
//!
//! The dump is a nested, parenthesized, tab-indented format meant for logs and debugging. It
//! is never parsed back. Vertices list only the labels of their outgoing edges, and edges
//! refer to their endpoints by label, so the output is finite for every graph shape.
//!
//! ```text
//! (Graph
//!     (vertices
//!         (vertex
//!             (label "A")
//!             (edges
//!                 "a->b"
//!             )
//!         )
//!         ...
//!     )
//!     (edges
//!         (edge
//!             (label "a->b")
//!             (weight "1.0")
//!             (head "B")
//!             (tail "A")
//!         )
//!     )
//! )
//! ```

use std::fmt::{self, Write};

use crate::graph::{EdgeId, Graph, VertexId};

fn indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_char('\t')?;
    }
    Ok(())
}

/// Display adapter for a single vertex, created by [`Graph::display_vertex`].
#[derive(Debug, Clone, Copy)]
pub struct VertexDump<'g> {
    graph: &'g Graph,
    vertex: VertexId,
    depth: usize,
}

impl fmt::Display for VertexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(vertex) = self.graph.vertex(self.vertex) else {
            return Ok(());
        };
        let d = self.depth;

        indent(f, d)?;
        writeln!(f, "(vertex")?;
        indent(f, d + 1)?;
        writeln!(f, "(label \"{}\")", vertex.label())?;
        indent(f, d + 1)?;
        writeln!(f, "(edges")?;
        for &edge in vertex.outgoing_edges() {
            let label = self.graph.edge(edge).map_or("", |e| e.label());
            indent(f, d + 2)?;
            writeln!(f, "\"{label}\"")?;
        }
        indent(f, d + 1)?;
        writeln!(f, ")")?;
        indent(f, d)?;
        writeln!(f, ")")
    }
}

/// Display adapter for a single edge, created by [`Graph::display_edge`].
#[derive(Debug, Clone, Copy)]
pub struct EdgeDump<'g> {
    graph: &'g Graph,
    edge: EdgeId,
    depth: usize,
}

impl fmt::Display for EdgeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(edge) = self.graph.edge(self.edge) else {
            return Ok(());
        };
        let d = self.depth;

        indent(f, d)?;
        writeln!(f, "(edge")?;
        indent(f, d + 1)?;
        writeln!(f, "(label \"{}\")", edge.label())?;
        indent(f, d + 1)?;
        writeln!(f, "(weight \"{:?}\")", edge.weight())?;
        if let Some(head) = edge.head() {
            indent(f, d + 1)?;
            writeln!(
                f,
                "(head \"{}\")",
                self.graph.vertex_label(head).unwrap_or_default()
            )?;
        }
        if let Some(tail) = edge.tail() {
            indent(f, d + 1)?;
            writeln!(
                f,
                "(tail \"{}\")",
                self.graph.vertex_label(tail).unwrap_or_default()
            )?;
        }
        indent(f, d)?;
        writeln!(f, ")")
    }
}

impl Graph {
    /// Returns a [`Display`](fmt::Display) adapter rendering `vertex` as a dump block.
    ///
    /// Unknown vertices render as an empty string.
    #[must_use]
    pub fn display_vertex(&self, vertex: VertexId) -> VertexDump<'_> {
        VertexDump {
            graph: self,
            vertex,
            depth: 0,
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter rendering `edge` as a dump block.
    ///
    /// Unknown edges render as an empty string.
    #[must_use]
    pub fn display_edge(&self, edge: EdgeId) -> EdgeDump<'_> {
        EdgeDump {
            graph: self,
            edge,
            depth: 0,
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "(Graph")?;
        indent(f, 1)?;
        writeln!(f, "(vertices")?;
        for &vertex in self.vertices() {
            let dump = VertexDump {
                graph: self,
                vertex,
                depth: 2,
            };
            write!(f, "{dump}")?;
        }
        indent(f, 1)?;
        writeln!(f, ")")?;

        indent(f, 1)?;
        writeln!(f, "(edges")?;
        for &edge in self.edges() {
            let dump = EdgeDump {
                graph: self,
                edge,
                depth: 2,
            };
            write!(f, "{dump}")?;
        }
        indent(f, 1)?;
        writeln!(f, ")")?;
        writeln!(f, ")")
    }
}

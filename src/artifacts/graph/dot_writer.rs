//! Graphviz DOT output
//!
//! ```text
//! digraph G {
//!     "[commit]\n1a2b3c" -> "[tree]\n4d5e6f"
//!     "[tree]\n4d5e6f" -> "[blob]\n7a8b9c\nREADME.md"
//! }
//! ```
//!
//! Edges are written depth-first: the edge to a child, then everything below
//! that child, then the edge to the next child.

use crate::artifacts::graph::graph_node::GraphNode;
use std::collections::HashSet;
use std::io::Write;

/// How often an edge reachable along several paths is written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    /// Once per path from the root, like a walk over a tree
    #[default]
    PerPath,
    /// Once per distinct parent/child pair
    Unique,
}

pub struct DotWriter<W: Write> {
    writer: W,
    mode: EdgeMode,
}

impl<W: Write> DotWriter<W> {
    pub fn new(writer: W, mode: EdgeMode) -> Self {
        DotWriter { writer, mode }
    }

    /// Write the whole document and return the number of edges written
    ///
    /// `None` (root not in the store) produces an empty graph.
    pub fn write_graph(&mut self, root: Option<&GraphNode>) -> anyhow::Result<usize> {
        writeln!(self.writer, "digraph G {{")?;

        let edges = match root {
            Some(root) => self.write_edges(root)?,
            None => 0,
        };

        writeln!(self.writer, "}}")?;
        self.writer.flush()?;

        Ok(edges)
    }

    fn write_edges(&mut self, root: &GraphNode) -> anyhow::Result<usize> {
        let mut expanded: HashSet<*const GraphNode> = HashSet::new();
        let mut pending: Vec<(&GraphNode, &GraphNode)> = Vec::new();
        let mut edges = 0;

        expanded.insert(root);
        Self::schedule_children(&mut pending, root);

        while let Some((parent, child)) = pending.pop() {
            writeln!(self.writer, "    \"{}\" -> \"{}\"", parent.label(), child.label())?;
            edges += 1;

            let first_visit = expanded.insert(child);
            if first_visit || self.mode == EdgeMode::PerPath {
                Self::schedule_children(&mut pending, child);
            }
        }

        Ok(edges)
    }

    fn schedule_children<'g>(
        pending: &mut Vec<(&'g GraphNode, &'g GraphNode)>,
        node: &'g GraphNode,
    ) {
        // reversed so that the first child is popped first
        for child in node.children().iter().rev() {
            pending.push((node, &**child));
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

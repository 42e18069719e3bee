//! Human-readable summaries of graphs and spanning trees.

use std::fmt::{self, Display, Formatter};

use crate::graph::{Graph, KruskalForest, PrimTree, VertexState, Weight};

/// Lists every edge of a graph as `u -- v == weight`.
pub struct GraphListing<'a, W>(pub &'a Graph<W>);

/// Prim's final key and predecessor for every vertex.
pub struct KeyTable<'a, W>(pub &'a [VertexState<W>]);

impl<W: Weight> Display for GraphListing<'_, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let graph = self.0;
        writeln!(
            f,
            "Graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        )?;
        for e in graph.edges() {
            writeln!(f, "  {} -- {} == {}", e.src, e.dst, e.weight)?;
        }
        Ok(())
    }
}

impl<W: Weight> Display for KruskalForest<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Kruskal MST:")?;
        for e in &self.edges {
            writeln!(f, "  {} -- {} == {}", e.src, e.dst, e.weight)?;
        }
        if !self.is_spanning_tree() {
            writeln!(f, "Spanning forest of {} components", self.components)?;
        }
        writeln!(f, "Total weight: {}", self.total_weight)
    }
}

impl<W: Weight> Display for PrimTree<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Prim MST from vertex {}:", self.root)?;
        for e in &self.edges {
            writeln!(f, "  {} -- {} == {}", e.src, e.dst, e.weight)?;
        }
        if !self.is_spanning_tree() {
            writeln!(
                f,
                "Reached {} of {} vertices",
                self.reached(),
                self.table.len()
            )?;
        }
        writeln!(f, "Total weight: {}", self.total_weight)
    }
}

impl<W: Weight> Display for KeyTable<'_, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final keys:")?;
        for (v, state) in self.0.iter().enumerate() {
            write!(f, "  vertex {v}: key = ")?;
            match state.key {
                Some(key) => write!(f, "{key}")?,
                None => write!(f, "inf")?,
            }
            match state.predecessor {
                Some(p) => writeln!(f, ", predecessor = {p}")?,
                None => writeln!(f, ", predecessor = -")?,
            }
        }
        Ok(())
    }
}

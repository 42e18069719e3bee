use std::fmt::{Debug, Display};

use num_traits::Zero;

use crate::error::{GraphError, Result};

/// Edge weights accepted by the spanning tree algorithms.
///
/// Integers and floats both qualify. Only a partial order is required, so
/// incomparable values such as `NaN` are tolerated but produce unspecified
/// (never panicking) results.
pub trait Weight: Copy + PartialOrd + Zero + Debug + Display {}

impl<T> Weight for T where T: Copy + PartialOrd + Zero + Debug + Display {}

/// Represents an undirected, weighted edge in a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub src: usize,
    pub dst: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(src: usize, dst: usize, weight: W) -> Self {
        Self { src, dst, weight }
    }
}

/// Graph type flag carried by the input format.
///
/// Both kinds are processed as undirected graphs; the flag is kept as
/// metadata only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GraphKind {
    #[default]
    Undirected,
    Directed,
}

/// Edge-list view of a graph over the vertices `0..vertex_count`.
///
/// Every stored edge has both endpoints inside the vertex range; the check
/// happens once in [`Graph::add_edge`] so the algorithms can index freely.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph<W> {
    vertex_count: usize,
    kind: GraphKind,
    edges: Vec<Edge<W>>,
}

impl<W: Weight> Graph<W> {
    /// Creates a graph with `vertex_count` isolated vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            kind: GraphKind::default(),
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(src, dst, weight)` triples.
    ///
    /// # Errors
    /// * `VertexOutOfRange` if any endpoint is not below `vertex_count`
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = Self::new(vertex_count);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight)?;
        }
        Ok(graph)
    }

    pub fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Adds an undirected edge. Self-loops and parallel edges are allowed.
    ///
    /// # Errors
    /// * `VertexOutOfRange` if either endpoint is not a vertex of the graph
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) -> Result<()> {
        for vertex in [src, dst] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.edges.push(Edge::new(src, dst, weight));
        Ok(())
    }

    /// Builds the adjacency-list view used by Prim's algorithm.
    pub fn adjacency(&self) -> Adjacency<W> {
        Adjacency::from(self)
    }
}

/// Adjacency-list view: for each vertex, its `(neighbor, weight)` pairs.
///
/// Each undirected edge is listed at both endpoints, so a self-loop shows up
/// twice in its vertex's list.
#[derive(Debug, Clone, PartialEq)]
pub struct Adjacency<W> {
    lists: Vec<Vec<(usize, W)>>,
}

impl<W: Weight> Adjacency<W> {
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// Neighbors of `vertex` in edge insertion order.
    ///
    /// # Panics
    /// If `vertex` is not below [`Adjacency::vertex_count`].
    pub fn neighbors(&self, vertex: usize) -> &[(usize, W)] {
        &self.lists[vertex]
    }
}

impl<W: Weight> From<&Graph<W>> for Adjacency<W> {
    fn from(graph: &Graph<W>) -> Self {
        let mut lists = vec![Vec::new(); graph.vertex_count()];
        for edge in graph.edges() {
            lists[edge.src].push((edge.dst, edge.weight));
            lists[edge.dst].push((edge.src, edge.weight));
        }
        Self { lists }
    }
}

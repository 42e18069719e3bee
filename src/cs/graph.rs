//! Minimum spanning trees of undirected, weighted graphs.
//!
//! Two classical algorithms are provided over the same graph types:
//! - [`kruskal`]: sorts the edges and joins components with a [`UnionFind`]
//! - [`prim`]: grows a tree from a start vertex using an [`IndexedMinHeap`]
//!
//! Graphs are usually produced by the [`input`] loader and the results are
//! formatted by the [`report`] helpers. Both algorithms accept an
//! [`MstObserver`] for step-by-step tracing.
//!
//! # Examples
//!
//! ```
//! use mst::graph::{kruskal, prim, Graph};
//!
//! let graph = Graph::from_edges(4, [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)])
//!     .unwrap();
//!
//! let forest = kruskal::minimum_spanning_forest(&graph);
//! assert_eq!(forest.total_weight, 19);
//!
//! let tree = prim::minimum_spanning_tree(&graph.adjacency(), 0).unwrap();
//! assert_eq!(tree.total_weight, 19);
//! ```

pub mod indexed_heap;
pub mod input;
pub mod kruskal;
pub mod observer;
pub mod prim;
pub mod report;
pub mod types;
pub mod union_find;

pub use indexed_heap::IndexedMinHeap;
pub use input::{parse_graph, read_graph};
pub use kruskal::{minimum_spanning_forest, KruskalForest};
pub use observer::{LogObserver, MstObserver, NoopObserver};
pub use prim::{minimum_spanning_tree, PrimTree, VertexState};
pub use types::{Adjacency, Edge, Graph, GraphKind, Weight};
pub use union_find::UnionFind;

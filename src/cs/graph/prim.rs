use log::debug;

use crate::error::{GraphError, Result};
use crate::graph::{Adjacency, Edge, IndexedMinHeap, MstObserver, NoopObserver, Weight};

/// Final Prim bookkeeping for one vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexState<W> {
    /// Weight of the lightest known edge into the tree; `None` if never reached.
    pub key: Option<W>,
    /// Tree neighbor through which the vertex was reached.
    pub predecessor: Option<usize>,
}

/// Result of Prim's algorithm: a minimum spanning tree of the start vertex's
/// connected component.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimTree<W> {
    pub root: usize,
    /// `(predecessor, vertex, weight)` edges, ordered by `vertex`.
    pub edges: Vec<Edge<W>>,
    pub total_weight: W,
    /// Key and predecessor of every vertex, reached or not.
    pub table: Vec<VertexState<W>>,
}

impl<W> PrimTree<W> {
    /// Number of vertices in the tree, the root included.
    pub fn reached(&self) -> usize {
        self.edges.len() + 1
    }

    /// True when every vertex of the graph was reached from the root.
    pub fn is_spanning_tree(&self) -> bool {
        self.reached() == self.table.len()
    }
}

/// Computes the minimum spanning tree (MST) of an undirected graph using Prim's algorithm.
///
/// # Arguments
/// * `graph` - The adjacency view of the undirected graph
/// * `start` - The starting vertex for the algorithm
///
/// # Returns
/// * `Ok(tree)` - The tree edges, their total weight, and the per-vertex table
/// * `Err(GraphError)` - If the start vertex is not in the graph
///
/// Vertices that cannot be reached from `start` get no predecessor and no
/// edge; on a disconnected graph the result spans only `start`'s component.
///
/// # Examples
/// ```
/// use mst::graph::{prim, Graph};
///
/// let graph = Graph::from_edges(3, [(0, 1, 4.0), (0, 2, 2.0), (1, 2, 1.0)]).unwrap();
///
/// let tree = prim::minimum_spanning_tree(&graph.adjacency(), 0).unwrap();
/// assert_eq!(tree.total_weight, 3.0);
/// assert_eq!(tree.edges.len(), 2);
/// ```
///
/// # Complexity
/// * Time: O((V + E) log V) where V is the number of vertices and E is the number of edges
/// * Space: O(V)
///
/// # Errors
/// * `VertexNotFound` if the start vertex doesn't exist
pub fn minimum_spanning_tree<W: Weight>(graph: &Adjacency<W>, start: usize) -> Result<PrimTree<W>> {
    minimum_spanning_tree_with(graph, start, &mut NoopObserver)
}

/// [`minimum_spanning_tree`] reporting every extraction and key update to
/// `observer`.
pub fn minimum_spanning_tree_with<W, O>(
    graph: &Adjacency<W>,
    start: usize,
    observer: &mut O,
) -> Result<PrimTree<W>>
where
    W: Weight,
    O: MstObserver<W> + ?Sized,
{
    let n = graph.vertex_count();
    if start >= n {
        return Err(GraphError::VertexNotFound(start));
    }

    let mut heap = IndexedMinHeap::new(n);
    let mut predecessor = vec![None; n];
    let mut in_tree = vec![false; n];
    heap.decrease_key(start, W::zero());

    while let Some(u) = heap.extract_min() {
        // An infinite minimum means the rest of the heap is unreachable.
        let Some(key) = heap.key(u) else {
            break;
        };
        in_tree[u] = true;
        observer.vertex_extracted(u, key);

        for &(v, weight) in graph.neighbors(u) {
            if in_tree[v] {
                continue;
            }
            let lighter = match heap.key(v) {
                Some(current) => weight < current,
                None => true,
            };
            if lighter {
                predecessor[v] = Some(u);
                heap.decrease_key(v, weight);
                observer.key_updated(v, weight, u);
            }
        }
    }

    let keys = heap.into_keys();
    let mut edges = Vec::new();
    let mut total_weight = W::zero();
    for (v, (&pred, &key)) in predecessor.iter().zip(&keys).enumerate() {
        if let (Some(p), Some(weight)) = (pred, key) {
            edges.push(Edge::new(p, v, weight));
            total_weight = total_weight + weight;
        }
    }

    debug!(
        "prim: reached {} of {} vertices from {}, total weight {}",
        edges.len() + 1,
        n,
        start,
        total_weight
    );

    let table = keys
        .into_iter()
        .zip(predecessor)
        .map(|(key, predecessor)| VertexState { key, predecessor })
        .collect();

    Ok(PrimTree {
        root: start,
        edges,
        total_weight,
        table,
    })
}

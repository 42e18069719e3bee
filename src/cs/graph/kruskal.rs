use std::cmp::Ordering;

use log::debug;

use crate::graph::{Edge, Graph, MstObserver, NoopObserver, UnionFind, Weight};

/// Result of Kruskal's algorithm: a minimum spanning forest.
#[derive(Debug, Clone, PartialEq)]
pub struct KruskalForest<W> {
    /// Accepted edges in acceptance order (non-decreasing weight).
    pub edges: Vec<Edge<W>>,
    /// Sum of the accepted edge weights.
    pub total_weight: W,
    /// Number of connected components of the input graph.
    pub components: usize,
}

impl<W> KruskalForest<W> {
    /// True when the forest is a single tree covering every vertex.
    pub fn is_spanning_tree(&self) -> bool {
        self.components <= 1
    }
}

/// Total order on weights: comparable values by `partial_cmp`, values that are
/// not even comparable to themselves (NaN) after all others.
fn by_weight<W: PartialOrd>(a: &W, b: &W) -> Ordering {
    match (a.partial_cmp(a).is_some(), b.partial_cmp(b).is_some()) {
        (true, true) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

/// Kruskal's algorithm to compute the MST for an undirected, weighted graph.
///
/// Returns the edges that form the MST.
/// If the graph is disconnected, this will return a spanning forest of all connected components.
///
/// # Examples
/// ```
/// use mst::graph::{kruskal, Edge, Graph};
///
/// let graph = Graph::from_edges(3, [(0, 1, 4.0), (0, 2, 2.0), (1, 2, 1.0)]).unwrap();
/// let forest = kruskal::minimum_spanning_forest(&graph);
///
/// assert_eq!(forest.edges, vec![Edge::new(1, 2, 1.0), Edge::new(0, 2, 2.0)]);
/// assert_eq!(forest.total_weight, 3.0);
/// ```
///
/// # Complexity
/// * Time: O(E log E) where E is the number of edges
/// * Space: O(V + E)
pub fn minimum_spanning_forest<W: Weight>(graph: &Graph<W>) -> KruskalForest<W> {
    minimum_spanning_forest_with(graph, &mut NoopObserver)
}

/// [`minimum_spanning_forest`] reporting every step to `observer`.
///
/// Edges are sorted by weight with a stable sort, so equal weights keep their
/// input order and repeated runs accept the same edges in the same order.
/// Each edge is considered exactly once: it is accepted when its endpoints lie
/// in different components, otherwise rejected as cycle-closing. Self-loops
/// are always rejected.
pub fn minimum_spanning_forest_with<W, O>(graph: &Graph<W>, observer: &mut O) -> KruskalForest<W>
where
    W: Weight,
    O: MstObserver<W> + ?Sized,
{
    let num_nodes = graph.vertex_count();
    let mut edges = graph.edges().to_vec();
    edges.sort_by(|a, b| by_weight(&a.weight, &b.weight));

    let mut uf = UnionFind::new(num_nodes);
    let mut mst = Vec::with_capacity(num_nodes.saturating_sub(1));
    let mut total_weight = W::zero();

    for edge in edges {
        observer.edge_considered(&edge);
        if uf.union(edge.src, edge.dst) {
            total_weight = total_weight + edge.weight;
            observer.edge_accepted(&edge, total_weight);
            mst.push(edge);
        } else {
            observer.edge_rejected(&edge);
        }
    }

    debug!(
        "kruskal: accepted {} of {} edges over {} vertices, total weight {}",
        mst.len(),
        graph.edge_count(),
        num_nodes,
        total_weight
    );

    KruskalForest {
        edges: mst,
        total_weight,
        components: uf.component_count(),
    }
}

/// Disjoint-set (union-find) for cycle detection in Kruskal's algorithm.
///
/// Elements are the vertices `0..n`. Indices at or above `n` are a caller
/// bug and panic on access.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Initializes a union-find for `n` elements (0..n-1), each in its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Uses full path compression in two passes: walk up to the root, then
    /// point every node on the walked chain directly at it. No recursion, so
    /// long chains cannot overflow the stack.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Unites the sets containing `x` and `y` by rank.
    ///
    /// The root of lower rank is attached below the other; on equal ranks the
    /// root of `x` wins and its rank grows by one.
    /// Returns `true` if a union actually occurred (i.e., they were disjoint).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        if self.rank[rx] < self.rank[ry] {
            self.parent[rx] = ry;
        } else if self.rank[rx] > self.rank[ry] {
            self.parent[ry] = rx;
        } else {
            self.parent[ry] = rx;
            self.rank[rx] += 1;
        }
        self.components -= 1;
        true
    }

    /// Whether `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_singletons() {
        let mut uf = UnionFind::new(4);
        assert_eq!(uf.len(), 4);
        assert_eq!(uf.component_count(), 4);
        for v in 0..4 {
            assert_eq!(uf.find(v), v);
        }
        assert!(!uf.connected(0, 1));
    }

    #[test]
    fn test_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.component_count(), 0);
    }

    #[test]
    fn test_union_merges_and_reports() {
        let mut uf = UnionFind::new(5);
        assert!(uf.union(0, 1));
        assert!(uf.union(3, 4));
        assert!(!uf.union(1, 0), "already joined sets must not merge again");
        assert!(uf.connected(0, 1));
        assert!(uf.connected(3, 4));
        assert!(!uf.connected(1, 3));
        assert_eq!(uf.component_count(), 3);

        assert!(uf.union(1, 4));
        assert!(uf.connected(0, 3));
        assert_eq!(uf.component_count(), 2);
        assert!(!uf.connected(2, 0));
    }

    #[test]
    fn test_self_union_is_noop() {
        let mut uf = UnionFind::new(2);
        assert!(!uf.union(1, 1));
        assert_eq!(uf.component_count(), 2);
    }

    #[test]
    fn test_union_by_rank() {
        let mut uf = UnionFind::new(3);
        // Equal ranks: the first argument's root becomes the parent.
        uf.union(0, 1);
        assert_eq!(uf.find(1), 0);
        assert_eq!(uf.rank[0], 1);

        // A rank-0 singleton goes under the rank-1 root, whichever side it is on.
        uf.union(2, 1);
        assert_eq!(uf.find(2), 0);
        assert_eq!(uf.rank[0], 1);
        assert_eq!(uf.rank[2], 0);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(4);
        // Build the chain 3 -> 2 -> 1 -> 0 by hand.
        uf.parent = vec![0, 0, 1, 2];

        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 1_000_000;
        let mut uf = UnionFind::new(n);
        uf.parent = (0..n).map(|i| i.saturating_sub(1)).collect();

        assert_eq!(uf.find(n - 1), 0);
        assert_eq!(uf.parent[n / 2], 0);
    }

    #[test]
    fn test_matches_naive_model() {
        // Compare against a labelling that relabels whole components on merge.
        let n = 60;
        let mut rng = StdRng::seed_from_u64(7);
        let mut uf = UnionFind::new(n);
        let mut label: Vec<usize> = (0..n).collect();

        for _ in 0..200 {
            let a = rng.gen_range(0..n);
            let b = rng.gen_range(0..n);
            let merged = uf.union(a, b);
            assert_eq!(merged, label[a] != label[b]);

            let (from, to) = (label[b], label[a]);
            for l in label.iter_mut() {
                if *l == from {
                    *l = to;
                }
            }

            let x = rng.gen_range(0..n);
            let y = rng.gen_range(0..n);
            assert_eq!(uf.connected(x, y), label[x] == label[y]);
        }
    }
}

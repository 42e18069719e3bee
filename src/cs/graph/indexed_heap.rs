//! Indexed binary min-heap over vertex ids.
//!
//! Vertices are fixed slots addressed by their dense id:
//!   heap : Vec<usize>      heap array, live slots are `0..size`
//!   pos  : Vec<usize>      `pos[heap[i]] == i` for every live slot `i`
//!   key  : Vec<Option<W>>  priority per vertex, `None` is +infinity
//!
//!   parent(i)      = (i - 1) / 2
//!   left_child(i)  = 2*i + 1
//!   right_child(i) = 2*i + 2
//!
//! `pos` makes the decrease-key lookup O(1); the sift itself is O(log size).

use crate::graph::Weight;

/// Min-priority queue holding each vertex `0..n` at most once.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W> {
    heap: Vec<usize>,
    pos: Vec<usize>,
    key: Vec<Option<W>>,
    size: usize,
}

/// Strict "comes before" on priorities where `None` is +infinity.
fn precedes<W: PartialOrd>(a: Option<W>, b: Option<W>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

impl<W: Weight> IndexedMinHeap<W> {
    /// Creates a heap containing every vertex `0..n` at priority +infinity.
    pub fn new(n: usize) -> Self {
        Self {
            heap: (0..n).collect(),
            pos: (0..n).collect(),
            key: vec![None; n],
            size: n,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether `vertex` has not been extracted yet.
    pub fn contains(&self, vertex: usize) -> bool {
        self.pos[vertex] < self.size
    }

    /// Current priority of `vertex`; `None` means +infinity.
    ///
    /// Extracted vertices keep the priority they had when they left the heap.
    pub fn key(&self, vertex: usize) -> Option<W> {
        self.key[vertex]
    }

    /// The vertex that [`IndexedMinHeap::extract_min`] would return next.
    pub fn peek_min(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.heap[0])
        }
    }

    /// Removes and returns the vertex of smallest priority.
    ///
    /// The last live slot is moved to the root and sifted down. On equal
    /// priorities either candidate may come out first.
    pub fn extract_min(&mut self) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let min = self.heap[0];
        self.size -= 1;
        self.swap_slots(0, self.size);
        self.sift_down(0);
        Some(min)
    }

    /// Lowers the priority of a live `vertex` to `key` and restores heap order.
    ///
    /// Only decreases are supported: `key` must not exceed the current
    /// priority and the vertex must still be in the heap. Both are checked in
    /// debug builds.
    pub fn decrease_key(&mut self, vertex: usize, key: W) {
        debug_assert!(
            self.contains(vertex),
            "decrease_key on extracted vertex {vertex}"
        );
        debug_assert!(
            !precedes(self.key[vertex], Some(key)),
            "decrease_key would raise the priority of vertex {vertex}"
        );

        self.key[vertex] = Some(key);
        self.sift_up(self.pos[vertex]);
    }

    /// Consumes the heap, returning the final priority of every vertex.
    pub fn into_keys(self) -> Vec<Option<W>> {
        self.key
    }

    fn priority_at(&self, slot: usize) -> Option<W> {
        self.key[self.heap[slot]]
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = a;
        self.pos[self.heap[b]] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = (i - 1) / 2;
            if !precedes(self.priority_at(i), self.priority_at(p)) {
                break;
            }
            self.swap_slots(i, p);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            let mut smallest = i;
            let l = 2 * i + 1;
            let r = 2 * i + 2;
            if l < self.size && precedes(self.priority_at(l), self.priority_at(smallest)) {
                smallest = l;
            }
            if r < self.size && precedes(self.priority_at(r), self.priority_at(smallest)) {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.swap_slots(i, smallest);
            i = smallest;
        }
    }
}

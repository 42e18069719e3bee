//! Step-by-step tracing hooks for the spanning tree algorithms.
//!
//! The algorithms call an [`MstObserver`] at fixed points and never look at
//! what it does, so tracing cannot change a result. [`NoopObserver`] is used by
//! the plain entry points; [`LogObserver`] forwards everything to the `log`
//! facade.

use log::{debug, trace};

use crate::graph::{Edge, Weight};

/// Callbacks fired while a spanning tree is built. Every method defaults to a
/// no-op.
pub trait MstObserver<W> {
    /// Kruskal is about to test `edge` for a cycle.
    fn edge_considered(&mut self, _edge: &Edge<W>) {}

    /// Kruskal kept `edge`; `total` is the forest weight including it.
    fn edge_accepted(&mut self, _edge: &Edge<W>, _total: W) {}

    /// Kruskal dropped `edge` because both endpoints share a component.
    fn edge_rejected(&mut self, _edge: &Edge<W>) {}

    /// Prim moved `vertex` into the tree with priority `key`.
    fn vertex_extracted(&mut self, _vertex: usize, _key: W) {}

    /// Prim found a lighter connection `predecessor -- vertex` of weight `key`.
    fn key_updated(&mut self, _vertex: usize, _key: W, _predecessor: usize) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<W> MstObserver<W> for NoopObserver {}

/// Emits each step as a `log` record: decisions at `debug`, candidates at
/// `trace`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<W: Weight> MstObserver<W> for LogObserver {
    fn edge_considered(&mut self, edge: &Edge<W>) {
        trace!(
            "considering edge {} -- {} with weight {}",
            edge.src,
            edge.dst,
            edge.weight
        );
    }

    fn edge_accepted(&mut self, edge: &Edge<W>, total: W) {
        debug!(
            "added edge {} -- {} ({}), forest weight now {}",
            edge.src, edge.dst, edge.weight, total
        );
    }

    fn edge_rejected(&mut self, edge: &Edge<W>) {
        debug!(
            "skipped edge {} -- {} ({}): would close a cycle",
            edge.src, edge.dst, edge.weight
        );
    }

    fn vertex_extracted(&mut self, vertex: usize, key: W) {
        debug!("extracted vertex {vertex} with key {key}");
    }

    fn key_updated(&mut self, vertex: usize, key: W, predecessor: usize) {
        trace!("vertex {vertex}: key lowered to {key} via {predecessor}");
    }
}

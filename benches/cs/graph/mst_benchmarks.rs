use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mst::graph::{kruskal, prim, Graph};

const SEED: u64 = 42;

/// Random connected graph: a random tree plus `extra` random edges.
fn random_graph(n: usize, extra: usize) -> Graph<f64> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut graph = Graph::new(n);
    for v in 1..n {
        let u = rng.gen_range(0..v);
        graph
            .add_edge(u, v, rng.gen_range(0.0..100.0))
            .expect("tree edge endpoints are in range");
    }
    for _ in 0..extra {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        graph
            .add_edge(u, v, rng.gen_range(0.0..100.0))
            .expect("random edge endpoints are in range");
    }
    graph
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("mst");

    for &n in &[100usize, 1_000, 10_000] {
        let graph = random_graph(n, n * 4);
        let adjacency = graph.adjacency();

        group.bench_with_input(BenchmarkId::new("kruskal", n), &graph, |b, graph| {
            b.iter(|| kruskal::minimum_spanning_forest(black_box(graph)))
        });
        group.bench_with_input(BenchmarkId::new("prim", n), &adjacency, |b, adjacency| {
            b.iter(|| prim::minimum_spanning_tree(black_box(adjacency), 0))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mst);
criterion_main!(benches);

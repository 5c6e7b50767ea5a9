use criterion::{black_box, criterion_group, criterion_main, Criterion};
use walktrace::{trace_walk, AdjacencyGraph, Dfs, WalkBound};

fn bench_self_loop_walk(c: &mut Criterion) {
    let graph = AdjacencyGraph::with_self_loops(1000);

    c.bench_function("self_loop_walk_trace_len_10k", |b| {
        b.iter(|| black_box(trace_walk(&graph, 0, WalkBound::trace_len(10_000)).unwrap()));
    });

    c.bench_function("self_loop_walk_depth_10k", |b| {
        b.iter(|| black_box(trace_walk(&graph, 0, WalkBound::depth(10_000)).unwrap()));
    });
}

fn bench_chain(c: &mut Criterion) {
    let size = 10_000;
    // Chain: 0->1->...->N
    let mut graph = AdjacencyGraph::new(size);
    for i in 0..size - 1 {
        graph.add_edge(i, i + 1).unwrap();
    }

    c.bench_function("chain_walk_unbounded", |b| {
        b.iter(|| black_box(trace_walk(&graph, 0, WalkBound::unbounded()).unwrap()));
    });

    c.bench_function("chain_dfs", |b| {
        b.iter(|| black_box(Dfs::new(&graph, 0).count()));
    });
}

criterion_group!(benches, bench_self_loop_walk, bench_chain);
criterion_main!(benches);

extern crate isagraph;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use isagraph::{
    graph::algorithms::{is_acyclic, AdjacencyMatrix, ShortestPath},
    Graph, TypeHierarchy,
};
use std::hint::black_box;

/// Builds a layered DAG where every vertex links to the next `fanout` vertices.
fn layered_graph(order: usize, fanout: usize) -> Graph {
    let mut graph = Graph::with_capacity(order, order * fanout);
    let vertices: Vec<_> = (0..order)
        .map(|i| graph.create_labeled_vertex(i.to_string()))
        .collect();
    for (i, &tail) in vertices.iter().enumerate() {
        for j in 1..=fanout {
            if let Some(&head) = vertices.get(i + j) {
                let weight = ((i * 31 + j * 17) % 13 + 1) as f64;
                graph
                    .connect_weighted(tail, head, "", weight)
                    .expect("vertices are members");
            }
        }
    }
    graph
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_acyclic");
    for order in [100, 1_000, 5_000] {
        let graph = layered_graph(order, 4);
        group.bench_with_input(BenchmarkId::from_parameter(order), &graph, |b, graph| {
            b.iter(|| black_box(is_acyclic(black_box(graph))));
        });
    }
    group.finish();
}

fn bench_shortest_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for order in [50, 200] {
        let graph = layered_graph(order, 3);
        let start = graph.vertices()[0];
        group.bench_with_input(BenchmarkId::from_parameter(order), &graph, |b, graph| {
            b.iter(|| {
                let mut sp = ShortestPath::new(graph);
                sp.set_start(start);
                sp.execute().expect("converges without negative cycles");
                black_box(sp.passes())
            });
        });
    }
    group.finish();
}

fn bench_adjacency_matrix(c: &mut Criterion) {
    let graph = layered_graph(500, 4);
    c.bench_function("adjacency_matrix_500", |b| {
        b.iter(|| black_box(AdjacencyMatrix::from_graph(black_box(&graph))));
    });
}

fn bench_hierarchy_insert(c: &mut Criterion) {
    c.bench_function("hierarchy_chain_200", |b| {
        b.iter(|| {
            let mut types = TypeHierarchy::new();
            let mut parent = None;
            for i in 0..200 {
                let child = types.create_type(i.to_string());
                types
                    .set_is_subtype_of(child, parent)
                    .expect("chain stays acyclic");
                parent = Some(child);
            }
            black_box(types)
        });
    });
}

criterion_group!(
    benches,
    bench_cycle_detection,
    bench_shortest_path,
    bench_adjacency_matrix,
    bench_hierarchy_insert
);
criterion_main!(benches);

use costar::network::MovieRecord;
use costar::{shortest_route, CoStarNetwork, Graph, SparseGraph};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_solver_tree(c: &mut Criterion) {
    let size = 10_000;

    // Binary tree with edges in both directions.
    let mut graph = SparseGraph::<usize, ()>::new();
    let nodes: Vec<_> = (0..size).map(|i| graph.insert_vertex(i)).collect();
    for i in 1..size {
        graph.insert_edge(nodes[i / 2], nodes[i], ()).unwrap();
        graph.insert_edge(nodes[i], nodes[i / 2], ()).unwrap();
    }

    c.bench_function("six_degrees_tree_leaf_to_leaf", |b| {
        b.iter(|| black_box(shortest_route(&graph, nodes[size / 2], nodes[size - 1]).unwrap()));
    });
}

fn bench_solver_network(c: &mut Criterion) {
    // Movie `m` casts actors m..m+4, so neighbouring movies share actors.
    let mut network = CoStarNetwork::new();
    for m in 0..2_000 {
        let cast: Vec<String> = (m..m + 4).map(|a| format!("actor {a}")).collect();
        network.add_movie(&MovieRecord::new(format!("movie {m}"), cast)).unwrap();
    }

    c.bench_function("six_degrees_network_far_apart", |b| {
        b.iter(|| black_box(network.connect("actor 0", "actor 2003").unwrap()));
    });
}

criterion_group!(benches, bench_solver_tree, bench_solver_network);
criterion_main!(benches);

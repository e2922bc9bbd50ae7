//! Criterion benchmarks for the graph store.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use graph_store::{
    EdgeConfig, GraphOptions, GraphReader, GraphStore, GraphWriter, NodeConfig, OptionsUpdate,
};

/// Build a random multigraph through the public operations.
fn make_graph(node_count: u64, edges_per_node: u64, options: GraphOptions) -> GraphStore {
    let mut rng = rand::thread_rng();
    let mut graph = GraphStore::with_options(options);

    for key in 0..node_count {
        graph
            .create_node(key, NodeConfig::labeled(format!("node_{}", key)))
            .unwrap();
    }

    let mut edge_key = 0;
    for source in 0..node_count {
        for _ in 0..edges_per_node {
            let destination = rng.gen_range(0..node_count);
            let config = EdgeConfig::default().weight(rng.gen_range(0..100));
            if graph
                .create_edge(edge_key, source, destination, config)
                .is_ok()
            {
                edge_key += 1;
            }
        }
    }

    graph
}

fn bench_create_node(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3, GraphOptions::undirected().with_multi(true));
    let mut next_key = 10_000u64;

    c.bench_function("create_node_in_10k", |b| {
        b.iter(|| {
            let _ = graph.create_node(next_key, NodeConfig::default());
            next_key += 1;
        })
    });
}

fn bench_create_edge_simple(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3, GraphOptions::undirected());
    let mut next_key = 1_000_000u64;

    c.bench_function("create_edge_simple_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let source = rng.gen_range(0..10_000u64);
            let destination = rng.gen_range(0..10_000u64);
            if graph
                .create_edge(next_key, source, destination, EdgeConfig::default())
                .is_ok()
            {
                next_key += 1;
            }
        })
    });
}

fn bench_remove_node_cascade(c: &mut Criterion) {
    let graph = make_graph(2_000, 4, GraphOptions::undirected().with_multi(true));

    c.bench_function("remove_node_cascade_2k", |b| {
        let mut rng = rand::thread_rng();
        b.iter_batched(
            || graph.clone(),
            |mut g| {
                let _ = g.remove_node(rng.gen_range(0..2_000u64));
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_rebuild_on_options_change(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 5, GraphOptions::directed().with_multi(true));
    let mut directed = true;

    c.bench_function("rebuild_adjacency_50k_edges", |b| {
        b.iter(|| {
            directed = !directed;
            graph.set_options(OptionsUpdate::directed(directed));
        })
    });
}

fn bench_serialize_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3, GraphOptions::directed().with_multi(true));

    c.bench_function("serialize_10k", |b| {
        b.iter(|| {
            let _ = graph.serialize().unwrap();
        })
    });
}

fn bench_deserialize_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3, GraphOptions::directed().with_multi(true));
    let bytes = graph.serialize().unwrap();

    c.bench_function("deserialize_10k", |b| {
        b.iter(|| {
            let _ = GraphStore::deserialize(&bytes).unwrap();
        })
    });
}

fn bench_file_roundtrip_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3, GraphOptions::undirected().with_multi(true));

    c.bench_function("file_roundtrip_10k", |b| {
        b.iter(|| {
            let tmp = NamedTempFile::new().unwrap();
            GraphWriter::write_to_file(&graph, tmp.path()).unwrap();
            let _ = GraphReader::read_from_file(tmp.path()).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_create_node,
    bench_create_edge_simple,
    bench_remove_node_cascade,
    bench_rebuild_on_options_change,
    bench_serialize_10k,
    bench_deserialize_10k,
    bench_file_roundtrip_10k,
);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strongpath_core::{GeneratorConfig, Graph, diameter, dijkstra, generate_with_rng, radius};

/// `(vertices, edges)` tiers; edges at roughly three per vertex.
const TIERS: [(usize, usize); 3] = [(50, 150), (200, 600), (1_000, 3_000)];

fn graph_for(vertices: usize, edges: usize) -> Graph {
    let config = GeneratorConfig::new()
        .with_vertex_count(vertices)
        .with_edge_count(edges);
    generate_with_rng(&config, &mut StdRng::seed_from_u64(0x5eed_u64 + vertices as u64))
        .expect("tier config is valid")
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (vertices, edges) in TIERS {
        let config = GeneratorConfig::new()
            .with_vertex_count(vertices)
            .with_edge_count(edges);
        group.bench_with_input(BenchmarkId::from_parameter(vertices), &config, |b, config| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| black_box(generate_with_rng(config, &mut rng)));
        });
    }
    group.finish();
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra");
    for (vertices, edges) in TIERS {
        let graph = graph_for(vertices, edges);
        group.bench_with_input(BenchmarkId::from_parameter(vertices), &graph, |b, graph| {
            b.iter(|| black_box(dijkstra(graph, "1")));
        });
    }
    group.finish();
}

fn bench_radius_diameter(c: &mut Criterion) {
    let mut group = c.benchmark_group("radius_diameter");
    group.sample_size(10);
    // V independent Dijkstra runs each; the largest tier is left out.
    for (vertices, edges) in &TIERS[..2] {
        let graph = graph_for(*vertices, *edges);
        group.bench_with_input(BenchmarkId::new("radius", vertices), &graph, |b, graph| {
            b.iter(|| black_box(radius(graph)));
        });
        group.bench_with_input(BenchmarkId::new("diameter", vertices), &graph, |b, graph| {
            b.iter(|| black_box(diameter(graph)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_dijkstra, bench_radius_diameter);
criterion_main!(benches);

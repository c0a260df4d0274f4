use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use fsm_diagram_engine::{
    parse_diagram_json, Diagram, DiagramEdge, EdgeDirection, EdgeShape, Side, HIT_TOLERANCE,
};
use glam::DVec2;
use std::hint::black_box;

fn bench_json_parsing(c: &mut Criterion) {
    let json_content = include_str!("../tests/fixtures/sample_diagram.json");

    c.bench_function("json_parse_sample_diagram", |b| {
        b.iter(|| {
            let diagram = parse_diagram_json(black_box(json_content)).expect("JSON parse failed");
            black_box(diagram.node_count())
        })
    });
}

fn build_synthetic_diagram(node_count: usize) -> Diagram {
    let mut diagram = Diagram::new();

    // Nodes auf einem Ring, Kanten reihum mit wechselnder Kruemmung
    let ring_radius = 40.0 * node_count as f64;
    let mut ids = Vec::with_capacity(node_count);
    for index in 0..node_count {
        let angle = std::f64::consts::TAU * index as f64 / node_count as f64;
        let center = DVec2::new(ring_radius * angle.cos(), ring_radius * angle.sin());
        ids.push(diagram.add_node(center));
    }

    for index in 0..node_count {
        let start = ids[index];
        let end = ids[(index + 1) % node_count];
        let mut edge = DiagramEdge::new_chord(start, end, EdgeDirection::Single);
        edge.shape = EdgeShape::Chord {
            height: if index % 2 == 0 { 120.0 } else { -350.0 },
            side: if index % 3 == 0 {
                Side::Positive
            } else {
                Side::Negative
            },
        };
        diagram.add_edge(edge);

        if index % 7 == 0 {
            diagram.add_edge(DiagramEdge::new_self_loop(start, EdgeDirection::Single));
        }
    }

    diagram
}

fn build_query_points(count: usize, extent: f64) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 1000) as f64 / 1000.0 * 2.0 * extent - extent;
            let y = ((i * 101) % 1000) as f64 / 1000.0 * 2.0 * extent - extent;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_arc_recomputation(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_recomputation");

    for &node_count in &[64usize, 512usize] {
        let diagram = build_synthetic_diagram(node_count);

        group.bench_with_input(
            BenchmarkId::new("all_edges", node_count),
            &diagram,
            |b, diagram| {
                b.iter(|| {
                    let mut finite = 0usize;
                    for index in 0..diagram.edge_count() {
                        if diagram.edge_arc(black_box(index)).is_some() {
                            finite += 1;
                        }
                    }
                    black_box(finite)
                })
            },
        );
    }

    group.finish();
}

fn bench_edge_hit_testing(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_hit_testing");

    for &node_count in &[64usize, 512usize] {
        let diagram = build_synthetic_diagram(node_count);
        let queries = build_query_points(256, 40.0 * node_count as f64);

        group.bench_with_input(
            BenchmarkId::new("pick_batch", node_count),
            &diagram,
            |b, diagram| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &queries {
                        if diagram.edge_at(black_box(*point), HIT_TOLERANCE).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_json_parsing,
    bench_arc_recomputation,
    bench_edge_hit_testing
);
criterion_main!(benches);

//! Criterion benches for visibility-graph construction (group "graph").
//!
//! - Full build over seeded random layouts of growing size.
//! - Line-of-sight checks alone, over the candidate segments of one layout.
//! - Bitangent pair computation on the belt layout.
//!
//! Layouts come from `draw_scene` with fixed replay tokens so runs compare.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use circlepath::api::*;

fn layout(n: usize) -> Scene {
    let cfg = ScatterCfg {
        count: CircleCount::Fixed(n),
        r_min: 10.0,
        r_max: 40.0,
        bounds: SceneBounds {
            width: 1600.0,
            height: 900.0,
        },
        gap: 4.0,
        max_attempts: 500,
    };
    // First index that places every circle.
    (0..64)
        .find_map(|index| draw_scene(cfg, SceneReplay { seed: 2024, index }).ok())
        .expect("layout fits the bounds")
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    for n in [4usize, 8, 16, 32] {
        let scene = layout(n);
        group.throughput(Throughput::Elements(scene.circles.len() as u64));
        group.bench_with_input(BenchmarkId::new("build_graph", n), &scene, |b, s| {
            b.iter(|| build_graph(&s.circles, GeomCfg::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_line_of_sight(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    let scene = layout(16);
    let cfg = GeomCfg::default();
    let circles = &scene.circles;
    let segments: Vec<_> = circles
        .iter()
        .enumerate()
        .flat_map(|(i, a)| {
            circles
                .iter()
                .enumerate()
                .skip(i + 1)
                .map(move |(j, b)| (i, a.center(), j, b.center()))
        })
        .collect();
    group.throughput(Throughput::Elements(segments.len() as u64));
    group.bench_function("line_of_sight/centers-16", |b| {
        b.iter(|| {
            segments
                .iter()
                .filter(|(i, p, j, q)| line_of_sight(circles, *i, *p, *j, *q, &cfg))
                .count()
        })
    });
    group.finish();
}

fn bench_bitangents(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    let [a, b] = belt_pair();
    group.bench_function("bitangents/belt", |bch| {
        bch.iter(|| (internal(&b, &a), external(&b, &a)))
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_line_of_sight, bench_bitangents);
criterion_main!(benches);

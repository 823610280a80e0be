//! Criterion benchmarks for one priority inference.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fuzzy_priority::{DefuzzificationOp, FuzzyPriorityEngine, InferenceConfig};

fn bench_compute_priority(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_priority");

    for op in [DefuzzificationOp::Centroid, DefuzzificationOp::Cog, DefuzzificationOp::Boa] {
        let engine = FuzzyPriorityEngine::with_config(InferenceConfig::default().with_defuzzification(op));

        group.bench_with_input(BenchmarkId::from_parameter(op), &engine, |b, engine| {
            b.iter(|| engine.compute_priority(black_box(76.), black_box(20.), black_box(85.)))
        });
    }

    group.finish();
}

fn bench_engine_construction(c: &mut Criterion) {
    c.bench_function("engine_new", |b| b.iter(FuzzyPriorityEngine::new));
}

criterion_group!(benches, bench_compute_priority, bench_engine_construction);
criterion_main!(benches);

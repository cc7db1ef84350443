//! Criterion benchmarks for the engine's per-tick scheduler.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use steward_bench::{reference_engine, saturated_engine};
use steward_core::{DependencyModel, DependencySample, RequestKey, TickId};
use steward_engine::Engine;
use steward_policies::NormalDependency;
use steward_test_utils::{ConstSampler, FixedDependency};

fn run_ticks(engine: &mut Engine, ticks: u64) {
    engine.reset();
    engine.run(ticks).unwrap_or_else(|e| panic!("step failed: {e}"));
    black_box(engine.completed().len());
}

fn bench_reference_run(c: &mut Criterion) {
    let mut engine = reference_engine(42);
    c.bench_function("reference_1k_ticks", |b| {
        b.iter(|| run_ticks(&mut engine, 1_000));
    });
}

fn bench_saturated_run(c: &mut Criterion) {
    let mut engine = saturated_engine(42);
    c.bench_function("saturated_1k_ticks", |b| {
        b.iter(|| run_ticks(&mut engine, 1_000));
    });
}

fn bench_deterministic_pipeline(c: &mut Criterion) {
    // Strips the RNG out of the loop so the scheduler itself dominates.
    let config = steward_engine::SimConfig::default();
    let mut hooks = steward::standard_hooks(&config);
    hooks.dependency = Box::new(FixedDependency::success(150.0));
    hooks.sampler = Box::new(ConstSampler(RequestKey(1)));
    let mut engine =
        Engine::new(config, hooks).unwrap_or_else(|e| panic!("config invalid: {e}"));
    c.bench_function("fixed_policy_1k_ticks", |b| {
        b.iter(|| run_ticks(&mut engine, 1_000));
    });
}

fn bench_dependency_sampling(c: &mut Criterion) {
    let config = steward_engine::SimConfig::default();
    let mut model = NormalDependency::new(config.dependency.clone(), 42);
    c.bench_function("dependency_sample", |b| {
        b.iter(|| {
            let sample: DependencySample = model.call(TickId(1));
            black_box(sample.latency)
        });
    });
}

fn bench_report(c: &mut Criterion) {
    let mut engine = reference_engine(42);
    engine
        .run(5_000)
        .unwrap_or_else(|e| panic!("step failed: {e}"));
    c.bench_function("report_5k_ticks", |b| {
        b.iter(|| black_box(engine.report().all().qos));
    });
}

criterion_group!(
    benches,
    bench_reference_run,
    bench_saturated_run,
    bench_deterministic_pipeline,
    bench_dependency_sampling,
    bench_report
);
criterion_main!(benches);

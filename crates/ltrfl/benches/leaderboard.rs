use chrono::Utc;
use criterion::{criterion_group, criterion_main, Criterion};
use ltrfl_core::{BudgetConfig, GenerationInput, GenerationStore};
use std::hint::black_box;

fn populated_store(pipelines: usize, per_pipeline: usize) -> GenerationStore {
    let mut store = GenerationStore::new(BudgetConfig::new());
    let now = Utc::now();
    for p in 0..pipelines {
        for i in 0..per_pipeline {
            let id = store.record_generation_at(
                GenerationInput::new(
                    format!("pipe{p}"),
                    format!("Pipeline {p}"),
                    25,
                    800 + i as i64,
                ),
                now,
            );
            if i % (p + 2) == 0 {
                store.record_winner(&id);
            }
        }
    }
    store
}

fn bench_leaderboard_20_pipelines(c: &mut Criterion) {
    let store = populated_store(20, 50);
    c.bench_function("leaderboard_20_pipelines_1000_records", |b| {
        b.iter(|| black_box(store.pipeline_leaderboard()));
    });
}

fn bench_record_generation(c: &mut Criterion) {
    let store = populated_store(5, 100);
    c.bench_function("record_generation_500_history", |b| {
        b.iter(|| {
            let mut store_clone = store.clone();
            store_clone.record_generation(black_box(GenerationInput::new(
                "pipe0",
                "Pipeline 0",
                25,
                900,
            )));
        });
    });
}

fn bench_budget_status(c: &mut Criterion) {
    let store = populated_store(5, 100);
    c.bench_function("budget_status", |b| {
        b.iter(|| black_box(store.budget_status()));
    });
}

criterion_group!(
    benches,
    bench_leaderboard_20_pipelines,
    bench_record_generation,
    bench_budget_status
);
criterion_main!(benches);

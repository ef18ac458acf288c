//! Analysis benchmarks: session build over the fixture and Monte Carlo trials.
//!
//! Run with: cargo bench -p sprintlens-analysis --bench analysis_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use sprintlens_analysis::prediction::predict_sprint_completion_probability;
use sprintlens_analysis::AnalysisSession;
use sprintlens_core::config::SimulationConfig;
use sprintlens_core::{Dataset, SprintLensConfig};

fn fixture() -> Dataset {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample_dataset.json");
    Dataset::from_json_file(std::path::Path::new(path)).unwrap()
}

fn session_build(c: &mut Criterion) {
    let dataset = fixture();
    c.bench_function("session_build", |b| {
        b.iter(|| AnalysisSession::new(dataset.clone(), SprintLensConfig::default()).unwrap());
    });

    let session = AnalysisSession::new(dataset, SprintLensConfig::default()).unwrap();
    c.bench_function("session_snapshot", |b| {
        b.iter(|| session.snapshot_json().unwrap());
    });
}

fn monte_carlo(c: &mut Criterion) {
    let dataset = fixture();
    let mut group = c.benchmark_group("monte_carlo");

    for trials in [1_000u32, 10_000, 100_000] {
        let config = SimulationConfig {
            trials: Some(trials),
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("trials", trials), &trials, |b, _| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                predict_sprint_completion_probability(
                    dataset.current_sprint(),
                    dataset.sprints(),
                    &config,
                    &mut rng,
                )
            });
        });
    }
    group.finish();
}

criterion_group!(benches, session_build, monte_carlo);
criterion_main!(benches);

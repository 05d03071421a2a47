//! Performance benchmarks for labor_core using Criterion.rs.

use bevy_ecs::prelude::{Entity, World};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labor_core::matching::{FirstFitMatching, MatchingAlgorithm, UniformRandomMatching};
use labor_core::rng::SimRng;
use labor_core::runner::{run_days, simulation_schedule};
use labor_core::scenario::{build_scenario, ScenarioParams};

fn bench_simulation_run(c: &mut Criterion) {
    let scenarios = vec![
        ("demo", 50, 5),
        ("standard", 360, 10),
        ("research", 3600, 100),
    ];

    let mut group = c.benchmark_group("simulation_run");
    group.sample_size(10);
    for (name, workers, companies) in scenarios {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(workers, companies),
            |b, &(workers, companies)| {
                b.iter(|| {
                    let mut world = World::new();
                    let params = ScenarioParams::default()
                        .with_worker_count(workers)
                        .with_company_count(companies)
                        .with_seed(42)
                        .with_status_log_interval_days(0);
                    build_scenario(&mut world, &params).expect("valid params");
                    let mut schedule = simulation_schedule();
                    black_box(run_days(&mut world, &mut schedule, 120));
                });
            },
        );
    }
    group.finish();
}

fn bench_candidate_choice(c: &mut Criterion) {
    let worker = Entity::from_raw(0);
    let candidates: Vec<Entity> = (1..=100).map(Entity::from_raw).collect();

    let mut group = c.benchmark_group("candidate_choice");
    group.bench_function("uniform_random", |b| {
        let mut rng = SimRng::seeded(42);
        b.iter(|| {
            black_box(UniformRandomMatching.choose_company(worker, &candidates, &mut rng));
        });
    });
    group.bench_function("first_fit", |b| {
        let mut rng = SimRng::seeded(42);
        b.iter(|| {
            black_box(FirstFitMatching.choose_company(worker, &candidates, &mut rng));
        });
    });
    group.finish();
}

criterion_group!(benches, bench_simulation_run, bench_candidate_choice);
criterion_main!(benches);

//! Criterion benchmarks for annealing throughput.
//!
//! Synthetic load-balancing instances with pseudo-random durations
//! measure the trajectory hot loop, the O(1) relocation move, and the
//! round-based parallel coordination.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use u_anneal::parallel::ParallelConfig;
use u_anneal::sa::{CoolingSchedule, SaConfig, SaRunner};
use u_anneal::schedule::{move_random_job, ScheduleProblem};

fn durations(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(1..100)).collect()
}

fn bench_trajectory(c: &mut Criterion) {
    let mut group = c.benchmark_group("trajectory");
    group.sample_size(10);

    for &jobs in &[100usize, 1_000, 10_000] {
        let problem = ScheduleProblem::new(durations(jobs, 42), 8);
        let mut rng = SmallRng::seed_from_u64(7);
        let initial = problem.initial_solution(&mut rng).unwrap();
        let config = SaConfig::default()
            .with_cooling(CoolingSchedule::Cauchy)
            .with_max_iterations(10_000)
            .with_max_no_improve(0)
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(jobs),
            &(initial, config),
            |b, (initial, config)| {
                b.iter(|| {
                    let result = SaRunner::run(black_box(initial.clone()), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_relocation_move(c: &mut Criterion) {
    let problem = ScheduleProblem::new(durations(10_000, 42), 8);
    let mut rng = SmallRng::seed_from_u64(7);
    let mut solution = problem.initial_solution(&mut rng).unwrap();

    c.bench_function("relocation_move_10k_jobs", |b| {
        b.iter(|| black_box(move_random_job(&mut solution, &mut rng)))
    });
}

fn bench_parallel_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_solve");
    group.sample_size(10);

    let problem = ScheduleProblem::new(durations(1_000, 42), 8);

    for &threads in &[1usize, 2, 4, 8] {
        let config = ParallelConfig::default()
            .with_num_threads(threads)
            .with_max_rounds(4)
            .with_stagnation_limit(0)
            .with_worker(
                SaConfig::default()
                    .with_cooling(CoolingSchedule::Cauchy)
                    .with_max_iterations(2_000)
                    .with_max_no_improve(0),
            )
            .with_seed(42);

        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = problem.solve(black_box(config)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_trajectory, bench_relocation_move, bench_parallel_solve);
criterion_main!(benches);

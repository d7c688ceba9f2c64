//! Round-based parallel annealing.
//!
//! [`ParallelRunner`] orchestrates repeated rounds of concurrent
//! trajectories: each round snapshots the global best, runs
//! `num_threads` workers from clones of it, joins them, and folds the
//! local bests back into the global best under its lock. Rounds repeat
//! until the stagnation limit or round budget is hit.

use super::config::ParallelConfig;
use crate::sa::{SaConfig, SaResult, SaRunner, SaState};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Result of a parallel annealing run.
#[derive(Debug, Clone)]
pub struct ParallelResult<S: Clone> {
    /// The best state found across all rounds and workers.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Number of completed rounds.
    pub rounds: usize,

    /// Trajectory iterations summed over all workers and rounds.
    pub total_iterations: usize,

    /// Whether the run was terminated by the stagnation limit.
    pub stagnated: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Global best cost after each round, starting with the initial
    /// state's cost. Non-increasing.
    pub cost_history: Vec<f64>,
}

/// Executes the round-based parallel search.
///
/// The global best is the only shared mutable state. Workers receive an
/// independent clone of it at round start and never touch the lock; the
/// coordinator updates it only between rounds, so no lock is ever held
/// during mutation or cost evaluation.
///
/// # Usage
///
/// ```ignore
/// let config = ParallelConfig::default().with_num_threads(8).with_seed(42);
/// let result = ParallelRunner::run(initial, &config);
/// println!("best cost: {}", result.best_cost);
/// ```
pub struct ParallelRunner;

impl ParallelRunner {
    /// Runs the parallel search from the given initial state.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call
    /// [`ParallelConfig::validate`] first to get a descriptive error) or
    /// if the worker thread pool cannot be created.
    pub fn run<S: SaState>(initial: S, config: &ParallelConfig) -> ParallelResult<S> {
        Self::run_with_cancel(initial, config, None)
    }

    /// Runs the parallel search with an optional cancellation token.
    ///
    /// The flag is checked at every round boundary and polled inside the
    /// worker trajectories, so cancellation takes effect without waiting
    /// for long workers to finish their budget.
    pub fn run_with_cancel<S: SaState>(
        initial: S,
        config: &ParallelConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> ParallelResult<S> {
        config.validate().expect("invalid ParallelConfig");

        let base_seed = match config.seed {
            Some(seed) => seed,
            None => rand::random(),
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.num_threads)
            .build()
            .expect("failed to build worker thread pool");

        let initial_cost = initial.cost();
        let global_best = Mutex::new((initial, initial_cost));

        let mut rounds = 0usize;
        let mut total_iterations = 0usize;
        let mut stagnation_count = 0usize;
        let mut stagnated = false;
        let mut cancelled = false;
        let mut cost_history = vec![initial_cost];

        loop {
            if config.max_rounds > 0 && rounds >= config.max_rounds {
                break;
            }
            if config.stagnation_limit > 0 && stagnation_count >= config.stagnation_limit {
                stagnated = true;
                break;
            }
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            // Snapshot under the lock; workers only ever see clones.
            let snapshot = {
                let guard = global_best.lock().unwrap();
                guard.0.clone()
            };

            let starts: Vec<(S, SaConfig)> = (0..config.num_threads)
                .map(|worker| {
                    let seed = worker_seed(base_seed, rounds, config.num_threads, worker);
                    (snapshot.clone(), config.worker.clone().with_seed(seed))
                })
                .collect();

            // collect() is the round barrier: one result slot per worker,
            // in worker order.
            let results: Vec<SaResult<S>> = pool.install(|| {
                starts
                    .into_par_iter()
                    .map(|(start, worker_config)| {
                        SaRunner::run_with_cancel(start, &worker_config, cancel.clone())
                    })
                    .collect()
            });

            rounds += 1;

            let mut improved = false;
            let mut round_cancelled = false;
            let round_best = {
                let mut guard = global_best.lock().unwrap();
                for (worker, result) in results.into_iter().enumerate() {
                    tracing::trace!(
                        worker,
                        iterations = result.iterations,
                        local_best = result.best_cost,
                        "Worker trajectory finished"
                    );
                    total_iterations += result.iterations;
                    round_cancelled |= result.cancelled;
                    if result.best_cost < guard.1 {
                        guard.0 = result.best;
                        guard.1 = result.best_cost;
                        improved = true;
                    }
                }
                cost_history.push(guard.1);
                guard.1
            };

            if improved {
                stagnation_count = 0;
            } else {
                stagnation_count += 1;
            }

            tracing::debug!(
                round = rounds,
                best_cost = round_best,
                improved,
                stagnation = stagnation_count,
                "Round complete"
            );

            if round_cancelled {
                cancelled = true;
                break;
            }
        }

        let (best, best_cost) = global_best.into_inner().unwrap();

        tracing::debug!(
            rounds,
            total_iterations,
            best_cost,
            stagnated,
            cancelled,
            "Parallel annealing finished"
        );

        ParallelResult {
            best,
            best_cost,
            rounds,
            total_iterations,
            stagnated,
            cancelled,
            cost_history,
        }
    }
}

/// RNG seed for one worker: distinct for every (round, worker) pair and
/// offset by one from the base so no worker replays the stream that
/// built the initial state.
fn worker_seed(base: u64, round: usize, num_threads: usize, worker: usize) -> u64 {
    let offset = (round as u64)
        .wrapping_mul(num_threads as u64)
        .wrapping_add(worker as u64);
    base.wrapping_add(1).wrapping_add(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sa::CoolingSchedule;
    use rand::Rng;

    // ---- Quadratic minimization: f(x) = x^2, minimum at 0 ----

    #[derive(Clone)]
    struct Quadratic {
        x: f64,
    }

    impl SaState for Quadratic {
        fn cost(&self) -> f64 {
            self.x * self.x
        }

        fn apply_random_move<R: Rng>(&mut self, rng: &mut R) -> bool {
            self.x += rng.random_range(-1.0..1.0);
            true
        }
    }

    fn quick_worker() -> SaConfig {
        SaConfig::default()
            .with_cooling(CoolingSchedule::Cauchy)
            .with_max_iterations(2_000)
            .with_max_no_improve(200)
    }

    #[test]
    fn test_converges_with_multiple_threads() {
        let config = ParallelConfig::default()
            .with_num_threads(4)
            .with_stagnation_limit(5)
            .with_worker(quick_worker())
            .with_seed(42);

        let result = ParallelRunner::run(Quadratic { x: 10.0 }, &config);

        assert!(
            result.best_cost < 1.0,
            "expected near-zero cost, got {}",
            result.best_cost
        );
        assert!(result.rounds >= 1);
        assert!(result.total_iterations > 0);
    }

    #[test]
    fn test_global_best_non_increasing() {
        let config = ParallelConfig::default()
            .with_num_threads(4)
            .with_stagnation_limit(5)
            .with_worker(quick_worker())
            .with_seed(42);

        let result = ParallelRunner::run(Quadratic { x: 10.0 }, &config);

        assert_eq!(result.cost_history.len(), result.rounds + 1);
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "global best must never regress: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_single_thread_reduces_to_sequential() {
        let config = ParallelConfig::default()
            .with_num_threads(1)
            .with_stagnation_limit(5)
            .with_worker(quick_worker())
            .with_seed(42);

        let result = ParallelRunner::run(Quadratic { x: 10.0 }, &config);

        assert!(result.best_cost < 1.0);
        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_reproducible_with_fixed_seed() {
        let config = ParallelConfig::default()
            .with_num_threads(4)
            .with_stagnation_limit(5)
            .with_worker(quick_worker())
            .with_seed(7);

        let a = ParallelRunner::run(Quadratic { x: 10.0 }, &config);
        let b = ParallelRunner::run(Quadratic { x: 10.0 }, &config);

        assert_eq!(a.best_cost.to_bits(), b.best_cost.to_bits());
        assert_eq!(a.rounds, b.rounds);
        assert_eq!(a.total_iterations, b.total_iterations);
    }

    // ---- Dead neighborhood ----

    #[derive(Clone)]
    struct Frozen;

    impl SaState for Frozen {
        fn cost(&self) -> f64 {
            3.0
        }

        fn apply_random_move<R: Rng>(&mut self, _rng: &mut R) -> bool {
            false
        }
    }

    #[test]
    fn test_stagnation_limit_terminates() {
        let config = ParallelConfig::default()
            .with_num_threads(2)
            .with_stagnation_limit(4)
            .with_worker(quick_worker())
            .with_seed(42);

        let result = ParallelRunner::run(Frozen, &config);

        assert!(result.stagnated);
        assert_eq!(result.rounds, 4);
        assert!((result.best_cost - 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_max_rounds_cap() {
        let config = ParallelConfig::default()
            .with_num_threads(2)
            .with_max_rounds(3)
            .with_stagnation_limit(0)
            .with_worker(quick_worker())
            .with_seed(42);

        let result = ParallelRunner::run(Frozen, &config);

        assert_eq!(result.rounds, 3);
        assert!(!result.stagnated);
    }

    #[test]
    fn test_cancellation_before_first_round() {
        let cancel = Arc::new(AtomicBool::new(true));
        let config = ParallelConfig::default()
            .with_num_threads(2)
            .with_worker(quick_worker())
            .with_seed(42);

        let result =
            ParallelRunner::run_with_cancel(Quadratic { x: 5.0 }, &config, Some(cancel));

        assert!(result.cancelled);
        assert_eq!(result.rounds, 0);
        assert!((result.best_cost - 25.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "invalid ParallelConfig")]
    fn test_invalid_config_panics() {
        let config = ParallelConfig::default().with_num_threads(0);
        let _ = ParallelRunner::run(Frozen, &config);
    }

    #[test]
    fn test_worker_seed_ladder_unique() {
        let mut seen = std::collections::HashSet::new();
        for round in 0..10 {
            for worker in 0..8 {
                assert!(seen.insert(worker_seed(99, round, 8, worker)));
            }
        }
        // The base itself is reserved for the initial state.
        assert!(!seen.contains(&99));
    }
}

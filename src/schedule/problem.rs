//! Load-balancing problem definition and solve facade.

use super::solution::ScheduleSolution;
use crate::error::{AnnealError, Result};
use crate::parallel::{ParallelConfig, ParallelResult, ParallelRunner};
use crate::random::create_rng;
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// A processor load-balancing problem: a fixed set of job durations to
/// spread across a fixed number of identical processors.
///
/// # Examples
///
/// ```
/// use u_anneal::parallel::ParallelConfig;
/// use u_anneal::schedule::ScheduleProblem;
///
/// let problem = ScheduleProblem::new(vec![2, 2, 1, 1], 2);
/// let result = problem
///     .solve(&ParallelConfig::default().with_num_threads(2).with_seed(42))
///     .unwrap();
/// assert_eq!(result.best_cost, 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleProblem {
    durations: Arc<[u64]>,
    num_processors: usize,
}

impl ScheduleProblem {
    pub fn new(durations: Vec<u64>, num_processors: usize) -> Self {
        Self {
            durations: durations.into(),
            num_processors,
        }
    }

    pub fn num_jobs(&self) -> usize {
        self.durations.len()
    }

    pub fn num_processors(&self) -> usize {
        self.num_processors
    }

    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Checks that the problem is solvable by the relocation move.
    ///
    /// At least two processors are required; with one, the move has no
    /// alternative target and its rejection sampling would never
    /// terminate. Rejected here, before any worker is spawned, rather
    /// than discovered as a hang.
    pub fn validate(&self) -> Result<()> {
        if self.num_processors < 2 {
            return Err(AnnealError::Config(format!(
                "num_processors must be at least 2, got {}",
                self.num_processors
            )));
        }
        Ok(())
    }

    /// Creates a uniformly random initial assignment for this problem.
    pub fn initial_solution<R: Rng>(&self, rng: &mut R) -> Result<ScheduleSolution> {
        ScheduleSolution::random(Arc::clone(&self.durations), self.num_processors, rng)
    }

    /// Runs the parallel search on this problem.
    ///
    /// Problem and configuration validation both happen before any
    /// worker is spawned; the final solution's bookkeeping is verified
    /// before it is returned.
    pub fn solve(&self, config: &ParallelConfig) -> Result<ParallelResult<ScheduleSolution>> {
        self.solve_with_cancel(config, None)
    }

    /// Runs the parallel search with an optional cancellation token.
    pub fn solve_with_cancel(
        &self,
        config: &ParallelConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<ParallelResult<ScheduleSolution>> {
        self.validate()?;
        config.validate().map_err(AnnealError::Config)?;

        // Pin the base seed so the initial assignment and the worker
        // seed ladder stay coupled; a fixed seed then reproduces the
        // entire run.
        let base_seed = match config.seed {
            Some(seed) => seed,
            None => rand::random(),
        };
        let mut rng = create_rng(base_seed);
        let initial = self.initial_solution(&mut rng)?;

        let config = config.clone().with_seed(base_seed);
        let result = ParallelRunner::run_with_cancel(initial, &config, cancel);
        result.best.verify()?;

        tracing::info!(
            jobs = self.num_jobs(),
            processors = self.num_processors,
            best_cost = result.best_cost,
            rounds = result.rounds,
            total_iterations = result.total_iterations,
            "Load balancing finished"
        );

        Ok(result)
    }
}

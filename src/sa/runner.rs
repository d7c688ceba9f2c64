//! Annealing trajectory execution.

use super::config::SaConfig;
use super::types::SaState;
use crate::random::create_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// How often the cancellation flag is polled, in iterations.
const CANCEL_CHECK_INTERVAL: usize = 1024;

/// How often the best cost is sampled into the history, in iterations.
const HISTORY_INTERVAL: usize = 1000;

/// Result of one annealing trajectory.
#[derive(Debug, Clone)]
pub struct SaResult<S: Clone> {
    /// The best state found.
    pub best: S,

    /// Cost of the best state.
    pub best_cost: f64,

    /// Total number of iterations (moves attempted).
    pub iterations: usize,

    /// Temperature when the trajectory stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Executes a single annealing trajectory.
///
/// The trajectory mutates its working state in place. An improving move
/// is promoted to the trajectory best; a worsening move is accepted with
/// the Metropolis probability `exp(-(cost - best_cost) / T)` or otherwise
/// rejected, in which case the working state is restored from the best.
/// Only rejected moves advance the non-improvement counter.
///
/// The temperature at iteration `i` comes from the cooling schedule
/// evaluated at `i - 1` (the initial temperature is used for the first
/// comparison), so the schedule is a pure function of the iteration
/// index and never reaches zero.
pub struct SaRunner;

impl SaRunner {
    /// Runs an annealing trajectory from the given initial state.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`SaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<S: SaState>(initial: S, config: &SaConfig) -> SaResult<S> {
        Self::run_with_cancel(initial, config, None)
    }

    /// Runs a trajectory with an optional cancellation token.
    ///
    /// The flag is polled every [`CANCEL_CHECK_INTERVAL`] iterations; a
    /// cancelled trajectory returns the best state found so far.
    pub fn run_with_cancel<S: SaState>(
        initial: S,
        config: &SaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> SaResult<S> {
        config.validate().expect("invalid SaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut current = initial;
        let mut best = current.clone();
        let mut best_cost = best.cost();

        let mut temperature = config.initial_temperature;
        let mut iteration = 0usize;
        let mut no_improve_count = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;
        let mut cancelled = false;

        let mut cost_history = Vec::new();
        cost_history.push(best_cost);

        loop {
            if config.max_iterations > 0 && iteration >= config.max_iterations {
                break;
            }
            if config.max_no_improve > 0 && no_improve_count >= config.max_no_improve {
                break;
            }
            if iteration.is_multiple_of(CANCEL_CHECK_INTERVAL) {
                if let Some(ref flag) = cancel {
                    if flag.load(Ordering::Relaxed) {
                        cancelled = true;
                        break;
                    }
                }
            }

            if !current.apply_random_move(&mut rng) {
                // Dead neighborhood: nothing left to search.
                break;
            }
            let current_cost = current.cost();

            if current_cost < best_cost {
                best.clone_from(&current);
                best_cost = current_cost;
                no_improve_count = 0;
                accepted_moves += 1;
                improving_moves += 1;
            } else {
                // Metropolis criterion against the best-so-far baseline.
                let probability = (-(current_cost - best_cost) / temperature).exp();
                if rng.random_range(0.0..1.0) <= probability {
                    no_improve_count = 0;
                    accepted_moves += 1;
                } else {
                    current.clone_from(&best);
                    no_improve_count += 1;
                }
            }

            temperature = config
                .cooling
                .temperature(config.initial_temperature, iteration);
            iteration += 1;

            if iteration.is_multiple_of(HISTORY_INTERVAL) {
                cost_history.push(best_cost);
            }
        }

        // Final history entry
        if cost_history
            .last()
            .is_none_or(|&last| (last - best_cost).abs() > 1e-15)
        {
            cost_history.push(best_cost);
        }

        SaResult {
            best,
            best_cost,
            iterations: iteration,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            cancelled,
            cost_history,
        }
    }
}

//! Parallel simulated annealing for processor load balancing.
//!
//! Assigns jobs with fixed durations to processors so that the load
//! spread (max processor load - min processor load) is as small as
//! possible. The search runs several annealing trajectories concurrently
//! in synchronized rounds, each round restarting every worker from a
//! clone of the shared global best.
//!
//! - **[`sa`]**: single annealing trajectories over any [`sa::SaState`],
//!   with Boltzmann, Cauchy, and logarithmic cooling.
//! - **[`parallel`]**: the round-based multi-trajectory coordinator.
//! - **[`schedule`]**: the load-balancing domain, with the assignment
//!   solution, relocation move, duration loading, and the solve facade.
//!
//! # Example
//!
//! ```
//! use u_anneal::parallel::ParallelConfig;
//! use u_anneal::schedule::ScheduleProblem;
//!
//! let problem = ScheduleProblem::new(vec![4, 3, 3, 2, 2, 2], 2);
//! let config = ParallelConfig::default().with_num_threads(2).with_seed(42);
//!
//! let result = problem.solve(&config).unwrap();
//! assert_eq!(result.best_cost, 0.0);
//! print!("{}", result.best);
//! ```

pub mod error;
pub mod parallel;
mod random;
pub mod sa;
pub mod schedule;

pub use error::{AnnealError, Result};

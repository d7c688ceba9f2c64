//! Processor load balancing.
//!
//! The domain layer: job durations, an assignment solution with
//! incrementally maintained per-processor loads, the single-job
//! relocation move, tabular data loading, and a solve facade that wires
//! the domain into [`crate::parallel`].
//!
//! Minimizing the load spread (max - min) drives every processor toward
//! the mean load, the classic makespan-flavored balance objective for
//! identical parallel machines.
//!
//! # Reference
//! Graham (1969); Pinedo (2016), "Scheduling: Theory, Algorithms, and
//! Systems", Ch. 5

mod loader;
mod mutation;
mod problem;
mod solution;

pub use loader::{load_durations, load_durations_from_path};
pub use mutation::move_random_job;
pub use problem::ScheduleProblem;
pub use solution::ScheduleSolution;

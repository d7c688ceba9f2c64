//! Parallel multi-trajectory search.
//!
//! Runs many annealing trajectories concurrently in synchronized rounds.
//! Every round seeds each worker with a clone of the shared global best
//! and a distinct deterministic RNG seed; after a full join, local bests
//! are folded back into the global best under a lock. The run stops when
//! the global best has not improved for a configured number of rounds.
//!
//! Restarting every worker from the incumbent turns the trajectory pool
//! into a coordinated multi-start search rather than independent chains.
//!
//! # References
//!
//! - Aarts & Korst (1989), "Simulated Annealing and Boltzmann Machines"
//! - Ram, Sreenivas & Subramaniam (1996), parallel simulated annealing
//!   with periodic exchange

mod config;
mod runner;

pub use config::ParallelConfig;
pub use runner::{ParallelResult, ParallelRunner};

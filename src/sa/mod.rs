//! Simulated annealing trajectories.
//!
//! A single-solution local search inspired by the physical annealing
//! process. Worsening moves are accepted with a probability that
//! decreases as the temperature cools, letting the search escape local
//! optima. Rejected moves restore the working state from the best found
//! so far, so each trajectory explores a neighborhood of its incumbent.
//!
//! A trajectory runs on a single thread; [`crate::parallel`] runs many
//! of them concurrently against a shared best.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Geman & Geman (1984), logarithmic cooling convergence
//! - Szu & Hartley (1987), "Fast simulated annealing"

mod config;
mod runner;
mod types;

pub use config::{CoolingSchedule, SaConfig};
pub use runner::{SaResult, SaRunner};
pub use types::SaState;

//! Job-to-processor assignment model.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies";
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

use crate::error::{AnnealError, Result};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// A candidate assignment of jobs to processors.
///
/// One load accumulator per processor is kept in sync with the
/// assignment, so the cost (max load - min load) is O(processors) and
/// moving a job is O(1); loads are never recomputed from the durations
/// on the search's hot path.
///
/// Two bookkeeping invariants hold at all times:
/// the loads sum to the total of all job durations, and every job's
/// duration is counted in exactly the load of its assigned processor.
/// [`verify`](Self::verify) recomputes the loads to check both.
///
/// Clones deep-copy the assignment and loads; the immutable duration
/// table is shared.
#[derive(Debug)]
pub struct ScheduleSolution {
    durations: Arc<[u64]>,
    assignment: Vec<usize>,
    loads: Vec<u64>,
}

impl Clone for ScheduleSolution {
    fn clone(&self) -> Self {
        Self {
            durations: Arc::clone(&self.durations),
            assignment: self.assignment.clone(),
            loads: self.loads.clone(),
        }
    }

    // Trajectory rollbacks clone into an existing solution; reusing the
    // buffers keeps the hot loop allocation-free.
    fn clone_from(&mut self, source: &Self) {
        self.durations = Arc::clone(&source.durations);
        self.assignment.clone_from(&source.assignment);
        self.loads.clone_from(&source.loads);
    }
}

impl ScheduleSolution {
    /// Creates a solution with every job on a uniformly random processor.
    ///
    /// Fails with a configuration error when `num_processors` is zero.
    pub fn random<R: Rng>(
        durations: Arc<[u64]>,
        num_processors: usize,
        rng: &mut R,
    ) -> Result<Self> {
        if num_processors < 1 {
            return Err(AnnealError::Config(
                "num_processors must be at least 1".into(),
            ));
        }

        let mut assignment = Vec::with_capacity(durations.len());
        let mut loads = vec![0u64; num_processors];
        for &duration in durations.iter() {
            let processor = rng.random_range(0..num_processors);
            assignment.push(processor);
            loads[processor] += duration;
        }

        Ok(Self {
            durations,
            assignment,
            loads,
        })
    }

    pub fn num_jobs(&self) -> usize {
        self.assignment.len()
    }

    pub fn num_processors(&self) -> usize {
        self.loads.len()
    }

    /// The processor each job is assigned to, indexed by job.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Aggregate load per processor.
    pub fn loads(&self) -> &[u64] {
        &self.loads
    }

    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// The processor the given job currently runs on.
    pub fn processor_of(&self, job: usize) -> usize {
        self.assignment[job]
    }

    /// Load imbalance: most-loaded minus least-loaded processor.
    ///
    /// Zero only for a perfectly balanced assignment (and trivially for
    /// zero jobs).
    pub fn imbalance(&self) -> u64 {
        let max = self.loads.iter().max().copied().unwrap_or(0);
        let min = self.loads.iter().min().copied().unwrap_or(0);
        max - min
    }

    /// Moves one job to another processor, shifting its duration between
    /// the two load accumulators. O(1).
    ///
    /// # Panics
    /// Panics if `job` or `new_processor` is out of range.
    pub fn apply_move(&mut self, job: usize, new_processor: usize) {
        let old_processor = self.assignment[job];
        let duration = self.durations[job];
        self.loads[old_processor] -= duration;
        self.loads[new_processor] += duration;
        self.assignment[job] = new_processor;
    }

    /// Recomputes the loads from the assignment and checks them against
    /// the incremental bookkeeping.
    ///
    /// A mismatch means a bug in the move or cost update, reported as an
    /// invariant violation.
    pub fn verify(&self) -> Result<()> {
        if self.assignment.len() != self.durations.len() {
            return Err(AnnealError::Invariant(format!(
                "{} assignment entries for {} jobs",
                self.assignment.len(),
                self.durations.len()
            )));
        }
        let mut expected = vec![0u64; self.loads.len()];
        for (job, &processor) in self.assignment.iter().enumerate() {
            if processor >= self.loads.len() {
                return Err(AnnealError::Invariant(format!(
                    "job {job} assigned to processor {processor}, but only {} processors exist",
                    self.loads.len()
                )));
            }
            expected[processor] += self.durations[job];
        }
        if expected != self.loads {
            return Err(AnnealError::Invariant(
                "processor loads do not match the assignment".into(),
            ));
        }
        Ok(())
    }
}

/// Per-processor load report, one line per processor.
impl fmt::Display for ScheduleSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (processor, load) in self.loads.iter().enumerate() {
            writeln!(f, "Processor {processor}: load = {load}")?;
        }
        Ok(())
    }
}

//! Parallel search configuration.

use crate::sa::SaConfig;

/// Configuration for the round-based parallel search.
///
/// Each round runs `num_threads` trajectories, every one seeded with an
/// independent clone of the current global best. The global best is
/// updated once per round, after all workers have joined.
///
/// # Examples
///
/// ```
/// use u_anneal::parallel::ParallelConfig;
/// use u_anneal::sa::SaConfig;
///
/// let config = ParallelConfig::default()
///     .with_num_threads(8)
///     .with_stagnation_limit(10)
///     .with_worker(SaConfig::default().with_max_no_improve(100))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallelConfig {
    /// Number of concurrent trajectories per round.
    pub num_threads: usize,

    /// Maximum number of rounds. 0 = no limit.
    pub max_rounds: usize,

    /// Consecutive rounds without a global improvement before stopping.
    /// 0 = disabled.
    pub stagnation_limit: usize,

    /// Base seed for worker seeding.
    ///
    /// Worker seeds are derived deterministically from this base, the
    /// round number, and the worker index, so a fixed base makes the
    /// whole run reproducible. `None` draws a random base.
    pub seed: Option<u64>,

    /// Per-trajectory configuration.
    ///
    /// Its `seed` field is ignored; worker seeds come from the ladder
    /// described above.
    pub worker: SaConfig,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            num_threads: 4,
            max_rounds: 0,
            stagnation_limit: 10,
            seed: None,
            worker: SaConfig::default(),
        }
    }
}

impl ParallelConfig {
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = n;
        self
    }

    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_worker(mut self, worker: SaConfig) -> Self {
        self.worker = worker;
        self
    }

    /// Validates the configuration, including the embedded worker config.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_threads == 0 {
            return Err("num_threads must be at least 1".into());
        }
        if self.max_rounds == 0 && self.stagnation_limit == 0 {
            return Err(
                "max_rounds and stagnation_limit cannot both be 0: the search would never terminate"
                    .into(),
            );
        }
        if let Err(e) = self.worker.validate() {
            return Err(format!("worker config: {e}"));
        }
        Ok(())
    }
}

//! SA configuration and cooling schedules.

/// Cooling schedule for temperature reduction.
///
/// All variants are pure functions of the initial temperature and the
/// iteration index. Given a positive initial temperature the result is
/// strictly positive for every iteration (the `ln(2 + i)` form keeps
/// the denominator away from `ln(1) = 0` at iteration zero).
///
/// # References
///
/// - Boltzmann / Logarithmic: Geman & Geman (1984), with the classic
///   `T0 / ln` convergence guarantee
/// - Cauchy: Szu & Hartley (1987), "Fast simulated annealing"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Boltzmann cooling: `T_i = T0 / ln(2 + i)`.
    ///
    /// Very slow decay. Keeps the search exploratory for a long time;
    /// pair it with an iteration budget.
    Boltzmann,

    /// Cauchy cooling: `T_i = T0 / (1 + i)`.
    ///
    /// Faster decay than Boltzmann; the usual choice when the run is
    /// driven by a non-improvement limit.
    Cauchy,

    /// Logarithmic cooling: `T_i = T0 * ln(2 + i) / (1 + i)`.
    ///
    /// Between the other two: near-Cauchy decay damped by a slowly
    /// growing numerator.
    Logarithmic,
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Boltzmann
    }
}

impl CoolingSchedule {
    /// Temperature at the given iteration.
    pub fn temperature(&self, initial: f64, iteration: usize) -> f64 {
        let i = iteration as f64;
        match self {
            CoolingSchedule::Boltzmann => initial / (2.0 + i).ln(),
            CoolingSchedule::Cauchy => initial / (1.0 + i),
            CoolingSchedule::Logarithmic => initial * (2.0 + i).ln() / (1.0 + i),
        }
    }
}

/// Configuration for a single annealing trajectory.
///
/// # Examples
///
/// ```
/// use u_anneal::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling(CoolingSchedule::Cauchy)
///     .with_max_no_improve(200)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum total iterations (hard budget). 0 = no limit.
    ///
    /// Under Boltzmann cooling the temperature decays so slowly that a
    /// non-improvement limit alone may effectively never trigger; keep
    /// a finite budget unless the cooling is Cauchy-fast.
    pub max_iterations: usize,

    /// Consecutive rejected moves before stopping. 0 = disabled.
    ///
    /// Any accepted move (improving or Metropolis) resets the counter.
    pub max_no_improve: usize,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling: CoolingSchedule::default(),
            max_iterations: 10_000,
            max_no_improve: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_temperature <= 0.0 {
            return Err("initial_temperature must be positive".into());
        }
        if !self.initial_temperature.is_finite() {
            return Err("initial_temperature must be finite".into());
        }
        if self.max_iterations == 0 && self.max_no_improve == 0 {
            return Err(
                "max_iterations and max_no_improve cannot both be 0: the trajectory would never terminate"
                    .into(),
            );
        }
        Ok(())
    }
}

//! Tabu Search configuration.

use std::time::Duration;

use crate::error::{AssignError, Result};

/// Configuration parameters for the assignment Tabu Search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tabu_assign::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_tabu_capacity(15)
///     .with_max_iterations(200)
///     .with_time_limit(Duration::from_secs(5))
///     .with_seed(7);
/// assert_eq!(config.tabu_capacity, 15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of recent moves kept in tabu memory.
    pub tabu_capacity: usize,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Wall-clock ceiling, polled once per iteration.
    pub time_limit: Duration,
    /// Whether a tabu move may be taken when it beats the best-known cost.
    pub aspiration: bool,
    /// Restarts are considered once the no-improvement counter exceeds this.
    pub stagnation_limit: usize,
    /// Probability of restarting from a random assignment when stagnating.
    pub restart_probability: f64,
    /// Whether a restart also clears the tabu memory.
    pub reset_tabu_on_restart: bool,
    /// Random seed used by `search()` (None draws from OS entropy).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            tabu_capacity: 10,
            max_iterations: 100,
            time_limit: Duration::from_secs(15),
            aspiration: true,
            stagnation_limit: 20,
            restart_probability: 0.3,
            reset_tabu_on_restart: false,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the tabu memory capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the wall-clock ceiling.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Enables or disables the aspiration criterion.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Sets the stagnation threshold.
    pub fn with_stagnation_limit(mut self, n: usize) -> Self {
        self.stagnation_limit = n;
        self
    }

    /// Sets the restart probability.
    pub fn with_restart_probability(mut self, p: f64) -> Self {
        self.restart_probability = p;
        self
    }

    /// Clears tabu memory on every restart when `true`.
    pub fn with_reset_tabu_on_restart(mut self, reset: bool) -> Self {
        self.reset_tabu_on_restart = reset;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.tabu_capacity == 0 {
            return Err(AssignError::invalid("tabu_capacity must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(AssignError::invalid("max_iterations must be positive"));
        }
        if !(0.0..=1.0).contains(&self.restart_probability) {
            return Err(AssignError::invalid(format!(
                "restart_probability must be in [0, 1], got {}",
                self.restart_probability
            )));
        }
        Ok(())
    }
}

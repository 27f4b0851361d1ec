//! Search outcome types.

use std::time::Duration;

use crate::assignment::Assignment;

/// Why a search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// `max_iterations` reached.
    IterationLimit,
    /// The wall-clock ceiling elapsed.
    TimeLimit,
    /// A single agent: no swap exists, the initial assignment is optimal.
    EmptyNeighborhood,
}

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best assignment found.
    pub best: Assignment,
    /// Cost of the best assignment.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best assignment was found (0 if it was the
    /// initial one).
    pub best_iteration: usize,
    /// Number of random restarts performed.
    pub restarts: usize,
    /// Wall-clock time spent in the search.
    pub elapsed: Duration,
    /// Stopping reason.
    pub termination: Termination,
    /// Best-known cost after each iteration.
    pub cost_history: Vec<f64>,
}

//! Tabu Search engine for the assignment problem.
//!
//! # Algorithm
//!
//! 1. Draw a random initial assignment
//! 2. At each iteration, until the iteration or time budget runs out:
//!    a. Enumerate every single-swap neighbor
//!    b. Take the cheapest neighbor whose move is not tabu, or whose cost
//!    beats the best known (aspiration)
//!    c. Record its move in the tabu memory
//!    d. Update the best known, or count a non-improving iteration
//!    e. After `stagnation_limit` non-improving iterations, restart from a
//!    random assignment with probability `restart_probability`
//! 3. Return the best assignment seen
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, trace};

use super::config::TabuConfig;
use super::memory::TabuMemory;
use super::types::{TabuResult, Termination};
use crate::assignment::{Assignment, CostMatrix, Neighbor, NeighborhoodGenerator, SolutionSpace};
use crate::error::{AssignError, Result};
use crate::random::{create_rng, entropy_rng};

/// Mutable state of one search call.
struct SearchState {
    current: Assignment,
    current_cost: f64,
    best: Assignment,
    best_cost: f64,
    no_improve: usize,
}

impl SearchState {
    fn new(initial: Assignment, cost: f64) -> Self {
        Self {
            best: initial.clone(),
            best_cost: cost,
            current: initial,
            current_cost: cost,
            no_improve: 0,
        }
    }
}

/// Tabu Search over swap neighborhoods of an assignment.
///
/// The engine owns the cost matrix and all search components. Each call to
/// a `search*` method starts from an empty tabu memory and returns the best
/// assignment found within the configured budgets.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    matrix: CostMatrix,
    config: TabuConfig,
    space: SolutionSpace,
    neighborhood: NeighborhoodGenerator,
    memory: TabuMemory,
}

impl SearchEngine {
    /// Creates an engine, validating `config`.
    pub fn new(matrix: CostMatrix, config: TabuConfig) -> Result<Self> {
        config.validate()?;
        let n = matrix.size();
        Ok(Self {
            memory: TabuMemory::new(config.tabu_capacity)?,
            space: SolutionSpace::new(n),
            neighborhood: NeighborhoodGenerator::new(n),
            matrix,
            config,
        })
    }

    /// Builds the matrix from rows and uses default settings for
    /// everything but tabu capacity and iteration budget.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tabu_assign::tabu::SearchEngine;
    ///
    /// let rows = vec![
    ///     vec![9.0, 2.0, 7.0],
    ///     vec![6.0, 4.0, 3.0],
    ///     vec![5.0, 8.0, 1.0],
    /// ];
    /// let mut engine = SearchEngine::from_rows(rows, 3, 50).unwrap();
    /// let result = engine.search();
    /// assert_eq!(result.best.as_slice(), &[1, 0, 2]);
    /// assert_eq!(result.best_cost, 9.0);
    /// ```
    pub fn from_rows(
        rows: Vec<Vec<f64>>,
        tabu_capacity: usize,
        max_iterations: usize,
    ) -> Result<Self> {
        let config = TabuConfig::default()
            .with_tabu_capacity(tabu_capacity)
            .with_max_iterations(max_iterations);
        Self::new(CostMatrix::from_rows(rows)?, config)
    }

    /// The cost matrix being optimized.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// The active configuration.
    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs the search with a generator built from `config.seed`, or from
    /// OS entropy when no seed is set.
    pub fn search(&mut self) -> TabuResult {
        match self.config.seed {
            Some(seed) => self.search_with_rng(&mut create_rng(seed)),
            None => self.search_with_rng(&mut entropy_rng()),
        }
    }

    /// Runs the search drawing all randomness from `rng`.
    pub fn search_with_rng<R: Rng>(&mut self, rng: &mut R) -> TabuResult {
        let initial = self.space.random_solution(rng);
        self.run(initial, rng)
    }

    /// Runs the search from a caller-chosen initial assignment.
    ///
    /// Fails if `initial` does not have one task per agent of the matrix.
    pub fn search_from<R: Rng>(&mut self, initial: Assignment, rng: &mut R) -> Result<TabuResult> {
        if initial.len() != self.matrix.size() {
            return Err(AssignError::invalid(format!(
                "initial assignment has {} agents, matrix has {}",
                initial.len(),
                self.matrix.size()
            )));
        }
        Ok(self.run(initial, rng))
    }

    #[tracing::instrument(level = "debug", name = "Tabu Search", skip_all, fields(n = self.matrix.size()))]
    fn run<R: Rng>(&mut self, initial: Assignment, rng: &mut R) -> TabuResult {
        let started = Instant::now();
        self.memory.clear();

        let initial_cost = self.matrix.assignment_cost(&initial);
        let mut state = SearchState::new(initial, initial_cost);
        let mut cost_history = Vec::with_capacity(self.config.max_iterations.min(1 << 16));
        let mut iteration = 0;
        let mut best_iteration = 0;
        let mut restarts = 0;

        let termination = if self.space.neighborhood_size() == 0 {
            Termination::EmptyNeighborhood
        } else {
            loop {
                if started.elapsed() >= self.config.time_limit {
                    break Termination::TimeLimit;
                }
                if iteration >= self.config.max_iterations {
                    break Termination::IterationLimit;
                }

                match self.select_candidate(&state.current, state.best_cost) {
                    Some((neighbor, cost)) => {
                        self.memory.record(neighbor.mv);
                        state.current = neighbor.assignment;
                        state.current_cost = cost;

                        if cost < state.best_cost {
                            trace!(iteration, cost, mv = %neighbor.mv, "new best");
                            state.best = state.current.clone();
                            state.best_cost = cost;
                            state.no_improve = 0;
                            best_iteration = iteration;
                        } else {
                            state.no_improve += 1;
                        }
                    }
                    None => trace!(iteration, "no admissible move, iteration skipped"),
                }

                if state.no_improve > self.config.stagnation_limit
                    && rng.random_bool(self.config.restart_probability)
                {
                    state.current = self.space.random_solution(rng);
                    state.current_cost = self.matrix.assignment_cost(&state.current);
                    state.no_improve = 0;
                    restarts += 1;
                    if self.config.reset_tabu_on_restart {
                        self.memory.clear();
                    }
                    debug!(iteration, cost = state.current_cost, "diversification restart");
                }

                cost_history.push(state.best_cost);
                iteration += 1;
            }
        };

        let elapsed = started.elapsed();
        debug!(
            iterations = iteration,
            best_cost = state.best_cost,
            restarts,
            ?termination,
            ?elapsed,
            "search finished"
        );

        TabuResult {
            best: state.best,
            best_cost: state.best_cost,
            iterations: iteration,
            best_iteration,
            restarts,
            elapsed,
            termination,
            cost_history,
        }
    }

    /// Cheapest admissible neighbor of `current`.
    ///
    /// A neighbor is admissible when its move is not tabu, or when
    /// aspiration is enabled and its cost is strictly below `best_cost`.
    /// The first neighbor in enumeration order wins ties.
    fn select_candidate(&self, current: &Assignment, best_cost: f64) -> Option<(Neighbor, f64)> {
        let mut chosen = None;
        let mut chosen_cost = f64::INFINITY;
        let current_cost = self.matrix.assignment_cost(current);

        for neighbor in self.neighborhood.neighbors(current) {
            let cost = self.matrix.assignment_cost(&neighbor.assignment);
            debug_assert!(
                (current_cost + self.matrix.swap_delta(current, neighbor.mv) - cost).abs()
                    <= 1e-9 * cost.max(current_cost).max(1.0),
                "swap delta disagrees with full evaluation for {}",
                neighbor.mv
            );
            let admissible = !self.memory.contains(neighbor.mv)
                || (self.config.aspiration && cost < best_cost);

            if admissible && cost < chosen_cost {
                chosen_cost = cost;
                chosen = Some(neighbor);
            }
        }

        chosen.map(|neighbor| (neighbor, chosen_cost))
    }
}

//! Feasible solution space: permutations of `0..n`.

use rand::Rng;

use super::solution::Assignment;
use crate::random::shuffle;

/// Generator of feasible assignments of a fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolutionSpace {
    n: usize,
}

impl SolutionSpace {
    /// Space of all assignments of `n` agents to `n` tasks.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Number of agents per assignment.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of single-swap neighbors of any assignment, `n(n-1)/2`.
    pub fn neighborhood_size(&self) -> usize {
        self.n * self.n.saturating_sub(1) / 2
    }

    /// Draws a uniformly random assignment.
    ///
    /// Deterministic for a seeded `rng`.
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> Assignment {
        let mut tasks: Vec<usize> = (0..self.n).collect();
        shuffle(&mut tasks, rng);
        Assignment::from_permutation(tasks)
    }
}

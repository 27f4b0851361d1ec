//! Permutation-encoded assignments.

use super::moves::SwapMove;
use crate::error::{AssignError, Result};

/// A complete one-to-one assignment of agents to tasks.
///
/// Position `i` holds the task assigned to agent `i`. The wrapped vector is
/// always a permutation of `0..n`; there is no way to build a partial or
/// duplicated assignment through the public API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    /// The assignment mapping every agent `i` to task `i`.
    pub fn identity(n: usize) -> Self {
        Assignment((0..n).collect())
    }

    /// Wraps a vector already known to be a permutation.
    pub(crate) fn from_permutation(tasks: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&tasks));
        Assignment(tasks)
    }

    /// Number of agents (and tasks).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the assignment covers zero agents.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Task assigned to `agent`, if the agent exists.
    pub fn task_of(&self, agent: usize) -> Option<usize> {
        self.0.get(agent).copied()
    }

    /// The task sequence indexed by agent.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consumes the assignment, returning the task sequence.
    pub fn into_inner(self) -> Vec<usize> {
        self.0
    }

    /// Returns a copy with the tasks of the two agents of `mv` exchanged.
    ///
    /// # Panics
    ///
    /// Panics if either agent is out of range.
    pub fn swapped(&self, mv: SwapMove) -> Self {
        let mut tasks = self.0.clone();
        tasks.swap(mv.first(), mv.second());
        Assignment(tasks)
    }

    /// `(agent, task)` pairs in agent order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().copied().enumerate()
    }
}

impl TryFrom<Vec<usize>> for Assignment {
    type Error = AssignError;

    fn try_from(tasks: Vec<usize>) -> Result<Self> {
        if !is_permutation(&tasks) {
            return Err(AssignError::invalid(format!(
                "{tasks:?} is not a permutation of 0..{}",
                tasks.len()
            )));
        }
        Ok(Assignment(tasks))
    }
}

impl AsRef<[usize]> for Assignment {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Assignment> for Vec<usize> {
    fn from(a: Assignment) -> Self {
        a.0
    }
}

/// Checks that `tasks` contains every value of `0..tasks.len()` exactly once.
pub fn is_permutation(tasks: &[usize]) -> bool {
    let n = tasks.len();
    let mut seen = vec![false; n];
    for &t in tasks {
        if t >= n || seen[t] {
            return false;
        }
        seen[t] = true;
    }
    true
}

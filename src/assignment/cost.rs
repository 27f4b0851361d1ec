//! Square cost matrix and solution evaluation.

use super::moves::SwapMove;
use super::solution::Assignment;
use crate::error::{AssignError, Result};

/// Immutable N×N matrix of assignment costs.
///
/// Row `i` is agent `i`, column `j` is task `j`. Entries are finite and
/// non-negative. Storage is a single row-major buffer.
///
/// # Examples
///
/// ```
/// use u_tabu_assign::assignment::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.cost(&[1, 0]).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from one vector per agent.
    ///
    /// Fails with [`AssignError::InvalidInput`] if there are no rows, a row
    /// length differs from the row count, or an entry is negative or not
    /// finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(AssignError::invalid("cost matrix is empty"));
        }
        let mut data = Vec::with_capacity(n * n);
        for (agent, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AssignError::invalid(format!(
                    "cost matrix is not square: row {agent} has {} columns, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_flat(n, data)
    }

    /// Builds a matrix from rows and checks it against a configured size.
    pub fn from_rows_with_size(rows: Vec<Vec<f64>>, n: usize) -> Result<Self> {
        if rows.len() != n {
            return Err(AssignError::invalid(format!(
                "cost matrix has {} rows, configured size is {n}",
                rows.len()
            )));
        }
        Self::from_rows(rows)
    }

    /// Builds a matrix from a row-major buffer of `n * n` entries.
    ///
    /// Besides the per-entry checks of [`from_rows`](Self::from_rows), the
    /// sum of the row maxima must be finite so that no assignment cost can
    /// overflow to infinity.
    pub fn from_flat(n: usize, data: Vec<f64>) -> Result<Self> {
        if n == 0 {
            return Err(AssignError::invalid("cost matrix is empty"));
        }
        let expected = n
            .checked_mul(n)
            .ok_or_else(|| AssignError::invalid(format!("matrix size {n} is too large")))?;
        if data.len() != expected {
            return Err(AssignError::invalid(format!(
                "expected {expected} entries for a {n}x{n} matrix, got {}",
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|c| !c.is_finite() || *c < 0.0) {
            return Err(AssignError::invalid(format!(
                "cost at agent {}, task {} must be finite and non-negative, got {}",
                pos / n,
                pos % n,
                data[pos]
            )));
        }
        let worst: f64 = data
            .chunks(n)
            .map(|row| row.iter().copied().fold(0.0, f64::max))
            .sum();
        if !worst.is_finite() {
            return Err(AssignError::invalid(
                "sum of the largest cost per agent overflows f64",
            ));
        }
        Ok(Self { n, data })
    }

    /// Number of agents (equal to the number of tasks).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of giving `task` to `agent`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, agent: usize, task: usize) -> f64 {
        assert!(task < self.n, "task {task} out of range for size {}", self.n);
        self.data[agent * self.n + task]
    }

    /// Costs of all tasks for one agent.
    ///
    /// # Panics
    ///
    /// Panics if `agent` is out of range.
    pub fn row(&self, agent: usize) -> &[f64] {
        &self.data[agent * self.n..(agent + 1) * self.n]
    }

    /// Total cost of `solution`, where `solution[agent]` is the agent's task.
    ///
    /// Fails if the length is not `size()` or a task index is out of range.
    /// Duplicated tasks are not rejected here; use
    /// [`Assignment::try_from`] to validate a full permutation.
    pub fn cost(&self, solution: &[usize]) -> Result<f64> {
        if solution.len() != self.n {
            return Err(AssignError::invalid(format!(
                "solution has {} agents, matrix has {}",
                solution.len(),
                self.n
            )));
        }
        if let Some((agent, &task)) = solution.iter().enumerate().find(|&(_, &t)| t >= self.n) {
            return Err(AssignError::invalid(format!(
                "agent {agent} assigned to task {task}, valid tasks are 0..{}",
                self.n
            )));
        }
        Ok(self.sum(solution))
    }

    /// Total cost of an assignment produced for this matrix.
    ///
    /// # Panics
    ///
    /// Panics if the assignment has a different size than the matrix.
    pub fn assignment_cost(&self, assignment: &Assignment) -> f64 {
        assert_eq!(assignment.len(), self.n, "assignment size mismatch");
        self.sum(assignment.as_slice())
    }

    /// Cost change caused by applying `mv` to `assignment`.
    ///
    /// # Panics
    ///
    /// Panics if either agent of `mv` is out of range for `assignment` or
    /// the matrix.
    pub fn swap_delta(&self, assignment: &Assignment, mv: SwapMove) -> f64 {
        let (i, j) = mv.agents();
        let tasks = assignment.as_slice();
        let (ti, tj) = (tasks[i], tasks[j]);
        self.get(i, tj) + self.get(j, ti) - self.get(i, ti) - self.get(j, tj)
    }

    fn sum(&self, tasks: &[usize]) -> f64 {
        tasks
            .iter()
            .enumerate()
            .map(|(agent, &task)| self.data[agent * self.n + task])
            .sum()
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = AssignError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(m: CostMatrix) -> Self {
        m.data.chunks(m.n).map(<[f64]>::to_vec).collect()
    }
}

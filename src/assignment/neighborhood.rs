//! Pairwise-swap neighborhood.

use super::moves::SwapMove;
use super::solution::Assignment;

/// A neighboring assignment together with the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    /// The assignment after the swap.
    pub assignment: Assignment,
    /// The canonical move applied.
    pub mv: SwapMove,
}

/// Enumerates every assignment reachable by one swap.
///
/// Enumeration order is fixed: ascending first agent, then ascending second
/// agent. The search engine breaks cost ties by this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborhoodGenerator {
    n: usize,
}

impl NeighborhoodGenerator {
    /// Generator for assignments of `n` agents.
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// All canonical swap moves in enumeration order.
    pub fn moves(&self) -> impl Iterator<Item = SwapMove> + '_ {
        (0..self.n).flat_map(move |i| ((i + 1)..self.n).filter_map(move |j| SwapMove::new(i, j)))
    }

    /// All neighbors of `solution`, `n(n-1)/2` of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tabu_assign::assignment::{Assignment, NeighborhoodGenerator};
    ///
    /// let generator = NeighborhoodGenerator::new(3);
    /// let hood = generator.neighbors(&Assignment::identity(3));
    /// let tasks: Vec<_> = hood.iter().map(|nb| nb.assignment.as_slice().to_vec()).collect();
    /// assert_eq!(tasks, vec![vec![1, 0, 2], vec![2, 1, 0], vec![0, 2, 1]]);
    /// ```
    pub fn neighbors(&self, solution: &Assignment) -> Vec<Neighbor> {
        debug_assert_eq!(solution.len(), self.n);
        self.moves()
            .map(|mv| Neighbor {
                assignment: solution.swapped(mv),
                mv,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::solution::is_permutation;

    #[test]
    fn test_count_and_order() {
        let generator = NeighborhoodGenerator::new(5);
        let moves: Vec<_> = generator.moves().map(|m| m.agents()).collect();
        assert_eq!(moves.len(), 10);
        assert_eq!(moves[0], (0, 1));
        assert_eq!(moves[3], (0, 4));
        assert_eq!(moves[4], (1, 2));
        assert_eq!(moves[9], (3, 4));
        assert!(moves.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_neighbors_differ_in_two_positions() {
        let generator = NeighborhoodGenerator::new(6);
        let base = Assignment::try_from(vec![3, 5, 0, 1, 4, 2]).unwrap();
        for nb in generator.neighbors(&base) {
            let (i, j) = nb.mv.agents();
            assert!(is_permutation(nb.assignment.as_slice()));
            assert_eq!(nb.assignment.task_of(i), base.task_of(j));
            assert_eq!(nb.assignment.task_of(j), base.task_of(i));
            let changed = base
                .as_slice()
                .iter()
                .zip(nb.assignment.as_slice())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(changed, 2);
        }
    }

    #[test]
    fn test_single_agent_has_no_neighbors() {
        let generator = NeighborhoodGenerator::new(1);
        assert!(generator.neighbors(&Assignment::identity(1)).is_empty());
    }
}

//! Property tests for the assignment Tabu Search.

use proptest::prelude::*;
use u_tabu_assign::assignment::{is_permutation, CostMatrix, SolutionSpace, SwapMove};
use u_tabu_assign::random::create_rng;
use u_tabu_assign::tabu::{SearchEngine, TabuConfig, TabuMemory};

fn matrix_strategy() -> impl Strategy<Value = Vec<Vec<f64>>> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0u32..100, n), n).prop_map(|rows| {
            rows.into_iter()
                .map(|row| row.into_iter().map(f64::from).collect())
                .collect()
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn search_returns_permutation(rows in matrix_strategy(), seed in any::<u64>(), capacity in 1usize..20) {
        let n = rows.len();
        let matrix = CostMatrix::from_rows(rows).unwrap();
        let config = TabuConfig::default()
            .with_tabu_capacity(capacity)
            .with_max_iterations(60);
        let mut engine = SearchEngine::new(matrix.clone(), config).unwrap();
        let result = engine.search_with_rng(&mut create_rng(seed));

        prop_assert_eq!(result.best.len(), n);
        prop_assert!(is_permutation(result.best.as_slice()));
        prop_assert_eq!(result.best_cost, matrix.cost(result.best.as_slice()).unwrap());
    }

    #[test]
    fn best_cost_never_increases(rows in matrix_strategy(), seed in any::<u64>()) {
        let matrix = CostMatrix::from_rows(rows).unwrap();
        let config = TabuConfig::default()
            .with_tabu_capacity(3)
            .with_max_iterations(80)
            .with_stagnation_limit(4)
            .with_restart_probability(0.5);
        let mut engine = SearchEngine::new(matrix, config).unwrap();
        let result = engine.search_with_rng(&mut create_rng(seed));

        for window in result.cost_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn cost_is_literal_sum(rows in matrix_strategy(), seed in any::<u64>()) {
        let n = rows.len();
        let matrix = CostMatrix::from_rows(rows.clone()).unwrap();
        let solution = SolutionSpace::new(n).random_solution(&mut create_rng(seed));
        let expected: f64 = solution.pairs().map(|(agent, task)| rows[agent][task]).sum();
        prop_assert_eq!(matrix.cost(solution.as_slice()).unwrap(), expected);
    }

    #[test]
    fn tabu_memory_is_bounded(capacity in 1usize..16, pairs in prop::collection::vec((0usize..10, 0usize..10), 0..64)) {
        let mut memory = TabuMemory::new(capacity).unwrap();
        let moves: Vec<SwapMove> = pairs
            .into_iter()
            .filter_map(|(i, j)| SwapMove::new(i, j))
            .collect();
        for &mv in &moves {
            memory.record(mv);
            prop_assert!(memory.len() <= capacity);
        }
        let kept = moves.len().saturating_sub(capacity);
        let tail: Vec<SwapMove> = moves[kept..].to_vec();
        prop_assert_eq!(memory.iter().collect::<Vec<_>>(), tail.clone());
        for mv in &moves[..kept] {
            prop_assert_eq!(memory.contains(*mv), tail.contains(mv));
        }
    }
}

//! Tabu Search for the linear assignment problem.
//!
//! Assigns N agents to N tasks, one-to-one, minimizing the summed cost
//! from a square cost matrix. The search is a time-boxed metaheuristic:
//! it returns the best assignment found, not a proven optimum.
//!
//! - [`assignment`]: cost matrix, permutation-encoded solutions, swap
//!   moves, random solution generation and swap neighborhoods.
//! - [`tabu`]: FIFO tabu memory, configuration, and the search engine
//!   with aspiration and stagnation-driven random restarts.
//!
//! # Examples
//!
//! ```
//! use u_tabu_assign::assignment::CostMatrix;
//! use u_tabu_assign::tabu::{SearchEngine, TabuConfig};
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![4.0, 1.0, 3.0],
//!     vec![2.0, 0.0, 5.0],
//!     vec![3.0, 2.0, 2.0],
//! ])
//! .unwrap();
//! let config = TabuConfig::default().with_tabu_capacity(2).with_seed(1);
//! let mut engine = SearchEngine::new(matrix, config).unwrap();
//!
//! let result = engine.search();
//! assert_eq!(result.best.len(), 3);
//! assert_eq!(result.best_cost, 5.0);
//! ```

pub mod assignment;
pub mod error;
pub mod random;
pub mod tabu;

pub use error::{AssignError, Result};

//! Tabu Search (TS) for the assignment problem.
//!
//! A single-solution trajectory metaheuristic that uses a short-term memory
//! (the tabu list) of recent swaps to prevent cycling, an aspiration
//! criterion to let through moves that beat the best known cost, and
//! random restarts to leave stagnant regions.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod engine;
mod memory;
mod types;

pub use config::TabuConfig;
pub use engine::SearchEngine;
pub use memory::TabuMemory;
pub use types::{TabuResult, Termination};

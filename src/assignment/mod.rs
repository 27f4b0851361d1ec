//! Assignment problem model.
//!
//! N agents must each receive exactly one of N tasks. A solution is a
//! permutation (`solution[agent] = task`), the elementary move exchanges
//! the tasks of two agents, and the objective is the sum of the chosen
//! matrix entries.

mod cost;
mod moves;
mod neighborhood;
mod solution;
mod space;

pub use cost::CostMatrix;
pub use moves::SwapMove;
pub use neighborhood::{Neighbor, NeighborhoodGenerator};
pub use solution::{is_permutation, Assignment};
pub use space::SolutionSpace;

//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AssignError>;

/// Errors surfaced to callers.
///
/// Only construction-time and caller-supplied data can fail. Once a
/// [`SearchEngine`](crate::tabu::SearchEngine) exists, a search always
/// returns its best-known solution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssignError {
    /// Malformed cost matrix, solution, or configuration value.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl AssignError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        AssignError::InvalidInput(msg.into())
    }
}

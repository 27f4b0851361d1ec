//! Pairwise swap moves.

/// Exchange of the tasks currently held by two agents.
///
/// The pair is unordered: `SwapMove::new(3, 7)` and `SwapMove::new(7, 3)`
/// build the same value, so equality and hashing agree with tabu lookups.
/// Invariant: `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapMove {
    first: usize,
    second: usize,
}

impl SwapMove {
    /// Builds the canonical move for agents `i` and `j`.
    ///
    /// Returns `None` when `i == j`, since swapping an agent with itself
    /// is not a move.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tabu_assign::assignment::SwapMove;
    ///
    /// let a = SwapMove::new(5, 2).unwrap();
    /// assert_eq!(a, SwapMove::new(2, 5).unwrap());
    /// assert_eq!(a.agents(), (2, 5));
    /// assert!(SwapMove::new(4, 4).is_none());
    /// ```
    pub fn new(i: usize, j: usize) -> Option<Self> {
        match i.cmp(&j) {
            std::cmp::Ordering::Less => Some(Self {
                first: i,
                second: j,
            }),
            std::cmp::Ordering::Greater => Some(Self {
                first: j,
                second: i,
            }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller agent index.
    pub fn first(&self) -> usize {
        self.first
    }

    /// The larger agent index.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Both agents, smaller first.
    pub fn agents(&self) -> (usize, usize) {
        (self.first, self.second)
    }
}

impl std::fmt::Display for SwapMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "swap({}, {})", self.first, self.second)
    }
}

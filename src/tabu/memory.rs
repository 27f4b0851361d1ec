//! Bounded FIFO tabu memory.

use std::collections::{HashMap, VecDeque};

use crate::assignment::SwapMove;
use crate::error::{AssignError, Result};

/// Recently applied moves, forbidden until they age out.
///
/// A move recorded twice occupies two slots and stays tabu until both have
/// been evicted. Eviction is strict FIFO by insertion, never LRU. The
/// length never exceeds [`capacity`](Self::capacity).
#[derive(Debug, Clone)]
pub struct TabuMemory {
    capacity: usize,
    queue: VecDeque<SwapMove>,
    // occurrences of each move currently in `queue`
    counts: HashMap<SwapMove, usize>,
}

impl TabuMemory {
    /// Empty memory holding at most `capacity` moves.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(AssignError::invalid("tabu capacity must be positive"));
        }
        Ok(Self {
            capacity,
            queue: VecDeque::with_capacity(capacity + 1),
            counts: HashMap::with_capacity(capacity),
        })
    }

    /// Whether `mv` is currently tabu.
    pub fn contains(&self, mv: SwapMove) -> bool {
        self.counts.contains_key(&mv)
    }

    /// Appends `mv`, evicting the oldest entry when over capacity.
    pub fn record(&mut self, mv: SwapMove) {
        self.queue.push_back(mv);
        *self.counts.entry(mv).or_insert(0) += 1;

        while self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.forget(old);
            }
        }
    }

    fn forget(&mut self, mv: SwapMove) {
        if let Some(c) = self.counts.get_mut(&mv) {
            *c -= 1;
            if *c == 0 {
                self.counts.remove(&mv);
            }
        }
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether no move is tabu.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Maximum number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.counts.clear();
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = SwapMove> + '_ {
        self.queue.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(i: usize, j: usize) -> SwapMove {
        SwapMove::new(i, j).unwrap()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(TabuMemory::new(0).is_err());
    }

    #[test]
    fn test_symmetric_lookup() {
        let mut memory = TabuMemory::new(3).unwrap();
        memory.record(mv(4, 1));
        assert!(memory.contains(mv(1, 4)));
        assert!(!memory.contains(mv(1, 3)));
    }

    #[test]
    fn test_fifo_eviction() {
        let capacity = 3;
        let k = 2;
        let mut memory = TabuMemory::new(capacity).unwrap();
        let moves: Vec<_> = (1..=capacity + k).map(|j| mv(0, j)).collect();
        for &m in &moves {
            memory.record(m);
            assert!(memory.len() <= capacity);
        }
        assert_eq!(memory.len(), capacity);
        for m in &moves[..k] {
            assert!(!memory.contains(*m), "{m} should have been evicted");
        }
        for m in &moves[k..] {
            assert!(memory.contains(*m));
        }
    }

    #[test]
    fn test_duplicates_occupy_own_slots() {
        let mut memory = TabuMemory::new(2).unwrap();
        memory.record(mv(0, 1));
        memory.record(mv(0, 1));
        assert_eq!(memory.len(), 2);

        // evicts the first copy, second still tabu
        memory.record(mv(2, 3));
        assert!(memory.contains(mv(0, 1)));

        // evicts the second copy
        memory.record(mv(2, 3));
        assert!(!memory.contains(mv(0, 1)));
        let order: Vec<_> = memory.iter().map(|m| m.agents()).collect();
        assert_eq!(order, vec![(2, 3), (2, 3)]);
    }

    #[test]
    fn test_not_lru() {
        let mut memory = TabuMemory::new(2).unwrap();
        memory.record(mv(0, 1));
        memory.record(mv(1, 2));
        // lookup does not refresh the entry
        assert!(memory.contains(mv(0, 1)));
        memory.record(mv(2, 3));
        assert!(!memory.contains(mv(0, 1)));
        assert!(memory.contains(mv(1, 2)));
    }

    #[test]
    fn test_clear() {
        let mut memory = TabuMemory::new(4).unwrap();
        memory.record(mv(0, 1));
        memory.clear();
        assert!(memory.is_empty());
        assert!(!memory.contains(mv(0, 1)));
        assert_eq!(memory.capacity(), 4);
    }
}

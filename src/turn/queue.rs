//! Pending move queue.
//!
//! Throw results wait here until a move applies them, strictly first in,
//! first out. A miss empties the queue.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::ThrowResult;

/// A throw result waiting to be applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingMove {
    pub result: ThrowResult,
}

/// FIFO queue of pending moves for the current turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingQueue {
    moves: Vector<PendingMove>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a throw result. Misses are never queued.
    pub fn push(&mut self, result: ThrowResult) {
        if result != ThrowResult::Miss {
            self.moves.push_back(PendingMove { result });
        }
    }

    /// The move the next application will consume.
    #[must_use]
    pub fn front(&self) -> Option<&PendingMove> {
        self.moves.front()
    }

    pub fn pop_front(&mut self) -> Option<PendingMove> {
        self.moves.pop_front()
    }

    /// Drop everything, returning how many moves were discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.moves.len();
        self.moves.clear();
        discarded
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PendingMove> {
        self.moves.iter()
    }

    /// Queued results in application order.
    #[must_use]
    pub fn results(&self) -> Vec<ThrowResult> {
        self.moves.iter().map(|m| m.result).collect()
    }
}

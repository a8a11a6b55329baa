//! Single-level undo.
//!
//! Before a move is committed the engine saves a snapshot of everything the
//! move can change. `take` hands it back exactly once; there is no redo and
//! no deeper history.

use serde::{Deserialize, Serialize};

use super::controller::{BonusCounters, TurnPhase};
use super::queue::PendingQueue;
use crate::core::{EngineError, PieceId, TeamId};
use crate::pieces::PieceStore;

/// State captured before a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub pieces: PieceStore,
    pub selected: Option<PieceId>,
    pub bonus: BonusCounters,
    pub queue: PendingQueue,
    pub phase: TurnPhase,
    pub standings: Vec<TeamId>,
}

/// Holds zero or one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoManager {
    snapshot: Option<Snapshot>,
}

impl UndoManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `snapshot`, replacing any previous one.
    pub fn save(&mut self, snapshot: Snapshot) {
        self.snapshot = Some(snapshot);
    }

    /// Remove and return the snapshot.
    pub fn take(&mut self) -> Result<Snapshot, EngineError> {
        self.snapshot.take().ok_or(EngineError::NothingToUndo)
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.snapshot.is_some()
    }
}

//! Action log: what each team did, in order.
//!
//! Every accepted operation appends one `ActionRecord`. The log is kept for
//! move-history panels and replay debugging; rules never read it back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece_id::PieceId;
use super::team::TeamId;
use super::throw::ThrowResult;
use crate::board::Position;

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// A throw was entered.
    Throw(ThrowResult),

    /// A pending move was applied to a piece (and its stack).
    Move {
        piece: PieceId,
        throw: ThrowResult,
        from: Position,
        to: Position,
        /// Every piece that moved, the selected one included.
        movers: SmallVec<[PieceId; 4]>,
        /// Opposing pieces sent back to waiting.
        captured: SmallVec<[PieceId; 4]>,
    },

    /// A back-do with no piece on the track was dropped.
    Forfeit(ThrowResult),

    /// The last move was undone.
    Undo,

    /// The team's turn ended.
    TurnEnd,
}

/// A logged action with its turn metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Team that acted.
    pub team: TeamId,

    /// What happened.
    pub kind: ActionKind,

    /// Turn number when it happened (starts at 1).
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(team: TeamId, kind: ActionKind, turn: u32, sequence: u32) -> Self {
        Self {
            team,
            kind,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::NodeId;

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(
            TeamId::new(1),
            ActionKind::Move {
                piece: PieceId(2),
                throw: ThrowResult::Gae,
                from: Position::Waiting,
                to: Position::OnTrack(NodeId::new(2)),
                movers: SmallVec::from_slice(&[PieceId(2)]),
                captured: SmallVec::new(),
            },
            3,
            1,
        );

        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}

//! Read-only state for rendering.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::board::{BranchOption, NodeId, Position};
use crate::core::{PieceId, TeamId, TeamMap, ThrowResult};
use crate::pieces::{PieceGroup, PositionCounts};
use crate::turn::{BonusCounters, TurnPhase};

/// One piece as the board renderer needs it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PieceView {
    pub id: PieceId,
    pub team: TeamId,
    pub index: u8,
    pub position: Position,
}

/// The branch prompt shown while a path must be chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BranchPrompt {
    pub node: NodeId,
    pub options: [BranchOption; 2],
}

/// Everything a view needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub phase: TurnPhase,
    pub current_team: TeamId,
    pub turn_number: u32,
    pub pieces: Vec<PieceView>,
    /// Occupied nodes and the pieces stacked on each.
    pub stacks: FxHashMap<NodeId, PieceGroup>,
    /// Waiting, on-track, and finished tallies per team.
    pub counts: TeamMap<PositionCounts>,
    pub pending: Vec<ThrowResult>,
    pub bonus: BonusCounters,
    pub selected: Option<PieceId>,
    pub branch_prompt: Option<BranchPrompt>,
    /// Pieces the head pending move can be applied to.
    pub movable: Vec<PieceId>,
    pub standings: Vec<TeamId>,
    pub can_undo: bool,
    pub status: String,
}

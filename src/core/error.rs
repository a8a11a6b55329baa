//! Engine error taxonomy.
//!
//! Every variant is recoverable: the UI shows the `Display` text as the
//! status line and the engine state is left exactly as it was before the
//! rejected call.

use thiserror::Error;

use super::config::ConfigError;
use super::piece_id::PieceId;
use super::team::TeamId;
use crate::board::NodeId;

/// Reasons an engine operation was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("the game is over")]
    GameOver,

    #[error("a branch choice is pending; choose a path first")]
    BranchChoicePending,

    #[error("no branch choice is pending")]
    NoBranchChoicePending,

    /// A forward move starts on a branch node and no path was chosen.
    #[error("node {node} has two paths; a branch choice is required")]
    AmbiguousBranch { node: NodeId },

    #[error("the turn is over; advance to the next team")]
    TurnComplete,

    #[error("the turn is not over yet")]
    TurnNotComplete,

    #[error("no piece selected")]
    NoPieceSelected,

    #[error("unknown piece {0}")]
    UnknownPiece(PieceId),

    #[error("{piece} belongs to {owner}, but it is {current}'s turn")]
    WrongTeam {
        piece: PieceId,
        owner: TeamId,
        current: TeamId,
    },

    #[error("{0} has already finished")]
    PieceFinished(PieceId),

    #[error("{0} is waiting and cannot move back")]
    IllegalRetreat(PieceId),

    #[error("no pending move")]
    NoPendingMove,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("snapshot could not be encoded or decoded: {0}")]
    Snapshot(String),
}

//! Move application: one throw result against one piece and its stack.
//!
//! Moving is split in two so that a rejected or paused move never touches
//! the store:
//! - `plan_move` validates and computes the destination, the movers, and the
//!   captures without mutating anything.
//! - `apply_plan` commits a plan.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{BranchChoice, NodeId, Position, Topology};
use crate::core::{EngineError, PieceId, TeamId, ThrowResult};
use crate::pieces::{PieceGroup, PieceStore};

/// Direction of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Forward,
    Retreat,
}

/// A validated move, ready to commit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePlan {
    /// The selected piece.
    pub piece: PieceId,
    pub team: TeamId,
    pub throw: ThrowResult,
    pub kind: MoveKind,
    pub from: Position,
    pub to: Position,
    /// The selected piece and every teammate stacked with it.
    pub movers: PieceGroup,
    /// Opposing pieces on the destination node.
    pub captured: PieceGroup,
}

impl MovePlan {
    #[must_use]
    pub fn is_capture(&self) -> bool {
        !self.captured.is_empty()
    }

    #[must_use]
    pub fn finishes(&self) -> bool {
        self.to.is_finished()
    }
}

/// Destination of a forward move of `steps` from `from`.
///
/// A waiting piece steps from `START`. `choice` applies only to the first
/// step, and only if the starting node is a branch node; later branch nodes
/// are passed straight through. Reaching `START` again (other than by
/// departing it) finishes the piece.
pub fn forward_destination(
    from: Position,
    steps: u8,
    choice: Option<BranchChoice>,
) -> Result<Position, EngineError> {
    let mut node = match from {
        Position::Waiting => NodeId::START,
        Position::OnTrack(node) => node,
        Position::Finished => return Ok(Position::Finished),
    };
    let mut came_from = None;

    for step in 0..steps {
        let next = if step == 0 {
            Topology::successor(node, choice)?
        } else {
            Topology::straight_successor(node, came_from)
        };
        if next == NodeId::START {
            return Ok(Position::Finished);
        }
        came_from = Some(node);
        node = next;
    }

    Ok(Position::OnTrack(node))
}

/// Destination of a back-do for a piece at `from` with `previous` being
/// the node it occupied before its most recent move.
pub fn retreat_destination(
    piece: PieceId,
    from: Position,
    previous: Option<NodeId>,
) -> Result<Position, EngineError> {
    match from {
        Position::Waiting => Err(EngineError::IllegalRetreat(piece)),
        Position::Finished => Err(EngineError::PieceFinished(piece)),
        Position::OnTrack(node) if node == NodeId::new(1) => Ok(Position::OnTrack(NodeId::START)),
        Position::OnTrack(_) => Ok(previous.map_or(Position::Waiting, Position::OnTrack)),
    }
}

/// Plan `throw` for `piece` without touching the store.
///
/// Fails with `AmbiguousBranch` when the piece starts on a branch node and
/// no `choice` was given; the caller turns that into a prompt.
pub fn plan_move(
    store: &PieceStore,
    piece: PieceId,
    throw: ThrowResult,
    choice: Option<BranchChoice>,
) -> Result<MovePlan, EngineError> {
    let selected = store.get(piece).ok_or(EngineError::UnknownPiece(piece))?;
    let from = selected.position();
    if from.is_finished() {
        return Err(EngineError::PieceFinished(piece));
    }

    let (kind, to) = match throw.steps() {
        Some(steps) if steps > 0 => (
            MoveKind::Forward,
            forward_destination(from, steps as u8, choice)?,
        ),
        Some(_) => (
            MoveKind::Retreat,
            retreat_destination(piece, from, selected.previous_node())?,
        ),
        None => return Err(EngineError::NoPendingMove),
    };

    let team = selected.team();
    let captured = match to {
        Position::OnTrack(node) => store.opponents_at(team, node),
        Position::Waiting | Position::Finished => SmallVec::new(),
    };

    Ok(MovePlan {
        piece,
        team,
        throw,
        kind,
        from,
        to,
        movers: store.group_of(piece),
        captured,
    })
}

/// Commit a plan: send captured pieces home, then move the stack.
///
/// The selected piece leads. Every other mover, and every teammate already
/// on the destination, takes the leader's history, so a stack always
/// shares one history.
pub fn apply_plan(store: &mut PieceStore, plan: &MovePlan) {
    for &id in &plan.captured {
        if let Some(piece) = store.get_mut(id) {
            piece.send_home();
        }
    }

    let joined = match plan.to {
        Position::OnTrack(node) => store.stack_at(plan.team, node),
        Position::Waiting | Position::Finished => SmallVec::new(),
    };

    let Some(leader) = store.get_mut(plan.piece) else {
        return;
    };
    match plan.kind {
        MoveKind::Forward => leader.advance_to(plan.to),
        MoveKind::Retreat => leader.retreat_to(plan.to),
    }
    let history = leader.history().clone();

    for &id in plan.movers.iter().chain(joined.iter()) {
        if id == plan.piece {
            continue;
        }
        if let Some(piece) = store.get_mut(id) {
            piece.follow(plan.to, &history);
        }
    }
}

//! A single piece and its position history.
//!
//! The history is the sequence of nodes the piece has landed on since it
//! last left the waiting area. Retreats walk it backwards, which is the only
//! way to undo a branch choice: the previous node is not a function of the
//! current node alone.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{NodeId, Position};
use crate::core::{PieceId, TeamId};

/// A piece in play.
///
/// Invariants:
/// - `team` and `index` never change.
/// - Once `Finished`, the position never changes again.
/// - The history is empty unless the piece is on the track, and then ends
///   with the occupied node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    id: PieceId,
    team: TeamId,
    index: u8,
    position: Position,
    history: Vector<NodeId>,
}

impl Piece {
    /// Create a waiting piece.
    #[must_use]
    pub fn new(id: PieceId, team: TeamId, index: u8) -> Self {
        Self {
            id,
            team,
            index,
            position: Position::Waiting,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    #[must_use]
    pub fn team(&self) -> TeamId {
        self.team
    }

    /// Index within the team (0-based).
    #[must_use]
    pub fn index(&self) -> u8 {
        self.index
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Nodes landed on since leaving the waiting area, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<NodeId> {
        &self.history
    }

    /// Node occupied before the most recent move, if any.
    #[must_use]
    pub fn previous_node(&self) -> Option<NodeId> {
        let len = self.history.len();
        if len < 2 {
            return None;
        }
        self.history.get(len - 2).copied()
    }

    /// Land on `dest` after a forward move.
    pub(crate) fn advance_to(&mut self, dest: Position) {
        if self.position.is_finished() {
            return;
        }
        match dest {
            Position::OnTrack(node) => self.history.push_back(node),
            Position::Waiting | Position::Finished => self.history.clear(),
        }
        self.position = dest;
    }

    /// Step back to `dest` after a back-do.
    pub(crate) fn retreat_to(&mut self, dest: Position) {
        if self.position.is_finished() {
            return;
        }
        match dest {
            Position::OnTrack(node) => {
                self.history.pop_back();
                if self.history.last() != Some(&node) {
                    self.history.push_back(node);
                }
            }
            Position::Waiting | Position::Finished => self.history.clear(),
        }
        self.position = dest;
    }

    /// Land on `dest` as part of a stack led by another piece, taking the
    /// leader's history so the stack retreats as one.
    pub(crate) fn follow(&mut self, dest: Position, history: &Vector<NodeId>) {
        if self.position.is_finished() {
            return;
        }
        self.history = match dest {
            Position::OnTrack(_) => history.clone(),
            Position::Waiting | Position::Finished => Vector::new(),
        };
        self.position = dest;
    }

    /// Captured: back to the waiting area with a clean history.
    pub(crate) fn send_home(&mut self) {
        if self.position.is_finished() {
            return;
        }
        self.position = Position::Waiting;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn piece() -> Piece {
        Piece::new(PieceId(0), TeamId::new(0), 0)
    }

    fn on(id: u8) -> Position {
        Position::OnTrack(NodeId::new(id))
    }

    #[test]
    fn test_new_piece_waits() {
        let p = piece();
        assert_eq!(p.position(), Position::Waiting);
        assert!(p.history().is_empty());
        assert_eq!(p.previous_node(), None);
    }

    #[test]
    fn test_advance_appends_history() {
        let mut p = piece();
        p.advance_to(on(3));
        p.advance_to(on(5));

        assert_eq!(p.position(), on(5));
        assert_eq!(p.history().iter().map(|n| n.get()).collect::<Vec<_>>(), vec![3, 5]);
        assert_eq!(p.previous_node(), Some(NodeId::new(3)));
    }

    #[test]
    fn test_finish_clears_history_and_sticks() {
        let mut p = piece();
        p.advance_to(on(18));
        p.advance_to(Position::Finished);

        assert!(p.history().is_empty());

        p.advance_to(on(2));
        p.retreat_to(Position::Waiting);
        p.send_home();
        assert_eq!(p.position(), Position::Finished);
    }

    #[test]
    fn test_retreat_pops_history() {
        let mut p = piece();
        p.advance_to(on(3));
        p.advance_to(on(5));
        p.retreat_to(on(3));

        assert_eq!(p.position(), on(3));
        assert_eq!(p.history().iter().map(|n| n.get()).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_retreat_to_start_keeps_history_ending_at_start() {
        let mut p = piece();
        p.advance_to(on(1));
        p.retreat_to(Position::OnTrack(NodeId::START));

        assert_eq!(p.history().iter().map(|n| n.get()).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_send_home() {
        let mut p = piece();
        p.advance_to(on(7));
        p.send_home();

        assert_eq!(p.position(), Position::Waiting);
        assert!(p.history().is_empty());
    }

    #[test]
    fn test_follow_takes_leader_history() {
        let mut leader = piece();
        leader.advance_to(on(2));
        leader.advance_to(on(4));
        let mut p = piece();
        p.advance_to(on(4));

        p.follow(on(4), leader.history());
        assert_eq!(p.previous_node(), Some(NodeId::new(2)));

        p.follow(Position::Finished, leader.history());
        assert!(p.history().is_empty());
        p.follow(on(7), leader.history());
        assert!(p.position().is_finished());
    }
}

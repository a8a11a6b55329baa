//! Piece store: every piece in the game and where it is.
//!
//! The store owns all pieces for the lifetime of a game. Pieces are never
//! added or removed after creation, only moved, so per-team counts are
//! conserved. Backed by an `im` vector so the undo snapshot is an O(1)
//! structural clone.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::piece::Piece;
use crate::board::{NodeId, Position};
use crate::core::{GameConfig, PieceId, TeamId, TeamMap};

/// Ids of pieces sharing something (a node, a move).
pub type PieceGroup = SmallVec<[PieceId; 4]>;

/// How many of a team's pieces are in each state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionCounts {
    pub waiting: usize,
    pub on_track: usize,
    pub finished: usize,
}

impl PositionCounts {
    #[must_use]
    pub fn total(&self) -> usize {
        self.waiting + self.on_track + self.finished
    }
}

/// All pieces of all teams.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceStore {
    pieces: Vector<Piece>,
    team_count: usize,
    pieces_per_team: usize,
}

impl PieceStore {
    /// Create every piece in the waiting area.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let pieces = TeamId::all(config.team_count)
            .flat_map(|team| {
                (0..config.pieces_per_team as u8).map(move |index| {
                    let id = PieceId::for_team(team, index, config.pieces_per_team);
                    Piece::new(id, team, index)
                })
            })
            .collect();

        Self {
            pieces,
            team_count: config.team_count,
            pieces_per_team: config.pieces_per_team,
        }
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.team_count
    }

    #[must_use]
    pub fn pieces_per_team(&self) -> usize {
        self.pieces_per_team
    }

    /// Total number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.slot())
    }

    pub(crate) fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.pieces.get_mut(id.slot())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Pieces of one team, in index order.
    pub fn team_pieces(&self, team: TeamId) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.team() == team)
    }

    /// Pieces of `team` on `node`.
    #[must_use]
    pub fn stack_at(&self, team: TeamId, node: NodeId) -> PieceGroup {
        self.pieces_at(node)
            .filter(|p| p.team() == team)
            .map(Piece::id)
            .collect()
    }

    /// Pieces on `node` not belonging to `team`.
    #[must_use]
    pub fn opponents_at(&self, team: TeamId, node: NodeId) -> PieceGroup {
        self.pieces_at(node)
            .filter(|p| p.team() != team)
            .map(Piece::id)
            .collect()
    }

    /// The pieces that move when `id` is moved: its whole stack if it is on
    /// the track, otherwise just itself.
    #[must_use]
    pub fn group_of(&self, id: PieceId) -> PieceGroup {
        match self.get(id) {
            Some(piece) => match piece.position().node() {
                Some(node) => self.stack_at(piece.team(), node),
                None => SmallVec::from_slice(&[id]),
            },
            None => SmallVec::new(),
        }
    }

    #[must_use]
    pub fn counts(&self, team: TeamId) -> PositionCounts {
        self.team_pieces(team)
            .fold(PositionCounts::default(), |mut counts, p| {
                match p.position() {
                    Position::Waiting => counts.waiting += 1,
                    Position::OnTrack(_) => counts.on_track += 1,
                    Position::Finished => counts.finished += 1,
                }
                counts
            })
    }

    /// Counts for every team.
    #[must_use]
    pub fn all_counts(&self) -> TeamMap<PositionCounts> {
        TeamMap::from_fn(self.team_count, |team| self.counts(team))
    }

    /// Has every piece of `team` finished?
    #[must_use]
    pub fn all_finished(&self, team: TeamId) -> bool {
        self.team_pieces(team).all(|p| p.position().is_finished())
    }

    /// Has every piece of every team finished?
    #[must_use]
    pub fn everyone_finished(&self) -> bool {
        self.pieces.iter().all(|p| p.position().is_finished())
    }

    #[must_use]
    pub fn has_piece_on_track(&self, team: TeamId) -> bool {
        self.team_pieces(team).any(|p| p.position().is_on_track())
    }

    /// Occupied nodes and the pieces on each, for rendering stacks.
    #[must_use]
    pub fn occupancy(&self) -> FxHashMap<NodeId, PieceGroup> {
        let mut map: FxHashMap<NodeId, PieceGroup> = FxHashMap::default();
        for piece in &self.pieces {
            if let Some(node) = piece.position().node() {
                map.entry(node).or_default().push(piece.id());
            }
        }
        map
    }

    fn pieces_at(&self, node: NodeId) -> impl Iterator<Item = &Piece> {
        self.pieces
            .iter()
            .filter(move |p| p.position() == Position::OnTrack(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BonusMode;

    fn store() -> PieceStore {
        PieceStore::new(&GameConfig::new(2, 3, BonusMode::Basic))
    }

    fn on(id: u8) -> Position {
        Position::OnTrack(NodeId::new(id))
    }

    #[test]
    fn test_new_store_all_waiting() {
        let store = store();

        assert_eq!(store.len(), 6);
        for team in TeamId::all(2) {
            let counts = store.counts(team);
            assert_eq!(counts.waiting, 3);
            assert_eq!(counts.total(), 3);
        }

        let p = store.get(PieceId(4)).unwrap();
        assert_eq!(p.team(), TeamId::new(1));
        assert_eq!(p.index(), 1);
        assert!(store.get(PieceId(6)).is_none());
    }

    #[test]
    fn test_stacks_and_opponents() {
        let mut store = store();
        store.get_mut(PieceId(0)).unwrap().advance_to(on(4));
        store.get_mut(PieceId(1)).unwrap().advance_to(on(4));
        store.get_mut(PieceId(3)).unwrap().advance_to(on(4));

        let t0 = TeamId::new(0);
        assert_eq!(store.stack_at(t0, NodeId::new(4)).as_slice(), &[PieceId(0), PieceId(1)]);
        assert_eq!(store.opponents_at(t0, NodeId::new(4)).as_slice(), &[PieceId(3)]);
        assert_eq!(store.group_of(PieceId(1)).as_slice(), &[PieceId(0), PieceId(1)]);

        // Waiting pieces move alone.
        assert_eq!(store.group_of(PieceId(2)).as_slice(), &[PieceId(2)]);

        let occupancy = store.occupancy();
        assert_eq!(occupancy.len(), 1);
        assert_eq!(occupancy[&NodeId::new(4)].len(), 3);
    }

    #[test]
    fn test_finished_detection() {
        let mut store = store();
        let t1 = TeamId::new(1);
        for id in [3, 4, 5] {
            store.get_mut(PieceId(id)).unwrap().advance_to(Position::Finished);
        }

        assert!(store.all_finished(t1));
        assert!(!store.all_finished(TeamId::new(0)));
        assert!(!store.everyone_finished());
        assert!(!store.has_piece_on_track(t1));
        assert_eq!(store.all_counts()[t1].finished, 3);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut store = store();
        let snapshot = store.clone();
        store.get_mut(PieceId(0)).unwrap().advance_to(on(2));

        assert_ne!(store, snapshot);
        assert_eq!(snapshot.get(PieceId(0)).unwrap().position(), Position::Waiting);
    }
}

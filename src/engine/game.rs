//! The game engine: composes the piece store, pending queue, turn
//! controller, and undo manager behind the operations the UI calls.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::view::{BranchPrompt, GameView, PieceView};
use crate::board::{BranchChoice, NodeId, Position, Topology};
use crate::core::{
    ActionKind, ActionRecord, BonusMode, EngineError, GameConfig, PieceId, TeamId, ThrowResult,
};
use crate::pieces::{Piece, PieceStore};
use crate::rules::{apply_plan, plan_move, MovePlan};
use crate::turn::{BonusCounters, PendingQueue, Snapshot, TurnController, TurnPhase, UndoManager};

/// Result of recording a throw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowOutcome {
    pub throw: ThrowResult,
    /// The throw earned a Yut/Mo bonus throw.
    pub bonus_granted: bool,
    /// Pending moves dropped by a miss.
    pub discarded: usize,
    pub phase: TurnPhase,
}

/// A committed move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    pub plan: MovePlan,
    /// The move captured and earned a bonus throw.
    pub capture_bonus: bool,
    /// The moving team has now finished every piece.
    pub team_finished: bool,
    pub phase: TurnPhase,
}

/// Result of `apply_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    Moved(MoveReport),
    /// A back-do was dropped because no piece of the team is on the track.
    Forfeited { throw: ThrowResult, phase: TurnPhase },
    /// The selected piece sits on a branch node; call `choose_branch`.
    BranchChoiceRequired(BranchPrompt),
}

impl MoveOutcome {
    #[must_use]
    pub fn needs_branch_choice(&self) -> bool {
        matches!(self, MoveOutcome::BranchChoiceRequired(_))
    }
}

/// A Yut Nori game in progress.
///
/// Every operation either succeeds or returns an `EngineError` and leaves
/// the game exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct YutGame {
    config: GameConfig,
    pieces: PieceStore,
    queue: PendingQueue,
    turn: TurnController,
    undo: UndoManager,
    selected: Option<PieceId>,
    /// Teams in the order they brought every piece home.
    standings: Vec<TeamId>,
    status: String,
    log: Vector<ActionRecord>,
    /// Next sequence number within the current turn.
    sequence: u32,
}

/// Builder for creating a YutGame.
#[derive(Clone, Debug, Default)]
pub struct YutGameBuilder {
    config: GameConfig,
}

impl YutGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn team_count(mut self, count: usize) -> Self {
        self.config.team_count = count;
        self
    }

    pub fn pieces_per_team(mut self, count: usize) -> Self {
        self.config.pieces_per_team = count;
        self
    }

    pub fn bonus_mode(mut self, mode: BonusMode) -> Self {
        self.config.bonus_mode = mode;
        self
    }

    /// Build the game with every piece waiting and team 0 to throw.
    pub fn build(self) -> Result<YutGame, EngineError> {
        YutGame::new(self.config)
    }
}

/// Start a game: all pieces waiting, team 0 to throw.
pub fn new_game(
    team_count: usize,
    pieces_per_team: usize,
    bonus_mode: BonusMode,
) -> Result<YutGame, EngineError> {
    YutGame::new(GameConfig::new(team_count, pieces_per_team, bonus_mode))
}

impl YutGame {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let turn = TurnController::new(config.team_count, config.bonus_mode.big_throw_limit());
        let status = format!("{} to throw", turn.current_team());
        debug!(
            teams = config.team_count,
            pieces = config.pieces_per_team,
            mode = ?config.bonus_mode,
            "new game"
        );

        Ok(Self {
            pieces: PieceStore::new(&config),
            config,
            queue: PendingQueue::new(),
            turn,
            undo: UndoManager::new(),
            selected: None,
            standings: Vec::new(),
            status,
            log: Vector::new(),
            sequence: 0,
        })
    }

    // === Operations ===

    /// Enter a throw result for the current team.
    ///
    /// A miss discards every pending move and completes the turn.
    pub fn record_throw(&mut self, throw: ThrowResult) -> Result<ThrowOutcome, EngineError> {
        self.turn.ensure_accepting_throw()?;

        let team = self.turn.current_team();
        let bonus_granted = self.turn.record_throw(throw);
        let discarded = if throw == ThrowResult::Miss {
            self.queue.clear()
        } else {
            self.queue.push(throw);
            0
        };
        self.undo.clear();
        self.push_log(team, ActionKind::Throw(throw));

        self.status = if throw == ThrowResult::Miss {
            format!("{team} threw {throw}; {discarded} pending move(s) discarded, turn over")
        } else if bonus_granted {
            format!("{team} threw {throw} and earned a bonus throw")
        } else {
            format!("{team} threw {throw}")
        };
        debug!(team = %team, throw = %throw, bonus_granted, discarded, "throw recorded");

        Ok(ThrowOutcome {
            throw,
            bonus_granted,
            discarded,
            phase: self.turn.phase(),
        })
    }

    /// Select a piece for the next move.
    ///
    /// Any team's piece may be selected for inspection; `apply_move`
    /// rejects pieces not owned by the current team.
    pub fn select_piece(&mut self, id: PieceId) -> Result<(), EngineError> {
        self.turn.ensure_active()?;
        if self.turn.phase() == TurnPhase::BranchChoicePending {
            return Err(EngineError::BranchChoicePending);
        }
        let piece = self.pieces.get(id).ok_or(EngineError::UnknownPiece(id))?;

        self.status = format!("{id} of {} selected ({})", piece.team(), piece.position());
        self.selected = Some(id);
        Ok(())
    }

    /// Apply the head pending move to the selected piece and its stack.
    ///
    /// When the piece starts on a branch node and `choice` is `None`, the
    /// move pauses and a `BranchChoiceRequired` prompt is returned; nothing
    /// moves until `choose_branch` is called.
    pub fn apply_move(&mut self, choice: Option<BranchChoice>) -> Result<MoveOutcome, EngineError> {
        self.turn.ensure_active()?;
        let resuming = self.turn.phase() == TurnPhase::BranchChoicePending;
        if resuming && choice.is_none() {
            return Err(EngineError::BranchChoicePending);
        }

        let throw = self
            .queue
            .front()
            .map(|m| m.result)
            .ok_or(EngineError::NoPendingMove)?;
        let team = self.turn.current_team();

        if throw.is_retreat() && !self.pieces.has_piece_on_track(team) {
            return Ok(self.forfeit(team, throw));
        }

        let id = self.selected.ok_or(EngineError::NoPieceSelected)?;
        let owner = self.pieces.get(id).ok_or(EngineError::UnknownPiece(id))?.team();
        if owner != team {
            return Err(EngineError::WrongTeam {
                piece: id,
                owner,
                current: team,
            });
        }

        let plan = match plan_move(&self.pieces, id, throw, choice) {
            Ok(plan) => plan,
            Err(EngineError::AmbiguousBranch { node }) => return self.prompt_branch(node),
            Err(err) => return Err(err),
        };

        Ok(MoveOutcome::Moved(self.commit(plan)))
    }

    /// Resolve a pending branch prompt and apply the paused move.
    pub fn choose_branch(&mut self, choice: BranchChoice) -> Result<MoveOutcome, EngineError> {
        self.turn.ensure_active()?;
        if self.turn.phase() != TurnPhase::BranchChoicePending {
            return Err(EngineError::NoBranchChoicePending);
        }
        self.apply_move(Some(choice))
    }

    /// Abandon a pending branch prompt; the move stays queued.
    pub fn cancel_branch_choice(&mut self) -> Result<(), EngineError> {
        self.turn.ensure_active()?;
        if self.turn.phase() != TurnPhase::BranchChoicePending {
            return Err(EngineError::NoBranchChoicePending);
        }
        self.turn.cancel_branch_choice();
        self.status = "Branch choice cancelled".to_string();
        Ok(())
    }

    /// Reverse the last applied move.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        self.turn.ensure_active()?;
        let snapshot = self.undo.take()?;
        let team = self.turn.current_team();

        self.pieces = snapshot.pieces;
        self.selected = snapshot.selected;
        self.queue = snapshot.queue;
        self.standings = snapshot.standings;
        self.turn.restore(snapshot.phase, snapshot.bonus);

        self.push_log(team, ActionKind::Undo);
        self.status = "Last move undone".to_string();
        debug!(team = %team, "move undone");
        Ok(())
    }

    /// Is the current turn over and waiting for `advance_turn`?
    #[must_use]
    pub fn is_turn_resolved(&self) -> bool {
        self.turn.phase() == TurnPhase::TurnComplete
    }

    /// Hand the turn to the next team that still has pieces to bring home.
    ///
    /// Returns the new current team, or `None` if the game ended.
    pub fn advance_turn(&mut self) -> Result<Option<TeamId>, EngineError> {
        self.turn.ensure_active()?;
        if !self.is_turn_resolved() {
            return Err(EngineError::TurnNotComplete);
        }

        let team = self.turn.current_team();
        self.push_log(team, ActionKind::TurnEnd);

        let pieces = &self.pieces;
        let next = self.turn.next_team(|t| !pieces.all_finished(t));
        self.turn.advance(next);
        self.queue.clear();
        self.selected = None;
        self.undo.clear();
        self.sequence = 0;

        match next {
            Some(next) => {
                self.status = format!("{next} to throw");
                info!(from = %team, to = %next, turn = self.turn.turn_number(), "turn advanced");
            }
            None => {
                self.status = "Game over".to_string();
                info!(standings = ?self.standings, "game over");
            }
        }
        Ok(next)
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn pieces(&self) -> &PieceStore {
        &self.pieces
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.turn.current_team()
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.turn.phase()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number()
    }

    #[must_use]
    pub fn pending(&self) -> &PendingQueue {
        &self.queue
    }

    #[must_use]
    pub fn bonus(&self) -> BonusCounters {
        self.turn.bonus()
    }

    #[must_use]
    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    /// Status line for the last accepted operation.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn standings(&self) -> &[TeamId] {
        &self.standings
    }

    #[must_use]
    pub fn log(&self) -> &Vector<ActionRecord> {
        &self.log
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.undo.can_undo()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.turn.is_game_over()
    }

    /// The prompt for a pending branch choice.
    #[must_use]
    pub fn branch_prompt(&self) -> Option<BranchPrompt> {
        if self.turn.phase() != TurnPhase::BranchChoicePending {
            return None;
        }
        let node = self.selected.and_then(|id| self.pieces.get(id))?.position().node()?;
        Topology::branch_options(node).map(|options| BranchPrompt { node, options })
    }

    /// Current-team pieces the head pending move can be applied to.
    #[must_use]
    pub fn movable_pieces(&self) -> Vec<PieceId> {
        if self.turn.phase() != TurnPhase::MoveReady {
            return Vec::new();
        }
        let Some(head) = self.queue.front() else {
            return Vec::new();
        };

        self.pieces
            .team_pieces(self.turn.current_team())
            .filter(|p| match p.position() {
                Position::Finished => false,
                Position::Waiting => !head.result.is_retreat(),
                Position::OnTrack(_) => true,
            })
            .map(Piece::id)
            .collect()
    }

    /// Snapshot of everything the renderer draws.
    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            phase: self.turn.phase(),
            current_team: self.turn.current_team(),
            turn_number: self.turn.turn_number(),
            pieces: self
                .pieces
                .iter()
                .map(|p| PieceView {
                    id: p.id(),
                    team: p.team(),
                    index: p.index(),
                    position: p.position(),
                })
                .collect(),
            stacks: self.pieces.occupancy(),
            counts: self.pieces.all_counts(),
            pending: self.queue.results(),
            bonus: self.turn.bonus(),
            selected: self.selected,
            branch_prompt: self.branch_prompt(),
            movable: self.movable_pieces(),
            standings: self.standings.clone(),
            can_undo: self.undo.can_undo(),
            status: self.status.clone(),
        }
    }

    // === Snapshots ===

    /// Encode the complete engine state.
    pub fn to_bytes(&self) -> Result<Vec<u8>, EngineError> {
        bincode::serialize(self).map_err(|e| EngineError::Snapshot(e.to_string()))
    }

    /// Decode a state produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        let game: YutGame =
            bincode::deserialize(bytes).map_err(|e| EngineError::Snapshot(e.to_string()))?;
        game.config.validate()?;
        Ok(game)
    }

    // === Internals ===

    fn prompt_branch(&mut self, node: NodeId) -> Result<MoveOutcome, EngineError> {
        let options = Topology::branch_options(node).ok_or(EngineError::AmbiguousBranch { node })?;

        self.turn.begin_branch_choice();
        self.status = format!("Choose a path at node {node}");
        debug!(node = %node, "branch choice required");

        Ok(MoveOutcome::BranchChoiceRequired(BranchPrompt { node, options }))
    }

    fn save_snapshot(&mut self) {
        let phase = match self.turn.phase() {
            TurnPhase::BranchChoicePending => TurnPhase::MoveReady,
            phase => phase,
        };
        self.undo.save(Snapshot {
            pieces: self.pieces.clone(),
            selected: self.selected,
            bonus: self.turn.bonus(),
            queue: self.queue.clone(),
            phase,
            standings: self.standings.clone(),
        });
    }

    fn commit(&mut self, plan: MovePlan) -> MoveReport {
        let team = plan.team;
        self.save_snapshot();
        self.queue.pop_front();
        apply_plan(&mut self.pieces, &plan);

        let capture_bonus = plan.is_capture();
        if capture_bonus {
            self.turn.grant_capture_bonus();
        }

        let team_finished = self.pieces.all_finished(team);
        if team_finished {
            self.queue.clear();
            if !self.standings.contains(&team) {
                self.standings.push(team);
                info!(team = %team, place = self.standings.len(), "team finished");
            }
        }
        if plan.finishes() {
            self.selected = None;
        }

        let everyone_done = self.pieces.everyone_finished();
        self.turn
            .finish_move(self.queue.is_empty(), team_finished, everyone_done);

        self.push_log(
            team,
            ActionKind::Move {
                piece: plan.piece,
                throw: plan.throw,
                from: plan.from,
                to: plan.to,
                movers: plan.movers.clone(),
                captured: plan.captured.clone(),
            },
        );

        let mut status = format!(
            "{team} moved {} piece(s) from {} to {}",
            plan.movers.len(),
            plan.from,
            plan.to
        );
        if capture_bonus {
            status.push_str(&format!(
                ", captured {} and earned a bonus throw",
                plan.captured.len()
            ));
        }
        if everyone_done {
            status.push_str("; game over");
            info!(standings = ?self.standings, "game over");
        }
        self.status = status;
        debug!(
            team = %team,
            piece = %plan.piece,
            from = %plan.from,
            to = %plan.to,
            movers = plan.movers.len(),
            captured = plan.captured.len(),
            "move applied"
        );

        MoveReport {
            plan,
            capture_bonus,
            team_finished,
            phase: self.turn.phase(),
        }
    }

    fn forfeit(&mut self, team: TeamId, throw: ThrowResult) -> MoveOutcome {
        self.save_snapshot();
        self.queue.pop_front();
        self.turn.finish_move(self.queue.is_empty(), false, false);

        self.push_log(team, ActionKind::Forfeit(throw));
        self.status = format!("{team} has no piece on the board; {throw} forfeited");
        debug!(team = %team, throw = %throw, "back-do forfeited");

        MoveOutcome::Forfeited {
            throw,
            phase: self.turn.phase(),
        }
    }

    fn push_log(&mut self, team: TeamId, kind: ActionKind) {
        let record = ActionRecord::new(team, kind, self.turn.turn_number(), self.sequence);
        self.sequence += 1;
        self.log.push_back(record);
    }
}

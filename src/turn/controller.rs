//! Turn controller: whose turn it is, what input is expected, and bonus
//! throw accounting.
//!
//! ## Phases
//!
//! ```text
//! AwaitingThrowInput --throw--> MoveReady --queue empty, bonus left--> AwaitingThrowInput
//!          |                     |    ^
//!        miss                    |    +-- choice / cancel --+
//!          v                     v                          |
//!     TurnComplete <--------- MoveReady ---> BranchChoicePending
//!          |
//!       advance --> AwaitingThrowInput (next team) | GameOver
//! ```
//!
//! ## Bonus throws
//!
//! Each turn owes one throw. A Yut or Mo earns one more, at most
//! `from_big_throw_limit` times per turn. A capture earns one more, uncapped.
//! Throws recorded while moves are still pending consume an outstanding
//! bonus throw; when the queue runs dry with a bonus outstanding, the bonus
//! is consumed and the team throws again.

use serde::{Deserialize, Serialize};

use crate::core::{EngineError, TeamId, ThrowResult};

/// What the engine expects next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The current team owes a throw.
    AwaitingThrowInput,
    /// Moves are pending; select a piece and apply.
    MoveReady,
    /// The head move starts on a branch node and needs a path.
    BranchChoicePending,
    /// Nothing left to do this turn; advance to the next team.
    TurnComplete,
    /// Every team has finished. Terminal.
    GameOver,
}

/// Bonus throw counters for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BonusCounters {
    /// Bonus throws earned from Yut/Mo this turn.
    pub from_big_throw_used: u32,
    /// Cap on `from_big_throw_used`.
    pub from_big_throw_limit: u32,
    /// Earned bonus throws not yet taken.
    pub throws_remaining: u32,
}

impl BonusCounters {
    #[must_use]
    pub fn new(from_big_throw_limit: u32) -> Self {
        Self {
            from_big_throw_used: 0,
            from_big_throw_limit,
            throws_remaining: 0,
        }
    }
}

/// Turn state machine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    current_team: TeamId,
    team_count: usize,
    phase: TurnPhase,
    bonus: BonusCounters,
    turn_number: u32,
}

impl TurnController {
    /// Team 0 owes the first throw.
    #[must_use]
    pub fn new(team_count: usize, from_big_throw_limit: u32) -> Self {
        Self {
            current_team: TeamId::new(0),
            team_count,
            phase: TurnPhase::AwaitingThrowInput,
            bonus: BonusCounters::new(from_big_throw_limit),
            turn_number: 1,
        }
    }

    #[must_use]
    pub fn current_team(&self) -> TeamId {
        self.current_team
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn bonus(&self) -> BonusCounters {
        self.bonus
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }

    /// Reject mutating input once the game is over.
    pub fn ensure_active(&self) -> Result<(), EngineError> {
        match self.phase {
            TurnPhase::GameOver => Err(EngineError::GameOver),
            _ => Ok(()),
        }
    }

    /// Can a throw be recorded now?
    pub fn ensure_accepting_throw(&self) -> Result<(), EngineError> {
        match self.phase {
            TurnPhase::GameOver => Err(EngineError::GameOver),
            TurnPhase::BranchChoicePending => Err(EngineError::BranchChoicePending),
            TurnPhase::TurnComplete => Err(EngineError::TurnComplete),
            TurnPhase::AwaitingThrowInput | TurnPhase::MoveReady => Ok(()),
        }
    }

    /// Account for a recorded throw. Returns true if it earned a bonus throw.
    ///
    /// Callers check `ensure_accepting_throw` first.
    pub fn record_throw(&mut self, throw: ThrowResult) -> bool {
        if self.phase == TurnPhase::MoveReady {
            self.bonus.throws_remaining = self.bonus.throws_remaining.saturating_sub(1);
        }

        if throw == ThrowResult::Miss {
            self.bonus.throws_remaining = 0;
            self.phase = TurnPhase::TurnComplete;
            return false;
        }

        let under_cap = self.bonus.from_big_throw_used < self.bonus.from_big_throw_limit;
        let granted = throw.is_big_throw() && under_cap;
        if granted {
            self.bonus.from_big_throw_used += 1;
            self.bonus.throws_remaining += 1;
        }
        self.phase = TurnPhase::MoveReady;
        granted
    }

    /// A capture earns one bonus throw.
    pub fn grant_capture_bonus(&mut self) {
        self.bonus.throws_remaining += 1;
    }

    pub fn begin_branch_choice(&mut self) {
        self.phase = TurnPhase::BranchChoicePending;
    }

    pub fn cancel_branch_choice(&mut self) {
        if self.phase == TurnPhase::BranchChoicePending {
            self.phase = TurnPhase::MoveReady;
        }
    }

    /// Settle the phase after a move was applied.
    ///
    /// - `queue_empty`: no moves left in the queue.
    /// - `team_done`: the current team has no piece left to move.
    /// - `everyone_done`: every team has finished.
    pub fn finish_move(&mut self, queue_empty: bool, team_done: bool, everyone_done: bool) {
        self.phase = if everyone_done {
            TurnPhase::GameOver
        } else if team_done {
            self.bonus.throws_remaining = 0;
            TurnPhase::TurnComplete
        } else if !queue_empty {
            TurnPhase::MoveReady
        } else if self.bonus.throws_remaining > 0 {
            self.bonus.throws_remaining -= 1;
            TurnPhase::AwaitingThrowInput
        } else {
            TurnPhase::TurnComplete
        };
    }

    /// The next team, in order, for which `eligible` holds.
    ///
    /// The current team is considered last, after a full lap.
    pub fn next_team(&self, eligible: impl Fn(TeamId) -> bool) -> Option<TeamId> {
        (1..=self.team_count)
            .map(|offset| self.current_team.offset(offset, self.team_count))
            .find(|&team| eligible(team))
    }

    /// Hand the turn to `next`, or end the game if there is none.
    pub fn advance(&mut self, next: Option<TeamId>) {
        match next {
            Some(team) => {
                self.current_team = team;
                self.bonus = BonusCounters::new(self.bonus.from_big_throw_limit);
                self.turn_number += 1;
                self.phase = TurnPhase::AwaitingThrowInput;
            }
            None => self.phase = TurnPhase::GameOver,
        }
    }

    /// Restore phase and counters captured before a move.
    pub fn restore(&mut self, phase: TurnPhase, bonus: BonusCounters) {
        self.phase = phase;
        self.bonus = bonus;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let turn = TurnController::new(2, 1);

        assert_eq!(turn.current_team(), TeamId::new(0));
        assert_eq!(turn.phase(), TurnPhase::AwaitingThrowInput);
        assert_eq!(turn.bonus(), BonusCounters::new(1));
        assert_eq!(turn.turn_number(), 1);
    }

    #[test]
    fn test_small_throw_then_turn_complete() {
        let mut turn = TurnController::new(2, 1);

        assert!(!turn.record_throw(ThrowResult::Gae));
        assert_eq!(turn.phase(), TurnPhase::MoveReady);

        turn.finish_move(true, false, false);
        assert_eq!(turn.phase(), TurnPhase::TurnComplete);
    }

    #[test]
    fn test_big_throw_grants_bonus() {
        let mut turn = TurnController::new(2, 1);

        assert!(turn.record_throw(ThrowResult::Mo));
        assert_eq!(turn.bonus().from_big_throw_used, 1);
        assert_eq!(turn.bonus().throws_remaining, 1);

        turn.finish_move(true, false, false);
        assert_eq!(turn.phase(), TurnPhase::AwaitingThrowInput);
        assert_eq!(turn.bonus().throws_remaining, 0);
    }

    #[test]
    fn test_basic_cap() {
        let mut turn = TurnController::new(2, 1);

        let grants: Vec<bool> = (0..3).map(|_| turn.record_throw(ThrowResult::Mo)).collect();

        assert_eq!(grants, vec![true, false, false]);
        assert_eq!(turn.bonus().from_big_throw_used, 1);
    }

    #[test]
    fn test_extended_cap() {
        let mut turn = TurnController::new(2, 3);

        let grants: Vec<bool> = (0..4).map(|_| turn.record_throw(ThrowResult::Yut)).collect();

        assert_eq!(grants, vec![true, true, true, false]);
        assert_eq!(turn.bonus().from_big_throw_used, 3);
    }

    #[test]
    fn test_early_throw_consumes_bonus() {
        let mut turn = TurnController::new(2, 1);
        turn.record_throw(ThrowResult::Yut);
        turn.record_throw(ThrowResult::Do);

        assert_eq!(turn.bonus().throws_remaining, 0);
        turn.finish_move(false, false, false);
        assert_eq!(turn.phase(), TurnPhase::MoveReady);
        turn.finish_move(true, false, false);
        assert_eq!(turn.phase(), TurnPhase::TurnComplete);
    }

    #[test]
    fn test_capture_bonus_uncapped() {
        let mut turn = TurnController::new(2, 1);
        turn.record_throw(ThrowResult::Mo);
        turn.grant_capture_bonus();
        turn.grant_capture_bonus();

        assert_eq!(turn.bonus().throws_remaining, 3);
        assert_eq!(turn.bonus().from_big_throw_used, 1);
    }

    #[test]
    fn test_miss_completes_turn() {
        let mut turn = TurnController::new(2, 1);
        turn.record_throw(ThrowResult::Yut);
        turn.record_throw(ThrowResult::Miss);

        assert_eq!(turn.phase(), TurnPhase::TurnComplete);
        assert_eq!(turn.bonus().throws_remaining, 0);
        assert_eq!(turn.ensure_accepting_throw(), Err(EngineError::TurnComplete));
    }

    #[test]
    fn test_team_done_discards_bonus() {
        let mut turn = TurnController::new(2, 1);
        turn.record_throw(ThrowResult::Mo);
        turn.finish_move(false, true, false);

        assert_eq!(turn.phase(), TurnPhase::TurnComplete);
        assert_eq!(turn.bonus().throws_remaining, 0);
    }

    #[test]
    fn test_branch_pending_blocks_throws() {
        let mut turn = TurnController::new(2, 1);
        turn.record_throw(ThrowResult::Do);
        turn.begin_branch_choice();

        assert_eq!(turn.ensure_accepting_throw(), Err(EngineError::BranchChoicePending));
        turn.cancel_branch_choice();
        assert_eq!(turn.phase(), TurnPhase::MoveReady);
    }

    #[test]
    fn test_rotation_skips_ineligible() {
        let turn = TurnController::new(4, 1);

        assert_eq!(turn.next_team(|_| true), Some(TeamId::new(1)));
        assert_eq!(turn.next_team(|t| t.index() >= 3), Some(TeamId::new(3)));
        assert_eq!(turn.next_team(|t| t.index() == 0), Some(TeamId::new(0)));
        assert_eq!(turn.next_team(|_| false), None);
    }

    #[test]
    fn test_advance_resets_counters() {
        let mut turn = TurnController::new(3, 1);
        turn.record_throw(ThrowResult::Mo);
        turn.finish_move(true, false, false);
        turn.record_throw(ThrowResult::Miss);

        let next = turn.next_team(|_| true);
        turn.advance(next);

        assert_eq!(turn.current_team(), TeamId::new(1));
        assert_eq!(turn.phase(), TurnPhase::AwaitingThrowInput);
        assert_eq!(turn.bonus(), BonusCounters::new(1));
        assert_eq!(turn.turn_number(), 2);

        turn.advance(None);
        assert!(turn.is_game_over());
        assert_eq!(turn.ensure_active(), Err(EngineError::GameOver));
    }
}

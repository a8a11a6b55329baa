//! Game configuration types.
//!
//! The settings screen collects these before a game starts:
//! - `team_count`: how many teams take turns
//! - `pieces_per_team`: how many pieces each team must bring home
//! - `bonus_mode`: how many bonus throws per turn Yut/Mo may earn

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest supported team count.
pub const MIN_TEAMS: usize = 2;
/// Largest supported team count.
pub const MAX_TEAMS: usize = 8;
/// Largest supported piece count per team.
pub const MAX_PIECES_PER_TEAM: usize = 8;

/// Cap on bonus throws earned from Yut/Mo within one turn.
///
/// Bonus throws earned by capturing are never capped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BonusMode {
    /// At most one Yut/Mo bonus per turn.
    #[default]
    Basic,
    /// Up to three Yut/Mo bonuses per turn.
    Extended,
}

impl BonusMode {
    /// Maximum bonus throws per turn that may come from Yut/Mo.
    #[must_use]
    pub const fn big_throw_limit(self) -> u32 {
        match self {
            BonusMode::Basic => 1,
            BonusMode::Extended => 3,
        }
    }
}

/// Rejected configuration values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("team count must be between 2 and 8, got {0}")]
    TeamCount(usize),
    #[error("pieces per team must be between 1 and 8, got {0}")]
    PiecesPerTeam(usize),
}

/// Complete game configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of teams (2-8).
    pub team_count: usize,

    /// Pieces each team starts with (1-8).
    pub pieces_per_team: usize,

    /// Yut/Mo bonus throw cap.
    pub bonus_mode: BonusMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            team_count: 2,
            pieces_per_team: 4,
            bonus_mode: BonusMode::Basic,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the given values.
    #[must_use]
    pub fn new(team_count: usize, pieces_per_team: usize, bonus_mode: BonusMode) -> Self {
        Self {
            team_count,
            pieces_per_team,
            bonus_mode,
        }
    }

    #[must_use]
    pub fn with_team_count(mut self, team_count: usize) -> Self {
        self.team_count = team_count;
        self
    }

    #[must_use]
    pub fn with_pieces_per_team(mut self, pieces_per_team: usize) -> Self {
        self.pieces_per_team = pieces_per_team;
        self
    }

    #[must_use]
    pub fn with_bonus_mode(mut self, bonus_mode: BonusMode) -> Self {
        self.bonus_mode = bonus_mode;
        self
    }

    /// Total pieces across all teams.
    #[must_use]
    pub fn total_pieces(&self) -> usize {
        self.team_count * self.pieces_per_team
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_TEAMS..=MAX_TEAMS).contains(&self.team_count) {
            return Err(ConfigError::TeamCount(self.team_count));
        }
        if !(1..=MAX_PIECES_PER_TEAM).contains(&self.pieces_per_team) {
            return Err(ConfigError::PiecesPerTeam(self.pieces_per_team));
        }
        Ok(())
    }
}

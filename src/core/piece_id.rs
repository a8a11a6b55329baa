//! Piece identification.
//!
//! Every piece on the board has a unique `PieceId`.
//!
//! ## ID Layout
//!
//! IDs are allocated team-major: team `t`'s piece `i` has id
//! `t * pieces_per_team + i`. The layout depends on the configured
//! `pieces_per_team`, so it is computed rather than hardcoded.
//!
//! ```
//! use yut_engine::core::{PieceId, TeamId};
//!
//! let id = PieceId::for_team(TeamId::new(1), 2, 4);
//! assert_eq!(id, PieceId(6));
//! assert_eq!(id.team(4), TeamId::new(1));
//! assert_eq!(id.index_in_team(4), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::team::TeamId;

/// Unique identifier for a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    /// Id of a team's `index`-th piece.
    #[must_use]
    pub const fn for_team(team: TeamId, index: u8, pieces_per_team: usize) -> Self {
        Self((team.0 as usize * pieces_per_team + index as usize) as u16)
    }

    /// Owning team, given the layout's `pieces_per_team`.
    #[must_use]
    pub const fn team(self, pieces_per_team: usize) -> TeamId {
        TeamId((self.0 as usize / pieces_per_team) as u8)
    }

    /// Index within the owning team.
    #[must_use]
    pub const fn index_in_team(self, pieces_per_team: usize) -> u8 {
        (self.0 as usize % pieces_per_team) as u8
    }

    /// Position in the store's backing vector.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

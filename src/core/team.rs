//! Team identification and per-team data storage.
//!
//! ## TeamId
//!
//! Type-safe team identifier. Teams take turns in ascending id order.
//!
//! ## TeamMap
//!
//! A value per team, read by `TeamId`.

use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Team identifier.
///
/// Team indices are 0-based: the first team to throw is `TeamId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u8);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw team index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all team IDs for a game with `team_count` teams.
    ///
    /// ```
    /// use yut_engine::core::TeamId;
    ///
    /// let teams: Vec<_> = TeamId::all(3).collect();
    /// assert_eq!(teams, vec![TeamId::new(0), TeamId::new(1), TeamId::new(2)]);
    /// ```
    pub fn all(team_count: usize) -> impl Iterator<Item = TeamId> {
        (0..team_count as u8).map(TeamId)
    }

    /// The team `offset` places after this one, wrapping on `team_count`.
    #[must_use]
    pub fn offset(self, offset: usize, team_count: usize) -> TeamId {
        TeamId(((self.index() + offset) % team_count) as u8)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team {}", self.0)
    }
}

/// One value per team, indexed by `TeamId`.
///
/// Built once from a per-team function; the view uses it for
/// waiting/on-track/finished tallies.
///
/// ```
/// use yut_engine::core::{TeamId, TeamMap};
///
/// let starts: TeamMap<u8> = TeamMap::from_fn(3, |t| t.0 * 2);
/// assert_eq!(starts[TeamId::new(2)], 4);
/// assert_eq!(starts.get(TeamId::new(3)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamMap<T> {
    per_team: Vec<T>,
}

impl<T> TeamMap<T> {
    pub fn from_fn(team_count: usize, f: impl FnMut(TeamId) -> T) -> Self {
        Self {
            per_team: TeamId::all(team_count).map(f).collect(),
        }
    }

    #[must_use]
    pub fn team_count(&self) -> usize {
        self.per_team.len()
    }

    #[must_use]
    pub fn get(&self, team: TeamId) -> Option<&T> {
        self.per_team.get(team.index())
    }

    /// Entries in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (TeamId, &T)> {
        TeamId::all(self.per_team.len()).zip(self.per_team.iter())
    }
}

impl<T> Index<TeamId> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: TeamId) -> &T {
        &self.per_team[team.index()]
    }
}

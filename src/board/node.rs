//! Track nodes and piece positions.
//!
//! ## Numbering
//!
//! ```text
//!  10 09 08 07 06 05
//!  11 25       20 04
//!  12    26 21    03
//!           22
//!  13    23 27    02
//!  14 24       28 01
//!  15 16 17 18 19 00
//! ```
//!
//! - `0..=19`: the outer ring, `0` is the shared start/finish node.
//! - `20, 21`: diagonal from corner 5 toward the center.
//! - `22`: the center.
//! - `23, 24`: from the center out to corner 15.
//! - `25, 26`: diagonal from corner 10 toward the center.
//! - `27, 28`: from the center home to `0`.

use serde::{Deserialize, Serialize};

/// Number of track nodes.
pub const NODE_COUNT: u8 = 29;

/// A track node.
///
/// Always holds a valid id (`< NODE_COUNT`); deserializing an out-of-range
/// id fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct NodeId(u8);

/// Where a node sits on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Outer,
    Diagonal,
    Center,
}

impl NodeId {
    /// The shared start/finish node.
    pub const START: NodeId = NodeId(0);
    /// First corner, five steps from `START`; branch onto the 20-21 diagonal.
    pub const FIRST_CORNER: NodeId = NodeId(5);
    /// Second corner; branch onto the 25-26 diagonal.
    pub const SECOND_CORNER: NodeId = NodeId(10);
    /// Corner where the first diagonal rejoins the ring.
    pub const FAR_CORNER: NodeId = NodeId(15);
    /// Last outer node before `START`.
    pub const LAST_OUTER: NodeId = NodeId(19);
    /// Where the two diagonals cross.
    pub const CENTER: NodeId = NodeId(22);

    /// Create a node id.
    ///
    /// Panics if `id >= NODE_COUNT`.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!(id < NODE_COUNT, "node id out of range");
        Self(id)
    }

    /// Create a node id, or `None` if out of range.
    #[must_use]
    pub const fn try_new(id: u8) -> Option<Self> {
        if id < NODE_COUNT {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Raw id.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn kind(self) -> NodeKind {
        match self.0 {
            0..=19 => NodeKind::Outer,
            22 => NodeKind::Center,
            _ => NodeKind::Diagonal,
        }
    }

    /// Iterate over every node.
    pub fn all() -> impl Iterator<Item = NodeId> {
        (0..NODE_COUNT).map(NodeId)
    }
}

impl TryFrom<u8> for NodeId {
    type Error = String;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        NodeId::try_new(id).ok_or_else(|| format!("node id {id} out of range"))
    }
}

impl From<NodeId> for u8 {
    fn from(node: NodeId) -> u8 {
        node.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a piece is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered the board.
    Waiting,
    /// On a track node.
    OnTrack(NodeId),
    /// Completed the circuit and left play.
    Finished,
}

impl Position {
    /// The occupied node, if on the track.
    #[must_use]
    pub const fn node(self) -> Option<NodeId> {
        match self {
            Position::OnTrack(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_waiting(self) -> bool {
        matches!(self, Position::Waiting)
    }

    #[must_use]
    pub const fn is_on_track(self) -> bool {
        matches!(self, Position::OnTrack(_))
    }

    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Position::Finished)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Waiting => f.write_str("waiting"),
            Position::OnTrack(node) => write!(f, "node {node}"),
            Position::Finished => f.write_str("finished"),
        }
    }
}

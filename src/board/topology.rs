//! Single-step navigation over the track graph.
//!
//! Three nodes have two successors: the two branch corners and the center.
//! A move starting on one of them needs an explicit `BranchChoice`; a move
//! merely passing through one keeps going straight.

use serde::{Deserialize, Serialize};

use super::node::NodeId;
use crate::core::EngineError;

/// Which way to leave a branch node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BranchChoice {
    /// Corners: stay on the ring. Center: the diagonal toward corner 15.
    Outer,
    /// Corners: enter the diagonal. Center: the diagonal straight home.
    Shortcut,
}

/// One labelled option of a branch prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BranchOption {
    pub choice: BranchChoice,
    pub label: &'static str,
    /// Node reached by the first step along this option.
    pub next: NodeId,
}

/// The static board graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Topology;

impl Topology {
    /// Does a forward move starting here need a branch choice?
    #[must_use]
    pub const fn is_branch(node: NodeId) -> bool {
        matches!(node.get(), 5 | 10 | 22)
    }

    /// Successor of `node` by one forward step.
    ///
    /// `choice` is ignored on non-branch nodes and required on branch nodes.
    pub fn successor(node: NodeId, choice: Option<BranchChoice>) -> Result<NodeId, EngineError> {
        if !Self::is_branch(node) {
            return Ok(Self::fixed_successor(node));
        }
        let choice = choice.ok_or(EngineError::AmbiguousBranch { node })?;
        Ok(Self::branch_successor(node, choice))
    }

    /// Successor when passing through `node` mid-move.
    ///
    /// Corners stay on the ring; the center continues along the diagonal
    /// it was entered from (`came_from`).
    #[must_use]
    pub fn straight_successor(node: NodeId, came_from: Option<NodeId>) -> NodeId {
        match node.get() {
            5 | 10 => Self::branch_successor(node, BranchChoice::Outer),
            22 if came_from == Some(NodeId::new(26)) => {
                Self::branch_successor(node, BranchChoice::Shortcut)
            }
            22 => Self::branch_successor(node, BranchChoice::Outer),
            _ => Self::fixed_successor(node),
        }
    }

    /// The two labelled options at a branch node, `None` elsewhere.
    #[must_use]
    pub fn branch_options(node: NodeId) -> Option<[BranchOption; 2]> {
        let (outer, shortcut) = match node.get() {
            5 | 10 => ("Continue along the edge", "Take the shortcut to the center"),
            22 => ("Head for the far corner", "Head straight home"),
            _ => return None,
        };
        Some([
            BranchOption {
                choice: BranchChoice::Outer,
                label: outer,
                next: Self::branch_successor(node, BranchChoice::Outer),
            },
            BranchOption {
                choice: BranchChoice::Shortcut,
                label: shortcut,
                next: Self::branch_successor(node, BranchChoice::Shortcut),
            },
        ])
    }

    fn branch_successor(node: NodeId, choice: BranchChoice) -> NodeId {
        let next = match (node.get(), choice) {
            (5, BranchChoice::Shortcut) => 20,
            (10, BranchChoice::Shortcut) => 25,
            (22, BranchChoice::Outer) => 23,
            (22, BranchChoice::Shortcut) => 27,
            _ => return Self::fixed_successor(node),
        };
        NodeId::new(next)
    }

    /// Successor ignoring branches (branch corners continue on the ring).
    fn fixed_successor(node: NodeId) -> NodeId {
        let next = match node.get() {
            19 => 0,
            n @ 0..=18 => n + 1,
            20 => 21,
            21 => 22,
            22 => 23,
            23 => 24,
            24 => 15,
            25 => 26,
            26 => 22,
            27 => 28,
            // 28 leads home
            _ => 0,
        };
        NodeId::new(next)
    }
}

//! Board topology: nodes, positions, and the one-step navigation rule.
//!
//! The board is static. Pieces only store a `Position`; everything about
//! how positions connect lives in `Topology`.

pub mod node;
pub mod topology;

pub use node::{NodeId, NodeKind, Position, NODE_COUNT};
pub use topology::{BranchChoice, BranchOption, Topology};

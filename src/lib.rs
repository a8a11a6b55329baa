//! # yut-engine
//!
//! A rules engine for Yut Nori, the Korean race game played with four
//! throwing sticks.
//!
//! ## Design Principles
//!
//! 1. **Manual throws**: The engine never rolls. Throw results come from
//!    outside (physical sticks, a UI button, a test) and are recorded as-is.
//!
//! 2. **Discrete calls**: Every operation returns immediately. Pausing for
//!    a branch choice is a phase of the turn, not a blocking wait.
//!
//! 3. **All or nothing**: A rejected call returns an `EngineError` and
//!    leaves the game untouched.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piece state lives in `im` vectors so
//!   the single-level undo snapshot is an O(1) clone.
//!
//! - **Static topology**: The board graph is a function of node ids; pieces
//!   carry only a `Position` and their node history.
//!
//! ## Modules
//!
//! - `core`: Team and piece ids, throw results, configuration, action log, errors
//! - `board`: Node ids, positions, and branch-aware navigation
//! - `pieces`: The piece store, stacks, and per-team counts
//! - `rules`: Move planning and application (groups, captures, retreat)
//! - `turn`: Pending move queue, turn phases, bonus throws, undo
//! - `engine`: `YutGame`, the operation surface, and the render view

pub mod core;
pub mod board;
pub mod pieces;
pub mod rules;
pub mod turn;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    TeamId, TeamMap, PieceId,
    ThrowResult, ParseThrowError,
    BonusMode, ConfigError, GameConfig,
    ActionKind, ActionRecord,
    EngineError,
};

pub use crate::board::{BranchChoice, BranchOption, NodeId, NodeKind, Position, Topology};

pub use crate::pieces::{Piece, PieceGroup, PieceStore, PositionCounts};

pub use crate::rules::{MoveKind, MovePlan};

pub use crate::turn::{BonusCounters, PendingQueue, TurnPhase};

pub use crate::engine::{
    new_game, BranchPrompt, GameView, MoveOutcome, MoveReport, PieceView, ThrowOutcome,
    YutGame, YutGameBuilder,
};

//! The game engine and its read-only view.
//!
//! `YutGame` is the only type a UI needs to hold. Every operation is a
//! discrete call that either succeeds or fails without side effects.

pub mod game;
pub mod view;

pub use game::{new_game, MoveOutcome, MoveReport, ThrowOutcome, YutGame, YutGameBuilder};
pub use view::{BranchPrompt, GameView, PieceView};

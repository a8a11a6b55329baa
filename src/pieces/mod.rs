//! Piece store: teams' pieces, their positions, and position histories.
//!
//! Positions change only through the move-application rules and captures.

pub mod piece;
pub mod store;

pub use piece::Piece;
pub use store::{PieceGroup, PieceStore, PositionCounts};

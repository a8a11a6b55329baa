//! Core engine types: teams, pieces, throws, configuration, action log, errors.
//!
//! Everything here is plain data shared by the board, rules, and turn
//! modules. Nothing in `core` knows how pieces move.

pub mod team;
pub mod piece_id;
pub mod throw;
pub mod config;
pub mod action;
pub mod error;

pub use team::{TeamId, TeamMap};
pub use piece_id::PieceId;
pub use throw::{ParseThrowError, ThrowResult};
pub use config::{BonusMode, ConfigError, GameConfig};
pub use action::{ActionKind, ActionRecord};
pub use error::EngineError;

//! Turn flow: the pending move queue, the turn state machine, and undo.
//!
//! The engine is driven entirely by discrete calls. A pause for a branch
//! choice is a phase, not a wait, and turn rotation happens only when the
//! caller asks for it.

pub mod queue;
pub mod controller;
pub mod undo;

pub use queue::{PendingMove, PendingQueue};
pub use controller::{BonusCounters, TurnController, TurnPhase};
pub use undo::{Snapshot, UndoManager};

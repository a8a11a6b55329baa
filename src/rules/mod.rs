//! Move-application rules.
//!
//! Stepping along the topology, branch resolution, group movement,
//! capture, retreat, and finish detection. Turn accounting (bonus throws,
//! rotation) is not handled here; see `turn`.

pub mod movement;

pub use movement::{
    apply_plan, forward_destination, plan_move, retreat_destination, MoveKind, MovePlan,
};

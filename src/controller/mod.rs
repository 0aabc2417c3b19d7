//! Game controller: click dispatch, the turn state machine, and hiding.
//!
//! ## Key Types
//!
//! - `ClickTarget`: A click as seen through the container listener
//! - `TurnPhase`: Empty, OnePending, Resolving
//! - `Selection`: A pending (slot, face) pick
//! - `SelectionOutcome`: What a pick did
//! - `GameController`: Owns all mutable game state
//! - `GameSnapshot`: Serializable capture of that state

pub mod events;
pub mod game;
pub mod snapshot;
pub mod turn;

pub use events::{child_position, ClickTarget, CARD_CLASS};
pub use game::GameController;
pub use snapshot::GameSnapshot;
pub use turn::{IgnoreReason, Selection, SelectionOutcome, TurnPhase};

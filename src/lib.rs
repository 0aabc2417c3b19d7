//! # memory-match
//!
//! A memory/matching card game engine: a grid of face-down cards is
//! shuffled once, the player reveals two cards per turn, matched pairs
//! stay up, mismatches flip back after a delay, and a tries counter
//! counts completed turns.
//!
//! ## Design Principles
//!
//! 1. **One Owner**: All mutable state lives in a single `GameController`.
//!    Nothing is global, so tests build as many games as they like.
//!
//! 2. **Injected Edges**: Output goes through `DisplayLayer`, delayed work
//!    through `Scheduler`. The core never touches a DOM or a clock.
//!
//! 3. **Reproducible Decks**: Shuffling uses a seeded ChaCha8 RNG, so a
//!    seed pins the layout.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Face values, asset paths, the deck
//! - `board`: Revealed/matched state per slot
//! - `timer`: Scheduler trait and a virtual clock
//! - `display`: Display trait and an in-memory recorder
//! - `controller`: Click dispatch and the turn state machine
//! - `web`: Browser host (feature `web`)

pub mod board;
pub mod cards;
pub mod controller;
pub mod core;
pub mod display;
pub mod timer;

#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, MemoryError, Result};

pub use crate::cards::{AssetConvention, Deck, FaceValue};

pub use crate::board::{Board, SlotId, SlotState};

pub use crate::timer::{Scheduler, TimerId, VirtualScheduler};

pub use crate::display::{tries_text, DisplayCall, DisplayLayer, RecordingDisplay};

pub use crate::controller::{
    child_position, ClickTarget, GameController, GameSnapshot, IgnoreReason, Selection,
    SelectionOutcome, TurnPhase,
};

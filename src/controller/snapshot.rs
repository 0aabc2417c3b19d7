//! Point-in-time capture of a game.
//!
//! Snapshots carry no display or scheduler; they are plain data for
//! debugging, replays and assertions. `to_bytes` uses bincode.

use serde::{Deserialize, Serialize};

use super::turn::{Selection, TurnPhase};
use crate::board::Board;
use crate::cards::Deck;
use crate::core::{GameRngState, Result};

/// Full game state at one instant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub deck: Deck,
    pub board: Board,
    pub pending: Vec<Selection>,
    pub phase: TurnPhase,
    pub tries: u32,
    pub can_play: bool,
    /// Whether a mismatch hide was armed.
    pub hide_pending: bool,
    /// RNG state after the shuffle; `None` for decks built in a fixed order.
    pub rng: Option<GameRngState>,
}

impl GameSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

//! Board: revealed/matched state for every slot.
//!
//! The deck fixes what each slot shows; the board tracks whether it is
//! showing it. Slots live in an `im::Vector` so snapshots are O(1) clones.

pub mod slot;

pub use slot::{SlotId, SlotState};

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{MemoryError, Result};

/// Per-slot visibility for the whole grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    slots: Vector<SlotState>,
}

impl Board {
    /// Create a board with `len` face-down slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            slots: (0..len).map(|_| SlotState::hidden()).collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the board has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resolve a raw position into a slot, checking bounds.
    pub fn slot_id(&self, position: usize) -> Result<SlotId> {
        if position < self.slots.len() {
            Ok(SlotId::new(position))
        } else {
            Err(MemoryError::SlotOutOfRange {
                slot: position,
                len: self.slots.len(),
            })
        }
    }

    /// State of a slot. `SlotId`s handed out by `slot_id` are always in range.
    #[must_use]
    pub fn get(&self, slot: SlotId) -> Option<SlotState> {
        self.slots.get(slot.index()).copied()
    }

    /// Show a slot's face.
    pub fn reveal(&mut self, slot: SlotId) {
        if let Some(state) = self.slots.get_mut(slot.index()) {
            state.revealed = true;
        }
    }

    /// Mark a slot as part of a found pair.
    pub fn mark_matched(&mut self, slot: SlotId) {
        if let Some(state) = self.slots.get_mut(slot.index()) {
            state.revealed = true;
            state.matched = true;
        }
    }

    /// Turn every unmatched slot face down.
    ///
    /// Returns the slots that were cleared, in order.
    pub fn hide_unmatched(&mut self) -> Vec<SlotId> {
        let mut cleared = Vec::new();
        for (position, state) in self.slots.iter_mut().enumerate() {
            if state.is_hideable() {
                state.revealed = false;
                cleared.push(SlotId::new(position));
            }
        }
        cleared
    }

    /// Whether a slot is matched.
    #[must_use]
    pub fn is_matched(&self, slot: SlotId) -> bool {
        self.get(slot).is_some_and(|s| s.matched)
    }

    /// Whether a slot is showing its face.
    #[must_use]
    pub fn is_revealed(&self, slot: SlotId) -> bool {
        self.get(slot).is_some_and(|s| s.revealed)
    }

    /// Number of matched slots.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.slots.iter().filter(|s| s.matched).count()
    }

    /// Whether every slot has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        !self.slots.is_empty() && self.slots.iter().all(|s| s.matched)
    }

    /// Iterate over `(slot, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, SlotState)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .map(|(position, state)| (SlotId::new(position), *state))
    }
}

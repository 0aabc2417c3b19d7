//! Slot identifiers and per-slot state.

use serde::{Deserialize, Serialize};

/// Ordinal position of a card in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub usize);

impl SlotId {
    /// Create a new slot ID.
    #[must_use]
    pub const fn new(position: usize) -> Self {
        Self(position)
    }

    /// Get the raw position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slot({})", self.0)
    }
}

/// Visibility of one slot.
///
/// `matched` implies `revealed`: a matched slot is permanently face up and
/// is skipped by the hide pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    /// Face currently shown.
    pub revealed: bool,
    /// Pair found; never hidden again.
    pub matched: bool,
}

impl SlotState {
    /// Face-down, unmatched.
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            revealed: false,
            matched: false,
        }
    }

    /// Whether the hide pass may clear this slot.
    #[must_use]
    pub const fn is_hideable(&self) -> bool {
        !self.matched
    }
}

//! Turn state: phases, pending selections, and selection outcomes.

use serde::{Deserialize, Serialize};

use crate::board::SlotId;
use crate::cards::FaceValue;
use crate::timer::TimerId;

/// Where the current turn stands.
///
/// `Resolving` only exists while the second selection is being compared;
/// both outcomes return to `Empty` before control leaves the controller.
/// After a mismatch the turn is logically over even though the cards stay
/// visible (and play stays disabled) until the hide timer fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// No pending selection.
    #[default]
    Empty,
    /// First card of the turn chosen.
    OnePending,
    /// Second card chosen; comparing.
    Resolving,
}

/// One pending pick: which slot, showing which face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub slot: SlotId,
    pub face: FaceValue,
}

impl Selection {
    #[must_use]
    pub fn new(slot: SlotId, face: FaceValue) -> Self {
        Self { slot, face }
    }
}

/// Why a click changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The click did not land on a card.
    NotACard,
    /// A mismatched pair is still on display.
    PlayDisabled,
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is already the first pick of this turn.
    SameSlot,
}

/// What a selection did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// No state changed.
    Ignored(IgnoreReason),
    /// First card of a turn revealed.
    FirstPick { slot: SlotId },
    /// Second card matched the first; both stay up.
    Matched { first: SlotId, second: SlotId, tries: u32 },
    /// Second card differs; both hide when `timer` fires. `timer` is
    /// `None` when no hide could be armed and the cards were hidden at once.
    Mismatched {
        first: SlotId,
        second: SlotId,
        tries: u32,
        timer: Option<TimerId>,
    },
}

impl SelectionOutcome {
    /// Whether this selection completed a turn.
    #[must_use]
    pub fn completes_turn(&self) -> bool {
        matches!(self, Self::Matched { .. } | Self::Mismatched { .. })
    }

    /// Whether the click was dropped.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}

//! Error type for deck construction, configuration and board access.

use thiserror::Error;

/// Errors raised by the engine.
///
/// Gameplay itself never fails: clicks that cannot be honoured are
/// reported as ignored outcomes, not errors. These variants cover
/// structural problems (bad configuration, out-of-range slots).
#[derive(Debug, Error)]
pub enum MemoryError {
    /// A deck needs at least one pair.
    #[error("deck has no cards")]
    EmptyDeck,

    /// A face value appears an odd number of times and can never be matched.
    #[error("face `{face}` appears {count} times, expected an even count")]
    UnpairedFace { face: String, count: usize },

    /// A slot index outside the board.
    #[error("slot {slot} out of range for board of {len}")]
    SlotOutOfRange { slot: usize, len: usize },

    /// The host's card elements do not line up with the deck.
    #[error("board has {actual} card elements, deck has {expected}")]
    BoardSizeMismatch { expected: usize, actual: usize },

    /// The mismatch hide delay must be positive.
    #[error("hide delay must be greater than zero")]
    InvalidDelay,

    /// The host could not arm a delayed callback.
    #[error("could not schedule timer: {0}")]
    Schedule(String),

    /// Snapshot encoding or decoding failed.
    #[error("snapshot codec error: {0}")]
    Snapshot(#[from] bincode::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MemoryError::UnpairedFace { face: "cat".into(), count: 3 };
        assert_eq!(err.to_string(), "face `cat` appears 3 times, expected an even count");

        let err = MemoryError::SlotOutOfRange { slot: 12, len: 12 };
        assert_eq!(err.to_string(), "slot 12 out of range for board of 12");

        let err = MemoryError::Schedule("no sink".into());
        assert_eq!(err.to_string(), "could not schedule timer: no sink");
    }
}

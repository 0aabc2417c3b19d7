//! The shuffled deck.
//!
//! A `Deck` is built once from the configured face list and shuffled once.
//! Positions never change afterwards; only slot state on the board does.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::face::FaceValue;
use crate::core::{GameConfig, GameRng, Result};

/// Ordered face values, one per slot.
///
/// ## Example
///
/// ```
/// use memory_match::cards::Deck;
/// use memory_match::core::{GameConfig, GameRng};
///
/// let config = GameConfig::new().with_pairs(["bird", "cat"]);
/// let deck = Deck::shuffled(&config, &mut GameRng::new(1)).unwrap();
///
/// assert_eq!(deck.len(), 4);
/// assert_eq!(deck.face_counts().values().copied().collect::<Vec<_>>(), vec![2, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    faces: Vec<FaceValue>,
}

impl Deck {
    /// Validate the config and shuffle its faces.
    pub fn shuffled(config: &GameConfig, rng: &mut GameRng) -> Result<Self> {
        config.validate()?;

        let mut faces: Vec<FaceValue> = config.faces.iter().cloned().map(FaceValue::from).collect();
        rng.shuffle(&mut faces);

        tracing::debug!(seed = rng.seed(), cards = faces.len(), "deck shuffled");
        Ok(Self { faces })
    }

    /// Build a deck in the given order without shuffling.
    ///
    /// Used to pin a layout in tests and replays.
    pub fn from_order<I, F>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        let config = GameConfig::new().with_faces(faces);
        config.validate()?;
        Ok(Self {
            faces: config.faces.into_iter().map(FaceValue::from).collect(),
        })
    }

    /// Face at a slot position.
    #[must_use]
    pub fn face(&self, position: usize) -> Option<&FaceValue> {
        self.faces.get(position)
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether the deck is empty (never true for a validated deck).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Faces in slot order.
    #[must_use]
    pub fn faces(&self) -> &[FaceValue] {
        &self.faces
    }

    /// How many times each face appears.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<&FaceValue, usize> {
        let mut counts = FxHashMap::default();
        for face in &self.faces {
            *counts.entry(face).or_default() += 1;
        }
        counts
    }

    /// Number of pairs that must be found to finish.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.faces.len() / 2
    }
}

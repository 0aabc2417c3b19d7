//! Game configuration.
//!
//! Hosts configure the engine at construction by providing a `GameConfig`:
//! - the face values (each listed once per card, so pairs appear twice)
//! - the mismatch hide delay
//! - the asset path convention used to display a face
//! - the label shown next to the tries counter
//! - an optional shuffle seed
//!
//! The config is plain serde data so a host can ship it as JSON.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{MemoryError, Result};
use crate::cards::AssetConvention;

/// Faces of the stock twelve-card deck.
pub const DEFAULT_FACES: [&str; 6] = ["bird", "cat", "elephant", "horse", "lion", "squirrel"];

/// Delay before mismatched cards flip back.
pub const DEFAULT_HIDE_DELAY_MS: u64 = 1000;

/// Text rendered in front of the tries count.
pub const DEFAULT_TRIES_LABEL: &str = "Intentos";

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// One entry per card. Every face must appear an even number of times.
    pub faces: Vec<String>,

    /// Milliseconds a mismatched pair stays visible.
    pub hide_delay_ms: u64,

    /// How a face value maps to an image path.
    pub assets: AssetConvention,

    /// Label for the tries display.
    pub tries_label: String,

    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let faces = DEFAULT_FACES
            .iter()
            .flat_map(|face| [face.to_string(), face.to_string()])
            .collect();

        Self {
            faces,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
            assets: AssetConvention::default(),
            tries_label: DEFAULT_TRIES_LABEL.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default twelve-card configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from distinct faces, adding each one twice.
    #[must_use]
    pub fn with_pairs<I, S>(mut self, faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faces = faces
            .into_iter()
            .map(Into::into)
            .flat_map(|face: String| [face.clone(), face])
            .collect();
        self
    }

    /// Use an explicit per-card face list.
    #[must_use]
    pub fn with_faces<I, S>(mut self, faces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.faces = faces.into_iter().map(Into::into).collect();
        self
    }

    /// Set the mismatch hide delay.
    #[must_use]
    pub fn with_hide_delay_ms(mut self, delay_ms: u64) -> Self {
        self.hide_delay_ms = delay_ms;
        self
    }

    /// Set the asset path convention.
    #[must_use]
    pub fn with_assets(mut self, assets: AssetConvention) -> Self {
        self.assets = assets;
        self
    }

    /// Set the tries label.
    #[must_use]
    pub fn with_tries_label(mut self, label: impl Into<String>) -> Self {
        self.tries_label = label.into();
        self
    }

    /// Pin the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.faces.len()
    }

    /// Check that a host grid has one card element per deck entry.
    pub fn check_layout(&self, card_elements: usize) -> Result<()> {
        if card_elements != self.faces.len() {
            return Err(MemoryError::BoardSizeMismatch {
                expected: self.faces.len(),
                actual: card_elements,
            });
        }
        Ok(())
    }

    /// Check that the deck can be completed and the delay is usable.
    pub fn validate(&self) -> Result<()> {
        if self.faces.is_empty() {
            return Err(MemoryError::EmptyDeck);
        }
        if self.hide_delay_ms == 0 {
            return Err(MemoryError::InvalidDelay);
        }

        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for face in &self.faces {
            *counts.entry(face.as_str()).or_default() += 1;
        }

        // Report in deck order so the error is stable.
        for face in &self.faces {
            let count = counts[face.as_str()];
            if count % 2 != 0 {
                return Err(MemoryError::UnpairedFace {
                    face: face.clone(),
                    count,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.card_count(), 12);
        assert_eq!(config.hide_delay_ms, 1000);
        assert_eq!(config.tries_label, "Intentos");
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());

        for face in DEFAULT_FACES {
            assert_eq!(config.faces.iter().filter(|f| *f == face).count(), 2);
        }
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_pairs(["bird", "cat"])
            .with_hide_delay_ms(250)
            .with_tries_label("Tries")
            .with_seed(9);

        assert_eq!(config.faces, vec!["bird", "bird", "cat", "cat"]);
        assert_eq!(config.hide_delay_ms, 250);
        assert_eq!(config.tries_label, "Tries");
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_validate_unpaired() {
        let config = GameConfig::new().with_faces(["bird", "bird", "cat"]);

        match config.validate() {
            Err(MemoryError::UnpairedFace { face, count }) => {
                assert_eq!(face, "cat");
                assert_eq!(count, 1);
            }
            other => panic!("expected UnpairedFace, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_empty_and_delay() {
        let empty = GameConfig::new().with_faces(Vec::<String>::new());
        assert!(matches!(empty.validate(), Err(MemoryError::EmptyDeck)));

        let instant = GameConfig::new().with_hide_delay_ms(0);
        assert!(matches!(instant.validate(), Err(MemoryError::InvalidDelay)));
    }

    #[test]
    fn test_check_layout() {
        let config = GameConfig::default();
        assert!(config.check_layout(12).is_ok());
        assert!(matches!(
            config.check_layout(10),
            Err(MemoryError::BoardSizeMismatch { expected: 12, actual: 10 })
        ));
    }

    #[test]
    fn test_four_of_a_face_is_allowed() {
        let config = GameConfig::new().with_faces(["cat", "cat", "cat", "cat"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_json() {
        let config = GameConfig::new().with_pairs(["lion"]).with_seed(3);

        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}

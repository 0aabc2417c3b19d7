//! Core engine types: RNG, configuration, errors.
//!
//! Everything a game is parameterised by lives here. The rest of the
//! crate reads a `GameConfig` and never hardcodes faces or timings.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, DEFAULT_FACES, DEFAULT_HIDE_DELAY_MS, DEFAULT_TRIES_LABEL};
pub use error::{MemoryError, Result};
pub use rng::{GameRng, GameRngState};

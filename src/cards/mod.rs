//! Card faces and the deck.
//!
//! ## Key Types
//!
//! - `FaceValue`: Symbolic identity shared by the two cards of a pair
//! - `AssetConvention`: Maps a face to its image path
//! - `Deck`: Face values in slot order, shuffled once

pub mod deck;
pub mod face;

pub use deck::Deck;
pub use face::{AssetConvention, FaceValue};

//! Click events as the controller sees them.
//!
//! Hosts attach one listener to the card container and translate each raw
//! click into a `ClickTarget`. The controller filters out anything that is
//! not a card, so the listener count stays at one however many cards exist.

use serde::{Deserialize, Serialize};

/// Class that marks an element as a card.
pub const CARD_CLASS: &str = "card";

/// Where a click inside the container landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickTarget {
    /// A card element, by its position among the container's children.
    Card { position: usize },
    /// The container itself or any non-card descendant.
    Background,
}

impl ClickTarget {
    /// Build a target from the clicked element's class list and its
    /// position among the container's children.
    pub fn from_classes<'a, I>(classes: I, position: Option<usize>) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let is_card = classes.into_iter().any(|class| class == CARD_CLASS);
        match (is_card, position) {
            (true, Some(position)) => ClickTarget::Card { position },
            _ => ClickTarget::Background,
        }
    }

    /// Same as [`from_classes`](Self::from_classes) for a raw
    /// space-separated `class` attribute.
    pub fn from_class_name(class_name: &str, position: Option<usize>) -> Self {
        Self::from_classes(class_name.split_whitespace(), position)
    }

    /// Slot position if the click hit a card.
    #[must_use]
    pub fn card_position(&self) -> Option<usize> {
        match self {
            ClickTarget::Card { position } => Some(*position),
            ClickTarget::Background => None,
        }
    }
}

/// Index of the first child for which `is_target` holds.
///
/// Hosts walk their container's children with this to turn a clicked
/// element into a slot position.
pub fn child_position<T, I, F>(children: I, mut is_target: F) -> Option<usize>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    children.into_iter().position(|child| is_target(&child))
}

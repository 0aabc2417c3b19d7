//! Display layer: how slot state becomes visible.
//!
//! The controller owns all game state and only *tells* the display what
//! changed. A display never reports back, and failures inside it are its
//! own business (a missing image is just a broken image).
//!
//! `RecordingDisplay` keeps what a real display would show in memory and
//! logs every call, which is what the tests assert against.

use crate::board::SlotId;

/// Tries text shown to the player.
///
/// ```
/// use memory_match::display::tries_text;
///
/// assert_eq!(tries_text("Intentos", 3), "Intentos 3");
/// ```
#[must_use]
pub fn tries_text(label: &str, tries: u32) -> String {
    format!("{label} {tries}")
}

/// Output side of the game.
pub trait DisplayLayer {
    /// Show a slot's face using its image path.
    fn show_face(&mut self, slot: SlotId, asset_path: &str);

    /// Clear a slot's face.
    fn hide_face(&mut self, slot: SlotId);

    /// Put the persistent matched marker on a slot.
    fn mark_matched(&mut self, slot: SlotId);

    /// Replace the tries text.
    fn render_tries(&mut self, text: &str);
}

/// One call made against a `RecordingDisplay`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayCall {
    Show(SlotId, String),
    Hide(SlotId),
    Matched(SlotId),
    Tries(String),
}

/// In-memory display for tests and headless play.
#[derive(Clone, Debug, Default)]
pub struct RecordingDisplay {
    /// Image shown per slot; `None` when face down.
    faces: Vec<Option<String>>,
    matched: Vec<bool>,
    tries: String,
    calls: Vec<DisplayCall>,
}

impl RecordingDisplay {
    /// Create a display with `len` blank slots.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            faces: vec![None; len],
            matched: vec![false; len],
            tries: String::new(),
            calls: Vec::new(),
        }
    }

    /// Image currently shown on a slot.
    #[must_use]
    pub fn face(&self, slot: SlotId) -> Option<&str> {
        self.faces.get(slot.index()).and_then(|f| f.as_deref())
    }

    /// Whether the matched marker is set.
    #[must_use]
    pub fn is_marked(&self, slot: SlotId) -> bool {
        self.matched.get(slot.index()).copied().unwrap_or(false)
    }

    /// Current tries text.
    #[must_use]
    pub fn tries(&self) -> &str {
        &self.tries
    }

    /// Every call so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[DisplayCall] {
        &self.calls
    }

    /// Forget the call log, keeping what is on screen.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of slots showing a face.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.faces.iter().filter(|f| f.is_some()).count()
    }
}

impl DisplayLayer for RecordingDisplay {
    fn show_face(&mut self, slot: SlotId, asset_path: &str) {
        if let Some(face) = self.faces.get_mut(slot.index()) {
            *face = Some(asset_path.to_string());
        }
        self.calls.push(DisplayCall::Show(slot, asset_path.to_string()));
    }

    fn hide_face(&mut self, slot: SlotId) {
        if let Some(face) = self.faces.get_mut(slot.index()) {
            *face = None;
        }
        self.calls.push(DisplayCall::Hide(slot));
    }

    fn mark_matched(&mut self, slot: SlotId) {
        if let Some(marked) = self.matched.get_mut(slot.index()) {
            *marked = true;
        }
        self.calls.push(DisplayCall::Matched(slot));
    }

    fn render_tries(&mut self, text: &str) {
        self.tries = text.to_string();
        self.calls.push(DisplayCall::Tries(text.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_display_tracks_faces() {
        let mut display = RecordingDisplay::new(3);
        display.show_face(SlotId::new(1), "a.jpg");

        assert_eq!(display.face(SlotId::new(1)), Some("a.jpg"));
        assert_eq!(display.visible_count(), 1);

        display.hide_face(SlotId::new(1));
        assert_eq!(display.face(SlotId::new(1)), None);
        assert_eq!(
            display.calls(),
            &[
                DisplayCall::Show(SlotId::new(1), "a.jpg".into()),
                DisplayCall::Hide(SlotId::new(1)),
            ]
        );
    }

    #[test]
    fn test_recording_display_marker_and_tries() {
        let mut display = RecordingDisplay::new(2);
        display.mark_matched(SlotId::new(0));
        display.render_tries("Intentos 4");

        assert!(display.is_marked(SlotId::new(0)));
        assert!(!display.is_marked(SlotId::new(1)));
        assert_eq!(display.tries(), "Intentos 4");

        display.clear_calls();
        assert!(display.calls().is_empty());
        assert_eq!(display.tries(), "Intentos 4");
    }

    #[test]
    fn test_tries_text() {
        assert_eq!(tries_text("Tries", 0), "Tries 0");
    }
}

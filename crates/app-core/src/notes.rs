//! Note buffers for study steps
//!
//! Every step card carries a free-form note area. The buffer here is the
//! plain text behind that area; formatting is left to whatever widget
//! renders it. Notes live only as long as the session.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Editable note text with a cursor
///
/// The cursor is a byte offset that always sits on a grapheme boundary.
///
/// # Example
///
/// ```
/// use app_core::notes::NoteEditor;
///
/// let mut note = NoteEditor::new();
/// note.insert_text("Key term: ");
/// note.insert_text("photosynthesis");
/// assert_eq!(note.text(), "Key term: photosynthesis");
/// note.delete_backward();
/// assert_eq!(note.char_count(), 23);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteEditor {
    text: String,
    cursor: usize,
}

impl NoteEditor {
    /// Creates an empty note
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a note with initial text and the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// Note contents
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the note has no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of user-perceived characters
    pub fn char_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Cursor position (byte offset)
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, snapping back to the nearest grapheme boundary
    pub fn set_cursor(&mut self, position: usize) {
        let position = position.min(self.text.len());
        self.cursor = self
            .text
            .grapheme_indices(true)
            .map(|(i, _)| i)
            .take_while(|&i| i <= position)
            .last()
            .unwrap_or(0);
        if position == self.text.len() {
            self.cursor = position;
        }
    }

    /// Insert text at the cursor
    pub fn insert_text(&mut self, text: &str) {
        self.text.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    /// Remove the grapheme before the cursor
    pub fn delete_backward(&mut self) {
        let Some((start, _)) = self.text[..self.cursor].grapheme_indices(true).next_back() else {
            return;
        };
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    /// Remove the grapheme after the cursor
    pub fn delete_forward(&mut self) {
        let Some(grapheme) = self.text[self.cursor..].graphemes(true).next() else {
            return;
        };
        let end = self.cursor + grapheme.len();
        self.text.drain(self.cursor..end);
    }

    /// Remove all text
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}
